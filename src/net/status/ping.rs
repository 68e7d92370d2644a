use crate::error::ProtocolError;
use crate::net::{Packet, PacketCodec};
use crate::net::buffer::{BufferMut, Buffer};

/// Send a number to the server that gets immediately echoed.
/// This is usually the system time of the client
#[derive(Debug, Clone)]
pub struct PingPacket {
    pub payload: i64,
}

impl Packet for PingPacket {}

impl PacketCodec for PingPacket {
    fn decode<B: Buffer>(buf: &mut B) -> Result<Self, ProtocolError> {
        Ok(PingPacket {
            payload: buf.read_i64()?
        })
    }

    fn encode<B: BufferMut>(&self, buf: &mut B) -> Result<(), ProtocolError> {
        buf.write_i64(self.payload);
        Ok(())
    }
}
