use crate::error::ProtocolError;
use crate::net::{Packet, PacketCodec};
use crate::net::buffer::{Buffer, BufferMut};

/// The echo response to the [PingPacket](super::PingPacket).
#[derive(Debug, Clone)]
pub struct PongPacket {
    pub payload: i64,
}

impl Packet for PongPacket {}

impl PacketCodec for PongPacket {
    fn decode<B: Buffer>(buf: &mut B) -> Result<Self, ProtocolError> {
        Ok(PongPacket {
            payload: buf.read_i64()?
        })
    }

    fn encode<B: BufferMut>(&self, buf: &mut B) -> Result<(), ProtocolError> {
        buf.write_i64(self.payload);
        Ok(())
    }
}
