use crate::error::ProtocolError;
use crate::net::{Packet, PacketCodec};
use crate::net::buffer::{BufferMut, Buffer};

/// Upper bound for the json document of a status response.
///
/// The frame limit of the pipeline usually triggers first.
pub const MAX_STATUS_LENGTH: usize = 1 << 21;

/// Response to the [StatusRequestPacket](super::StatusRequestPacket)
/// containing the status information of the server as raw json.
///
/// The document is interpreted by [server_status](super::server_status),
/// so that malformed json can be told apart from malformed packets.
#[derive(Debug, Clone)]
pub struct StatusResponsePacket {
    pub json: String,
}

impl Packet for StatusResponsePacket {}

impl PacketCodec for StatusResponsePacket {
    fn decode<B: Buffer>(buf: &mut B) -> Result<Self, ProtocolError> {
        Ok(StatusResponsePacket {
            json: buf.read_string(MAX_STATUS_LENGTH)?,
        })
    }

    fn encode<B: BufferMut>(&self, buf: &mut B) -> Result<(), ProtocolError> {
        buf.write_string(&self.json);
        Ok(())
    }
}
