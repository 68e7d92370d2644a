use crate::error::ProtocolError;
use crate::net::{Protocol, Packet, PacketCodec};
use crate::net::buffer::{Buffer, BufferMut};

/// Longest server address a handshake may carry, in bytes
pub const MAX_SERVER_ADDRESS_LENGTH: usize = 255;

/// Protocol version sent by status pings, asking the server to answer with any version
pub const STATUS_PROTOCOL_VERSION: i32 = -1;

/// The first packet that is ever send to the server.
/// It indicates whether the client wants to join or view the server status.
#[derive(Debug, Clone)]
pub struct HandshakePacket {
    pub protocol_version: i32,
    pub server_address: String,
    pub server_port: u16,
    pub next_protocol: Protocol,
}

impl Packet for HandshakePacket {}

impl PacketCodec for HandshakePacket {
    fn decode<B: Buffer>(buf: &mut B) -> Result<Self, ProtocolError> {
        let protocol_version = buf.read_var_int()?;
        let server_address = buf.read_string(MAX_SERVER_ADDRESS_LENGTH)?;
        let server_port = buf.read_u16()?;
        let next_state = buf.read_var_int()?;
        let next_protocol = Protocol::from_int(next_state)
            .ok_or(ProtocolError::UnexpectedPacket { protocol: Protocol::Handshake, id: next_state })?;

        Ok(HandshakePacket {
            protocol_version,
            server_address,
            server_port,
            next_protocol,
        })
    }

    fn encode<B: BufferMut>(&self, buf: &mut B) -> Result<(), ProtocolError> {
        let next_state = self.next_protocol.to_int()
            .ok_or(ProtocolError::InvalidNextState(self.next_protocol))?;
        if self.server_address.len() > MAX_SERVER_ADDRESS_LENGTH {
            return Err(ProtocolError::StringTooLong {
                len: self.server_address.len(),
                max: MAX_SERVER_ADDRESS_LENGTH,
            });
        }

        buf.write_var_int(self.protocol_version);
        buf.write_string(&self.server_address);
        buf.write_u16(self.server_port);
        buf.write_var_int(next_state);
        Ok(())
    }
}
