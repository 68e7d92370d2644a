//! All packets of the [Protocol::Handshake](crate::net::Protocol::Handshake) Protocol

mod handshake;

pub use self::handshake::{HandshakePacket, MAX_SERVER_ADDRESS_LENGTH, STATUS_PROTOCOL_VERSION};
