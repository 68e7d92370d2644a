pub mod buffer;
pub mod pipeline;
pub mod handshake;
pub mod status;

mod status_client;
mod wire_codec;

pub use status_client::{StatusClient, PingResult};
pub use wire_codec::{WireCodec, ServerWireCodec, ClientWireCodec};

use crate::error::ProtocolError;
use crate::net::buffer::{Buffer, BufferMut};

pub trait ConnectionType: Sized + 'static {
    type In;
    type Out;
    type WC: WireCodec<Self>;
}

/// ConnectionType for connections from a client to a server
pub struct Server;
impl ConnectionType for Server {
    type In = PacketServerEnum;
    type Out = PacketClientEnum;
    type WC = ServerWireCodec;
}

/// Connectiontype for connections from a server to a client
pub struct Client;
impl ConnectionType for Client {
    type In = PacketClientEnum;
    type Out = PacketServerEnum;
    type WC = ClientWireCodec;
}

/// Packets send by the client to the server
#[derive(Debug, Clone)]
pub enum PacketClientEnum {
    Handshake(handshake::HandshakePacket),

    StatusRequest(status::StatusRequestPacket),
    Ping(status::PingPacket),
}

/// Packets send by the server to the client
#[derive(Debug, Clone)]
pub enum PacketServerEnum {
    StatusResponse(status::StatusResponsePacket),
    Pong(status::PongPacket),
}

pub trait Packet: Sized {}
pub trait PacketCodec: Packet {
    fn decode<B: Buffer>(buf: &mut B) -> Result<Self, ProtocolError>;
    fn encode<B: BufferMut>(&self, buf: &mut B) -> Result<(), ProtocolError>;
}

/// The different sub-protocols of the minecraft protocol.
///
/// Each Protocol defines a set a Packets, that each have a packet id.
/// The meaning of a PacketId varies between the different Protocols and
/// whether the packet is directed to the server or client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Handshake,
    Status,
    Login,
}

impl Protocol {
    /// Map the `next state` field of a handshake to a protocol
    pub fn from_int(int: i32) -> Option<Protocol> {
        match int {
            1 => Some(Protocol::Status),
            2 => Some(Protocol::Login),
            _ => None
        }
    }

    /// The `next state` value selecting this protocol, if a handshake can select it
    pub fn to_int(&self) -> Option<i32> {
        match self {
            Protocol::Status => Some(1),
            Protocol::Login => Some(2),
            Protocol::Handshake => None,
        }
    }
}
