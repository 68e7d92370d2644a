use crate::error::ProtocolError;
use crate::net::*;
use crate::net::buffer::{Buffer, BufferMut};

/// A utility responsible for mapping packets to their ids.
pub trait WireCodec<C: ConnectionType> {
    fn read_packet<B: Buffer>(protocol: Protocol, packet_id: i32, buf: &mut B) -> Result<C::In, ProtocolError>;
    fn write_packet<B: BufferMut>(protocol: Protocol, packet: &C::Out, buf: &mut B) -> Result<(), ProtocolError>;
}

fn write<B: BufferMut, P: PacketCodec>(packet_id: i32, packet: &P, buf: &mut B) -> Result<(), ProtocolError> {
    buf.write_var_int(packet_id);
    packet.encode(buf)
}

fn unexpected<T>(protocol: Protocol, id: i32) -> Result<T, ProtocolError> {
    Err(ProtocolError::UnexpectedPacket { protocol, id })
}

/// Packet ids of a packet we are about to send, used to report misuse.
fn client_packet_id(packet: &PacketClientEnum) -> i32 {
    match packet {
        PacketClientEnum::Handshake(_) | PacketClientEnum::StatusRequest(_) => 0,
        PacketClientEnum::Ping(_) => 1,
    }
}

fn server_packet_id(packet: &PacketServerEnum) -> i32 {
    match packet {
        PacketServerEnum::StatusResponse(_) => 0,
        PacketServerEnum::Pong(_) => 1,
    }
}

pub struct ClientWireCodec;
impl WireCodec<Client> for ClientWireCodec {
    fn read_packet<B: Buffer>(protocol: Protocol, packet_id: i32, buf: &mut B) -> Result<PacketClientEnum, ProtocolError> {
        match protocol {
            Protocol::Handshake => match packet_id {
                0 => handshake::HandshakePacket::decode(buf).map(PacketClientEnum::Handshake),
                _ => unexpected(protocol, packet_id),
            },
            Protocol::Status => match packet_id {
                0 => status::StatusRequestPacket::decode(buf).map(PacketClientEnum::StatusRequest),
                1 => status::PingPacket::decode(buf).map(PacketClientEnum::Ping),
                _ => unexpected(protocol, packet_id),
            },
            Protocol::Login => unexpected(protocol, packet_id),
        }
    }

    fn write_packet<B: BufferMut>(protocol: Protocol, packet: &PacketServerEnum, buf: &mut B) -> Result<(), ProtocolError> {
        match protocol {
            Protocol::Status => match packet {
                PacketServerEnum::StatusResponse(packet) => write(0, packet, buf),
                PacketServerEnum::Pong(packet) => write(1, packet, buf),
            },
            Protocol::Handshake | Protocol::Login => unexpected(protocol, server_packet_id(packet)),
        }
    }
}

pub struct ServerWireCodec;
impl WireCodec<Server> for ServerWireCodec {
    fn read_packet<B: Buffer>(protocol: Protocol, packet_id: i32, buf: &mut B) -> Result<PacketServerEnum, ProtocolError> {
        match protocol {
            Protocol::Status => match packet_id {
                0 => status::StatusResponsePacket::decode(buf).map(PacketServerEnum::StatusResponse),
                1 => status::PongPacket::decode(buf).map(PacketServerEnum::Pong),
                _ => unexpected(protocol, packet_id),
            },
            Protocol::Handshake | Protocol::Login => unexpected(protocol, packet_id),
        }
    }

    fn write_packet<B: BufferMut>(protocol: Protocol, packet: &PacketClientEnum, buf: &mut B) -> Result<(), ProtocolError> {
        match protocol {
            Protocol::Handshake => match packet {
                PacketClientEnum::Handshake(packet) => write(0, packet, buf),
                _ => unexpected(protocol, client_packet_id(packet)),
            },
            Protocol::Status => match packet {
                PacketClientEnum::StatusRequest(packet) => write(0, packet, buf),
                PacketClientEnum::Ping(packet) => write(1, packet, buf),
                _ => unexpected(protocol, client_packet_id(packet)),
            },
            Protocol::Login => unexpected(protocol, client_packet_id(packet)),
        }
    }
}
