//! All packets of the [Protocol::Status](crate::net::Protocol::Status) Protocol

pub mod server_status;
mod ping;
mod pong;
mod status_request;
mod status_response;

pub use self::ping::PingPacket;
pub use self::pong::PongPacket;
pub use self::status_request::StatusRequestPacket;
pub use self::status_response::{StatusResponsePacket, MAX_STATUS_LENGTH};
