use std::io;
use thiserror::Error;
use crate::net::Protocol;

/// A violation of the minecraft wire protocol.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("var-int is longer than {0} bytes")]
    VarIntTooLong(usize),
    #[error("var-int exceeds {0} bits")]
    VarIntOverflow(usize),
    #[error("unexpected end of data")]
    Truncated,
    #[error("packet of {size} bytes exceeds the limit of {max} bytes")]
    PacketTooLarge { size: usize, max: usize },
    #[error("unexpected packet id {id:#04x} in protocol {protocol:?}")]
    UnexpectedPacket { protocol: Protocol, id: i32 },
    #[error("packet body has {0} unread trailing bytes")]
    TrailingBytes(usize),
    #[error("negative length prefix {0}")]
    NegativeLength(i32),
    #[error("string of {len} bytes exceeds the limit of {max} bytes")]
    StringTooLong { len: usize, max: usize },
    #[error("string is not valid utf-8")]
    InvalidUtf8,
    #[error("pong payload {received} does not match ping payload {sent}")]
    PongMismatch { sent: i64, received: i64 },
    #[error("protocol {0:?} cannot be requested by a handshake")]
    InvalidNextState(Protocol),
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Failure of a complete server list ping exchange.
#[derive(Debug, Error)]
pub enum PingError {
    #[error("{0}")]
    Unreachable(io::Error),
    #[error("connection timed out")]
    TimedOut,
    #[error("protocol violation: {0}")]
    Protocol(ProtocolError),
    #[error("invalid status json: {0}")]
    BadStatusJson(#[from] serde_json::Error),
}

impl From<ProtocolError> for PingError {
    fn from(err: ProtocolError) -> Self {
        match err {
            // Socket errors bubbling out of the codec mean the connection dropped
            ProtocolError::Io(err) => PingError::Unreachable(err),
            err => PingError::Protocol(err),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Port value is not a number!")]
    NotANumber,
    #[error("Port integer is not a valid port!")]
    InvalidPort,
    #[error("Invalid Server Address!")]
    InvalidAddress,
}

#[derive(Debug, Error)]
pub enum FaviconError {
    #[error("Server has no icon.")]
    NoIcon,
    #[error("Favicon was not base64!")]
    BadFormat,
    #[error("Failed to decode base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Failed to decode PNG: {0}")]
    Decode(image::ImageError),
    #[error("Failed to encode PNG: {0}")]
    Encode(image::ImageError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    InvalidValue { name: &'static str, expected: &'static str, value: String },
}

/// Failures preventing the gateway from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to read {path}: {source}")]
    StaticFile { path: String, source: io::Error },
    #[error("failed to run http server: {0}")]
    Server(#[from] io::Error),
}
