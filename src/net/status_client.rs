use std::fmt::Display;
use std::io;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use futures::{SinkExt, StreamExt};
use log::{debug, trace, warn};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio::time::timeout;
use crate::address::Address;
use crate::error::{PingError, ProtocolError};
use crate::net::{PacketClientEnum, PacketServerEnum, Protocol, Server};
use crate::net::handshake::{HandshakePacket, STATUS_PROTOCOL_VERSION};
use crate::net::pipeline::{new_pipeline, Pipeline, DEFAULT_MAX_FRAME_SIZE};
use crate::net::status::{PingPacket, StatusRequestPacket};
use crate::net::status::server_status::{self, ServerInfo};

pub const DEFAULT_DIAL_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// The status of a server together with the measured round trip time.
#[derive(Debug, Clone)]
pub struct PingResult {
    pub status: ServerInfo,
    /// Round trip time in milliseconds
    pub latency: u64,
    /// Set if the server never answered the ping and the latency was
    /// estimated from the status request instead.
    pub latency_is_estimate: bool,
}

/// Client of the server list ping protocol.
///
/// Every call opens its own connection, nothing is shared between pings.
#[derive(Debug, Clone, Copy)]
pub struct StatusClient {
    pub dial_timeout: Duration,
    /// Deadline for each single packet read or write
    pub read_timeout: Duration,
    pub max_packet_size: usize,
}

impl Default for StatusClient {
    fn default() -> Self {
        StatusClient {
            dial_timeout: DEFAULT_DIAL_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            max_packet_size: DEFAULT_MAX_FRAME_SIZE,
        }
    }
}

impl StatusClient {
    /// Connect to a minecraft server at the provided address
    /// and fetch its status and latency.
    pub async fn fetch_status(&self, address: &Address) -> Result<PingResult, PingError> {
        debug!("Connecting to {}", address);
        let stream = timeout(self.dial_timeout, TcpStream::connect((address.host.as_str(), address.port)))
            .await
            .map_err(|_| PingError::TimedOut)?
            .map_err(PingError::Unreachable)?;

        self.exchange(stream, address).await
    }

    /// Run the status exchange over an already established connection.
    ///
    /// `address` is announced to the server in the handshake, exactly as given.
    pub async fn exchange<T>(&self, io: T, address: &Address) -> Result<PingResult, PingError>
        where T: AsyncRead + AsyncWrite + Unpin
    {
        let mut pipeline = new_pipeline::<T, Server>(io, self.max_packet_size);

        let handshake = PacketClientEnum::Handshake(HandshakePacket {
            protocol_version: STATUS_PROTOCOL_VERSION,
            server_address: address.host.clone(),
            server_port: address.port,
            next_protocol: Protocol::Status,
        });
        // The handshake is encoded on feed, so the protocol may be switched right after
        timeout(self.read_timeout, pipeline.feed(handshake)).await
            .map_err(|_| PingError::TimedOut)??;
        pipeline.codec_mut().set_protocol(Protocol::Status);
        self.send_packet(&mut pipeline, PacketClientEnum::StatusRequest(StatusRequestPacket)).await?;
        let request_sent = Instant::now();

        let json = match self.next_packet(&mut pipeline).await? {
            Some(PacketServerEnum::StatusResponse(packet)) => packet.json,
            Some(PacketServerEnum::Pong(_)) => {
                return Err(ProtocolError::UnexpectedPacket { protocol: Protocol::Status, id: 1 }.into());
            }
            None => {
                let closed = io::Error::new(io::ErrorKind::UnexpectedEof, "connection closed before the status response");
                return Err(PingError::Unreachable(closed));
            }
        };
        let status_round_trip = request_sent.elapsed();
        trace!("Status response of {}: {}", address, json);
        let status = server_status::parse(&json)?;

        let payload = ping_payload();
        let ping_sent = Instant::now();
        match self.send_packet(&mut pipeline, PacketClientEnum::Ping(PingPacket { payload })).await {
            Ok(()) => {}
            Err(err @ PingError::Unreachable(_)) | Err(err @ PingError::TimedOut) => {
                return Ok(estimated(address, status, status_round_trip, err));
            }
            Err(err) => return Err(err),
        }

        match self.next_packet(&mut pipeline).await {
            Ok(Some(PacketServerEnum::Pong(pong))) if pong.payload == payload => {
                let latency = millis(ping_sent.elapsed());
                debug!("Pinged {} in {}ms", address, latency);
                Ok(PingResult { status, latency, latency_is_estimate: false })
            }
            Ok(Some(PacketServerEnum::Pong(pong))) => {
                Err(ProtocolError::PongMismatch { sent: payload, received: pong.payload }.into())
            }
            Ok(Some(PacketServerEnum::StatusResponse(_))) => {
                Err(ProtocolError::UnexpectedPacket { protocol: Protocol::Status, id: 0 }.into())
            }
            Ok(None) => Ok(estimated(address, status, status_round_trip, "connection closed")),
            Err(err @ PingError::Unreachable(_)) | Err(err @ PingError::TimedOut) => {
                Ok(estimated(address, status, status_round_trip, err))
            }
            Err(err) => Err(err),
        }
    }

    /// Write and flush a packet, giving up after the read timeout.
    async fn send_packet<T>(&self, pipeline: &mut Pipeline<T, Server>, packet: PacketClientEnum) -> Result<(), PingError>
        where T: AsyncRead + AsyncWrite + Unpin
    {
        match timeout(self.read_timeout, pipeline.send(packet)).await {
            Ok(sent) => sent.map_err(PingError::from),
            Err(_) => Err(PingError::TimedOut),
        }
    }

    /// Read the next packet, giving up after the read timeout.
    async fn next_packet<T>(&self, pipeline: &mut Pipeline<T, Server>) -> Result<Option<PacketServerEnum>, PingError>
        where T: AsyncRead + AsyncWrite + Unpin
    {
        match timeout(self.read_timeout, pipeline.next()).await {
            Ok(packet) => packet.transpose().map_err(PingError::from),
            Err(_) => Err(PingError::TimedOut),
        }
    }
}

/// Fall back to the duration of the status request when the server
/// does not answer the ping.
fn estimated(address: &Address, status: ServerInfo, status_round_trip: Duration, reason: impl Display) -> PingResult {
    warn!("{} did not answer the ping ({}), estimating latency", address, reason);
    PingResult {
        status,
        latency: millis(status_round_trip),
        latency_is_estimate: true,
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn ping_payload() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as i64)
        .unwrap_or_default()
}
