use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::Framed;
use crate::net::ConnectionType;

mod framing;
mod packet_codec;

pub use self::framing::{FrameCodec, DEFAULT_MAX_FRAME_SIZE};
pub use self::packet_codec::PipelineCodec;

/// A connection that reads and writes whole packets.
///
/// It is a [Stream](futures::Stream) of incoming packets and a
/// [Sink](futures::Sink) for outgoing ones.
pub type Pipeline<T, C> = Framed<T, PipelineCodec<C>>;

/// Wrap a byte stream into a packet pipeline starting in the handshake protocol.
pub fn new_pipeline<T, C>(io: T, max_frame_size: usize) -> Pipeline<T, C>
    where T: AsyncRead + AsyncWrite, C: ConnectionType
{
    Framed::new(io, PipelineCodec::new(max_frame_size))
}
