use std::marker::PhantomData;
use bytes::{Buf, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use crate::error::ProtocolError;
use crate::net::*;
use crate::net::buffer::Buffer;
use crate::net::pipeline::framing::FrameCodec;

/// Encodes/Decodes packets to framed bytes.
///
/// The protocol that decides how packet ids are mapped is held by the codec
/// and has to be switched once the handshake was sent.
pub struct PipelineCodec<C: ConnectionType> {
    protocol: Protocol,
    framing: FrameCodec,
    phantom: PhantomData<C>,
}

impl<C: ConnectionType> PipelineCodec<C> {
    pub fn new(max_frame_size: usize) -> PipelineCodec<C> {
        PipelineCodec {
            protocol: Protocol::Handshake,
            framing: FrameCodec::new(max_frame_size),
            phantom: PhantomData,
        }
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn set_protocol(&mut self, protocol: Protocol) {
        self.protocol = protocol;
    }
}

impl<C: ConnectionType> Decoder for PipelineCodec<C> {
    type Item = C::In;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<C::In>, ProtocolError> {
        let mut frame = match self.framing.try_decode(src)? {
            Some(frame) => frame,
            None => return Ok(None),
        };

        let packet_id = frame.read_var_int()?;
        let packet = C::WC::read_packet(self.protocol, packet_id, &mut frame)?;
        if frame.has_remaining() {
            return Err(ProtocolError::TrailingBytes(frame.remaining()));
        }
        Ok(Some(packet))
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<C::In>, ProtocolError> {
        match self.decode(src)? {
            Some(packet) => Ok(Some(packet)),
            // The stream ended in the middle of a frame
            None if !src.is_empty() => Err(ProtocolError::Truncated),
            None => Ok(None),
        }
    }
}

impl<C: ConnectionType> Encoder<C::Out> for PipelineCodec<C> {
    type Error = ProtocolError;

    fn encode(&mut self, packet: C::Out, dst: &mut BytesMut) -> Result<(), ProtocolError> {
        let mut payload = BytesMut::new();
        C::WC::write_packet(self.protocol, &packet, &mut payload)?;
        self.framing.encode(&payload, dst)
    }
}
