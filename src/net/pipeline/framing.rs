use bytes::{Buf, BufMut, BytesMut};
use crate::error::ProtocolError;
use crate::net::buffer::{decode_var_int, var_int_size, BufferMut, VarIntStep, MAX_VAR_INT_SIZE};

/// Default upper bound for a frame, large enough for any vanilla favicon.
pub const DEFAULT_MAX_FRAME_SIZE: usize = 1 << 21;

/// Utility for encoding and decoding frames.
///
/// A frame is the data of one packet preceded by its size.
/// The size is encoded as a var-int and may not exceed `max_frame_size`.
#[derive(Debug, Clone, Copy)]
pub struct FrameCodec {
    pub max_frame_size: usize,
}

impl Default for FrameCodec {
    fn default() -> Self {
        FrameCodec { max_frame_size: DEFAULT_MAX_FRAME_SIZE }
    }
}

impl FrameCodec {
    pub fn new(max_frame_size: usize) -> FrameCodec {
        FrameCodec { max_frame_size }
    }

    /// Try to decode a frame from a provided buffer.
    /// This may fail if the frame was not yet completely received.
    ///
    /// The announced size is checked against the limit before any memory
    /// is reserved for the frame.
    pub fn try_decode(&self, src: &mut BytesMut) -> Result<Option<BytesMut>, ProtocolError> {
        let (frame_size, prefix_size) = match decode_var_int(src, MAX_VAR_INT_SIZE)? {
            VarIntStep::Done { value, size } => (value as u32 as i32, size),
            VarIntStep::Incomplete => return Ok(None),
        };

        if frame_size < 0 {
            return Err(ProtocolError::NegativeLength(frame_size));
        }
        let frame_size = frame_size as usize;
        if frame_size > self.max_frame_size {
            return Err(ProtocolError::PacketTooLarge { size: frame_size, max: self.max_frame_size });
        }

        let total_frame_size = prefix_size + frame_size;
        if src.len() < total_frame_size {
            // Reserve enough space to read the missing remainder of this frame
            src.reserve(total_frame_size - src.len());
            return Ok(None);
        }

        src.advance(prefix_size);
        Ok(Some(src.split_to(frame_size)))
    }

    pub fn encode(&self, payload: &[u8], dst: &mut BytesMut) -> Result<(), ProtocolError> {
        if payload.len() > self.max_frame_size {
            return Err(ProtocolError::PacketTooLarge { size: payload.len(), max: self.max_frame_size });
        }

        let payload_size = payload.len() as i32;
        dst.reserve(var_int_size(payload_size) + payload.len());
        dst.write_var_int(payload_size);
        dst.put_slice(payload);
        Ok(())
    }
}
