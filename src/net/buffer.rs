use bytes::{Buf, BufMut, Bytes, BytesMut};
use crate::error::ProtocolError;

/// Maximum size of a var-int encoded 32-bit number
pub const MAX_VAR_INT_SIZE: usize = 5;

/// Maximum size of a var-int encoded 64-bit number
pub const MAX_VAR_LONG_SIZE: usize = 10;

/// Calculate the size (in bytes) of a number when encoded as var-int
pub fn var_int_size(int: i32) -> usize {
    let mut int = int as u32;
    let mut size = 1;
    while (int & !127) != 0 {
        int >>= 7;
        size += 1;
    }
    size
}

/// Calculate the size (in bytes) of a number when encoded as var-long
pub fn var_long_size(long: i64) -> usize {
    let mut long = long as u64;
    let mut size = 1;
    while (long & !127) != 0 {
        long >>= 7;
        size += 1;
    }
    size
}

/// The outcome of feeding bytes to a var-int decoder.
#[derive(Debug, PartialEq, Eq)]
pub enum VarIntStep {
    /// The value is complete and occupied `size` bytes
    Done { value: u64, size: usize },
    /// More bytes are needed
    Incomplete,
}

/// Decode a var-int of at most `max_size` bytes from the start of a slice.
///
/// Decoding stops at the first byte with a clear continuation bit.
/// A slice that ends before that byte yields [VarIntStep::Incomplete],
/// so callers reading from a stream can wait for more data.
/// A final byte carrying bits beyond the 32 (or 64 for var-longs) value bits
/// is rejected.
pub fn decode_var_int(src: &[u8], max_size: usize) -> Result<VarIntStep, ProtocolError> {
    let value_bits = if max_size > MAX_VAR_INT_SIZE { 64 } else { 32 };
    let mut result = 0u64;
    for i in 0..max_size {
        let byte = match src.get(i) {
            Some(byte) => *byte,
            None => return Ok(VarIntStep::Incomplete),
        };
        result |= ((byte & 127) as u64) << (i * 7);
        if byte & 128 == 0 {
            if i == max_size - 1 && value_bits < (i + 1) * 7 {
                let overflow_mask = (127u32 << (value_bits - i * 7)) as u8 & 127;
                if byte & overflow_mask != 0 {
                    return Err(ProtocolError::VarIntOverflow(value_bits));
                }
            }
            return Ok(VarIntStep::Done { value: result, size: i + 1 });
        }
    }
    Err(ProtocolError::VarIntTooLong(max_size))
}

pub trait Buffer {
    fn read_u8(&mut self) -> Result<u8, ProtocolError>;
    fn read_u16(&mut self) -> Result<u16, ProtocolError>;
    fn read_i64(&mut self) -> Result<i64, ProtocolError>;
    fn read_var_int(&mut self) -> Result<i32, ProtocolError>;
    fn read_var_long(&mut self) -> Result<i64, ProtocolError>;
    fn read_byte_array(&mut self) -> Result<Bytes, ProtocolError>;
    fn read_string(&mut self, max_len: usize) -> Result<String, ProtocolError>;
}

fn ensure_remaining(buf: &BytesMut, len: usize) -> Result<(), ProtocolError> {
    if buf.remaining() < len {
        Err(ProtocolError::Truncated)
    } else {
        Ok(())
    }
}

fn read_var<B: Buf>(buf: &mut B, max_size: usize) -> Result<u64, ProtocolError> {
    match decode_var_int(buf.chunk(), max_size)? {
        VarIntStep::Done { value, size } => {
            buf.advance(size);
            Ok(value)
        }
        VarIntStep::Incomplete => Err(ProtocolError::Truncated),
    }
}

impl Buffer for BytesMut {
    fn read_u8(&mut self) -> Result<u8, ProtocolError> {
        ensure_remaining(self, 1)?;
        Ok(self.get_u8())
    }

    fn read_u16(&mut self) -> Result<u16, ProtocolError> {
        ensure_remaining(self, 2)?;
        Ok(self.get_u16())
    }

    fn read_i64(&mut self) -> Result<i64, ProtocolError> {
        ensure_remaining(self, 8)?;
        Ok(self.get_i64())
    }

    fn read_var_int(&mut self) -> Result<i32, ProtocolError> {
        read_var(self, MAX_VAR_INT_SIZE).map(|value| value as u32 as i32)
    }

    fn read_var_long(&mut self) -> Result<i64, ProtocolError> {
        read_var(self, MAX_VAR_LONG_SIZE).map(|value| value as i64)
    }

    fn read_byte_array(&mut self) -> Result<Bytes, ProtocolError> {
        let size = self.read_var_int()?;
        if size < 0 {
            return Err(ProtocolError::NegativeLength(size));
        }
        ensure_remaining(self, size as usize)?;
        Ok(self.split_to(size as usize).freeze())
    }

    fn read_string(&mut self, max_len: usize) -> Result<String, ProtocolError> {
        let bytes = self.read_byte_array()?;
        if bytes.len() > max_len {
            return Err(ProtocolError::StringTooLong { len: bytes.len(), max: max_len });
        }
        String::from_utf8(bytes.to_vec()).map_err(|_| ProtocolError::InvalidUtf8)
    }
}

pub trait BufferMut {
    fn write_u8(&mut self, byte: u8);
    fn write_u16(&mut self, short: u16);
    fn write_i64(&mut self, long: i64);
    fn write_var_int(&mut self, int: i32);
    fn write_var_long(&mut self, long: i64);
    fn write_byte_array(&mut self, array: &[u8]);
    fn write_string(&mut self, string: &str);
}

impl BufferMut for BytesMut {
    fn write_u8(&mut self, byte: u8) {
        self.reserve(1);
        self.put_u8(byte);
    }

    fn write_u16(&mut self, short: u16) {
        self.reserve(2);
        self.put_u16(short);
    }

    fn write_i64(&mut self, long: i64) {
        self.reserve(8);
        self.put_i64(long);
    }

    fn write_var_int(&mut self, int: i32) {
        self.reserve(var_int_size(int));

        let mut int = int as u32;
        while (int & !127) != 0 {
            self.put_u8((int as u8) & 127 | 128);
            int >>= 7;
        }
        self.put_u8((int as u8) & 127)
    }

    fn write_var_long(&mut self, long: i64) {
        self.reserve(var_long_size(long));

        let mut long = long as u64;
        while (long & !127) != 0 {
            self.put_u8((long as u8) & 127 | 128);
            long >>= 7;
        }
        self.put_u8((long as u8) & 127)
    }

    fn write_byte_array(&mut self, array: &[u8]) {
        let array_size = array.len() as i32;
        self.reserve(var_int_size(array_size) + array.len());
        self.write_var_int(array_size);
        self.put_slice(array)
    }

    fn write_string(&mut self, string: &str) {
        self.write_byte_array(string.as_bytes())
    }
}
