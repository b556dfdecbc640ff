//! Cursor-addressed bit-level buffer underlying every sync codec.
//!
//! The wire format packs fields at bit granularity, so all reads and
//! writes go through a bit cursor rather than `Buf`/`BufMut` byte
//! cursors. Bit order within a byte is MSB-first (RakNet convention);
//! multi-byte integers are laid out little-endian, matching the wrapped
//! engine's platform convention.

use bytes::{BufMut, Bytes, BytesMut};

use crate::protocol::packet::DecodeError;

/// Binary buffer with independent read and write bit cursors.
///
/// A buffer is created per encode-or-decode call and exclusively owned
/// by it; nothing in this layer retains a buffer past that call.
#[derive(Debug, Default)]
pub struct BitBuffer {
    data: BytesMut,
    /// Number of valid bits; doubles as the write cursor.
    write_cursor: usize,
    read_cursor: usize,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with room for `bytes` bytes.
    pub fn with_capacity(bytes: usize) -> Self {
        BitBuffer {
            data: BytesMut::with_capacity(bytes),
            write_cursor: 0,
            read_cursor: 0,
        }
    }

    /// Wraps an inbound byte sequence for decoding. The read cursor
    /// starts at bit zero and every bit of `src` is readable.
    pub fn from_bytes(src: &[u8]) -> Self {
        BitBuffer {
            data: BytesMut::from(src),
            write_cursor: src.len() * 8,
            read_cursor: 0,
        }
    }

    /// Consumes the buffer, yielding the encoded bytes. A trailing
    /// partially-filled byte is zero-padded in its low bits.
    pub fn into_bytes(self) -> Bytes {
        self.data.freeze()
    }

    pub fn len_bits(&self) -> usize {
        self.write_cursor
    }

    pub fn len_bytes(&self) -> usize {
        self.write_cursor.div_ceil(8)
    }

    /// Bits still available to `read_bits` before the valid end.
    pub fn remaining_bits(&self) -> usize {
        self.write_cursor - self.read_cursor
    }

    /// Appends the low `bits` bits of `value`, most significant first.
    pub fn write_bits(&mut self, value: u32, bits: u32) {
        debug_assert!(bits <= 32);

        // Aligned whole-byte writes skip the bit loop.
        if bits == 8 && self.write_cursor % 8 == 0 {
            self.data.put_u8(value as u8);
            self.write_cursor += 8;
            return;
        }

        for i in (0..bits).rev() {
            let byte = self.write_cursor >> 3;
            if byte == self.data.len() {
                self.data.put_u8(0);
            }
            if value >> i & 1 != 0 {
                self.data[byte] |= 0x80 >> (self.write_cursor & 7);
            }
            self.write_cursor += 1;
        }
    }

    /// Reads `bits` bits into the low end of the result, preserving the
    /// order they were written. Fails without moving past the end when
    /// fewer than `bits` bits remain.
    pub fn read_bits(&mut self, bits: u32) -> Result<u32, DecodeError> {
        debug_assert!(bits <= 32);
        if self.remaining_bits() < bits as usize {
            return Err(DecodeError::UnexpectedEof);
        }

        let mut out = 0u32;
        for _ in 0..bits {
            let byte = self.data[self.read_cursor >> 3];
            let bit = byte >> (7 - (self.read_cursor & 7)) & 1;
            out = out << 1 | bit as u32;
            self.read_cursor += 1;
        }
        Ok(out)
    }

    /// Writes an unsigned integer of `width` bits as little-endian bytes.
    /// `width` must be a multiple of 8, up to 32.
    pub fn write_uint(&mut self, value: u32, width: u32) {
        debug_assert!(width <= 32 && width % 8 == 0);
        for i in 0..width / 8 {
            self.write_bits(value >> (8 * i) & 0xFF, 8);
        }
    }

    pub fn read_uint(&mut self, width: u32) -> Result<u32, DecodeError> {
        debug_assert!(width <= 32 && width % 8 == 0);
        if self.remaining_bits() < width as usize {
            return Err(DecodeError::UnexpectedEof);
        }
        let mut out = 0u32;
        for i in 0..width / 8 {
            out |= self.read_bits(8)? << (8 * i);
        }
        Ok(out)
    }

    /// Writes a two's-complement integer of `width` bits, little-endian.
    pub fn write_int(&mut self, value: i32, width: u32) {
        let mask = if width == 32 {
            u32::MAX
        } else {
            (1u32 << width) - 1
        };
        self.write_uint(value as u32 & mask, width);
    }

    /// Reads a two's-complement integer of `width` bits, sign-extended.
    pub fn read_int(&mut self, width: u32) -> Result<i32, DecodeError> {
        let raw = self.read_uint(width)?;
        let shift = 32 - width;
        Ok((raw << shift) as i32 >> shift)
    }

    /// Writes an IEEE-754 single, bit-for-bit, little-endian.
    pub fn write_f32(&mut self, value: f32) {
        self.write_uint(value.to_bits(), 32);
    }

    pub fn read_f32(&mut self) -> Result<f32, DecodeError> {
        Ok(f32::from_bits(self.read_uint(32)?))
    }

    /// Three consecutive f32 writes; no vector-specific packing.
    pub fn write_f32x3(&mut self, x: f32, y: f32, z: f32) {
        self.write_f32(x);
        self.write_f32(y);
        self.write_f32(z);
    }

    pub fn read_f32x3(&mut self) -> Result<(f32, f32, f32), DecodeError> {
        Ok((self.read_f32()?, self.read_f32()?, self.read_f32()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unaligned_bits_roundtrip() {
        let mut buf = BitBuffer::new();
        buf.write_bits(0b101, 3);
        buf.write_bits(0b0110_1, 5);
        buf.write_bits(0x3FF, 10);
        assert_eq!(buf.len_bits(), 18);
        assert_eq!(buf.read_bits(3).unwrap(), 0b101);
        assert_eq!(buf.read_bits(5).unwrap(), 0b0110_1);
        assert_eq!(buf.read_bits(10).unwrap(), 0x3FF);
    }

    #[test]
    fn uint_is_little_endian() {
        let mut buf = BitBuffer::new();
        buf.write_uint(0x0102, 16);
        let bytes = buf.into_bytes();
        assert_eq!(&bytes[..], &[0x02, 0x01]);
    }

    #[test]
    fn f32_matches_le_bytes() {
        let mut buf = BitBuffer::new();
        buf.write_f32(10.0);
        assert_eq!(&buf.into_bytes()[..], &10.0f32.to_le_bytes());
    }

    #[test]
    fn int_sign_extends() {
        let mut buf = BitBuffer::new();
        buf.write_int(-2, 16);
        buf.write_int(-1, 8);
        assert_eq!(buf.read_int(16).unwrap(), -2);
        assert_eq!(buf.read_int(8).unwrap(), -1);
    }

    #[test]
    fn read_past_end_fails_cleanly() {
        let mut buf = BitBuffer::from_bytes(&[0xAB]);
        assert_eq!(buf.read_bits(4).unwrap(), 0xA);
        assert!(matches!(buf.read_bits(5), Err(DecodeError::UnexpectedEof)));
        // The failed read must not consume anything.
        assert_eq!(buf.remaining_bits(), 4);
        assert_eq!(buf.read_bits(4).unwrap(), 0xB);
    }

    #[test]
    fn empty_buffer_has_nothing_to_read() {
        let mut buf = BitBuffer::new();
        assert!(matches!(buf.read_uint(8), Err(DecodeError::UnexpectedEof)));
    }

    #[test]
    fn partial_trailing_byte_is_zero_padded() {
        let mut buf = BitBuffer::new();
        buf.write_bits(0b1, 1);
        assert_eq!(buf.len_bytes(), 1);
        assert_eq!(&buf.into_bytes()[..], &[0x80]);
    }
}
