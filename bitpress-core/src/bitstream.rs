//! Bit-level I/O over byte buffers.
//!
//! This module provides [`BitReader`] and [`BitWriter`] for mixing
//! byte-aligned header fields with bit-packed payloads in one stream.
//!
//! # Bit Ordering
//!
//! Packed codes are LSB-first (Least Significant Bit first): bits fill
//! each byte starting from its least significant bit, and the final
//! partial byte is zero padded in its unused high bits.
//!
//! # Byte Order
//!
//! Multi-byte header fields are little-endian, fixed, independent of the
//! host architecture.
//!
//! # Example
//!
//! ```
//! use bitpress_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_u16(0x0102);
//! writer.write_bits(0b101, 3);
//! let data = writer.into_vec();
//!
//! let mut reader = BitReader::new(&data);
//! assert_eq!(reader.read_u16().unwrap(), 0x0102);
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! ```

use crate::error::{BitpressError, Result};

/// A bit-level reader over a byte slice.
///
/// Byte-aligned reads (`read_u8`, `read_u16`, `read_u64`) serve header
/// fields; `read_bits` pulls LSB-first through an internal bit buffer.
/// Every read is bounds checked and reports [`BitpressError::UnexpectedEof`]
/// instead of running past the slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Index of the next byte not yet consumed or buffered.
    byte_pos: usize,
    /// Bit buffer (LSB-first).
    buffer: u32,
    /// Number of valid bits in the buffer.
    bits_in_buffer: u8,
}

impl<'a> BitReader<'a> {
    /// Create a new reader over `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            buffer: 0,
            bits_in_buffer: 0,
        }
    }

    /// Unread bytes past the cursor.
    ///
    /// Bytes already pulled into the bit buffer are not counted, so this
    /// is exact whenever the reader sits on a byte boundary, which is the
    /// only place length validation happens.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.byte_pos
    }

    /// Consume `count` bytes, byte-aligned.
    fn take_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        debug_assert_eq!(self.bits_in_buffer, 0, "byte reads must stay byte-aligned");
        if self.remaining() < count {
            return Err(BitpressError::unexpected_eof(count, self.remaining()));
        }
        let start = self.byte_pos;
        self.byte_pos += count;
        Ok(&self.data[start..self.byte_pos])
    }

    /// Read one byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take_bytes(1)?[0])
    }

    /// Read a little-endian u16.
    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.take_bytes(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Read a little-endian u64.
    pub fn read_u64(&mut self) -> Result<u64> {
        let bytes = self.take_bytes(8)?;
        let mut raw = [0u8; 8];
        raw.copy_from_slice(bytes);
        Ok(u64::from_le_bytes(raw))
    }

    /// Ensure at least `count` bits are buffered.
    #[inline]
    fn fill_buffer(&mut self, count: u8) -> Result<()> {
        while self.bits_in_buffer < count && self.byte_pos < self.data.len() {
            let byte = self.data[self.byte_pos];
            self.byte_pos += 1;
            self.buffer |= u32::from(byte) << self.bits_in_buffer;
            self.bits_in_buffer += 8;
        }

        if self.bits_in_buffer < count {
            let missing = usize::from(count - self.bits_in_buffer).div_ceil(8);
            return Err(BitpressError::unexpected_eof(missing, 0));
        }

        Ok(())
    }

    /// Read up to 16 bits, LSB-first.
    ///
    /// `count == 0` is legal, reads nothing and yields 0.
    #[inline]
    pub fn read_bits(&mut self, count: u8) -> Result<u16> {
        debug_assert!(count <= 16, "cannot read more than 16 bits at once");

        if count == 0 {
            return Ok(0);
        }

        self.fill_buffer(count)?;

        let mask = (1u32 << count) - 1;
        let value = (self.buffer & mask) as u16;

        self.buffer >>= count;
        self.bits_in_buffer -= count;

        Ok(value)
    }

    /// Read a single bit.
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? != 0)
    }
}

/// A bit-level writer producing an owned byte buffer.
///
/// Byte-aligned writes serve header fields; `write_bits` accumulates
/// LSB-first and flushes whole bytes as they complete. Call [`flush`] or
/// [`into_vec`] at the end of a bit-packing pass to emit the final
/// partial byte, zero padded.
///
/// Writes into the buffer cannot fail; only the up-front reservation in
/// [`with_capacity`] can.
///
/// [`flush`]: BitWriter::flush
/// [`into_vec`]: BitWriter::into_vec
/// [`with_capacity`]: BitWriter::with_capacity
#[derive(Debug)]
pub struct BitWriter {
    /// Output buffer.
    output: Vec<u8>,
    /// Bit buffer (LSB-first).
    buffer: u32,
    /// Number of bits in the buffer.
    bits_in_buffer: u8,
}

impl BitWriter {
    /// Create a new writer with an empty buffer.
    pub fn new() -> Self {
        Self {
            output: Vec::new(),
            buffer: 0,
            bits_in_buffer: 0,
        }
    }

    /// Create a writer with `bytes` of pre-reserved output space.
    ///
    /// Produced streams have an exactly computable size, so the one
    /// reservation here is also the only allocation; its failure is
    /// reported as [`BitpressError::AllocationFailed`] rather than
    /// aborting the process.
    pub fn with_capacity(bytes: usize) -> Result<Self> {
        let mut output = Vec::new();
        output
            .try_reserve_exact(bytes)
            .map_err(|_| BitpressError::allocation_failed(bytes as u64))?;
        Ok(Self {
            output,
            buffer: 0,
            bits_in_buffer: 0,
        })
    }

    /// Write one byte, byte-aligned.
    pub fn write_u8(&mut self, value: u8) {
        debug_assert_eq!(self.bits_in_buffer, 0, "byte writes must stay byte-aligned");
        self.output.push(value);
    }

    /// Write a little-endian u16, byte-aligned.
    pub fn write_u16(&mut self, value: u16) {
        debug_assert_eq!(self.bits_in_buffer, 0, "byte writes must stay byte-aligned");
        self.output.extend_from_slice(&value.to_le_bytes());
    }

    /// Write a little-endian u64, byte-aligned.
    pub fn write_u64(&mut self, value: u64) {
        debug_assert_eq!(self.bits_in_buffer, 0, "byte writes must stay byte-aligned");
        self.output.extend_from_slice(&value.to_le_bytes());
    }

    /// Write up to 16 bits, LSB-first.
    ///
    /// `count == 0` is legal and writes nothing.
    #[inline]
    pub fn write_bits(&mut self, value: u16, count: u8) {
        debug_assert!(count <= 16, "cannot write more than 16 bits at once");

        if count == 0 {
            return;
        }

        let mask = (1u32 << count) - 1;
        self.buffer |= (u32::from(value) & mask) << self.bits_in_buffer;
        self.bits_in_buffer += count;

        while self.bits_in_buffer >= 8 {
            self.output.push((self.buffer & 0xFF) as u8);
            self.buffer >>= 8;
            self.bits_in_buffer -= 8;
        }
    }

    /// Write a single bit.
    pub fn write_bit(&mut self, bit: bool) {
        self.write_bits(u16::from(bit), 1);
    }

    /// Emit any partial byte, zero padded in the unused high bits.
    pub fn flush(&mut self) {
        if self.bits_in_buffer > 0 {
            self.output.push((self.buffer & 0xFF) as u8);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
    }

    /// Flush and return the output buffer.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.flush();
        self.output
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_bits_lsb_first() {
        // 0b10110101 = 0xB5
        let data = [0xB5];
        let mut reader = BitReader::new(&data);

        assert_eq!(reader.read_bits(1).unwrap(), 1); // LSB first
        assert_eq!(reader.read_bits(1).unwrap(), 0);
        assert_eq!(reader.read_bits(1).unwrap(), 1);
        assert_eq!(reader.read_bits(1).unwrap(), 0);
        assert_eq!(reader.read_bits(1).unwrap(), 1);
        assert_eq!(reader.read_bits(1).unwrap(), 1);
        assert_eq!(reader.read_bits(1).unwrap(), 0);
        assert_eq!(reader.read_bits(1).unwrap(), 1);
    }

    #[test]
    fn test_read_bits_across_bytes() {
        let data = [0xFF, 0x00];
        let mut reader = BitReader::new(&data);

        assert_eq!(reader.read_bits(4).unwrap(), 0xF);
        assert_eq!(reader.read_bits(8).unwrap(), 0x0F); // Crosses byte boundary
        assert_eq!(reader.read_bits(4).unwrap(), 0x0);
    }

    #[test]
    fn test_write_bits_lsb_first() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b101, 3);
        writer.write_bits(0b11001, 5);
        // 3 bits: 101, 5 bits: 11001 -> 11001_101 = 0xCD
        assert_eq!(writer.into_vec(), vec![0xCD]);
    }

    #[test]
    fn test_write_bit() {
        let mut writer = BitWriter::new();
        for bit in [true, false, true, false, true, true, false, true] {
            writer.write_bit(bit);
        }
        assert_eq!(writer.into_vec(), vec![0xB5]);
    }

    #[test]
    fn test_flush_pads_with_zeros() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b101, 3);
        assert_eq!(writer.into_vec(), vec![0x05]);
    }

    #[test]
    fn test_bits_roundtrip() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b101, 3);
        writer.write_bits(0b1111, 4);
        writer.write_bits(0b10, 2);
        writer.write_bits(0b110011, 6);
        let data = writer.into_vec();

        let mut reader = BitReader::new(&data);
        assert_eq!(reader.read_bits(3).unwrap(), 0b101);
        assert_eq!(reader.read_bits(4).unwrap(), 0b1111);
        assert_eq!(reader.read_bits(2).unwrap(), 0b10);
        assert_eq!(reader.read_bits(6).unwrap(), 0b110011);
    }

    #[test]
    fn test_header_fields_little_endian() {
        let mut writer = BitWriter::new();
        writer.write_u8(0xC4);
        writer.write_u16(0x0102);
        writer.write_u64(0x0807_0605_0403_0201);
        let data = writer.into_vec();

        assert_eq!(
            data,
            vec![0xC4, 0x02, 0x01, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
        );

        let mut reader = BitReader::new(&data);
        assert_eq!(reader.read_u8().unwrap(), 0xC4);
        assert_eq!(reader.read_u16().unwrap(), 0x0102);
        assert_eq!(reader.read_u64().unwrap(), 0x0807_0605_0403_0201);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_zero_width_reads_and_writes() {
        let mut writer = BitWriter::new();
        writer.write_bits(0x7FFF, 0);
        assert!(writer.into_vec().is_empty());

        let mut reader = BitReader::new(&[]);
        assert_eq!(reader.read_bits(0).unwrap(), 0);
    }

    #[test]
    fn test_remaining_tracks_cursor() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.remaining(), 4);
        reader.read_u8().unwrap();
        assert_eq!(reader.remaining(), 3);
        reader.read_u16().unwrap();
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn test_eof_on_short_byte_read() {
        let data = [0xAA];
        let mut reader = BitReader::new(&data);
        let err = reader.read_u16().unwrap_err();
        assert_eq!(err, BitpressError::unexpected_eof(2, 1));
        // The failed read consumed nothing.
        assert_eq!(reader.read_u8().unwrap(), 0xAA);
    }

    #[test]
    fn test_eof_on_short_bit_read() {
        let data = [0xFF];
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.read_bits(6).unwrap(), 0b111111);
        assert!(reader.read_bits(3).is_err());
    }

    #[test]
    fn test_with_capacity_rejects_absurd_reservation() {
        let err = BitWriter::with_capacity(usize::MAX).unwrap_err();
        assert!(matches!(err, BitpressError::AllocationFailed { .. }));
    }
}
