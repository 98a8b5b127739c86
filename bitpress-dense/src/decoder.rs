//! Dense-code decoder.
//!
//! Nothing in an encoded stream is trusted. Every length-bearing field is
//! checked against the bytes actually present before it is used, and the
//! packed body must account for the remainder of the buffer exactly, so
//! truncated and trailing-garbage streams both fail up front.

use bitpress_core::bitstream::BitReader;
use bitpress_core::error::{BitpressError, Result};
use bitpress_core::method::DENSE_TAG;

use crate::table::SymbolTable;
use crate::wire;

/// One-shot decoder for a single encoded buffer.
#[derive(Debug)]
pub struct DenseDecoder<'a> {
    /// Cursor over the encoded stream.
    reader: BitReader<'a>,
    /// Code-to-symbol table, rebuilt from the header.
    table: SymbolTable,
}

impl<'a> DenseDecoder<'a> {
    /// Create a decoder over `encoded`.
    pub fn new(encoded: &'a [u8]) -> Self {
        Self {
            reader: BitReader::new(encoded),
            table: SymbolTable::new(),
        }
    }

    /// Run the decode pass and hand back the reconstructed bytes.
    pub fn decode(mut self) -> Result<Vec<u8>> {
        let original_len = self.read_header()?;
        self.unpack_codes(original_len)
    }

    /// Parse and validate the header, stopping at the packed body.
    ///
    /// Returns the original input length the header claims. After this
    /// call the table is populated and every remaining byte belongs to
    /// the packed body.
    pub(crate) fn read_header(&mut self) -> Result<u64> {
        if self.reader.remaining() == 0 {
            return Err(BitpressError::EmptyInput);
        }
        self.read_tag()?;
        self.read_table()?;
        self.read_original_len()
    }

    /// The code-to-symbol table parsed from the header.
    pub(crate) fn table(&self) -> &SymbolTable {
        &self.table
    }

    fn read_tag(&mut self) -> Result<()> {
        let tag = self.reader.read_u8()?;
        if tag != DENSE_TAG {
            return Err(BitpressError::method_mismatch(DENSE_TAG, tag));
        }
        Ok(())
    }

    /// Parse the claimed entry count and the `(code, symbol)` pairs
    /// behind it.
    fn read_table(&mut self) -> Result<()> {
        let entry_count = self.reader.read_u16()?;
        if usize::from(entry_count) > wire::MAX_TABLE_ENTRIES {
            return Err(BitpressError::oversized_table(entry_count));
        }

        let table_bytes = usize::from(entry_count) * wire::ENTRY_BYTES;
        if self.reader.remaining() < table_bytes {
            return Err(BitpressError::unexpected_eof(
                table_bytes,
                self.reader.remaining(),
            ));
        }

        for _ in 0..entry_count {
            let code = self.reader.read_u8()?;
            let symbol = self.reader.read_u8()?;
            // Fewer unique entries than claimed means a repeated code
            if !self.table.insert(code, symbol) {
                return Err(BitpressError::duplicate_code(code));
            }
        }
        Ok(())
    }

    /// Read the original length and require the packed body to account
    /// for every remaining byte.
    fn read_original_len(&mut self) -> Result<u64> {
        if self.reader.remaining() < wire::LEN_BYTES {
            return Err(BitpressError::unexpected_eof(
                wire::LEN_BYTES,
                self.reader.remaining(),
            ));
        }
        let original_len = self.reader.read_u64()?;

        let expected = wire::packed_size(self.table.bits_per_entry(), original_len);
        let actual = self.reader.remaining() as u64;
        if expected != actual {
            return Err(BitpressError::payload_size_mismatch(expected, actual));
        }
        Ok(original_len)
    }

    /// Read one fixed-width code per original position and substitute the
    /// symbol back.
    fn unpack_codes(&mut self, original_len: u64) -> Result<Vec<u8>> {
        let out_len = usize::try_from(original_len)
            .map_err(|_| BitpressError::allocation_failed(original_len))?;
        let mut out = Vec::new();
        out.try_reserve_exact(out_len)
            .map_err(|_| BitpressError::allocation_failed(original_len))?;

        let width = self.table.bits_per_entry();
        for _ in 0..out_len {
            // Width 0 legally reads nothing and always yields code 0
            let code = self.reader.read_bits(width)? as u8;
            let symbol = self
                .table
                .get(code)
                .ok_or_else(|| BitpressError::invalid_code(code))?;
            out.push(symbol);
        }
        Ok(out)
    }
}
