//! Dense-code encoder.

use bitpress_core::bitstream::BitWriter;
use bitpress_core::error::{BitpressError, Result};
use bitpress_core::method::DENSE_TAG;

use crate::table::SymbolTable;
use crate::wire;

/// One-shot encoder for a single input buffer.
///
/// Builds the substitution table in one scan, sizes the output buffer
/// exactly, writes the header, then packs every input byte's code
/// LSB-first. The whole input must be resident; there is no incremental
/// mode.
#[derive(Debug)]
pub struct DenseEncoder<'a> {
    /// Bytes being encoded.
    input: &'a [u8],
    /// Symbol-to-code table, built by [`build_table`](Self::build_table).
    table: SymbolTable,
}

impl<'a> DenseEncoder<'a> {
    /// Create an encoder over `input`.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            table: SymbolTable::new(),
        }
    }

    /// Run the encode pass and hand back the encoded stream.
    pub fn encode(mut self) -> Result<Vec<u8>> {
        if self.input.is_empty() {
            return Err(BitpressError::EmptyInput);
        }

        self.build_table();

        let width = self.table.bits_per_entry();
        let data_bytes = wire::packed_size(width, self.input.len() as u64) as usize;
        let total = wire::header_size(self.table.len()) + data_bytes;

        let mut out = BitWriter::with_capacity(total)?;
        self.write_header(&mut out);
        self.pack_codes(&mut out, width);

        let encoded = out.into_vec();
        debug_assert_eq!(encoded.len(), total, "sized output must match the size law");
        Ok(encoded)
    }

    /// Assign dense codes in first-occurrence order.
    ///
    /// Not frequency order: the first distinct byte gets code 0 no matter
    /// how rare it is. `insert` refuses bytes already seen, so the next
    /// code is simply the current table size.
    fn build_table(&mut self) {
        for &symbol in self.input {
            let next_code = self.table.len() as u8;
            self.table.insert(symbol, next_code);
        }
    }

    /// Header: tag, entry count, `(code, symbol)` pairs in code order,
    /// original length.
    fn write_header(&self, out: &mut BitWriter) {
        out.write_u8(DENSE_TAG);
        out.write_u16(self.table.len() as u16);
        for (symbol, code) in self.table.iter() {
            out.write_u8(code);
            out.write_u8(symbol);
        }
        out.write_u64(self.input.len() as u64);
    }

    /// Substitute every input byte with its fixed-width code.
    ///
    /// A one-symbol alphabet has width 0 and packs no bits at all; the
    /// header's length field carries everything.
    fn pack_codes(&self, out: &mut BitWriter, width: u8) {
        for &symbol in self.input {
            let code = self
                .table
                .get(symbol)
                .expect("BUG: every input byte was assigned a code during table construction");
            out.write_bits(u16::from(code), width);
        }
        out.flush();
    }
}
