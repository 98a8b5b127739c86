//! Wire-format description of a dense-code stream.
//!
//! Layout, all multi-byte integers little-endian:
//!
//! ```text
//! offset 0          method tag                   1 byte
//! offset 1..3       symbol-table entry count N   2 bytes
//! offset 3..3+2N    N entries of (code, symbol)  2 bytes each
//! next 8 bytes      original input length L      8 bytes
//! remaining         ceil(bits_per_entry * L / 8) bytes of LSB-first
//!                   packed codes, final byte zero padded
//! ```

/// Bytes occupied by the leading method tag.
pub const TAG_BYTES: usize = 1;

/// Bytes occupied by the symbol-table entry count.
pub const COUNT_BYTES: usize = 2;

/// Serialized size of one table entry: code byte plus symbol byte.
pub const ENTRY_BYTES: usize = 2;

/// Bytes occupied by the original-length field.
pub const LEN_BYTES: usize = 8;

/// A byte alphabet holds at most this many distinct values.
pub const MAX_TABLE_ENTRIES: usize = 256;

/// Total header size for a table of `entries` entries.
pub fn header_size(entries: usize) -> usize {
    TAG_BYTES + COUNT_BYTES + entries * ENTRY_BYTES + LEN_BYTES
}

/// Bytes needed to pack `symbols` codes of `bits_per_entry` bits each.
///
/// Computed in 128-bit arithmetic: a hostile header can claim a symbol
/// count whose bit total overflows 64 bits, and the result must still
/// compare correctly against the bytes actually present.
pub fn packed_size(bits_per_entry: u8, symbols: u64) -> u64 {
    let bits = u128::from(bits_per_entry) * u128::from(symbols);
    bits.div_ceil(8).min(u128::from(u64::MAX)) as u64
}
