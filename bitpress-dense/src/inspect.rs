//! Header-only stream inspection.

use bitpress_core::error::Result;
use bitpress_core::method::Method;

use crate::decoder::DenseDecoder;
use crate::wire;

/// Summary of an encoded stream, read from its header alone.
///
/// Produced by [`inspect`] without decoding the packed body, so it is
/// cheap even for large streams; the header is still validated as
/// strictly as a full decode would.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamInfo {
    /// Method that produced the stream.
    pub method: Method,
    /// Number of symbol-table entries (the input's alphabet size).
    pub entries: u16,
    /// Fixed bit width of every packed code.
    pub bits_per_entry: u8,
    /// Length of the original input in bytes.
    pub original_len: u64,
    /// Bytes occupied by the header.
    pub header_bytes: usize,
    /// Bytes occupied by the packed body.
    pub data_bytes: u64,
}

/// Inspect a dense-code stream without decoding its body.
pub fn inspect(encoded: &[u8]) -> Result<StreamInfo> {
    let mut decoder = DenseDecoder::new(encoded);
    let original_len = decoder.read_header()?;

    let entries = decoder.table().len();
    let bits_per_entry = decoder.table().bits_per_entry();
    Ok(StreamInfo {
        method: Method::Dense,
        entries: entries as u16,
        bits_per_entry,
        original_len,
        header_bytes: wire::header_size(entries),
        data_bytes: wire::packed_size(bits_per_entry, original_len),
    })
}
