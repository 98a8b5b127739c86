//! # Bitpress Dense: Fixed-Width Substitution Coding
//!
//! This crate implements the dense codec: a lossless byte-stream coding
//! that replaces every input byte with a fixed-width code drawn from a
//! per-input substitution table.
//!
//! ## How it works
//!
//! - **Dense codes**: one linear scan assigns code 0 to the first
//!   distinct byte, 1 to the next, and so on — first-occurrence order,
//!   never frequency order, so the scheme stays simple and deterministic
//!   instead of entropy-optimal.
//! - **Fixed width**: every code in a stream is `ceil(log2(alphabet))`
//!   bits wide; a one-symbol input needs 0 bits per occurrence and ships
//!   as a bare header.
//! - **Self-describing streams**: the header carries the method tag, the
//!   table and the original length, so decoding needs nothing but the
//!   buffer itself.
//!
//! Compression is bounded by `bits_per_entry / 8`: an alphabet of 16
//! packs to half the input size plus a small header, while an input
//! using all 256 byte values gains nothing. See [`wire`] for the exact
//! layout.
//!
//! ## Example
//!
//! ```rust
//! use bitpress_dense::{decode, encode};
//!
//! let original = b"abracadabra";
//!
//! let encoded = encode(original).unwrap();
//! let decoded = decode(&encoded).unwrap();
//!
//! assert_eq!(decoded, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decoder;
mod encoder;
mod inspect;
mod table;
pub mod wire;

pub use decoder::DenseDecoder;
pub use encoder::DenseEncoder;
pub use inspect::{StreamInfo, inspect};
pub use table::SymbolTable;

use bitpress_core::error::Result;

/// Encode `input` as a dense-code stream.
///
/// The input must not be empty; everything else, including inputs using
/// all 256 byte values, is encodable.
///
/// # Example
///
/// ```rust
/// use bitpress_dense::encode;
///
/// let encoded = encode(b"banana").unwrap();
/// assert_eq!(encoded[0], 0xC4); // method tag
/// ```
pub fn encode(input: &[u8]) -> Result<Vec<u8>> {
    DenseEncoder::new(input).encode()
}

/// Decode a dense-code stream back into the original bytes.
///
/// The stream is treated as untrusted: malformed headers, truncation,
/// trailing garbage and corrupt code words are all reported as errors,
/// never panics.
///
/// # Example
///
/// ```rust
/// use bitpress_dense::{decode, encode};
///
/// let encoded = encode(b"banana").unwrap();
/// assert_eq!(decode(&encoded).unwrap(), b"banana");
/// ```
pub fn decode(encoded: &[u8]) -> Result<Vec<u8>> {
    DenseDecoder::new(encoded).decode()
}
