//! # Bitpress Core
//!
//! Core components for the Bitpress codec library.
//!
//! This crate provides the building blocks the codec layers share:
//!
//! - [`bitstream`]: byte-buffer-backed [`BitReader`]/[`BitWriter`] mixing
//!   byte-aligned header fields with LSB-first bit-packed payloads
//! - [`method`]: the one-byte method-tag registry
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! Bitpress is a layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L4: CLI                                                 │
//! │     compress / decompress / info commands               │
//! ├─────────────────────────────────────────────────────────┤
//! │ L3: Dispatch (bitpress)                                 │
//! │     method-tag dispatch, uniform result records         │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec (bitpress-dense)                              │
//! │     symbol table, encoder, decoder, stream inspection   │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                              │
//! │     BitReader/BitWriter, Method, errors                 │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bitpress_core::prelude::*;
//!
//! let mut writer = BitWriter::new();
//! writer.write_u8(Method::Dense.tag());
//! writer.write_bits(0b0110, 4);
//! let data = writer.into_vec();
//!
//! let mut reader = BitReader::new(&data);
//! assert_eq!(Method::from_tag(reader.read_u8().unwrap()), Method::Dense);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b0110);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;
pub mod method;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{BitpressError, Result};
pub use method::{DENSE_TAG, Method};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitReader, BitWriter};
    pub use crate::error::{BitpressError, Result};
    pub use crate::method::{DENSE_TAG, Method};
}
