//! Error types for Bitpress operations.
//!
//! One error type serves the whole stack: the bit stream, the codec, and
//! the dispatch layer all report through [`BitpressError`]. Every variant
//! carries the values that made validation fail, so a diagnostic message
//! can say what was expected and what the stream actually held.

use thiserror::Error;

/// The main error type for Bitpress operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitpressError {
    /// Empty input where at least one byte is required.
    #[error("Empty input: nothing to code")]
    EmptyInput,

    /// Leading tag of a stream matches no registered method.
    #[error("Unknown method tag {tag:#04x}")]
    UnknownMethod {
        /// The unrecognized tag byte.
        tag: u8,
    },

    /// A decoder was handed a stream tagged for a different method.
    #[error("Method tag mismatch: expected {expected:#04x}, found {found:#04x}")]
    MethodMismatch {
        /// Tag the decoder handles.
        expected: u8,
        /// Tag found at the head of the stream.
        found: u8,
    },

    /// Header claims more symbol-table entries than a byte alphabet holds.
    #[error("Symbol table claims {count} entries; a byte alphabet has at most 256")]
    OversizedTable {
        /// Claimed entry count.
        count: u16,
    },

    /// Stream ended before a length-bearing field was satisfied.
    #[error("Unexpected end of stream: need {needed} bytes, have {available}")]
    UnexpectedEof {
        /// Number of bytes the next read requires.
        needed: usize,
        /// Number of bytes actually remaining.
        available: usize,
    },

    /// Two symbol-table entries share one code.
    #[error("Duplicate code {code:#04x} in symbol table")]
    DuplicateCode {
        /// The repeated code byte.
        code: u8,
    },

    /// Packed body does not account for the remaining bytes exactly.
    #[error("Packed data size mismatch: header implies {expected} bytes, stream has {actual}")]
    PayloadSizeMismatch {
        /// Byte count recomputed from the header fields.
        expected: u64,
        /// Byte count actually remaining after the header.
        actual: u64,
    },

    /// A decoded code has no symbol-table entry.
    #[error("Code {code:#04x} not present in symbol table")]
    InvalidCode {
        /// The unmapped code.
        code: u8,
    },

    /// An output buffer could not be reserved.
    #[error("Failed to allocate {bytes} bytes for the output buffer")]
    AllocationFailed {
        /// Requested buffer size.
        bytes: u64,
    },
}

/// Result type alias for Bitpress operations.
pub type Result<T> = std::result::Result<T, BitpressError>;

impl BitpressError {
    /// Create an unknown method error.
    pub fn unknown_method(tag: u8) -> Self {
        Self::UnknownMethod { tag }
    }

    /// Create a method mismatch error.
    pub fn method_mismatch(expected: u8, found: u8) -> Self {
        Self::MethodMismatch { expected, found }
    }

    /// Create an oversized table error.
    pub fn oversized_table(count: u16) -> Self {
        Self::OversizedTable { count }
    }

    /// Create an unexpected end-of-stream error.
    pub fn unexpected_eof(needed: usize, available: usize) -> Self {
        Self::UnexpectedEof { needed, available }
    }

    /// Create a duplicate code error.
    pub fn duplicate_code(code: u8) -> Self {
        Self::DuplicateCode { code }
    }

    /// Create a packed size mismatch error.
    pub fn payload_size_mismatch(expected: u64, actual: u64) -> Self {
        Self::PayloadSizeMismatch { expected, actual }
    }

    /// Create an invalid code error.
    pub fn invalid_code(code: u8) -> Self {
        Self::InvalidCode { code }
    }

    /// Create an allocation failure error.
    pub fn allocation_failed(bytes: u64) -> Self {
        Self::AllocationFailed { bytes }
    }
}
