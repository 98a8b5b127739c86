//! Failure-safe result records for compression calls.
//!
//! This module defines the `Payload` struct returned by [`crate::compress`]
//! and [`crate::decompress`]. A `Payload` never panics and never carries an
//! error value: a failed call yields a record with no data that still
//! remembers which method was requested or detected.

use bitpress_core::Method;

/// The outcome of a compression or decompression call.
///
/// On success the record holds the produced bytes and the method that
/// produced them. On failure the data is absent but the method field is
/// retained, so callers can report what was attempted even when the input
/// was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    /// The produced bytes, or `None` if the call failed.
    pub(crate) data: Option<Vec<u8>>,
    /// The requested or detected method, or `None` if the input carried
    /// no method tag at all (an empty stream).
    pub(crate) method: Option<Method>,
}

impl Payload {
    /// Create a new record.
    pub(crate) fn new(data: Option<Vec<u8>>, method: Option<Method>) -> Self {
        Self { data, method }
    }

    /// Borrow the produced bytes, or `None` if the call failed.
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    /// Consume the record and take the produced bytes.
    pub fn into_data(self) -> Option<Vec<u8>> {
        self.data
    }

    /// Length of the produced bytes; zero when the call failed.
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }

    /// Check whether the record holds no bytes.
    ///
    /// True both for a failed call and for a successful call that
    /// legitimately produced empty output.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The method that was requested (compression) or detected from the
    /// stream's tag byte (decompression).
    pub fn method(&self) -> Option<Method> {
        self.method
    }

    /// Check whether the call failed.
    pub fn is_failure(&self) -> bool {
        self.data.is_none()
    }
}

impl std::fmt::Display for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.data, self.method) {
            (Some(data), Some(method)) => write!(f, "{} ({} bytes)", method, data.len()),
            (Some(data), None) => write!(f, "untagged ({} bytes)", data.len()),
            (None, Some(method)) => write!(f, "failed ({})", method),
            (None, None) => write!(f, "failed (no method)"),
        }
    }
}
