//! # Bitpress
//!
//! Dense-code compression with method dispatch and failure-safe records.
//!
//! This crate is the user-facing entry point of the bitpress stack. It
//! dispatches on a one-byte method tag and wraps every outcome in a
//! [`Payload`] record:
//!
//! - **Tag dispatch**: the first byte of an encoded stream names the
//!   method that produced it; decompression routes on it.
//! - **Failure-safe records**: [`compress`] and [`decompress`] never
//!   return an error. A rejected input yields an empty record that still
//!   reports the requested or detected method.
//! - **Result variants**: [`try_compress`] and [`try_decompress`] expose
//!   the underlying [`BitpressError`] for callers that want it.
//!
//! ## Example
//!
//! ```rust
//! use bitpress::{compress, decompress, Method};
//!
//! let coded = compress(b"abracadabra", Method::Dense);
//! assert!(!coded.is_failure());
//!
//! let back = decompress(coded.data().unwrap());
//! assert_eq!(back.data(), Some(&b"abracadabra"[..]));
//! ```
//!
//! ## Stream inspection
//!
//! Use [`inspect`] to read an encoded stream's header without decoding
//! its payload.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod payload;

// Re-exports
pub use bitpress_core::{BitpressError, DENSE_TAG, Method, Result};
pub use bitpress_dense::StreamInfo;
pub use payload::Payload;

/// Compress `input` with `method`, returning a failure-safe record.
///
/// A failed call (empty input, unknown method) yields a record with no
/// data that still reports the requested method.
///
/// ```rust
/// use bitpress::{compress, Method};
///
/// let coded = compress(b"", Method::Dense);
/// assert!(coded.is_failure());
/// assert_eq!(coded.method(), Some(Method::Dense));
/// ```
pub fn compress(input: &[u8], method: Method) -> Payload {
    Payload::new(try_compress(input, method).ok(), Some(method))
}

/// Decompress `encoded`, returning a failure-safe record.
///
/// The method is detected from the stream's first byte and retained even
/// when decoding fails, so a corrupted stream still reports what it
/// claimed to be. Only a fully empty input leaves the method unset.
///
/// ```rust
/// use bitpress::{decompress, Method};
///
/// let out = decompress(&[0xDE, 0xAD]);
/// assert!(out.is_failure());
/// assert_eq!(out.method(), Some(Method::Unknown(0xDE)));
/// ```
pub fn decompress(encoded: &[u8]) -> Payload {
    let detected = encoded.first().map(|&tag| Method::from_tag(tag));
    Payload::new(try_decompress(encoded).ok(), detected)
}

/// Compress `input` with `method`.
///
/// # Errors
///
/// Returns an error if the input is empty or the method is not a known
/// compressor.
///
/// ```rust
/// use bitpress::{try_compress, try_decompress, Method};
///
/// let coded = try_compress(b"dense codes", Method::Dense)?;
/// let back = try_decompress(&coded)?;
/// assert_eq!(back, b"dense codes");
/// # Ok::<(), bitpress::BitpressError>(())
/// ```
pub fn try_compress(input: &[u8], method: Method) -> Result<Vec<u8>> {
    match method {
        Method::Dense => bitpress_dense::encode(input),
        Method::Unknown(tag) => Err(BitpressError::unknown_method(tag)),
    }
}

/// Decompress an encoded stream, dispatching on its tag byte.
///
/// # Errors
///
/// Returns an error if the stream is empty, carries an unrecognized tag,
/// or fails the format's validation during decoding.
pub fn try_decompress(encoded: &[u8]) -> Result<Vec<u8>> {
    let Some(&tag) = encoded.first() else {
        return Err(BitpressError::EmptyInput);
    };
    match Method::from_tag(tag) {
        Method::Dense => bitpress_dense::decode(encoded),
        Method::Unknown(tag) => Err(BitpressError::unknown_method(tag)),
    }
}

/// Read an encoded stream's header without decoding its payload.
///
/// # Errors
///
/// Returns an error if the stream is empty, carries an unrecognized tag,
/// or its header fails validation.
///
/// ```rust
/// use bitpress::{compress, inspect, Method};
///
/// let coded = compress(b"abracadabra", Method::Dense);
/// let info = inspect(coded.data().unwrap())?;
/// assert_eq!(info.entries, 5);
/// assert_eq!(info.original_len, 11);
/// # Ok::<(), bitpress::BitpressError>(())
/// ```
pub fn inspect(encoded: &[u8]) -> Result<StreamInfo> {
    let Some(&tag) = encoded.first() else {
        return Err(BitpressError::EmptyInput);
    };
    match Method::from_tag(tag) {
        Method::Dense => bitpress_dense::inspect(encoded),
        Method::Unknown(tag) => Err(BitpressError::unknown_method(tag)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_roundtrip() {
        let original = b"the quick brown fox jumps over the lazy dog";
        let coded = try_compress(original, Method::Dense).unwrap();
        assert_eq!(coded[0], DENSE_TAG);
        let back = try_decompress(&coded).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_try_compress_unknown_method() {
        let err = try_compress(b"data", Method::Unknown(0x7F)).unwrap_err();
        assert_eq!(err, BitpressError::unknown_method(0x7F));
    }

    #[test]
    fn test_try_decompress_empty() {
        let err = try_decompress(&[]).unwrap_err();
        assert_eq!(err, BitpressError::EmptyInput);
    }

    #[test]
    fn test_try_decompress_unknown_tag() {
        let err = try_decompress(&[0x00, 0x01, 0x02]).unwrap_err();
        assert_eq!(err, BitpressError::unknown_method(0x00));
    }

    #[test]
    fn test_inspect_unknown_tag() {
        let err = inspect(&[0xFF]).unwrap_err();
        assert_eq!(err, BitpressError::unknown_method(0xFF));
    }
}
