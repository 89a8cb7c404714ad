//! Codec error types

use crate::ScalarType;
use thiserror::Error;

/// Errors raised while writing encoded scalars.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The destination slice ends before the value's last byte.
    #[error("buffer overrun: writing {width} bytes at offset {offset} into a buffer of {len} bytes")]
    BufferOverrun {
        /// Offset the write started at
        offset: usize,
        /// Width of the value being written
        width: usize,
        /// Length of the destination buffer
        len: usize,
    },

    /// A codec was handed a value of a type other than its own.
    ///
    /// The codec set is closed and resolved when a layout is derived, so
    /// this indicates a defect in the engine rather than a caller error.
    #[error("codec mismatch: {expected} codec received a value of another type")]
    CodecMismatch {
        /// The scalar type the codec encodes
        expected: ScalarType,
    },
}

impl CodecError {
    /// Check if this error is a buffer overrun.
    pub fn is_buffer_overrun(&self) -> bool {
        matches!(self, CodecError::BufferOverrun { .. })
    }

    /// Check if this error is an engine invariant failure.
    pub fn is_internal(&self) -> bool {
        matches!(self, CodecError::CodecMismatch { .. })
    }
}

/// Error returned when a string does not name a byte order.
///
/// Accepted spellings, ignoring case and surrounding whitespace:
/// `little`, `le`, `little-endian`, `big`, `be`, `big-endian`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid byte order '{input}': expected little, le, little-endian, big, be or big-endian")]
pub struct ParseByteOrderError {
    /// The rejected input
    pub input: String,
}
