//! Unified error types for structpack.
//!
//! Wraps the codec and layout errors in one enum so callers match on a
//! single type.

use structpack_codec::CodecError;
use structpack_layout::LayoutError;
use thiserror::Error;

/// All structpack errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A record member's type is outside the supported scalar set
    #[error("unsupported field type: {record}.{field} is {type_name}")]
    UnsupportedFieldType {
        /// Record the member belongs to
        record: &'static str,
        /// Member name
        field: &'static str,
        /// Rust type name of the member
        type_name: &'static str,
    },

    /// The buffer ended before the record's last byte
    #[error("buffer overrun: writing {width} bytes at offset {offset} into a buffer of {len} bytes")]
    BufferOverrun {
        /// Offset of the failing field write
        offset: usize,
        /// Width of the failing field
        width: usize,
        /// Buffer length
        len: usize,
    },

    /// Internal error (bug or invariant violation)
    ///
    /// Carries the layout or codec error that detected the violation.
    #[error("internal error: {0}")]
    Internal(#[source] LayoutError),
}

/// Result type for structpack operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a buffer overrun.
    pub fn is_buffer_overrun(&self) -> bool {
        matches!(self, Error::BufferOverrun { .. })
    }

    /// Check if this is an unsupported member type.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, Error::UnsupportedFieldType { .. })
    }

    /// Check if this is a serious/unrecoverable error.
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::Internal(_))
    }
}

impl From<CodecError> for Error {
    fn from(e: CodecError) -> Self {
        match e {
            CodecError::BufferOverrun { offset, width, len } => {
                Error::BufferOverrun { offset, width, len }
            }
            e @ CodecError::CodecMismatch { .. } => Error::Internal(LayoutError::Codec(e)),
        }
    }
}

impl From<LayoutError> for Error {
    fn from(e: LayoutError) -> Self {
        match e {
            LayoutError::UnsupportedFieldType {
                record,
                field,
                type_name,
            } => Error::UnsupportedFieldType {
                record,
                field,
                type_name,
            },
            LayoutError::Codec(e) => e.into(),
            e @ LayoutError::CacheSlotMismatch { .. } => Error::Internal(e),
        }
    }
}
