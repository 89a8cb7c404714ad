//! Layout error types

use structpack_codec::CodecError;
use thiserror::Error;

/// Errors raised while deriving or applying a layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A record member's type is outside the supported scalar set.
    #[error("unsupported field type: {record}.{field} is {type_name}")]
    UnsupportedFieldType {
        /// Record the member belongs to
        record: &'static str,
        /// Member name
        field: &'static str,
        /// Rust type name of the member
        type_name: &'static str,
    },

    /// Encoding a field failed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// A cache slot holds a plan for a different record type.
    #[error("layout cache slot for {record} holds a plan of another type")]
    CacheSlotMismatch {
        /// Record that was requested
        record: &'static str,
    },
}

impl LayoutError {
    /// Check if this is a buffer overrun during packing.
    pub fn is_buffer_overrun(&self) -> bool {
        matches!(self, LayoutError::Codec(e) if e.is_buffer_overrun())
    }

    /// Check if this is an unsupported member type.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, LayoutError::UnsupportedFieldType { .. })
    }

    /// Check if this is an engine invariant failure.
    pub fn is_internal(&self) -> bool {
        match self {
            LayoutError::Codec(e) => e.is_internal(),
            LayoutError::CacheSlotMismatch { .. } => true,
            LayoutError::UnsupportedFieldType { .. } => false,
        }
    }
}
