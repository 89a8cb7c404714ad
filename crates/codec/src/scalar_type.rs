//! Scalar type enumeration
//!
//! ## The Eleven Scalars
//!
//! | Scalar | Rust type | Width |
//! |--------|-----------|-------|
//! | U8 / I8 | `u8` / `i8` | 1 |
//! | U16 / I16 | `u16` / `i16` | 2 |
//! | U32 / I32 | `u32` / `i32` | 4 |
//! | U64 / I64 | `u64` / `i64` | 8 |
//! | F32 | `f32` | 4 |
//! | F64 | `f64` | 8 |
//! | Char16 | [`Char16`] | 2 |

use crate::Char16;
use serde::{Deserialize, Serialize};
use std::any::TypeId;

/// The closed set of field types a record may expose.
///
/// ## Invariant
///
/// Every variant has exactly one width and one codec. The set is never
/// extended at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    /// Unsigned 8-bit integer
    U8,
    /// Signed 8-bit integer
    I8,
    /// Unsigned 16-bit integer
    U16,
    /// Signed 16-bit integer
    I16,
    /// Unsigned 32-bit integer
    U32,
    /// Signed 32-bit integer
    I32,
    /// Unsigned 64-bit integer
    U64,
    /// Signed 64-bit integer
    I64,
    /// IEEE-754 single precision
    F32,
    /// IEEE-754 double precision
    F64,
    /// One UTF-16 code unit
    Char16,
}

impl ScalarType {
    /// All scalar types, in codec table order
    pub const ALL: [ScalarType; 11] = [
        ScalarType::U8,
        ScalarType::I8,
        ScalarType::U16,
        ScalarType::I16,
        ScalarType::U32,
        ScalarType::I32,
        ScalarType::U64,
        ScalarType::I64,
        ScalarType::F32,
        ScalarType::F64,
        ScalarType::Char16,
    ];

    /// Get all scalar types as a slice
    pub fn all() -> &'static [ScalarType] {
        &Self::ALL
    }

    /// Encoded width in bytes
    pub const fn width(self) -> usize {
        match self {
            ScalarType::U8 | ScalarType::I8 => 1,
            ScalarType::U16 | ScalarType::I16 | ScalarType::Char16 => 2,
            ScalarType::U32 | ScalarType::I32 | ScalarType::F32 => 4,
            ScalarType::U64 | ScalarType::I64 | ScalarType::F64 => 8,
        }
    }

    /// Short name, matching the Rust type where one exists
    pub const fn name(self) -> &'static str {
        match self {
            ScalarType::U8 => "u8",
            ScalarType::I8 => "i8",
            ScalarType::U16 => "u16",
            ScalarType::I16 => "i16",
            ScalarType::U32 => "u32",
            ScalarType::I32 => "i32",
            ScalarType::U64 => "u64",
            ScalarType::I64 => "i64",
            ScalarType::F32 => "f32",
            ScalarType::F64 => "f64",
            ScalarType::Char16 => "char16",
        }
    }

    /// Position in [`ScalarType::ALL`]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Check if this is a floating-point type
    ///
    /// Floats take the platform-relative codec path.
    pub const fn is_float(self) -> bool {
        matches!(self, ScalarType::F32 | ScalarType::F64)
    }

    /// Check if this is a signed type
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            ScalarType::I8
                | ScalarType::I16
                | ScalarType::I32
                | ScalarType::I64
                | ScalarType::F32
                | ScalarType::F64
        )
    }

    /// The `TypeId` of the Rust type carrying this scalar
    pub fn rust_type_id(self) -> TypeId {
        match self {
            ScalarType::U8 => TypeId::of::<u8>(),
            ScalarType::I8 => TypeId::of::<i8>(),
            ScalarType::U16 => TypeId::of::<u16>(),
            ScalarType::I16 => TypeId::of::<i16>(),
            ScalarType::U32 => TypeId::of::<u32>(),
            ScalarType::I32 => TypeId::of::<i32>(),
            ScalarType::U64 => TypeId::of::<u64>(),
            ScalarType::I64 => TypeId::of::<i64>(),
            ScalarType::F32 => TypeId::of::<f32>(),
            ScalarType::F64 => TypeId::of::<f64>(),
            ScalarType::Char16 => TypeId::of::<Char16>(),
        }
    }

    /// Map a Rust type to its scalar type.
    ///
    /// Returns `None` for any type outside the closed set.
    pub fn from_type_id(id: TypeId) -> Option<Self> {
        Self::ALL.iter().copied().find(|ty| ty.rust_type_id() == id)
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
