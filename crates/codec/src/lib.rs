//! Field codecs for structpack
//!
//! This crate owns the closed set of scalar types a record field may have
//! and the codec that turns one value of each type into its fixed-width,
//! byte-order-correct bytes.
//!
//! ## Width Classes
//!
//! | Types | Width | Rule |
//! |-------|-------|------|
//! | `u8`, `i8` | 1 | bit pattern, order ignored |
//! | `u16`, `i16`, `Char16` | 2 | shift/mask, canonical big-endian |
//! | `u32`, `i32` | 4 | shift/mask, canonical big-endian |
//! | `u64`, `i64` | 8 | shift/mask, canonical big-endian |
//! | `f32`, `f64` | 4 / 8 | native bit pattern, reversed relative to platform order |
//!
//! Integer codecs extract bytes most-significant first and reverse the
//! sequence when little-endian output is requested, so they never depend
//! on the platform. Float codecs start from the platform's native bytes and
//! reverse only when the platform order differs from the requested one.
//!
//! ## Examples
//!
//! ```
//! use structpack_codec::{ByteOrder, Scalar};
//!
//! assert_eq!(0x0203u16.encode(ByteOrder::Big), [0x02, 0x03]);
//! assert_eq!(0x0203u16.encode(ByteOrder::Little), [0x03, 0x02]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod byte_order;
mod error;
mod scalar;
mod scalar_type;
mod table;

pub use byte_order::ByteOrder;
pub use error::{CodecError, ParseByteOrderError};
pub use scalar::{Char16, Scalar};
pub use scalar_type::ScalarType;
pub use table::{codec_for, Codec, WriteFn};
