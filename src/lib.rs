//! # structpack
//!
//! Packs the scalar fields of a record into a contiguous byte buffer, in
//! declaration order, under an explicitly chosen byte order. Layouts are
//! fixed-size with no padding.
//!
//! ## Quick Start
//!
//! ```
//! use structpack::prelude::*;
//!
//! record! {
//!     pub struct Sample {
//!         pub a: u8,
//!         pub b: i16,
//!     }
//! }
//!
//! let sample = Sample { a: 0x01, b: 0x0203 };
//! let size = structpack::required_size(&sample, ByteOrder::Little)?;
//!
//! let mut buf = vec![0u8; size];
//! structpack::pack(&sample, &mut buf, 0, ByteOrder::Little)?;
//! assert_eq!(buf, [0x01, 0x03, 0x02]);
//! # Ok::<(), structpack::Error>(())
//! ```
//!
//! ## Layers
//!
//! - [`structpack_codec`]: scalar types and their fixed-width codecs
//! - [`structpack_layout`]: member enumeration, plans and the plan cache
//! - this crate: [`Packer`], free functions and the unified [`Error`]
//!
//! ## Supported Field Types
//!
//! `u8 i8 u16 i16 u32 i32 u64 i64 f32 f64` and [`Char16`]. Any other member
//! type is rejected when the record's layout is first derived.

#![warn(missing_docs)]

mod error;
mod packer;

pub mod prelude;

pub use error::{Error, Result};
pub use packer::{Packer, PackerBuilder};

pub use structpack_codec::{ByteOrder, Char16, CodecError, Scalar, ScalarType};
pub use structpack_layout::{
    record, FieldDescriptor, FieldLayout, LayoutCache, LayoutDescription, LayoutError, LayoutPlan,
    Member, Record,
};

/// Number of bytes [`pack`] writes for `record` under `order`.
///
/// Uses the process-wide layout cache. After the first call for a
/// `record!` type and order, the lookup takes no lock.
pub fn required_size<T: Record>(_record: &T, order: ByteOrder) -> Result<usize> {
    Ok(LayoutCache::global().with_plan::<T, _>(order, |plan| plan.required_size())?)
}

/// Write `record` into `buf` at `offset` under `order`.
///
/// Writes exactly [`required_size`] bytes into `[offset, offset + size)` and
/// returns that count. Uses the process-wide layout cache.
pub fn pack<T: Record>(record: &T, buf: &mut [u8], offset: usize, order: ByteOrder) -> Result<usize> {
    Ok(LayoutCache::global().with_plan::<T, _>(order, |plan| plan.pack(record, buf, offset))??)
}
