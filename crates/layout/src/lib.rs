//! Record layouts for structpack
//!
//! This crate turns a record type's ordered member list into a
//! [`LayoutPlan`]: one [`FieldDescriptor`] per field, each bound to its
//! codec, plus the total packed size. Plans are derived once per
//! `(record type, byte order)` and shared through a [`LayoutCache`].
//!
//! - [`Record`] / [`record!`]: the ordered member enumeration
//! - [`derive_layout`]: member list to plan
//! - [`LayoutCache`]: thread-safe, append-only plan cache
//! - [`LayoutPlan::pack`]: write a record's bytes into a buffer
//!
//! ## Examples
//!
//! ```
//! use structpack_layout::{record, ByteOrder, LayoutCache};
//!
//! record! {
//!     pub struct Sample {
//!         pub a: u8,
//!         pub b: i16,
//!     }
//! }
//!
//! let cache = LayoutCache::new();
//! let plan = cache.plan::<Sample>(ByteOrder::Little).unwrap();
//! assert_eq!(plan.required_size(), 3);
//!
//! let mut buf = [0u8; 3];
//! plan.pack(&Sample { a: 0x01, b: 0x0203 }, &mut buf, 0).unwrap();
//! assert_eq!(buf, [0x01, 0x03, 0x02]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod cache;
mod error;
mod plan;
mod record;

pub use cache::LayoutCache;
#[doc(hidden)]
pub use cache::PlanSlots;
pub use error::LayoutError;
pub use plan::{derive_layout, FieldDescriptor, FieldLayout, LayoutDescription, LayoutPlan};
pub use record::{Member, Record};

pub use structpack_codec::{ByteOrder, Char16, Scalar, ScalarType};
