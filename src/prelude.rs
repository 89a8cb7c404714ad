//! Convenient imports for structpack.
//!
//! ```
//! use structpack::prelude::*;
//!
//! record! {
//!     struct Point { x: i32, y: i32 }
//! }
//!
//! let size = Packer::new().required_size(&Point { x: 1, y: 2 }, ByteOrder::Big)?;
//! assert_eq!(size, 8);
//! # Ok::<(), structpack::Error>(())
//! ```

// Main entry point
pub use crate::packer::{Packer, PackerBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Records
pub use structpack_layout::{record, LayoutCache, Member, Record};

// Scalars
pub use structpack_codec::{ByteOrder, Char16};
