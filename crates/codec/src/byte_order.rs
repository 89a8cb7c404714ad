//! Byte order selector
//!
//! The order is chosen per call; it is never a property of a record type.

use crate::error::ParseByteOrderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Arrangement of the bytes of a multi-byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Least-significant byte first.
    Little,
    /// Most-significant byte first.
    Big,
}

impl ByteOrder {
    /// Both orders, little first.
    pub const ALL: [ByteOrder; 2] = [ByteOrder::Little, ByteOrder::Big];

    /// The byte order of the target platform.
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        }
    }

    /// Build from a `little_endian` flag.
    pub const fn from_little_endian(little_endian: bool) -> Self {
        if little_endian {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        }
    }

    /// True for [`ByteOrder::Little`].
    #[inline]
    pub const fn is_little(self) -> bool {
        matches!(self, ByteOrder::Little)
    }

    /// True when this order matches the platform order.
    #[inline]
    pub const fn is_native(self) -> bool {
        self.is_little() == Self::native().is_little()
    }

    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            ByteOrder::Little => "little",
            ByteOrder::Big => "big",
        }
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        ByteOrder::Little
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ByteOrder {
    type Err = ParseByteOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "little" | "le" | "little-endian" => Ok(ByteOrder::Little),
            "big" | "be" | "big-endian" => Ok(ByteOrder::Big),
            _ => Err(ParseByteOrderError {
                input: s.to_string(),
            }),
        }
    }
}
