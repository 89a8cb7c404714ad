//! Scalar codecs
//!
//! One [`Scalar`] impl per supported type. Integers go through
//! [`extract`], which pulls bytes out most-significant first with
//! shift/mask and reverses them for little-endian output. Floats start from
//! the native bit-pattern bytes instead.

use crate::{ByteOrder, CodecError, ScalarType};
use std::any::Any;
use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// A value that has a fixed-width encoding.
///
/// Implemented for exactly the types listed in [`ScalarType`]; the trait is
/// sealed so the set stays closed.
pub trait Scalar: Copy + Any + Send + Sync + sealed::Sealed {
    /// The scalar type this Rust type carries
    const TYPE: ScalarType;

    /// Encoded width in bytes
    const WIDTH: usize;

    /// Encoded bytes, always `WIDTH` long
    type Bytes: AsRef<[u8]> + Copy + PartialEq + fmt::Debug;

    /// Encode in the requested order.
    fn encode(self, order: ByteOrder) -> Self::Bytes;

    /// Encode into `buf` starting at `at`.
    ///
    /// Returns the number of bytes written. Fails with
    /// [`CodecError::BufferOverrun`] when `buf` cannot hold the value at `at`;
    /// nothing is written in that case.
    #[inline]
    fn write(self, order: ByteOrder, buf: &mut [u8], at: usize) -> Result<usize, CodecError> {
        let len = buf.len();
        let overrun = || CodecError::BufferOverrun {
            offset: at,
            width: Self::WIDTH,
            len,
        };
        let end = at.checked_add(Self::WIDTH).ok_or_else(overrun)?;
        let dst = buf.get_mut(at..end).ok_or_else(overrun)?;
        dst.copy_from_slice(self.encode(order).as_ref());
        Ok(Self::WIDTH)
    }
}

/// Pull `N` bytes out of `bits`, most-significant first.
///
/// The result is big-endian by construction and reversed when little-endian
/// output is requested, so it does not depend on the platform order.
#[inline(always)]
fn extract<const N: usize>(bits: u64, order: ByteOrder) -> [u8; N] {
    let mut out = [0u8; N];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = ((bits >> (8 * (N - 1 - i))) & 0xff) as u8;
    }
    if order.is_little() {
        out.reverse();
    }
    out
}

/// Reverse native bytes iff the platform order differs from `order`.
#[inline(always)]
fn orient<const N: usize>(mut native: [u8; N], order: ByteOrder) -> [u8; N] {
    if order.is_little() != ByteOrder::native().is_little() {
        native.reverse();
    }
    native
}

macro_rules! impl_byte_scalar {
    ($($ty:ty => $scalar:ident;)*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                const TYPE: ScalarType = ScalarType::$scalar;
                const WIDTH: usize = 1;
                type Bytes = [u8; 1];

                #[inline]
                fn encode(self, _order: ByteOrder) -> [u8; 1] {
                    [self as u8]
                }
            }
        )*
    };
}

macro_rules! impl_int_scalar {
    ($($ty:ty => $scalar:ident, $unsigned:ty, $width:literal;)*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                const TYPE: ScalarType = ScalarType::$scalar;
                const WIDTH: usize = $width;
                type Bytes = [u8; $width];

                #[inline]
                fn encode(self, order: ByteOrder) -> [u8; $width] {
                    // Reinterpret as unsigned of the same width first so sign
                    // extension never leaks into the shifted bits.
                    extract::<$width>(self as $unsigned as u64, order)
                }
            }
        )*
    };
}

macro_rules! impl_float_scalar {
    ($($ty:ty => $scalar:ident, $width:literal;)*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                const TYPE: ScalarType = ScalarType::$scalar;
                const WIDTH: usize = $width;
                type Bytes = [u8; $width];

                #[inline]
                fn encode(self, order: ByteOrder) -> [u8; $width] {
                    orient(self.to_ne_bytes(), order)
                }
            }
        )*
    };
}

impl_byte_scalar! {
    u8 => U8;
    i8 => I8;
}

impl_int_scalar! {
    u16 => U16, u16, 2;
    i16 => I16, u16, 2;
    u32 => U32, u32, 4;
    i32 => I32, u32, 4;
    u64 => U64, u64, 8;
    i64 => I64, u64, 8;
}

impl_float_scalar! {
    f32 => F32, 4;
    f64 => F64, 8;
}

/// One UTF-16 code unit.
///
/// Encoded exactly like a `u16`. Rust's `char` is a full Unicode scalar
/// value and is not a supported field type; convert with
/// [`Char16::try_from`], which accepts Basic Multilingual Plane characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Char16(pub u16);

impl Char16 {
    /// Smallest code unit
    pub const MIN: Char16 = Char16(u16::MIN);
    /// Largest code unit
    pub const MAX: Char16 = Char16(u16::MAX);

    /// The raw code unit
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl From<u16> for Char16 {
    fn from(unit: u16) -> Self {
        Char16(unit)
    }
}

impl From<Char16> for u16 {
    fn from(c: Char16) -> Self {
        c.0
    }
}

impl TryFrom<char> for Char16 {
    type Error = char;

    /// Fails (returning the input) for characters outside the BMP.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        u16::try_from(u32::from(c)).map(Char16).map_err(|_| c)
    }
}

impl sealed::Sealed for Char16 {}

impl Scalar for Char16 {
    const TYPE: ScalarType = ScalarType::Char16;
    const WIDTH: usize = 2;
    type Bytes = [u8; 2];

    #[inline]
    fn encode(self, order: ByteOrder) -> [u8; 2] {
        extract::<2>(self.0 as u64, order)
    }
}
