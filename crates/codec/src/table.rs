//! Codec table
//!
//! Type-erased entry points for the [`Scalar`] impls, one per
//! [`ScalarType`]. A layout resolves each field's entry once, when the layout
//! is derived; packing then calls the stored function pointer directly.

use crate::{ByteOrder, Char16, CodecError, Scalar, ScalarType};
use std::any::Any;

/// Signature of a type-erased codec write.
///
/// Arguments are the value, the requested order, the destination buffer and
/// the offset to write at. Returns the number of bytes written.
pub type WriteFn = fn(&dyn Any, ByteOrder, &mut [u8], usize) -> Result<usize, CodecError>;

/// Codec table entry for one scalar type.
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    scalar_type: ScalarType,
    width: usize,
    write: WriteFn,
}

impl Codec {
    /// The scalar type this codec encodes
    #[inline]
    pub fn scalar_type(&self) -> ScalarType {
        self.scalar_type
    }

    /// Encoded width in bytes
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Encode `value` into `buf` at `at`.
    ///
    /// `value` must be the Rust type of [`Codec::scalar_type`]; anything else
    /// yields [`CodecError::CodecMismatch`].
    #[inline]
    pub fn write(
        &self,
        value: &dyn Any,
        order: ByteOrder,
        buf: &mut [u8],
        at: usize,
    ) -> Result<usize, CodecError> {
        (self.write)(value, order, buf, at)
    }
}

fn write_erased<S: Scalar>(
    value: &dyn Any,
    order: ByteOrder,
    buf: &mut [u8],
    at: usize,
) -> Result<usize, CodecError> {
    let value = value
        .downcast_ref::<S>()
        .ok_or(CodecError::CodecMismatch { expected: S::TYPE })?;
    value.write(order, buf, at)
}

macro_rules! codec_table {
    ($($ty:ty),* $(,)?) => {
        [$(
            Codec {
                scalar_type: <$ty as Scalar>::TYPE,
                width: <$ty as Scalar>::WIDTH,
                write: write_erased::<$ty>,
            },
        )*]
    };
}

// Same order as ScalarType::ALL.
static CODECS: [Codec; 11] = codec_table![u8, i8, u16, i16, u32, i32, u64, i64, f32, f64, Char16];

/// Look up the codec for a scalar type.
///
/// Total over the closed set.
#[inline]
pub fn codec_for(scalar_type: ScalarType) -> &'static Codec {
    &CODECS[scalar_type.index()]
}
