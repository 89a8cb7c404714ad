//! Reference Encoding Tests
//!
//! Every scalar type, packed at its minimum and maximum under both byte
//! orders, must match the bytes produced by the `byteorder` crate.

use crate::common::*;
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use proptest::prelude::*;
use std::fmt::Debug;
use structpack::prelude::*;
use structpack::Scalar;

/// A record with a single member of type `S`.
struct Single<S> {
    value: S,
}

impl<S: Scalar> Record for Single<S> {
    fn members() -> Vec<Member<Self>> {
        vec![Member::new::<S>("value", |r: &Self| &r.value)]
    }
}

fn assert_packs_to<S: Scalar + Debug>(value: S, order: ByteOrder, expected: &[u8]) {
    let single = Single { value };
    let size = structpack::required_size(&single, order).unwrap();
    assert_eq!(size, expected.len(), "size of {:?} ({})", value, order);

    let mut buf = vec![0u8; size];
    let written = structpack::pack(&single, &mut buf, 0, order).unwrap();
    assert_eq!(written, size);
    assert_eq!(buf, expected, "bytes of {:?} ({})", value, order);
}

macro_rules! reference_case {
    ($name:ident, $ty:ty, $write:ident) => {
        #[test]
        fn $name() {
            for value in [<$ty>::MIN, <$ty>::MAX] {
                let mut le = Vec::new();
                le.$write::<LittleEndian>(value).unwrap();
                let mut be = Vec::new();
                be.$write::<BigEndian>(value).unwrap();

                assert_packs_to(value, ByteOrder::Little, &le);
                assert_packs_to(value, ByteOrder::Big, &be);
            }
        }
    };
}

reference_case!(u16_boundaries_match_reference, u16, write_u16);
reference_case!(i16_boundaries_match_reference, i16, write_i16);
reference_case!(u32_boundaries_match_reference, u32, write_u32);
reference_case!(i32_boundaries_match_reference, i32, write_i32);
reference_case!(u64_boundaries_match_reference, u64, write_u64);
reference_case!(i64_boundaries_match_reference, i64, write_i64);
reference_case!(f32_boundaries_match_reference, f32, write_f32);
reference_case!(f64_boundaries_match_reference, f64, write_f64);

#[test]
fn single_byte_boundaries_match_reference() {
    for value in [u8::MIN, u8::MAX] {
        let mut expected = Vec::new();
        expected.write_u8(value).unwrap();
        assert_packs_to(value, ByteOrder::Little, &expected);
        assert_packs_to(value, ByteOrder::Big, &expected);
    }
    for value in [i8::MIN, i8::MAX] {
        let mut expected = Vec::new();
        expected.write_i8(value).unwrap();
        assert_packs_to(value, ByteOrder::Little, &expected);
        assert_packs_to(value, ByteOrder::Big, &expected);
    }
}

#[test]
fn char16_boundaries_match_reference() {
    for value in [Char16::MIN, Char16::MAX] {
        let mut le = Vec::new();
        le.write_u16::<LittleEndian>(value.get()).unwrap();
        let mut be = Vec::new();
        be.write_u16::<BigEndian>(value.get()).unwrap();

        assert_packs_to(value, ByteOrder::Little, &le);
        assert_packs_to(value, ByteOrder::Big, &be);
    }
}

#[test]
fn float_special_values_match_reference() {
    for value in [0.0f64, -0.0, f64::INFINITY, f64::NEG_INFINITY, f64::EPSILON] {
        let mut le = Vec::new();
        le.write_f64::<LittleEndian>(value).unwrap();
        let mut be = Vec::new();
        be.write_f64::<BigEndian>(value).unwrap();

        assert_packs_to(value, ByteOrder::Little, &le);
        assert_packs_to(value, ByteOrder::Big, &be);
    }
}

/// Expected image of `AllScalars` built from std's fixed-order converters.
fn expected_image(r: &AllScalars, order: ByteOrder) -> Vec<u8> {
    let mut out = Vec::with_capacity(ALL_SCALARS_SIZE);
    match order {
        ByteOrder::Little => {
            out.extend_from_slice(&r.a.to_le_bytes());
            out.extend_from_slice(&r.b.to_le_bytes());
            out.extend_from_slice(&r.c.to_le_bytes());
            out.extend_from_slice(&r.d.to_le_bytes());
            out.extend_from_slice(&r.e.to_le_bytes());
            out.extend_from_slice(&r.f.to_le_bytes());
            out.extend_from_slice(&r.g.to_le_bytes());
            out.extend_from_slice(&r.h.to_le_bytes());
            out.extend_from_slice(&r.i.to_le_bytes());
            out.extend_from_slice(&r.j.to_le_bytes());
            out.extend_from_slice(&r.k.get().to_le_bytes());
        }
        ByteOrder::Big => {
            out.extend_from_slice(&r.a.to_be_bytes());
            out.extend_from_slice(&r.b.to_be_bytes());
            out.extend_from_slice(&r.c.to_be_bytes());
            out.extend_from_slice(&r.d.to_be_bytes());
            out.extend_from_slice(&r.e.to_be_bytes());
            out.extend_from_slice(&r.f.to_be_bytes());
            out.extend_from_slice(&r.g.to_be_bytes());
            out.extend_from_slice(&r.h.to_be_bytes());
            out.extend_from_slice(&r.i.to_be_bytes());
            out.extend_from_slice(&r.j.to_be_bytes());
            out.extend_from_slice(&r.k.get().to_be_bytes());
        }
    }
    out
}

fn pack_to_vec(record: &AllScalars, order: ByteOrder) -> Vec<u8> {
    let mut buf = vec![0u8; ALL_SCALARS_SIZE];
    structpack::pack(record, &mut buf, 0, order).unwrap();
    buf
}

#[test]
fn all_scalars_boundaries_match_reference() {
    for record in [AllScalars::minimum(), AllScalars::maximum()] {
        for order in ByteOrder::ALL {
            assert_eq!(pack_to_vec(&record, order), expected_image(&record, order));
        }
    }
}

fn all_scalars() -> impl Strategy<Value = AllScalars> {
    (
        (any::<u8>(), any::<i8>(), any::<u16>(), any::<i16>()),
        (any::<u32>(), any::<i32>(), any::<u64>(), any::<i64>()),
        (any::<u32>(), any::<u64>(), any::<u16>()),
    )
        .prop_map(|((a, b, c, d), (e, f, g, h), (i, j, k))| AllScalars {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
            i: f32::from_bits(i),
            j: f64::from_bits(j),
            k: Char16(k),
        })
}

proptest! {
    #[test]
    fn prop_all_scalars_match_reference(record in all_scalars()) {
        for order in ByteOrder::ALL {
            prop_assert_eq!(pack_to_vec(&record, order), expected_image(&record, order));
        }
    }
}
