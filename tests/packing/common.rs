//! Shared record fixtures.

use structpack::prelude::*;

record! {
    /// One member of every supported scalar type.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct AllScalars {
        pub a: u8,
        pub b: i8,
        pub c: u16,
        pub d: i16,
        pub e: u32,
        pub f: i32,
        pub g: u64,
        pub h: i64,
        pub i: f32,
        pub j: f64,
        pub k: Char16,
    }
}

record! {
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Sample {
        pub a: u8,
        pub b: i16,
    }
}

record! {
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Ordered {
        pub f1: u8,
        pub f2: u32,
        pub f3: u16,
    }
}

impl AllScalars {
    pub fn minimum() -> Self {
        Self {
            a: u8::MIN,
            b: i8::MIN,
            c: u16::MIN,
            d: i16::MIN,
            e: u32::MIN,
            f: i32::MIN,
            g: u64::MIN,
            h: i64::MIN,
            i: f32::MIN,
            j: f64::MIN,
            k: Char16::MIN,
        }
    }

    pub fn maximum() -> Self {
        Self {
            a: u8::MAX,
            b: i8::MAX,
            c: u16::MAX,
            d: i16::MAX,
            e: u32::MAX,
            f: i32::MAX,
            g: u64::MAX,
            h: i64::MAX,
            i: f32::MAX,
            j: f64::MAX,
            k: Char16::MAX,
        }
    }
}

/// Total packed size of [`AllScalars`].
pub const ALL_SCALARS_SIZE: usize = 1 + 1 + 2 + 2 + 4 + 4 + 8 + 8 + 4 + 8 + 2;
