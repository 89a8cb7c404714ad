//! Cache Stability Tests
//!
//! Plans are derived once per (record, byte order) and reused.

use crate::common::*;
use std::sync::{Arc, Barrier};
use std::thread;
use structpack::prelude::*;

#[test]
fn repeated_calls_reuse_the_same_plan() {
    let packer = Packer::with_cache(Arc::new(LayoutCache::new()));

    let first = packer.plan::<Ordered>(ByteOrder::Big).unwrap();
    let sample = Ordered { f1: 1, f2: 2, f3: 3 };
    let mut buf = [0u8; 7];
    for _ in 0..10 {
        packer.required_size(&sample, ByteOrder::Big).unwrap();
        packer.pack(&sample, &mut buf, 0, ByteOrder::Big).unwrap();
    }
    let later = packer.plan::<Ordered>(ByteOrder::Big).unwrap();

    assert!(Arc::ptr_eq(&first, &later));
    assert_eq!(packer.cache().len(), 1);
}

#[test]
fn byte_orders_get_separate_but_equal_layouts() {
    let packer = Packer::with_cache(Arc::new(LayoutCache::new()));
    let le = packer.describe::<AllScalars>(ByteOrder::Little).unwrap();
    let be = packer.describe::<AllScalars>(ByteOrder::Big).unwrap();

    assert_eq!(le.size, be.size);
    assert_eq!(le.fields, be.fields);
    assert_ne!(le.byte_order, be.byte_order);
    assert_eq!(packer.cache().len(), 2);
}

#[test]
fn separate_caches_do_not_share_plans() {
    let a = Packer::with_cache(Arc::new(LayoutCache::new()));
    let b = Packer::with_cache(Arc::new(LayoutCache::new()));

    let plan_a = a.plan::<Sample>(ByteOrder::Little).unwrap();
    let plan_b = b.plan::<Sample>(ByteOrder::Little).unwrap();

    assert!(!Arc::ptr_eq(&plan_a, &plan_b));
    assert_eq!(plan_a.describe(), plan_b.describe());
}

#[test]
fn concurrent_packing_on_shared_cache() {
    let cache = Arc::new(LayoutCache::new());
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let packer = Packer::with_cache(Arc::clone(&cache));
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let order = if t % 2 == 0 {
                    ByteOrder::Little
                } else {
                    ByteOrder::Big
                };
                barrier.wait();

                let record = Sample {
                    a: t as u8,
                    b: 0x0102,
                };
                let mut buf = [0u8; 3];
                for _ in 0..1000 {
                    packer.pack(&record, &mut buf, 0, order).unwrap();
                }
                (order, buf)
            })
        })
        .collect();

    for handle in handles {
        let (order, buf) = handle.join().unwrap();
        match order {
            ByteOrder::Little => assert_eq!(&buf[1..], &[0x02, 0x01]),
            ByteOrder::Big => assert_eq!(&buf[1..], &[0x01, 0x02]),
        }
    }

    // One plan per byte order, no matter how many threads raced.
    assert_eq!(cache.len(), 2);
}

#[test]
fn builder_registration_warms_the_cache() {
    let cache = Arc::new(LayoutCache::new());
    let packer = Packer::builder()
        .cache(Arc::clone(&cache))
        .register::<Sample>()
        .register::<Ordered>()
        .build()
        .unwrap();

    assert_eq!(cache.len(), 4);
    for order in ByteOrder::ALL {
        assert!(cache.contains::<Sample>(order));
        assert!(cache.contains::<Ordered>(order));
    }

    // Using a registered record publishes nothing new.
    let mut buf = [0u8; 3];
    packer
        .pack(&Sample { a: 1, b: 2 }, &mut buf, 0, ByteOrder::Big)
        .unwrap();
    assert_eq!(cache.len(), 4);
}

#[test]
fn global_packing_reads_the_record_plan_slots() {
    record! {
        struct Beacon {
            id: u16,
            strength: f32,
        }
    }

    let slots = Beacon::plan_slots().unwrap();
    assert!(slots.get(ByteOrder::Little).is_none());

    let beacon = Beacon {
        id: 0x0102,
        strength: 1.0,
    };
    let mut buf = [0u8; 6];
    structpack::pack(&beacon, &mut buf, 0, ByteOrder::Little).unwrap();
    assert_eq!(&buf[..2], &[0x02, 0x01]);

    let published = slots.get(ByteOrder::Little).unwrap();
    let via_packer = Packer::new().plan::<Beacon>(ByteOrder::Little).unwrap();
    assert!(Arc::ptr_eq(published, &via_packer));
    assert!(slots.get(ByteOrder::Big).is_none());
}

#[test]
fn concurrent_global_packing_shares_one_plan() {
    record! {
        struct Pulse {
            seq: u32,
            level: i8,
        }
    }

    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));
    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let pulse = Pulse {
                    seq: t as u32,
                    level: -1,
                };
                let mut buf = [0u8; 5];
                for _ in 0..1000 {
                    structpack::pack(&pulse, &mut buf, 0, ByteOrder::Big).unwrap();
                }
                buf
            })
        })
        .collect();

    for (t, handle) in handles.into_iter().enumerate() {
        let buf = handle.join().unwrap();
        assert_eq!(&buf[..4], &(t as u32).to_be_bytes());
        assert_eq!(buf[4], 0xFF);
    }

    let plan = Pulse::plan_slots().unwrap().get(ByteOrder::Big).unwrap();
    assert!(Arc::ptr_eq(plan, &Packer::new().plan::<Pulse>(ByteOrder::Big).unwrap()));
}
