//! Layout plan cache
//!
//! Append-only map from `(record TypeId, ByteOrder)` to a published
//! [`LayoutPlan`].
//!
//! # Design
//!
//! - DashMap: sharded slot lookup, FxHash keys
//! - OnceCell per slot: a plan is built at most once, even when many threads
//!   ask for the same key at the same time
//! - The shard lock is held only to insert an empty slot, never while a
//!   plan is derived, so deriving one record never blocks another
//! - Published plans are immutable and handed out as `Arc`
//! - The process-wide cache keeps plans of `record!` types in per-type
//!   [`PlanSlots`] statics. Once published, reading them is a single atomic
//!   load: no shard lock, no refcount traffic
//!
//! Failed derivations leave the slot empty. Derivation is deterministic, so
//! asking again fails the same way.

use crate::{derive_layout, LayoutError, LayoutPlan, Record};
use dashmap::DashMap;
use once_cell::sync::{Lazy, OnceCell};
use rustc_hash::FxHasher;
use std::any::{Any, TypeId};
use std::fmt;
use std::hash::BuildHasherDefault;
use std::ops::Deref;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use structpack_codec::ByteOrder;
use tracing::trace;

type PlanKey = (TypeId, ByteOrder);
type PlanCell<T> = OnceCell<Arc<LayoutPlan<T>>>;
type Slot = Arc<dyn Any + Send + Sync>;

static GLOBAL: Lazy<Arc<LayoutCache>> = Lazy::new(|| {
    Arc::new(LayoutCache {
        process_wide: true,
        ..LayoutCache::new()
    })
});

/// Per-record plan cells backing the process-wide cache.
///
/// [`record!`](crate::record) declares one of these as a `static` for every
/// record type and returns it from [`Record::plan_slots`].
#[doc(hidden)]
pub struct PlanSlots<T> {
    little: PlanCell<T>,
    big: PlanCell<T>,
}

impl<T> PlanSlots<T> {
    /// Empty cells, usable in a `static`
    pub const fn new() -> Self {
        Self {
            little: OnceCell::new(),
            big: OnceCell::new(),
        }
    }

    /// The published plan for `order`, if any
    pub fn get(&self, order: ByteOrder) -> Option<&Arc<LayoutPlan<T>>> {
        self.cell(order).get()
    }

    fn cell(&self, order: ByteOrder) -> &PlanCell<T> {
        match order {
            ByteOrder::Little => &self.little,
            ByteOrder::Big => &self.big,
        }
    }
}

impl<T> Default for PlanSlots<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A plan cell borrowed from a static or held from the map.
enum CellRef<T: 'static> {
    Static(&'static PlanCell<T>),
    Shared(Arc<PlanCell<T>>),
}

impl<T: 'static> Deref for CellRef<T> {
    type Target = PlanCell<T>;

    fn deref(&self) -> &PlanCell<T> {
        match self {
            CellRef::Static(cell) => cell,
            CellRef::Shared(cell) => cell,
        }
    }
}

/// Thread-safe cache of layout plans.
///
/// # Example
///
/// ```
/// use structpack_layout::{record, ByteOrder, LayoutCache};
/// use std::sync::Arc;
///
/// record! {
///     struct Point { x: i32, y: i32 }
/// }
///
/// let cache = LayoutCache::new();
/// let first = cache.plan::<Point>(ByteOrder::Big).unwrap();
/// let again = cache.plan::<Point>(ByteOrder::Big).unwrap();
/// assert!(Arc::ptr_eq(&first, &again));
/// assert_eq!(cache.len(), 1);
/// ```
pub struct LayoutCache {
    slots: DashMap<PlanKey, Slot, BuildHasherDefault<FxHasher>>,
    published: AtomicUsize,
    process_wide: bool,
}

impl LayoutCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            slots: DashMap::with_hasher(BuildHasherDefault::default()),
            published: AtomicUsize::new(0),
            process_wide: false,
        }
    }

    /// The process-wide cache
    pub fn global() -> &'static Arc<LayoutCache> {
        &GLOBAL
    }

    /// Get the plan for `T` under `order`, deriving it on first use.
    pub fn plan<T: Record>(&self, order: ByteOrder) -> Result<Arc<LayoutPlan<T>>, LayoutError> {
        let cell = self.cell::<T>(order)?;
        if let Some(plan) = cell.get() {
            trace!(record = T::record_name(), order = %order, "layout cache hit");
            return Ok(Arc::clone(plan));
        }
        Ok(Arc::clone(self.publish(&cell, order)?))
    }

    /// Run `f` against the plan for `T` under `order`, deriving it on first use.
    ///
    /// The plan is borrowed, not cloned. On the process-wide cache a
    /// `record!` type is served from its [`PlanSlots`] without touching the
    /// map.
    pub fn with_plan<T: Record, R>(
        &self,
        order: ByteOrder,
        f: impl FnOnce(&LayoutPlan<T>) -> R,
    ) -> Result<R, LayoutError> {
        let cell = self.cell::<T>(order)?;
        let plan = self.publish(&cell, order)?;
        Ok(f(plan))
    }

    /// Derive and publish the plans of `T` for both byte orders.
    pub fn register<T: Record>(&self) -> Result<(), LayoutError> {
        for order in ByteOrder::ALL {
            self.plan::<T>(order)?;
        }
        Ok(())
    }

    /// Check whether a plan for `T` under `order` has been published
    pub fn contains<T: Record>(&self, order: ByteOrder) -> bool {
        if let Some(slots) = self.static_slots::<T>() {
            return slots.get(order).is_some();
        }
        self.slots
            .get(&(TypeId::of::<T>(), order))
            .and_then(|slot| slot.value().downcast_ref::<PlanCell<T>>().map(|c| c.get().is_some()))
            .unwrap_or(false)
    }

    /// Number of published plans
    pub fn len(&self) -> usize {
        self.published.load(Ordering::Acquire)
    }

    /// Check if no plan has been published
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn publish<'c, T: Record>(
        &self,
        cell: &'c PlanCell<T>,
        order: ByteOrder,
    ) -> Result<&'c Arc<LayoutPlan<T>>, LayoutError> {
        cell.get_or_try_init(|| {
            let plan = derive_layout::<T>(order)?;
            self.published.fetch_add(1, Ordering::AcqRel);
            Ok::<_, LayoutError>(Arc::new(plan))
        })
    }

    fn static_slots<T: Record>(&self) -> Option<&'static PlanSlots<T>> {
        if self.process_wide {
            T::plan_slots()
        } else {
            None
        }
    }

    fn cell<T: Record>(&self, order: ByteOrder) -> Result<CellRef<T>, LayoutError> {
        match self.static_slots::<T>() {
            Some(slots) => Ok(CellRef::Static(slots.cell(order))),
            None => self.slot::<T>(order).map(CellRef::Shared),
        }
    }

    fn slot<T: Record>(&self, order: ByteOrder) -> Result<Arc<PlanCell<T>>, LayoutError> {
        let key = (TypeId::of::<T>(), order);
        let slot = match self.slots.get(&key) {
            Some(slot) => Arc::clone(slot.value()),
            None => Arc::clone(
                self.slots
                    .entry(key)
                    .or_insert_with(|| Arc::new(PlanCell::<T>::new()) as Slot)
                    .value(),
            ),
        };
        slot.downcast::<PlanCell<T>>()
            .map_err(|_| LayoutError::CacheSlotMismatch {
                record: T::record_name(),
            })
    }
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LayoutCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutCache")
            .field("published", &self.len())
            .field("process_wide", &self.process_wide)
            .finish()
    }
}
