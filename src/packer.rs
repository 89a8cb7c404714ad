//! Packer entry point.
//!
//! A [`Packer`] is a cheap handle over a [`LayoutCache`]. By default it uses
//! the process-wide cache; [`PackerBuilder`] can point it at a private cache
//! and derive layouts eagerly at startup.

use crate::error::Result;
use std::sync::Arc;
use structpack_codec::ByteOrder;
use structpack_layout::{LayoutCache, LayoutDescription, LayoutError, LayoutPlan, Record};
use tracing::info;

/// Packs records into caller-owned buffers.
///
/// # Example
///
/// ```
/// use structpack::prelude::*;
///
/// record! {
///     pub struct Sample {
///         pub a: u8,
///         pub b: i16,
///     }
/// }
///
/// let packer = Packer::new();
/// let sample = Sample { a: 0x01, b: 0x0203 };
///
/// let size = packer.required_size(&sample, ByteOrder::Big)?;
/// let mut buf = vec![0u8; size];
/// packer.pack(&sample, &mut buf, 0, ByteOrder::Big)?;
/// assert_eq!(buf, [0x01, 0x02, 0x03]);
/// # Ok::<(), structpack::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Packer {
    cache: Arc<LayoutCache>,
}

impl Packer {
    /// Create a packer over the process-wide cache.
    pub fn new() -> Self {
        Self::with_cache(Arc::clone(LayoutCache::global()))
    }

    /// Create a packer over `cache`.
    pub fn with_cache(cache: Arc<LayoutCache>) -> Self {
        Self { cache }
    }

    /// Create a builder for startup configuration.
    pub fn builder() -> PackerBuilder {
        PackerBuilder::new()
    }

    /// The cache this packer reads plans from
    pub fn cache(&self) -> &Arc<LayoutCache> {
        &self.cache
    }

    /// Get the layout plan for `T` under `order`.
    pub fn plan<T: Record>(&self, order: ByteOrder) -> Result<Arc<LayoutPlan<T>>> {
        Ok(self.cache.plan::<T>(order)?)
    }

    /// Number of bytes [`Packer::pack`] writes for a `T`.
    ///
    /// Depends only on `T` and `order`; the instance is not inspected.
    pub fn required_size<T: Record>(&self, _record: &T, order: ByteOrder) -> Result<usize> {
        Ok(self
            .cache
            .with_plan::<T, _>(order, |plan| plan.required_size())?)
    }

    /// Write `record` into `buf` at `offset`.
    ///
    /// Writes exactly `required_size` bytes into `[offset, offset + size)`
    /// and returns that count. Size the buffer with
    /// [`Packer::required_size`] first; a short buffer fails with
    /// [`Error::BufferOverrun`](crate::Error::BufferOverrun) after the fields
    /// that fit have been written.
    pub fn pack<T: Record>(
        &self,
        record: &T,
        buf: &mut [u8],
        offset: usize,
        order: ByteOrder,
    ) -> Result<usize> {
        Ok(self
            .cache
            .with_plan::<T, _>(order, |plan| plan.pack(record, buf, offset))??)
    }

    /// Describe the wire layout of `T` under `order`.
    pub fn describe<T: Record>(&self, order: ByteOrder) -> Result<LayoutDescription> {
        Ok(self.cache.with_plan::<T, _>(order, |plan| plan.describe())?)
    }
}

impl Default for Packer {
    fn default() -> Self {
        Self::new()
    }
}

struct Registration {
    record: &'static str,
    register: fn(&LayoutCache) -> std::result::Result<(), LayoutError>,
}

/// Builder for packer configuration.
///
/// Registered records have their layouts derived for both byte orders when
/// [`PackerBuilder::build`] runs, so an unsupported member type surfaces at
/// startup instead of on first use.
///
/// # Example
///
/// ```
/// use structpack::prelude::*;
/// use std::sync::Arc;
///
/// record! {
///     struct Header { magic: u32, version: u16 }
/// }
///
/// let packer = Packer::builder()
///     .cache(Arc::new(LayoutCache::new()))
///     .register::<Header>()
///     .build()?;
/// assert_eq!(packer.cache().len(), 2);
/// # Ok::<(), structpack::Error>(())
/// ```
pub struct PackerBuilder {
    cache: Option<Arc<LayoutCache>>,
    registrations: Vec<Registration>,
}

impl PackerBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            cache: None,
            registrations: Vec::new(),
        }
    }

    /// Use `cache` instead of the process-wide cache.
    pub fn cache(mut self, cache: Arc<LayoutCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Derive the layouts of `T` when the packer is built.
    pub fn register<T: Record>(mut self) -> Self {
        self.registrations.push(Registration {
            record: T::record_name(),
            register: |cache| cache.register::<T>(),
        });
        self
    }

    /// Build the packer, deriving every registered layout.
    ///
    /// Fails on the first registered record that cannot be laid out.
    pub fn build(self) -> Result<Packer> {
        let cache = self
            .cache
            .unwrap_or_else(|| Arc::clone(LayoutCache::global()));

        for registration in &self.registrations {
            (registration.register)(&cache)?;
        }

        info!(
            records = self.registrations.len(),
            plans = cache.len(),
            registered = ?self.registrations.iter().map(|r| r.record).collect::<Vec<_>>(),
            "packer ready"
        );

        Ok(Packer::with_cache(cache))
    }
}

impl Default for PackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
