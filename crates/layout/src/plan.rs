//! Layout plans
//!
//! A [`LayoutPlan`] is the compiled form of a record's member list for one
//! byte order: field descriptors in wire order, each with its codec already
//! resolved, and the total packed size. Plans are immutable once derived.

use crate::{LayoutError, Record};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::any::Any;
use std::fmt;
use structpack_codec::{codec_for, ByteOrder, Codec, ScalarType};
use tracing::{debug, warn};

/// One field of a derived layout.
pub struct FieldDescriptor<T> {
    ordinal: usize,
    name: &'static str,
    offset: usize,
    codec: &'static Codec,
    read: fn(&T) -> &dyn Any,
}

impl<T> FieldDescriptor<T> {
    /// Position in declaration order, starting at 0
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Field name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Scalar type of the field
    pub fn scalar_type(&self) -> ScalarType {
        self.codec.scalar_type()
    }

    /// Encoded width in bytes
    pub fn width(&self) -> usize {
        self.codec.width()
    }

    /// Offset of the field's first byte, relative to the record start
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("ordinal", &self.ordinal)
            .field("name", &self.name)
            .field("scalar_type", &self.scalar_type())
            .field("offset", &self.offset)
            .finish()
    }
}

/// Ordered field encodings and total size for one record type and byte order.
pub struct LayoutPlan<T> {
    record: &'static str,
    order: ByteOrder,
    fields: SmallVec<[FieldDescriptor<T>; 8]>,
    size: usize,
}

/// Derive the layout of `T` under `order`.
///
/// Walks `T::members()` in order, maps every member type to its scalar type
/// and codec, and sums widths. No padding is inserted. Fails on the first
/// member whose type is not a supported scalar.
pub fn derive_layout<T: Record>(order: ByteOrder) -> Result<LayoutPlan<T>, LayoutError> {
    let record = T::record_name();
    let members = T::members();
    let mut fields = SmallVec::with_capacity(members.len());
    let mut offset = 0usize;

    for (ordinal, member) in members.into_iter().enumerate() {
        let Some(scalar_type) = ScalarType::from_type_id(member.type_id()) else {
            warn!(
                record,
                field = member.name(),
                type_name = member.type_name(),
                "rejecting record layout: unsupported field type"
            );
            return Err(LayoutError::UnsupportedFieldType {
                record,
                field: member.name(),
                type_name: member.type_name(),
            });
        };

        let codec = codec_for(scalar_type);
        fields.push(FieldDescriptor {
            ordinal,
            name: member.name(),
            offset,
            codec,
            read: member.accessor(),
        });
        offset += codec.width();
    }

    debug!(
        record,
        order = %order,
        fields = fields.len(),
        size = offset,
        "derived layout plan"
    );

    Ok(LayoutPlan {
        record,
        order,
        fields,
        size: offset,
    })
}

impl<T> LayoutPlan<T> {
    /// Name of the record this plan packs
    pub fn record_name(&self) -> &'static str {
        self.record
    }

    /// Byte order every field is encoded in
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Fields in wire order
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    /// Total packed size in bytes.
    ///
    /// Depends only on the record type; the same for every instance.
    pub fn required_size(&self) -> usize {
        self.size
    }

    /// Pack `record` into `buf` starting at `offset`.
    ///
    /// Fields are written contiguously in wire order and the cursor advances
    /// by each field's width. Returns the number of bytes written, which is
    /// always [`LayoutPlan::required_size`].
    ///
    /// Capacity is not checked up front. The first field that does not fit
    /// fails with a buffer overrun; fields before it have already been
    /// written. Bytes outside `[offset, offset + size)` are never touched.
    pub fn pack(&self, record: &T, buf: &mut [u8], offset: usize) -> Result<usize, LayoutError> {
        let mut cursor = offset;
        for field in &self.fields {
            cursor += field.codec.write((field.read)(record), self.order, buf, cursor)?;
        }
        Ok(cursor - offset)
    }

    /// Serializable description of the wire layout.
    pub fn describe(&self) -> LayoutDescription {
        LayoutDescription {
            record: self.record.to_string(),
            byte_order: self.order,
            size: self.size,
            fields: self
                .fields
                .iter()
                .map(|field| FieldLayout {
                    name: field.name.to_string(),
                    scalar_type: field.scalar_type(),
                    offset: field.offset,
                    width: field.width(),
                })
                .collect(),
        }
    }
}

impl<T> fmt::Debug for LayoutPlan<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutPlan")
            .field("record", &self.record)
            .field("order", &self.order)
            .field("size", &self.size)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Wire layout of a record, for documentation and interoperability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDescription {
    /// Record name
    pub record: String,
    /// Byte order of every multi-byte field
    pub byte_order: ByteOrder,
    /// Total packed size in bytes
    pub size: usize,
    /// Fields in wire order
    pub fields: Vec<FieldLayout>,
}

/// One field of a [`LayoutDescription`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLayout {
    /// Field name
    pub name: String,
    /// Scalar type
    pub scalar_type: ScalarType,
    /// Offset relative to the record start
    pub offset: usize,
    /// Width in bytes
    pub width: usize,
}
