//! Member enumeration
//!
//! A [`Record`] lists its packable members in wire order. The order returned
//! by [`Record::members`] is the order bytes appear in the packed image and
//! is never re-sorted. [`record!`](crate::record) declares a struct and its
//! member list in one place so the two cannot drift apart.

use crate::PlanSlots;
use std::any::{type_name, Any, TypeId};
use std::fmt;

/// A record type whose members can be packed.
pub trait Record: Sized + 'static {
    /// Members in wire order.
    fn members() -> Vec<Member<Self>>;

    /// Name used in logs and errors.
    fn record_name() -> &'static str {
        type_name::<Self>()
    }

    /// Per-type plan cells for the process-wide cache.
    ///
    /// [`record!`](crate::record) returns a `static` here. Types that return
    /// `None` are cached in the process-wide map instead.
    #[doc(hidden)]
    fn plan_slots() -> Option<&'static PlanSlots<Self>> {
        None
    }
}

/// One readable member of a record.
pub struct Member<T> {
    name: &'static str,
    type_id: TypeId,
    type_name: &'static str,
    read: fn(&T) -> &dyn Any,
}

impl<T> Member<T> {
    /// Describe a member of Rust type `V` read through `read`.
    ///
    /// `read` must return a `&V`. A member whose `V` is not a supported
    /// scalar is accepted here and rejected when the layout is derived.
    pub fn new<V: Any>(name: &'static str, read: fn(&T) -> &dyn Any) -> Self {
        Self {
            name,
            type_id: TypeId::of::<V>(),
            type_name: type_name::<V>(),
            read,
        }
    }

    /// Member name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `TypeId` of the member's declared type
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Rust name of the member's declared type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The accessor
    pub fn accessor(&self) -> fn(&T) -> &dyn Any {
        self.read
    }
}

impl<T> Clone for Member<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Member<T> {}

impl<T> fmt::Debug for Member<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// Declare a struct and implement [`Record`] for it.
///
/// Fields are packed in the order they are written. Every field type must be
/// a supported scalar; any other type compiles but fails layout derivation
/// with [`LayoutError::UnsupportedFieldType`](crate::LayoutError).
///
/// ```
/// use structpack_layout::{record, Char16, Record};
///
/// record! {
///     #[derive(Debug, Clone, Copy)]
///     pub struct Header {
///         pub magic: u32,
///         pub version: u16,
///         pub tag: Char16,
///     }
/// }
///
/// let names: Vec<_> = Header::members().iter().map(|m| m.name()).collect();
/// assert_eq!(names, ["magic", "version", "tag"]);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            fn members() -> ::std::vec::Vec<$crate::Member<Self>> {
                ::std::vec![
                    $(
                        $crate::Member::new::<$ty>(
                            ::std::stringify!($field),
                            |record: &Self| &record.$field,
                        ),
                    )*
                ]
            }

            fn record_name() -> &'static str {
                ::std::stringify!($name)
            }

            fn plan_slots() -> ::std::option::Option<&'static $crate::PlanSlots<Self>> {
                static PLANS: $crate::PlanSlots<$name> = $crate::PlanSlots::new();
                ::std::option::Option::Some(&PLANS)
            }
        }
    };
}
