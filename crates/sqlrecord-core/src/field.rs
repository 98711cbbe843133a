//! Field metadata.
//!
//! Each record type exposes a static table of [`FieldInfo`] values. The schema
//! compiler inspects the declared [`FieldType`] and the field markers to decide
//! whether a field becomes a column, a relationship, or nothing at all.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::time::SystemTime;

use crate::record::RecordRef;
use crate::types::SqlType;

/// Declared value type of a field.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// A plain value with a semantic SQL type.
    Scalar(SqlType),
    /// Another record type (a single relation).
    Record(RecordRef),
    /// A generic container. Its element type is only known through the
    /// field's `list_of` marker.
    Collection,
    /// A value the metadata layer knows nothing about, named by its Rust type.
    Opaque(&'static str),
}

impl FieldType {
    /// The scalar SQL type, if any.
    #[must_use]
    pub const fn scalar(&self) -> Option<SqlType> {
        match self {
            FieldType::Scalar(ty) => Some(*ty),
            _ => None,
        }
    }

    /// The referenced record, if this is a single relation.
    #[must_use]
    pub const fn record(&self) -> Option<RecordRef> {
        match self {
            FieldType::Record(r) => Some(*r),
            _ => None,
        }
    }
}

impl fmt::Debug for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Scalar(ty) => f.debug_tuple("Scalar").field(ty).finish(),
            FieldType::Record(r) => f.debug_tuple("Record").field(&r.get().name).finish(),
            FieldType::Collection => f.write_str("Collection"),
            FieldType::Opaque(name) => f.debug_tuple("Opaque").field(name).finish(),
        }
    }
}

/// Maps a Rust type onto its declared [`FieldType`].
///
/// Implemented here for the common scalar and container types, and by
/// `#[derive(Record)]` for every record type (yielding [`FieldType::Record`]).
pub trait FieldKind {
    /// The declared field type.
    const FIELD_TYPE: FieldType;
}

macro_rules! scalar_kind {
    ($($ty:ty => $sql:expr),* $(,)?) => {
        $(
            impl FieldKind for $ty {
                const FIELD_TYPE: FieldType = FieldType::Scalar($sql);
            }
        )*
    };
}

scalar_kind! {
    bool => SqlType::Boolean,
    i8 => SqlType::SmallInt,
    i16 => SqlType::SmallInt,
    u8 => SqlType::SmallInt,
    i32 => SqlType::Integer,
    u16 => SqlType::Integer,
    i64 => SqlType::BigInt,
    u32 => SqlType::BigInt,
    u64 => SqlType::BigInt,
    f32 => SqlType::Real,
    f64 => SqlType::Double,
    char => SqlType::Text,
    String => SqlType::Text,
    &'static str => SqlType::Text,
    SystemTime => SqlType::Timestamp,
}

impl<T: FieldKind> FieldKind for Option<T> {
    const FIELD_TYPE: FieldType = T::FIELD_TYPE;
}

impl<T: FieldKind> FieldKind for Box<T> {
    const FIELD_TYPE: FieldType = T::FIELD_TYPE;
}

impl<T> FieldKind for Vec<T> {
    const FIELD_TYPE: FieldType = FieldType::Collection;
}

impl<T> FieldKind for VecDeque<T> {
    const FIELD_TYPE: FieldType = FieldType::Collection;
}

impl<T, S> FieldKind for HashSet<T, S> {
    const FIELD_TYPE: FieldType = FieldType::Collection;
}

impl<T> FieldKind for BTreeSet<T> {
    const FIELD_TYPE: FieldType = FieldType::Collection;
}

impl<K, V, S> FieldKind for HashMap<K, V, S> {
    const FIELD_TYPE: FieldType = FieldType::Collection;
}

impl<K, V> FieldKind for BTreeMap<K, V> {
    const FIELD_TYPE: FieldType = FieldType::Collection;
}

/// Metadata about a record field.
#[derive(Debug, Clone, Copy)]
pub struct FieldInfo {
    /// Rust field name
    pub name: &'static str,
    /// Column name used in DDL (defaults to the field name)
    pub column_name: &'static str,
    /// Declared value type
    pub field_type: FieldType,
    /// Field is excluded from persistence entirely
    pub ignored: bool,
    /// Identifier of the element type for collection relations
    pub list_of: Option<&'static str>,
    /// Explicit SQL type, used verbatim instead of the column-type policy's mapping
    pub sql_type_override: Option<&'static str>,
}

impl FieldInfo {
    /// Create field metadata with no markers.
    pub const fn new(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            column_name: name,
            field_type,
            ignored: false,
            list_of: None,
            sql_type_override: None,
        }
    }

    /// Set the column name.
    pub const fn column(mut self, name: &'static str) -> Self {
        self.column_name = name;
        self
    }

    /// Mark the field as ignored.
    pub const fn ignore(mut self) -> Self {
        self.ignored = true;
        self
    }

    /// Declare the element type of a collection relation.
    pub const fn list_of(mut self, type_name: &'static str) -> Self {
        self.list_of = Some(type_name);
        self
    }

    /// Set an explicit SQL type.
    pub const fn sql_type_override(mut self, type_str: &'static str) -> Self {
        self.sql_type_override = Some(type_str);
        self
    }

    /// Whether the field carries the ignore marker.
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        self.ignored
    }

    /// Element type identifier declared for a collection relation.
    #[must_use]
    pub const fn collection_element(&self) -> Option<&'static str> {
        self.list_of
    }
}
