//! Record type metadata.
//!
//! A record type is an application-defined persistable type. Its metadata is a
//! static [`RecordInfo`] table, usually generated by `#[derive(Record)]`, that
//! lists its fields in declaration order and optionally names a parent record
//! whose fields it inherits.

use std::fmt;

use crate::field::FieldInfo;

/// A persistable record type.
pub trait Record {
    /// Static metadata for this record type.
    fn record_info() -> &'static RecordInfo;
}

/// A lazily-resolved reference to a record's metadata.
///
/// Stored as a function pointer so that metadata tables can refer to each
/// other (including cyclically) without initialization order concerns.
/// Identity is the referenced record's `name`.
#[derive(Clone, Copy)]
pub struct RecordRef(fn() -> &'static RecordInfo);

impl RecordRef {
    /// Wrap a metadata accessor.
    pub const fn new(info: fn() -> &'static RecordInfo) -> Self {
        Self(info)
    }

    /// Reference to a type implementing [`Record`].
    #[must_use]
    pub fn of<R: Record>() -> Self {
        Self(R::record_info)
    }

    /// Resolve the referenced metadata.
    #[must_use]
    pub fn get(&self) -> &'static RecordInfo {
        (self.0)()
    }
}

impl PartialEq for RecordRef {
    fn eq(&self, other: &Self) -> bool {
        self.get().name == other.get().name
    }
}

impl Eq for RecordRef {}

impl fmt::Debug for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecordRef").field(&self.get().name).finish()
    }
}

/// Static metadata describing one record type.
#[derive(Debug)]
pub struct RecordInfo {
    /// Fully-qualified type identifier (e.g. `"library::Book"`)
    pub name: &'static str,
    /// Explicit table name, overriding the naming policy's default
    pub table_name: Option<&'static str>,
    /// Declared fields, in declaration order
    pub fields: &'static [FieldInfo],
    /// Parent record whose fields are inherited
    pub parent: Option<RecordRef>,
}

impl RecordInfo {
    /// Create metadata with no table override and no parent.
    pub const fn new(name: &'static str, fields: &'static [FieldInfo]) -> Self {
        Self {
            name,
            table_name: None,
            fields,
            parent: None,
        }
    }

    /// Set an explicit table name.
    pub const fn table(mut self, name: &'static str) -> Self {
        self.table_name = Some(name);
        self
    }

    /// Set the parent record.
    pub const fn extends(mut self, parent: RecordRef) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Last path segment of `name`.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }

    /// All fields, ancestors first, each level in declaration order.
    #[must_use]
    pub fn all_fields(&self) -> Vec<&'static FieldInfo> {
        let mut chain = vec![self.fields];
        let mut next = self.parent;
        while let Some(parent) = next {
            let info = parent.get();
            // Guard against a record listed as its own ancestor.
            if info.name == self.name || chain.len() > 64 {
                tracing::warn!(record = self.name, "Inheritance cycle detected; truncating");
                break;
            }
            chain.push(info.fields);
            next = info.parent;
        }

        chain.into_iter().rev().flatten().collect()
    }
}
