//! Type lookup by identifier.
//!
//! Collection relations name their element type by identifier (typically the
//! fully-qualified Rust path). The [`TypeRegistry`] maps those identifiers to
//! metadata. It is populated once at start-up and queried during compilation.

use std::collections::HashMap;

use crate::record::{Record, RecordInfo};

/// A type known to the registry.
#[derive(Debug, Clone, Copy)]
pub enum RegisteredType {
    /// A persistable record type.
    Record(&'static RecordInfo),
    /// A known type that is not persistable (e.g. `String` for a list of tags).
    Plain(&'static str),
}

impl RegisteredType {
    /// Whether the type satisfies the persistable-record capability.
    #[must_use]
    pub const fn is_persistable(&self) -> bool {
        matches!(self, RegisteredType::Record(_))
    }

    /// Record metadata, if persistable.
    #[must_use]
    pub const fn as_record(&self) -> Option<&'static RecordInfo> {
        match self {
            RegisteredType::Record(info) => Some(info),
            RegisteredType::Plain(_) => None,
        }
    }

    /// Identifier the type is registered under.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            RegisteredType::Record(info) => info.name,
            RegisteredType::Plain(name) => name,
        }
    }
}

/// Resolves type identifiers to registered types.
pub trait TypeResolver {
    /// Look up a type by identifier.
    fn resolve(&self, name: &str) -> Option<RegisteredType>;
}

/// Identifier → type mapping, remembering registration order.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: HashMap<&'static str, RegisteredType>,
    order: Vec<&'static str>,
}

impl TypeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record type under its `name`.
    pub fn register<R: Record>(&mut self) -> &mut Self {
        self.register_info(R::record_info())
    }

    /// Register record metadata under its `name`.
    pub fn register_info(&mut self, info: &'static RecordInfo) -> &mut Self {
        self.insert(info.name, RegisteredType::Record(info));
        self
    }

    /// Register a non-persistable type identifier.
    pub fn register_plain(&mut self, name: &'static str) -> &mut Self {
        self.insert(name, RegisteredType::Plain(name));
        self
    }

    fn insert(&mut self, name: &'static str, ty: RegisteredType) {
        if self.types.insert(name, ty).is_some() {
            tracing::debug!(type_name = name, "Replacing registered type");
        } else {
            tracing::trace!(type_name = name, "Registered type");
            self.order.push(name);
        }
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// True if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Whether `name` resolves to a persistable record.
    #[must_use]
    pub fn is_persistable(&self, name: &str) -> bool {
        self.types.get(name).is_some_and(RegisteredType::is_persistable)
    }

    /// All registered record types, in registration order.
    #[must_use]
    pub fn records(&self) -> Vec<&'static RecordInfo> {
        self.order
            .iter()
            .filter_map(|name| self.types.get(name).and_then(RegisteredType::as_record))
            .collect()
    }
}

impl TypeResolver for TypeRegistry {
    fn resolve(&self, name: &str) -> Option<RegisteredType> {
        self.types.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldInfo, FieldKind};

    static BOOK: RecordInfo =
        RecordInfo::new("library::Book", &[FieldInfo::new("title", String::FIELD_TYPE)]);
    static AUTHOR: RecordInfo =
        RecordInfo::new("library::Author", &[FieldInfo::new("name", String::FIELD_TYPE)]);

    #[test]
    fn test_resolve_record_and_plain() {
        let mut registry = TypeRegistry::new();
        registry
            .register_info(&BOOK)
            .register_plain("std::string::String");

        let book = registry.resolve("library::Book").unwrap();
        assert!(book.is_persistable());
        assert_eq!(book.name(), "library::Book");

        let string = registry.resolve("std::string::String").unwrap();
        assert!(!string.is_persistable());
        assert!(string.as_record().is_none());

        assert!(registry.resolve("library::Missing").is_none());
        assert!(!registry.is_persistable("library::Missing"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_records_in_registration_order() {
        let mut registry = TypeRegistry::new();
        registry
            .register_info(&BOOK)
            .register_plain("i64")
            .register_info(&AUTHOR)
            .register_info(&BOOK);

        let names: Vec<_> = registry.records().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["library::Book", "library::Author"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = TypeRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.records().is_empty());
    }
}
