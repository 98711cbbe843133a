//! Table and join-table naming.

use sqlrecord_core::{FieldInfo, RecordInfo};

/// Chooses table names for records and their join tables.
///
/// Names must be a pure function of their inputs so that repeated passes
/// produce identical output. Collisions are not detected by the compiler.
pub trait NamingPolicy {
    /// Table name for a record.
    fn table_name(&self, record: &RecordInfo) -> String;

    /// Join-table name for the relation `owner.field -> child`.
    fn join_table_name(&self, owner: &RecordInfo, child: &RecordInfo, field: &FieldInfo) -> String {
        format!(
            "{}_{}_{}",
            self.table_name(owner),
            self.table_name(child),
            field.name
        )
    }
}

/// Default naming: explicit table names verbatim, otherwise the record's
/// short type name behind an optional prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultNaming {
    prefix: String,
}

impl DefaultNaming {
    /// Naming without a prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Naming with a table prefix (e.g. `"app_"`).
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The configured prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl DefaultNaming {
    fn base_name(record: &RecordInfo) -> &'static str {
        record.table_name.unwrap_or_else(|| record.short_name())
    }
}

impl NamingPolicy for DefaultNaming {
    fn table_name(&self, record: &RecordInfo) -> String {
        match record.table_name {
            Some(explicit) => explicit.to_string(),
            None => format!("{}{}", self.prefix, record.short_name()),
        }
    }

    /// The prefix appears once, ahead of the unprefixed owner and child names.
    fn join_table_name(&self, owner: &RecordInfo, child: &RecordInfo, field: &FieldInfo) -> String {
        format!(
            "{}{}_{}_{}",
            self.prefix,
            Self::base_name(owner),
            Self::base_name(child),
            field.name
        )
    }
}
