//! Join registry.
//!
//! A relation is discovered while scanning the owning record, but its join
//! table references both owner and child. The registry holds discovered
//! relations until every record of the pass has been scanned.

use sqlrecord_core::{FieldInfo, RecordInfo, RelationshipKind};

/// A relation `owner.field -> child`, persisted as a join table.
#[derive(Debug, Clone, Copy)]
pub struct Join {
    /// Record declaring the field
    pub owner: &'static RecordInfo,
    /// Field carrying the relation
    pub field: &'static FieldInfo,
    /// Related record
    pub child: &'static RecordInfo,
    /// One-to-one or one-to-many
    pub kind: RelationshipKind,
}

/// Relations discovered during one compilation pass, in discovery order.
///
/// No deduplication is performed: registering the same relation twice
/// produces two join tables.
#[derive(Debug, Default)]
pub struct JoinRegistry {
    joins: Vec<Join>,
}

impl JoinRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a discovered relation.
    pub fn register(
        &mut self,
        owner: &'static RecordInfo,
        field: &'static FieldInfo,
        child: &'static RecordInfo,
        kind: RelationshipKind,
    ) {
        tracing::trace!(
            owner = owner.name,
            field = field.name,
            child = child.name,
            kind = %kind,
            "Registered join"
        );
        self.joins.push(Join {
            owner,
            field,
            child,
            kind,
        });
    }

    /// Take all registered relations, in registration order.
    pub fn drain(&mut self) -> Vec<Join> {
        std::mem::take(&mut self.joins)
    }

    /// Number of registered relations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.joins.len()
    }

    /// True if no relation is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.joins.is_empty()
    }

    /// Iterate over registered relations.
    pub fn iter(&self) -> impl Iterator<Item = &Join> {
        self.joins.iter()
    }
}
