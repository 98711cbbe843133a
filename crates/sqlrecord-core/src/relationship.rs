//! Relationship kinds discovered between record types.
//!
//! Relationships are never declared explicitly. A field whose value type is
//! another record is a one-to-one relationship; a collection field carrying a
//! `list_of` marker is a one-to-many relationship. Both persist through the
//! same join-table shape; cardinality is enforced by the application layer.

use std::fmt;

/// The kind of relationship between two record types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    /// One-to-one: `Author` has one `Profile`.
    #[default]
    OneToOne,
    /// One-to-many: one `Author` has many `Book`s.
    OneToMany,
}

impl RelationshipKind {
    /// Whether the owning side holds a collection.
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, RelationshipKind::OneToMany)
    }

    /// Short label for logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            RelationshipKind::OneToOne => "one-to-one",
            RelationshipKind::OneToMany => "one-to-many",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
