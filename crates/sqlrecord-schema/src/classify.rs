//! Field classification.
//!
//! Every field of a record is classified exactly once, in a fixed order:
//!
//! 1. ignore marker → [`FieldClass::Ignored`]
//! 2. value type is a record → [`FieldClass::SingleRelation`] (wins over a `list_of` marker)
//! 3. `list_of` marker → [`FieldClass::CollectionRelation`], or an error if the
//!    named type is unknown or not a record
//! 4. column-type policy supports the field → [`FieldClass::Column`]
//! 5. otherwise → [`FieldClass::Unsupported`]

use sqlrecord_core::{FieldInfo, FieldType, RecordInfo, RegisteredType, RelationshipKind, TypeResolver};

use crate::columns::{Column, ColumnTypes};
use crate::error::{Result, SchemaError};

/// Outcome of classifying one field.
#[derive(Debug, Clone)]
pub enum FieldClass {
    /// Carries the ignore marker.
    Ignored,
    /// One-to-one relation to another record.
    SingleRelation(&'static RecordInfo),
    /// One-to-many relation to the record named by `list_of`.
    CollectionRelation(&'static RecordInfo),
    /// Plain column.
    Column(Column),
    /// Neither relation nor column-mappable; dropped without error.
    Unsupported,
}

impl FieldClass {
    /// Relationship kind and child record, if this is a relation.
    #[must_use]
    pub fn relation(&self) -> Option<(RelationshipKind, &'static RecordInfo)> {
        match self {
            FieldClass::SingleRelation(child) => Some((RelationshipKind::OneToOne, *child)),
            FieldClass::CollectionRelation(child) => Some((RelationshipKind::OneToMany, *child)),
            _ => None,
        }
    }

    /// The column, if this is a plain column.
    #[must_use]
    pub fn column(&self) -> Option<&Column> {
        match self {
            FieldClass::Column(column) => Some(column),
            _ => None,
        }
    }
}

/// Classify `field` of `owner`.
pub fn classify(
    owner: &RecordInfo,
    field: &FieldInfo,
    resolver: &dyn TypeResolver,
    column_types: &dyn ColumnTypes,
) -> Result<FieldClass> {
    if field.is_ignored() {
        return Ok(FieldClass::Ignored);
    }

    if let FieldType::Record(child) = field.field_type {
        return Ok(FieldClass::SingleRelation(child.get()));
    }

    if let Some(element) = field.collection_element() {
        return match resolver.resolve(element) {
            Some(RegisteredType::Record(child)) => Ok(FieldClass::CollectionRelation(child)),
            Some(RegisteredType::Plain(_)) => Err(SchemaError::RelationAnnotationMismatch {
                owner: owner.name,
                field: field.name,
                element,
            }),
            None => Err(SchemaError::RelationResolution {
                owner: owner.name,
                field: field.name,
                element,
            }),
        };
    }

    if column_types.supports_field(field) {
        if let Some(sql_type) = column_types.sql_column_type(field) {
            return Ok(FieldClass::Column(Column::new(field.column_name, sql_type)));
        }
    }

    tracing::warn!(
        record = owner.name,
        field = field.name,
        field_type = ?field.field_type,
        "Field is neither relation nor column; skipping"
    );
    Ok(FieldClass::Unsupported)
}
