//! Column-type policy.
//!
//! Decides which scalar fields become columns and what SQL type each gets.

use std::fmt;

use sqlrecord_core::{FieldInfo, FieldType, SqlType};

use crate::dialect::Dialect;

/// A column derived from a scalar field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name
    pub name: String,
    /// SQL type string, as emitted in DDL
    pub sql_type: String,
}

impl Column {
    /// Create a column.
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
        }
    }

    /// Render as `"<name> <type>"`.
    #[must_use]
    pub fn to_sql(&self) -> String {
        format!("{} {}", self.name, self.sql_type)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.sql_type)
    }
}

/// Maps fields onto SQL column types.
pub trait ColumnTypes {
    /// SQL type for `field`, or `None` if the field cannot be stored as a column.
    fn sql_column_type(&self, field: &FieldInfo) -> Option<String>;

    /// Whether `field` can be stored as a column.
    fn supports_field(&self, field: &FieldInfo) -> bool {
        self.sql_column_type(field).is_some()
    }
}

/// Built-in mapping for scalar fields.
///
/// An explicit `sql_type_override` always wins. Otherwise only
/// [`FieldType::Scalar`] fields are supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardColumnTypes {
    dialect: Dialect,
}

impl StandardColumnTypes {
    /// Mapping for `dialect`.
    #[must_use]
    pub const fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Type name for `ty` in this dialect.
    #[must_use]
    pub const fn type_name(&self, ty: SqlType) -> &'static str {
        match self.dialect {
            Dialect::Sqlite => ty.sql_name(),
            Dialect::Mysql => match ty {
                SqlType::Boolean => "TINYINT(1)",
                SqlType::SmallInt => "SMALLINT",
                SqlType::Integer => "INT",
                SqlType::BigInt => "BIGINT",
                SqlType::Real => "FLOAT",
                SqlType::Double => "DOUBLE",
                SqlType::Text => "TEXT",
                SqlType::Timestamp => "DATETIME",
            },
        }
    }
}

impl ColumnTypes for StandardColumnTypes {
    fn sql_column_type(&self, field: &FieldInfo) -> Option<String> {
        if let Some(explicit) = field.sql_type_override {
            return Some(explicit.to_string());
        }

        match field.field_type {
            FieldType::Scalar(ty) => Some(self.type_name(ty).to_string()),
            FieldType::Record(_) | FieldType::Collection | FieldType::Opaque(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlrecord_core::FieldKind;

    #[test]
    fn test_scalar_types_per_dialect() {
        let field = FieldInfo::new("active", bool::FIELD_TYPE);

        let sqlite = StandardColumnTypes::new(Dialect::Sqlite);
        assert_eq!(sqlite.sql_column_type(&field).as_deref(), Some("BOOLEAN"));

        let mysql = StandardColumnTypes::new(Dialect::Mysql);
        assert_eq!(mysql.sql_column_type(&field).as_deref(), Some("TINYINT(1)"));
    }

    #[test]
    fn test_override_wins() {
        let field = FieldInfo::new("name", String::FIELD_TYPE).sql_type_override("VARCHAR(64)");
        let types = StandardColumnTypes::default();
        assert_eq!(types.sql_column_type(&field).as_deref(), Some("VARCHAR(64)"));

        let opaque = FieldInfo::new("blob", FieldType::Opaque("Payload")).sql_type_override("BLOB");
        assert!(types.supports_field(&opaque));
    }

    #[test]
    fn test_non_scalars_unsupported() {
        let types = StandardColumnTypes::default();
        assert!(!types.supports_field(&FieldInfo::new("tags", FieldType::Collection)));
        assert!(!types.supports_field(&FieldInfo::new("h", FieldType::Opaque("Handle"))));
    }

    #[test]
    fn test_column_rendering() {
        let column = Column::new("name", "TEXT");
        assert_eq!(column.to_sql(), "name TEXT");
        assert_eq!(column.to_string(), "name TEXT");
    }
}
