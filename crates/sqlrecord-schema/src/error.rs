//! Errors raised while compiling a schema.

use std::error::Error as StdError;
use std::fmt;

/// Errors that abort a compilation pass.
#[derive(Debug)]
pub enum SchemaError {
    /// A collection relation names an element type the resolver does not know.
    RelationResolution {
        owner: &'static str,
        field: &'static str,
        element: &'static str,
    },
    /// A collection relation names a type that exists but is not persistable.
    RelationAnnotationMismatch {
        owner: &'static str,
        field: &'static str,
        element: &'static str,
    },
    /// Configuration failed validation.
    InvalidConfig(String),
    /// Configuration could not be parsed.
    Json(serde_json::Error),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::RelationResolution {
                owner,
                field,
                element,
            } => write!(
                f,
                "cannot resolve element type `{}` of list field {}.{}",
                element, owner, field
            ),
            SchemaError::RelationAnnotationMismatch {
                owner,
                field,
                element,
            } => write!(
                f,
                "list field {}.{} names `{}`, which is not a record type",
                owner, field, element
            ),
            SchemaError::InvalidConfig(msg) => write!(f, "invalid schema config: {}", msg),
            SchemaError::Json(err) => write!(f, "schema config parse error: {}", err),
        }
    }
}

impl StdError for SchemaError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            SchemaError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::Json(err)
    }
}

/// Result alias for schema compilation.
pub type Result<T> = std::result::Result<T, SchemaError>;
