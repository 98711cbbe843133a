//! SQLRecord: derive relational schemas from Rust record types.
//!
//! This is the facade crate. Derive [`Record`] on your types, register them in
//! a [`TypeRegistry`], and compile the registry into DDL:
//!
//! ```
//! use sqlrecord::prelude::*;
//!
//! #[derive(Record)]
//! #[record(name = "library::Book")]
//! struct Book {
//!     title: String,
//! }
//!
//! #[derive(Record)]
//! #[record(name = "library::Author")]
//! struct Author {
//!     name: String,
//!     #[record(list = "library::Book")]
//!     books: Vec<Book>,
//! }
//!
//! let mut registry = TypeRegistry::new();
//! registry.register::<Author>().register::<Book>();
//!
//! let statements = sqlrecord::create_schema(&registry, SchemaConfig::default()).unwrap();
//! assert_eq!(statements.len(), 4);
//! ```

pub mod schema;

pub use sqlrecord_core::{
    FieldInfo, FieldKind, FieldType, RecordInfo, RecordRef, RegisteredType, RelationshipKind,
    SqlType, TypeRegistry, TypeResolver,
};
pub use sqlrecord_core::Record;
pub use sqlrecord_macros::Record;
pub use sqlrecord_schema::{Dialect, Result, SchemaCompiler, SchemaConfig, SchemaError};

/// Compile every record in `registry` into DDL statements.
///
/// Records are compiled in registration order; collection element types are
/// resolved through the same registry.
pub fn create_schema(registry: &TypeRegistry, config: SchemaConfig) -> Result<Vec<String>> {
    let mut statements = Vec::new();
    let count = SchemaCompiler::compile_registry(registry, config, &mut statements)?;
    tracing::info!(statements = count, records = registry.records().len(), "Created schema");
    Ok(statements)
}

/// Commonly used items.
pub mod prelude {
    pub use crate::schema::{FnSink, StatementSink};
    pub use crate::{
        Dialect, FieldInfo, FieldKind, FieldType, Record, RecordInfo, SchemaCompiler,
        SchemaConfig, SchemaError, TypeRegistry,
    };
}
