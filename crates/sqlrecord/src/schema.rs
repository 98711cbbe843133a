//! Schema compiler re-exports.
//!
//! The implementation lives in the separate `sqlrecord-schema` crate. This module
//! exists so the `sqlrecord` facade can expose the compiler and its policies
//! without forcing users to depend on sub-crates directly.

pub use sqlrecord_schema::{
    Column, ColumnTypes, DefaultNaming, Dialect, DialectTemplates, FieldClass, FnSink, Join,
    JoinRegistry, NamingPolicy, SchemaCompiler, SchemaConfig, SchemaError, StandardColumnTypes,
    StatementSink, classify, ddl,
};
