//! Schema compilation for SQLRecord Rust.
//!
//! `sqlrecord-schema` derives the relational schema implied by a batch of
//! record types: one table per record, one column per scalar field, and one
//! join table per relation. It emits the schema as DDL statements for either
//! SQLite (generic) or MySQL.
//!
//! Relations are discovered, not declared: a field whose value type is a
//! record is a one-to-one relation, and a collection field carrying a
//! `list_of` marker is a one-to-many relation.
//!
//! # Modules
//!
//! - `classify`: decides what each field becomes.
//! - `joins`: collects relations across a pass.
//! - `ddl`: renders table and join-table statements from dialect templates.
//! - `compiler`: drives a pass and streams statements to a sink.
//! - `columns` / `naming`: replaceable column-type and naming policies.
//!
//! This crate only computes statements. It never executes them.

pub mod classify;
pub mod columns;
pub mod compiler;
pub mod config;
pub mod ddl;
pub mod dialect;
pub mod error;
pub mod joins;
pub mod naming;

pub use classify::{FieldClass, classify};
pub use columns::{Column, ColumnTypes, StandardColumnTypes};
pub use compiler::{FnSink, SchemaCompiler, StatementSink};
pub use config::SchemaConfig;
pub use ddl::DialectTemplates;
pub use dialect::Dialect;
pub use error::{Result, SchemaError};
pub use joins::{Join, JoinRegistry};
pub use naming::{DefaultNaming, NamingPolicy};
