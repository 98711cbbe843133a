//! Core types and traits for SQLRecord Rust.
//!
//! `sqlrecord-core` is the **metadata layer** the schema compiler reads. It
//! stands in for runtime reflection: every record type carries a static table
//! describing its fields, generated at compile time by `#[derive(Record)]` or
//! written by hand.
//!
//! # Role In The Architecture
//!
//! - **Record metadata**: `RecordInfo`, `FieldInfo`, and `FieldType` describe a
//!   type's fields, their declared value types, and their markers.
//! - **Type mapping**: `FieldKind` maps Rust types onto `FieldType` so derived
//!   metadata can tell scalars, records, and collections apart.
//! - **Type lookup**: `TypeRegistry` resolves the element-type identifiers
//!   carried by collection relations.
//!
//! # Who Uses This Crate
//!
//! - `sqlrecord-macros` generates `Record` and `FieldKind` implementations defined here.
//! - `sqlrecord-schema` classifies fields and emits DDL from this metadata.

pub mod field;
pub mod record;
pub mod registry;
pub mod relationship;
pub mod types;

pub use field::{FieldInfo, FieldKind, FieldType};
pub use record::{Record, RecordInfo, RecordRef};
pub use registry::{RegisteredType, TypeRegistry, TypeResolver};
pub use relationship::RelationshipKind;
pub use types::SqlType;
