//! Procedural macros for SQLRecord Rust.
//!
//! `#[derive(Record)]` turns a plain struct into a persistable record type by
//! generating its static metadata table at compile time:
//!
//! ```ignore
//! use sqlrecord::prelude::*;
//!
//! #[derive(Record)]
//! #[record(table = "authors")]
//! struct Author {
//!     name: String,
//!     profile: Profile,                  // one-to-one, discovered from the type
//!     #[record(list = "library::Book")]
//!     books: Vec<Book>,                  // one-to-many
//!     #[record(ignore)]
//!     scratch: Vec<u8>,
//! }
//! ```
//!
//! Container attributes: `table = "..."`, `name = "..."` (type identifier,
//! defaults to `module_path!()::StructName`), `extends = Parent`.
//!
//! Field attributes: `ignore`, `opaque` (type has no `FieldKind` mapping and is
//! not persisted unless `sql_type` is given), `list = "..."`, `column = "..."`,
//! `sql_type = "..."`.
//!
//! Every non-ignored field type must implement `FieldKind`. Scalars, `Option`,
//! `Box`, the std sequence, set and map types, and other derived records do.
//! Mark any other type `#[record(opaque)]`; it is then skipped like an
//! unmarked collection.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod record_derive;

/// Derive `Record` and `FieldKind` for a struct.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match record_derive::parse_record(&input) {
        Ok(def) => record_derive::generate_record_impl(&def).into(),
        Err(err) => err.to_compile_error().into(),
    }
}
