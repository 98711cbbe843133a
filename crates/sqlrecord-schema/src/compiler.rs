//! The schema compiler.
//!
//! A [`SchemaCompiler`] turns a batch of record types into the DDL statements
//! needed to persist them, in two phases:
//!
//! 1. For each record, in input order: classify its fields, build its
//!    `CREATE TABLE`, and register the relations it declares.
//! 2. For each registered relation, in discovery order: build its join table
//!    (and, for non-MySQL dialects, the join table's index).
//!
//! Join statements therefore always follow every table statement, and a
//! relation may reference a record that appears later in the batch (or not
//! at all).
//!
//! # Example
//!
//! ```
//! use sqlrecord_core::{FieldInfo, FieldKind, FieldType, RecordInfo, TypeRegistry};
//! use sqlrecord_schema::SchemaCompiler;
//!
//! static BOOK: RecordInfo =
//!     RecordInfo::new("library::Book", &[FieldInfo::new("title", String::FIELD_TYPE)]);
//! static AUTHOR: RecordInfo = RecordInfo::new(
//!     "library::Author",
//!     &[
//!         FieldInfo::new("name", String::FIELD_TYPE),
//!         FieldInfo::new("books", FieldType::Collection).list_of("library::Book"),
//!     ],
//! );
//!
//! let mut registry = TypeRegistry::new();
//! registry.register_info(&AUTHOR).register_info(&BOOK);
//!
//! let statements = SchemaCompiler::new(&registry)
//!     .compile_to_vec(&[&AUTHOR, &BOOK])
//!     .unwrap();
//!
//! assert_eq!(statements.len(), 4);
//! assert!(statements[0].starts_with("CREATE TABLE Author ("));
//! assert!(statements[2].starts_with("CREATE TABLE Author_Book_books ("));
//! assert!(statements[3].starts_with("CREATE INDEX Author_Book_books_idx"));
//! ```

use sqlrecord_core::{RecordInfo, TypeRegistry, TypeResolver};

use crate::classify::{FieldClass, classify};
use crate::columns::{ColumnTypes, StandardColumnTypes};
use crate::config::SchemaConfig;
use crate::ddl;
use crate::error::Result;
use crate::joins::JoinRegistry;
use crate::naming::{DefaultNaming, NamingPolicy};

/// Receives generated statements in emission order.
pub trait StatementSink {
    /// Called once per generated statement.
    fn statement_created(&mut self, sql: &str);
}

impl StatementSink for Vec<String> {
    fn statement_created(&mut self, sql: &str) {
        self.push(sql.to_string());
    }
}

/// Adapts a closure into a [`StatementSink`].
pub struct FnSink<F>(pub F);

impl<F: FnMut(&str)> StatementSink for FnSink<F> {
    fn statement_created(&mut self, sql: &str) {
        (self.0)(sql);
    }
}

/// A single-use compilation pass.
///
/// The join registry accumulates for the lifetime of the compiler, so
/// [`compile`](Self::compile) consumes it; build a fresh compiler per batch.
pub struct SchemaCompiler<'a> {
    config: SchemaConfig,
    resolver: &'a dyn TypeResolver,
    column_types: Box<dyn ColumnTypes + 'a>,
    naming: Box<dyn NamingPolicy + 'a>,
    joins: JoinRegistry,
}

impl<'a> SchemaCompiler<'a> {
    /// Compiler with the default configuration (SQLite, no table prefix).
    #[must_use]
    pub fn new(resolver: &'a dyn TypeResolver) -> Self {
        Self::from_parts(resolver, SchemaConfig::default())
    }

    /// Compiler for a validated configuration.
    ///
    /// Column types and naming follow the configuration's dialect and table
    /// prefix unless replaced afterwards.
    pub fn with_config(resolver: &'a dyn TypeResolver, config: SchemaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(resolver, config))
    }

    fn from_parts(resolver: &'a dyn TypeResolver, config: SchemaConfig) -> Self {
        Self {
            column_types: Box::new(StandardColumnTypes::new(config.dialect)),
            naming: Box::new(DefaultNaming::with_prefix(config.table_prefix.clone())),
            resolver,
            config,
            joins: JoinRegistry::new(),
        }
    }

    /// Replace the column-type policy.
    pub fn column_types(mut self, column_types: impl ColumnTypes + 'a) -> Self {
        self.column_types = Box::new(column_types);
        self
    }

    /// Replace the naming policy.
    pub fn naming(mut self, naming: impl NamingPolicy + 'a) -> Self {
        self.naming = Box::new(naming);
        self
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }

    /// Compile `records` and stream every statement to `sink`.
    ///
    /// All fields of the batch are classified before the first statement is
    /// emitted, so a failing pass emits nothing. Returns the number of
    /// statements emitted.
    #[tracing::instrument(level = "debug", skip_all, fields(records = records.len(), dialect = %self.config.dialect))]
    pub fn compile<S>(mut self, records: &[&'static RecordInfo], sink: &mut S) -> Result<usize>
    where
        S: StatementSink + ?Sized,
    {
        let statements = self.plan(records)?;

        for stmt in &statements {
            tracing::trace!(sql = %stmt, "Generated DDL statement");
            sink.statement_created(stmt);
        }

        Ok(statements.len())
    }

    /// Compile `records` into a vector of statements.
    pub fn compile_to_vec(self, records: &[&'static RecordInfo]) -> Result<Vec<String>> {
        let mut out = Vec::new();
        self.compile(records, &mut out)?;
        Ok(out)
    }

    /// Compile every record in `registry`, in registration order, resolving
    /// list element types through the same registry.
    pub fn compile_registry<S>(
        registry: &TypeRegistry,
        config: SchemaConfig,
        sink: &mut S,
    ) -> Result<usize>
    where
        S: StatementSink + ?Sized,
    {
        let records = registry.records();
        SchemaCompiler::with_config(registry, config)?.compile(&records, sink)
    }

    fn plan(&mut self, records: &[&'static RecordInfo]) -> Result<Vec<String>> {
        let templates = self.config.dialect.templates();
        let mut statements = Vec::with_capacity(records.len());

        for &record in records {
            statements.push(self.table_statement(record)?);
        }
        let table_count = statements.len();

        for join in self.joins.drain() {
            let join_table = self
                .naming
                .join_table_name(join.owner, join.child, join.field);
            let owner_table = self.naming.table_name(join.owner);
            let child_table = self.naming.table_name(join.child);

            tracing::debug!(
                join_table = %join_table,
                owner = %owner_table,
                child = %child_table,
                kind = %join.kind,
                "Compiling join table"
            );

            statements.extend(ddl::join_statements(
                &join_table,
                &owner_table,
                &child_table,
                templates,
            ));
        }

        tracing::debug!(
            tables = table_count,
            join_statements = statements.len() - table_count,
            "Schema compiled"
        );

        Ok(statements)
    }

    fn table_statement(&mut self, record: &'static RecordInfo) -> Result<String> {
        let mut columns = Vec::new();
        let joins_before = self.joins.len();

        for field in record.all_fields() {
            let class = classify(record, field, self.resolver, self.column_types.as_ref())?;
            if let Some((kind, child)) = class.relation() {
                self.joins.register(record, field, child, kind);
            } else if let FieldClass::Column(column) = class {
                columns.push(column);
            }
        }

        let table_name = self.naming.table_name(record);
        tracing::debug!(
            record = record.name,
            table = %table_name,
            columns = columns.len(),
            joins = self.joins.len() - joins_before,
            "Compiling table"
        );

        Ok(ddl::table_statement(
            &table_name,
            &columns,
            self.config.dialect.templates(),
        ))
    }
}
