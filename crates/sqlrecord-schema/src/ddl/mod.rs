//! DDL statement builders.
//!
//! Dialect differences live entirely in [`DialectTemplates`] values (see the
//! `sqlite` and `mysql` submodules). The builders here only substitute names
//! and column lists into those templates.
//!
//! Placeholders recognised in templates:
//!
//! | Placeholder     | Value                                   |
//! |-----------------|-----------------------------------------|
//! | `{table}`       | record table name                       |
//! | `{columns}`     | rendered column clauses (may be empty)  |
//! | `{join_table}`  | join table name                         |
//! | `{owner_table}` | owning record's table name              |
//! | `{child_table}` | child record's table name               |

pub mod mysql;
pub mod sqlite;

use crate::columns::Column;

/// SQL templates for one dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectTemplates {
    /// `CREATE TABLE` for a record; uses `{table}` and `{columns}`.
    pub table: &'static str,
    /// `CREATE TABLE` for a join table; uses `{join_table}`, `{owner_table}`, `{child_table}`.
    pub join_table: &'static str,
    /// Companion index for a join table, if the dialect needs a separate statement.
    pub join_index: Option<&'static str>,
}

/// Build the `CREATE TABLE` statement for one record.
///
/// Each column renders as `",\n<name> <type>"`, appended after the identity
/// columns supplied by the template.
pub fn table_statement(
    table_name: &str,
    columns: &[Column],
    templates: &DialectTemplates,
) -> String {
    let rendered: String = columns
        .iter()
        .map(|c| format!(",\n{}", c.to_sql()))
        .collect();

    render(
        templates.table,
        &[("table", table_name), ("columns", rendered.as_str())],
    )
}

/// Build the statement(s) for one join table: the table itself, followed by
/// its index when the dialect has a separate index template.
pub fn join_statements(
    join_table: &str,
    owner_table: &str,
    child_table: &str,
    templates: &DialectTemplates,
) -> Vec<String> {
    let vars = [
        ("join_table", join_table),
        ("owner_table", owner_table),
        ("child_table", child_table),
    ];

    let mut stmts = vec![render(templates.join_table, &vars)];
    if let Some(index) = templates.join_index {
        stmts.push(render(index, &vars));
    }
    stmts
}

/// Single-pass placeholder substitution.
///
/// Substituted values are never rescanned, and unknown placeholders are kept
/// verbatim.
fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = &after[..end];
        match vars.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..=start + end + 1]),
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

// ============================================================================
// Unit Tests
// ============================================================================
