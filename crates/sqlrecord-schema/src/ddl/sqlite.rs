//! SQLite (generic) DDL templates.
//!
//! SQLite has no inline index clause in `CREATE TABLE`, so every join table is
//! followed by a separate `CREATE INDEX` on its parent column.

use super::DialectTemplates;

/// Templates for SQLite and other generic SQL engines.
pub const TEMPLATES: DialectTemplates = DialectTemplates {
    table: "CREATE TABLE {table} (\
            \nrecord_id varchar(255) primary key,\
            \nrecord_created long,\
            \nrecord_updated long,\
            \nrecord_version long\
            {columns}\
            \n)",
    join_table: "CREATE TABLE {join_table} (\
                 \njoin_id integer primary key autoincrement,\
                 \nparent_id varchar(255) NOT NULL,\
                 \nchild_id varchar(255) NOT NULL,\
                 \nFOREIGN KEY (parent_id) REFERENCES {owner_table}(record_id) ON DELETE CASCADE,\
                 \nFOREIGN KEY (child_id) REFERENCES {child_table}(record_id) ON DELETE CASCADE\
                 \n)",
    join_index: Some("CREATE INDEX {join_table}_idx ON {join_table}(parent_id)"),
};
