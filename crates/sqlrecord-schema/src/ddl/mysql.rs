//! MySQL DDL templates.
//!
//! MySQL declares the join-table index inline, so no companion `CREATE INDEX`
//! statement is emitted.

use super::DialectTemplates;

/// Templates for MySQL.
pub const TEMPLATES: DialectTemplates = DialectTemplates {
    table: "CREATE TABLE {table} (\
            \nrecord_id VARCHAR(255) PRIMARY KEY,\
            \nrecord_created BIGINT,\
            \nrecord_updated BIGINT,\
            \nrecord_version BIGINT\
            {columns}\
            \n)",
    join_table: "CREATE TABLE {join_table} (\
                 \njoin_id INT PRIMARY KEY AUTO_INCREMENT,\
                 \nparent_id VARCHAR(255) NOT NULL,\
                 \nchild_id VARCHAR(255) NOT NULL,\
                 \nINDEX {join_table}_idx (parent_id),\
                 \nFOREIGN KEY (parent_id) REFERENCES {owner_table}(record_id) ON DELETE CASCADE,\
                 \nFOREIGN KEY (child_id) REFERENCES {child_table}(record_id) ON DELETE CASCADE\
                 \n)",
    join_index: None,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::Column;
    use crate::ddl::{join_statements, table_statement};

    #[test]
    fn test_create_table() {
        let sql = table_statement("heroes", &[Column::new("name", "TEXT")], &TEMPLATES);
        assert!(sql.starts_with("CREATE TABLE heroes (\nrecord_id VARCHAR(255) PRIMARY KEY"));
        assert!(sql.ends_with(",\nname TEXT\n)"));
    }

    #[test]
    fn test_join_table_has_inline_index_only() {
        let stmts = join_statements("heroes_powers_powers", "heroes", "powers", &TEMPLATES);

        assert_eq!(stmts.len(), 1);
        assert!(stmts[0].contains("INDEX heroes_powers_powers_idx (parent_id)"));
        assert!(stmts[0].contains("REFERENCES heroes(record_id)"));
        assert!(stmts[0].contains("REFERENCES powers(record_id)"));
        assert!(stmts[0].contains("AUTO_INCREMENT"));
    }
}
