//! SQL dialect selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ddl::{self, DialectTemplates};

/// SQL dialect targeted by a compilation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// SQLite and other generic SQL engines.
    #[default]
    Sqlite,
    /// MySQL / MariaDB.
    Mysql,
}

impl Dialect {
    /// Dialect name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dialect::Sqlite => "sqlite",
            Dialect::Mysql => "mysql",
        }
    }

    /// Whether this is the MySQL dialect.
    #[must_use]
    pub const fn is_mysql(&self) -> bool {
        matches!(self, Dialect::Mysql)
    }

    /// DDL templates for this dialect.
    #[must_use]
    pub const fn templates(&self) -> &'static DialectTemplates {
        match self {
            Dialect::Sqlite => &ddl::sqlite::TEMPLATES,
            Dialect::Mysql => &ddl::mysql::TEMPLATES,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
