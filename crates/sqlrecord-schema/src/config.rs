//! Schema compiler configuration.
//!
//! Configuration can be built in code or loaded from JSON:
//!
//! ```
//! use sqlrecord_schema::{Dialect, SchemaConfig};
//!
//! let config = SchemaConfig::from_json(r#"{"dialect": "mysql", "table_prefix": "app_"}"#).unwrap();
//! assert_eq!(config.dialect, Dialect::Mysql);
//! assert!(config.using_mysql());
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::error::{Result, SchemaError};

const TABLE_PREFIX_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

/// Options for one compilation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaConfig {
    /// Target SQL dialect (default: sqlite)
    pub dialect: Dialect,
    /// Prefix for generated table names (default: none)
    pub table_prefix: String,
}

impl SchemaConfig {
    /// Default configuration (SQLite, no prefix).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// MySQL configuration with no prefix.
    #[must_use]
    pub fn mysql() -> Self {
        Self::new().dialect(Dialect::Mysql)
    }

    /// Set the dialect.
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Set the table prefix.
    pub fn table_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_prefix = prefix.into();
        self
    }

    /// Whether the MySQL dialect is selected.
    #[must_use]
    pub const fn using_mysql(&self) -> bool {
        self.dialect.is_mysql()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the prefix is usable inside an unquoted SQL identifier.
    pub fn validate(&self) -> Result<()> {
        if self.table_prefix.is_empty() {
            return Ok(());
        }

        let re = Regex::new(TABLE_PREFIX_PATTERN)
            .map_err(|e| SchemaError::InvalidConfig(e.to_string()))?;
        if re.is_match(&self.table_prefix) {
            Ok(())
        } else {
            Err(SchemaError::InvalidConfig(format!(
                "table_prefix `{}` is not a valid SQL identifier",
                self.table_prefix
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SchemaConfig::new();
        assert_eq!(config.dialect, Dialect::Sqlite);
        assert!(config.table_prefix.is_empty());
        assert!(!config.using_mysql());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SchemaConfig::mysql().table_prefix("app_");
        assert!(config.using_mysql());
        assert_eq!(config.table_prefix, "app_");
    }

    #[test]
    fn test_from_json_partial() {
        let config = SchemaConfig::from_json(r#"{"table_prefix": "orm_"}"#).unwrap();
        assert_eq!(config.dialect, Dialect::Sqlite);
        assert_eq!(config.table_prefix, "orm_");
    }

    #[test]
    fn test_from_json_rejects_bad_prefix() {
        let err = SchemaConfig::from_json(r#"{"table_prefix": "bad prefix"}"#).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_json_rejects_unknown_keys() {
        let err = SchemaConfig::from_json(r#"{"dialekt": "mysql"}"#).unwrap_err();
        assert!(matches!(err, SchemaError::Json(_)));
    }

    #[test]
    fn test_from_json_rejects_unknown_dialect() {
        assert!(SchemaConfig::from_json(r#"{"dialect": "oracle"}"#).is_err());
    }
}
