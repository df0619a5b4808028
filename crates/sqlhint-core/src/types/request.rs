//! Request-side types: dialects, options and schema metadata.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Position;

/// Query language variant served by the completion engine.
///
/// The serialized form is the editor language id the provider is registered
/// under (`pgsql`, `mysql`, `cql`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// PostgreSQL.
    #[default]
    Pgsql,
    /// MySQL / MariaDB.
    Mysql,
    /// Cassandra Query Language.
    Cql,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Pgsql, Dialect::Mysql, Dialect::Cql];

    /// The editor language id for this dialect.
    pub fn language_id(&self) -> &'static str {
        match self {
            Self::Pgsql => "pgsql",
            Self::Mysql => "mysql",
            Self::Cql => "cql",
        }
    }

    /// Maps a connection's product name (as reported by the connections
    /// service) to a dialect. Matching is case-insensitive.
    pub fn from_product_name(product: &str) -> Option<Self> {
        match product.trim().to_ascii_lowercase().as_str() {
            "postgresql" | "postgres" => Some(Self::Pgsql),
            "mysql" | "mariadb" => Some(Self::Mysql),
            "cassandra" | "scylla" | "scylladb" => Some(Self::Cql),
            _ => None,
        }
    }

    /// CQL has no JOIN clause, so join correlation never applies there.
    pub fn supports_join(&self) -> bool {
        !matches!(self, Self::Cql)
    }

    /// Tokenizer dialect used to locate statement boundaries.
    pub fn to_sqlparser_dialect(&self) -> Box<dyn sqlparser::dialect::Dialect> {
        use sqlparser::dialect::{GenericDialect, MySqlDialect, PostgreSqlDialect};
        match self {
            Self::Pgsql => Box::new(PostgreSqlDialect {}),
            Self::Mysql => Box::new(MySqlDialect {}),
            Self::Cql => Box::new(GenericDialect {}),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.language_id())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pgsql" => Ok(Self::Pgsql),
            "mysql" => Ok(Self::Mysql),
            "cql" => Ok(Self::Cql),
            other => {
                Self::from_product_name(other).ok_or_else(|| format!("Unknown dialect: {value}"))
            }
        }
    }
}

/// Which prefix of the buffer is treated as the query being completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScopeMode {
    /// From the last `;` before the cursor.
    #[default]
    Statement,
    /// From the start of the buffer.
    Document,
    /// From the start of the cursor line.
    Line,
}

/// Tunables for a completion request or provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct CompletionOptions {
    #[serde(default)]
    pub scope: ScopeMode,
}

/// Schema metadata for one schema (or keyspace) of a connection, in the
/// shape the connections service returns it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct SchemaMetadata {
    /// Schema or keyspace the tables belong to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default)]
    pub tables: Vec<SchemaTable>,
}

impl SchemaMetadata {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchemaTable {
    pub name: String,
    /// Overrides [`SchemaMetadata::schema`] for this table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnSchema>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSchema {
    pub name: String,
    #[serde(default)]
    pub data_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_primary_key: Option<bool>,
    // The connections service historically spelled this `isForegnKey`.
    #[serde(default, alias = "isForegnKey", skip_serializing_if = "Option::is_none")]
    pub is_foreign_key: Option<bool>,
}

/// A table known to the connection, as fed to [`crate::SchemaIndex::build`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableSource {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

impl TableSource {
    pub fn new(name: impl Into<String>, schema: Option<&str>) -> Self {
        Self {
            name: name.into(),
            schema: schema.map(str::to_string),
        }
    }
}

/// A column of a known table, as fed to [`crate::SchemaIndex::build`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSource {
    pub name: String,
    pub table: String,
    #[serde(default)]
    pub data_type: String,
}

impl ColumnSource {
    pub fn new(
        name: impl Into<String>,
        table: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            data_type: data_type.into(),
        }
    }
}

/// A stateless completion request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    /// Full editor buffer.
    pub sql: String,
    #[serde(default)]
    pub dialect: Dialect,
    /// Cursor position (1-based line and character column).
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaMetadata>,
    #[serde(default)]
    pub options: CompletionOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_language_ids_round_trip() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect.language_id().parse::<Dialect>(), Ok(dialect));
        }
    }

    #[test]
    fn test_dialect_from_product_name() {
        assert_eq!(Dialect::from_product_name("PostgreSQL"), Some(Dialect::Pgsql));
        assert_eq!(Dialect::from_product_name("mysql"), Some(Dialect::Mysql));
        assert_eq!(Dialect::from_product_name("Cassandra"), Some(Dialect::Cql));
        assert_eq!(Dialect::from_product_name("kafka"), None);
    }

    #[test]
    fn test_dialect_parse_accepts_product_names() {
        assert_eq!("cassandra".parse::<Dialect>(), Ok(Dialect::Cql));
        assert!("oracle".parse::<Dialect>().is_err());
    }

    #[test]
    fn test_only_cql_lacks_join() {
        assert!(Dialect::Pgsql.supports_join());
        assert!(Dialect::Mysql.supports_join());
        assert!(!Dialect::Cql.supports_join());
    }

    #[test]
    fn test_schema_metadata_accepts_legacy_foreign_key_spelling() {
        let json = r#"{
            "schema": "public",
            "tables": [
                {
                    "name": "orders",
                    "columns": [
                        { "name": "user_id", "dataType": "int4", "isForegnKey": true }
                    ]
                }
            ]
        }"#;
        let metadata = SchemaMetadata::from_json(json).unwrap();
        assert_eq!(metadata.schema.as_deref(), Some("public"));
        assert_eq!(metadata.tables[0].columns[0].is_foreign_key, Some(true));
    }

    #[test]
    fn test_request_defaults() {
        let json = r#"{"sql": "select ", "position": {"lineNumber": 1, "column": 8}}"#;
        let request: CompletionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.dialect, Dialect::Pgsql);
        assert_eq!(request.options.scope, ScopeMode::Statement);
        assert!(request.schema.is_none());
    }
}
