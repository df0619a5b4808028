//! In-memory projection of one connection's tables and columns.
//!
//! A [`SchemaIndex`] is built once per schema selection and never updated;
//! a schema refresh builds a new one.

use std::collections::HashMap;

use serde::Serialize;
#[cfg(feature = "tracing")]
use tracing::debug;

use crate::types::{ColumnSource, SchemaMetadata, TableSource};

/// A table known to the current connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRef {
    pub name: String,
    /// Human-readable origin shown next to the suggestion.
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

impl TableRef {
    fn new(name: &str, schema: Option<&str>) -> Self {
        let detail = match schema {
            Some(schema) => format!("Table in Schema: {schema}"),
            None => "Table".to_string(),
        };
        Self {
            name: name.to_string(),
            detail,
            schema: schema.map(str::to_string),
        }
    }
}

/// One (table, column) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRef {
    pub name: String,
    pub detail: String,
    pub data_type: String,
    /// Name of the table this column belongs to. May not match any indexed
    /// table, in which case no lookup ever returns the column.
    pub owning_table: String,
}

impl ColumnRef {
    fn new(name: &str, owning_table: &str, data_type: &str) -> Self {
        Self {
            name: name.to_string(),
            detail: format!("Column in table {owning_table}: {name} | {data_type}"),
            data_type: data_type.to_string(),
            owning_table: owning_table.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SchemaIndex {
    tables: Vec<TableRef>,
    columns: Vec<ColumnRef>,
    /// Lowercased owning table name to positions in `columns`.
    columns_by_table: HashMap<String, Vec<usize>>,
}

impl SchemaIndex {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the index from flat table and column lists.
    ///
    /// Table names are deduplicated case-insensitively; the first occurrence
    /// wins. Columns keep their input order.
    pub fn build(tables: &[TableSource], columns: &[ColumnSource]) -> Self {
        let mut index = Self::default();
        for table in tables {
            index.push_table(&table.name, table.schema.as_deref());
        }
        for column in columns {
            index.push_column(ColumnRef::new(&column.name, &column.table, &column.data_type));
        }

        #[cfg(feature = "tracing")]
        debug!(
            tables = index.tables.len(),
            columns = index.columns.len(),
            "built schema index"
        );

        index
    }

    /// Builds the index from the connections service's tables-meta shape.
    pub fn from_metadata(metadata: &SchemaMetadata) -> Self {
        let tables: Vec<TableSource> = metadata
            .tables
            .iter()
            .map(|table| {
                let schema = table.schema.as_deref().or(metadata.schema.as_deref());
                TableSource::new(table.name.clone(), schema)
            })
            .collect();

        let columns: Vec<ColumnSource> = metadata
            .tables
            .iter()
            .flat_map(|table| {
                table.columns.iter().map(|column| {
                    ColumnSource::new(
                        column.name.clone(),
                        table.name.clone(),
                        column.data_type.clone(),
                    )
                })
            })
            .collect();

        Self::build(&tables, &columns)
    }

    fn push_table(&mut self, name: &str, schema: Option<&str>) {
        if self.contains_table(name) {
            return;
        }
        self.tables.push(TableRef::new(name, schema));
    }

    fn push_column(&mut self, column: ColumnRef) {
        let key = column.owning_table.to_lowercase();
        self.columns_by_table
            .entry(key)
            .or_default()
            .push(self.columns.len());
        self.columns.push(column);
    }

    pub fn all_tables(&self) -> &[TableRef] {
        &self.tables
    }

    pub fn all_columns(&self) -> &[ColumnRef] {
        &self.columns
    }

    /// Columns owned by `table`, matched case-insensitively. Surrounding
    /// double quotes on `table` are ignored.
    pub fn columns_of(&self, table: &str) -> impl Iterator<Item = &ColumnRef> + '_ {
        let key = normalize_table_name(table);
        self.columns_by_table
            .get(&key)
            .into_iter()
            .flatten()
            .filter_map(|&position| self.columns.get(position))
    }

    pub fn contains_table(&self, name: &str) -> bool {
        let key = normalize_table_name(name);
        self.tables
            .iter()
            .any(|table| table.name.to_lowercase() == key)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.columns.is_empty()
    }
}

fn normalize_table_name(name: &str) -> String {
    name.trim().trim_matches('"').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColumnSchema, SchemaTable};

    fn users_index() -> SchemaIndex {
        SchemaIndex::build(
            &[
                TableSource::new("users", Some("public")),
                TableSource::new("orders", None),
            ],
            &[
                ColumnSource::new("id", "users", "int4"),
                ColumnSource::new("email", "users", "varchar"),
                ColumnSource::new("id", "orders", "int4"),
                ColumnSource::new("note", "ghost", "text"),
            ],
        )
    }

    #[test]
    fn test_details() {
        let index = users_index();
        assert_eq!(index.all_tables()[0].detail, "Table in Schema: public");
        assert_eq!(index.all_tables()[1].detail, "Table");
        assert_eq!(
            index.all_columns()[1].detail,
            "Column in table users: email | varchar"
        );
    }

    #[test]
    fn test_columns_of_is_scoped_and_case_insensitive() {
        let index = users_index();
        let names: Vec<_> = index.columns_of("USERS").map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id", "email"]);

        let quoted: Vec<_> = index.columns_of("\"orders\"").collect();
        assert_eq!(quoted.len(), 1);
        assert_eq!(quoted[0].owning_table, "orders");
    }

    #[test]
    fn test_unknown_table_yields_no_columns() {
        let index = users_index();
        assert_eq!(index.columns_of("nope").count(), 0);
        assert_eq!(index.columns_of("").count(), 0);
    }

    #[test]
    fn test_dangling_columns_are_kept_but_never_scoped_to_a_known_table() {
        let index = users_index();
        assert!(!index.contains_table("ghost"));
        assert_eq!(index.all_columns().len(), 4);
    }

    #[test]
    fn test_duplicate_tables_first_wins() {
        let index = SchemaIndex::build(
            &[
                TableSource::new("Users", Some("a")),
                TableSource::new("users", Some("b")),
            ],
            &[],
        );
        assert_eq!(index.all_tables().len(), 1);
        assert_eq!(index.all_tables()[0].schema.as_deref(), Some("a"));
    }

    #[test]
    fn test_from_metadata() {
        let metadata = SchemaMetadata {
            schema: Some("public".to_string()),
            tables: vec![SchemaTable {
                name: "users".to_string(),
                schema: None,
                columns: vec![ColumnSchema {
                    name: "id".to_string(),
                    data_type: "int4".to_string(),
                    is_primary_key: Some(true),
                    is_foreign_key: None,
                }],
            }],
        };
        let index = SchemaIndex::from_metadata(&metadata);
        assert_eq!(index.all_tables()[0].detail, "Table in Schema: public");
        assert_eq!(index.columns_of("users").count(), 1);
    }

    #[test]
    fn test_empty() {
        let index = SchemaIndex::empty();
        assert!(index.is_empty());
        assert!(index.all_tables().is_empty());
    }
}
