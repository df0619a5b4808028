//! Schema loading from JSON metadata files.

use anyhow::{Context, Result};
use serde::Deserialize;
use sqlhint_core::{SchemaMetadata, SchemaTable};
use std::path::Path;

/// Either the full metadata object or a bare list of tables.
#[derive(Deserialize)]
#[serde(untagged)]
enum SchemaFile {
    Metadata(SchemaMetadata),
    Tables(Vec<SchemaTable>),
}

/// Load schema metadata from a JSON file.
pub fn load_schema(path: &Path) -> Result<SchemaMetadata> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file: {}", path.display()))?;

    parse_schema_json(&content)
        .with_context(|| format!("Invalid schema metadata in {}", path.display()))
}

fn parse_schema_json(content: &str) -> Result<SchemaMetadata> {
    let schema = match serde_json::from_str::<SchemaFile>(content)? {
        SchemaFile::Metadata(metadata) => metadata,
        SchemaFile::Tables(tables) => SchemaMetadata {
            schema: None,
            tables,
        },
    };
    Ok(schema)
}
