//! Static keyword, operator, function, data type and snippet tables per
//! dialect.
//!
//! Catalogs are immutable `'static` values selected once per editor session
//! with [`for_dialect`]. MySQL shares the PostgreSQL keyword, operator,
//! function and snippet tables and only substitutes its own data types.

mod cql;
mod mysql;
mod pgsql;

use schemars::JsonSchema;
use serde::Serialize;

use crate::types::Dialect;

/// One named entry of a catalog table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub key: &'static str,
    pub detail: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<&'static str>,
}

impl CatalogEntry {
    pub const fn new(key: &'static str, detail: &'static str) -> Self {
        Self {
            key,
            detail,
            insert_text: None,
        }
    }

    pub const fn with_insert(
        key: &'static str,
        detail: &'static str,
        insert_text: &'static str,
    ) -> Self {
        Self {
            key,
            detail,
            insert_text: Some(insert_text),
        }
    }

    /// Text inserted when the entry is accepted.
    pub fn insert_text(&self) -> &'static str {
        self.insert_text.unwrap_or(self.key)
    }
}

/// The completion vocabulary of one dialect.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialectCatalog {
    pub keywords: &'static [CatalogEntry],
    pub operators: &'static [&'static str],
    pub functions: &'static [CatalogEntry],
    pub data_types: &'static [CatalogEntry],
    pub snippets: &'static [CatalogEntry],
}

const PGSQL_TABLES: DialectCatalog = DialectCatalog {
    keywords: pgsql::KEYWORDS,
    operators: pgsql::OPERATORS,
    functions: pgsql::FUNCTIONS,
    data_types: pgsql::DATA_TYPES,
    snippets: pgsql::SNIPPETS,
};

static PGSQL: DialectCatalog = PGSQL_TABLES;

static MYSQL: DialectCatalog = DialectCatalog {
    data_types: mysql::DATA_TYPES,
    ..PGSQL_TABLES
};

static CQL: DialectCatalog = DialectCatalog {
    keywords: cql::KEYWORDS,
    operators: cql::OPERATORS,
    functions: cql::FUNCTIONS,
    data_types: cql::DATA_TYPES,
    snippets: cql::SNIPPETS,
};

/// Returns the catalog for `dialect`.
pub fn for_dialect(dialect: Dialect) -> &'static DialectCatalog {
    match dialect {
        Dialect::Pgsql => &PGSQL,
        Dialect::Mysql => &MYSQL,
        Dialect::Cql => &CQL,
    }
}

/// Symbolic operators recognised by the host's syntax highlighter.
const SYMBOL_OPERATORS: &[&str] = &[
    "=", ">", "<", "!", "~", "?", ":", "==", "<=", ">=", "!=", "<>", "&&", "||", "+", "-", "*",
    "/", "&", "|", "^", "%", "<<", ">>", "::",
];

/// Token sets for the host editor's syntax highlighter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDefinition {
    pub ignore_case: bool,
    pub keywords: Vec<String>,
    pub type_keywords: Vec<String>,
    pub operators: Vec<String>,
}

/// Builds the highlighter token sets for `dialect` from its catalog.
pub fn language_definition(dialect: Dialect) -> LanguageDefinition {
    let catalog = for_dialect(dialect);

    let keywords = catalog
        .keywords
        .iter()
        .chain(catalog.functions)
        .map(|entry| entry.key.to_string())
        .collect();

    let mut type_keywords: Vec<String> = Vec::new();
    for entry in catalog.data_types {
        let name = entry.key.to_lowercase();
        if !type_keywords.contains(&name) {
            type_keywords.push(name);
        }
    }

    let mut operators: Vec<String> = catalog.operators.iter().map(|op| op.to_string()).collect();
    for symbol in SYMBOL_OPERATORS {
        if !operators.iter().any(|op| op == symbol) {
            operators.push(symbol.to_string());
        }
    }

    LanguageDefinition {
        ignore_case: true,
        keywords,
        type_keywords,
        operators,
    }
}
