//! Per-session completion providers and the stateless request entry point.

use std::collections::HashMap;

#[cfg(feature = "tracing")]
use tracing::{debug, info_span};

use crate::catalog::{self, DialectCatalog};
use crate::lexical::{extract_with, LexicalContext};
use crate::schema_index::SchemaIndex;
use crate::types::{
    CompletionItemsResult, CompletionList, CompletionOptions, CompletionRequest, Dialect,
    HostKindMap, Position, SuggestionItem,
};

use super::planner::{classify, complete, plan};
use super::render::render;

/// Characters that make the host re-request completions.
pub const TRIGGER_CHARACTERS: [char; 4] = ['.', '"', '(', ','];

/// Maximum SQL input size (10MB) to prevent memory exhaustion.
const MAX_SQL_LENGTH: usize = 10 * 1024 * 1024;

/// Completion provider for one editor session: a dialect plus the schema of
/// the connection the editor is attached to.
#[derive(Debug, Clone)]
pub struct CompletionProvider {
    dialect: Dialect,
    schema: SchemaIndex,
    options: CompletionOptions,
    host_kinds: HostKindMap,
}

impl CompletionProvider {
    pub fn new(dialect: Dialect, schema: SchemaIndex) -> Self {
        Self {
            dialect,
            schema,
            options: CompletionOptions::default(),
            host_kinds: HostKindMap::default(),
        }
    }

    pub fn with_options(mut self, options: CompletionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_host_kinds(mut self, host_kinds: HostKindMap) -> Self {
        self.host_kinds = host_kinds;
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn language_id(&self) -> &'static str {
        self.dialect.language_id()
    }

    pub fn schema(&self) -> &SchemaIndex {
        &self.schema
    }

    pub fn catalog(&self) -> &'static DialectCatalog {
        catalog::for_dialect(self.dialect)
    }

    pub fn trigger_characters(&self) -> &'static [char] {
        &TRIGGER_CHARACTERS
    }

    pub fn lexical_context(&self, text: &str, position: Position) -> LexicalContext {
        extract_with(
            text,
            position.line_number,
            position.column,
            self.dialect,
            self.options.scope,
        )
    }

    /// Suggestions for the cursor at `position`, before host kind mapping.
    pub fn suggestions(&self, text: &str, position: Position) -> Vec<SuggestionItem> {
        let lex = self.lexical_context(text, position);
        complete(self.dialect, &lex, &self.schema)
    }

    /// The host editor's completion callback.
    pub fn provide_completion_items(&self, text: &str, position: Position) -> CompletionList {
        let suggestions = self
            .suggestions(text, position)
            .iter()
            .map(|item| item.to_host(&self.host_kinds))
            .collect();
        CompletionList { suggestions }
    }
}

/// Providers keyed by the editor language id they are registered under.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<&'static str, CompletionProvider>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `provider` under its dialect's language id, returning the
    /// provider it replaces.
    pub fn register(&mut self, provider: CompletionProvider) -> Option<CompletionProvider> {
        self.providers.insert(provider.language_id(), provider)
    }

    pub fn unregister(&mut self, language_id: &str) -> Option<CompletionProvider> {
        self.providers.remove(language_id)
    }

    pub fn get(&self, language_id: &str) -> Option<&CompletionProvider> {
        self.providers.get(language_id)
    }

    pub fn language_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.providers.keys().copied()
    }

    /// Dispatches to the provider for `language_id`; unknown languages get
    /// an empty list.
    pub fn provide_completion_items(
        &self,
        language_id: &str,
        text: &str,
        position: Position,
    ) -> CompletionList {
        self.get(language_id)
            .map(|provider| provider.provide_completion_items(text, position))
            .unwrap_or_default()
    }
}

/// Stateless completion for a single JSON-shaped request.
///
/// Invalid requests are reported through [`CompletionItemsResult::error`].
/// Planning ambiguities are not errors: they produce an empty list.
pub fn completion_items(request: &CompletionRequest) -> CompletionItemsResult {
    #[cfg(feature = "tracing")]
    let _span = info_span!(
        "completion_items",
        dialect = %request.dialect,
        sql_len = request.sql.len()
    )
    .entered();

    let dialect = request.dialect;
    let sql_len = request.sql.len();

    if sql_len > MAX_SQL_LENGTH {
        return CompletionItemsResult::from_error(
            dialect,
            format!(
                "SQL exceeds maximum length of {} bytes ({} bytes provided)",
                MAX_SQL_LENGTH, sql_len
            ),
        );
    }

    let Position {
        line_number,
        column,
    } = request.position;
    if line_number == 0 || column == 0 {
        return CompletionItemsResult::from_error(
            dialect,
            format!("position ({line_number}, {column}) must be 1-based"),
        );
    }

    let schema = request
        .schema
        .as_ref()
        .map(SchemaIndex::from_metadata)
        .unwrap_or_default();
    let lex = extract_with(
        &request.sql,
        line_number,
        column,
        dialect,
        request.options.scope,
    );
    let (_, rule) = classify(dialect, &lex, &schema);

    let suggestions = match plan(dialect, &lex, &schema) {
        Ok(candidates) => render(&candidates, lex.replacement_range),
        Err(_err) => {
            #[cfg(feature = "tracing")]
            debug!(error = %_err, "completion planning failed");
            Vec::new()
        }
    };

    CompletionItemsResult {
        dialect,
        rule: rule.map(str::to_string),
        suggestions,
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColumnSource, CompletionItemKind, ScopeMode, TableSource};

    fn provider(dialect: Dialect) -> CompletionProvider {
        CompletionProvider::new(
            dialect,
            SchemaIndex::build(
                &[TableSource::new("users", Some("public"))],
                &[
                    ColumnSource::new("id", "users", "int4"),
                    ColumnSource::new("email", "users", "varchar"),
                ],
            ),
        )
    }

    #[test]
    fn test_provider_maps_kinds_for_host() {
        let list = provider(Dialect::Pgsql).provide_completion_items("select * from ", Position::new(1, 15));
        assert_eq!(list.suggestions.len(), 1);
        assert_eq!(list.suggestions[0].label, "users");
        assert_eq!(list.suggestions[0].kind, HostKindMap::monaco().table);

        let lsp = provider(Dialect::Pgsql)
            .with_host_kinds(HostKindMap::lsp())
            .provide_completion_items("select * from ", Position::new(1, 15));
        assert_eq!(lsp.suggestions[0].kind, HostKindMap::lsp().table);
    }

    #[test]
    fn test_provider_scope_option() {
        let text = "select *\nfrom ";
        let statement = provider(Dialect::Pgsql).suggestions(text, Position::new(2, 6));
        assert!(statement.iter().all(|item| item.kind != CompletionItemKind::Snippet));

        let line = provider(Dialect::Pgsql)
            .with_options(CompletionOptions {
                scope: ScopeMode::Line,
            })
            .suggestions(text, Position::new(2, 6));
        assert!(line.iter().any(|item| item.kind == CompletionItemKind::Snippet));
    }

    #[test]
    fn test_trigger_characters() {
        assert_eq!(provider(Dialect::Cql).trigger_characters(), &['.', '"', '(', ',']);
    }

    #[test]
    fn test_registry_dispatches_by_language_id() {
        let mut registry = ProviderRegistry::new();
        assert!(registry.register(provider(Dialect::Pgsql)).is_none());
        assert!(registry.register(provider(Dialect::Cql)).is_none());
        assert!(registry.register(provider(Dialect::Pgsql)).is_some());

        let mut ids: Vec<_> = registry.language_ids().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["cql", "pgsql"]);

        let list = registry.provide_completion_items("pgsql", "select * from ", Position::new(1, 15));
        assert_eq!(list.suggestions.len(), 1);

        let none = registry.provide_completion_items("mysql", "select * from ", Position::new(1, 15));
        assert!(none.suggestions.is_empty());

        assert!(registry.unregister("cql").is_some());
        assert!(registry.get("cql").is_none());
    }

    #[test]
    fn test_completion_items_rejects_oversized_sql() {
        let request = CompletionRequest {
            sql: "x".repeat(MAX_SQL_LENGTH + 1),
            dialect: Dialect::Pgsql,
            position: Position::new(1, 1),
            schema: None,
            options: CompletionOptions::default(),
        };
        let result = completion_items(&request);
        assert!(result.error.unwrap().contains("maximum length"));
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_completion_items_rejects_zero_position() {
        let request = CompletionRequest {
            sql: "select ".to_string(),
            dialect: Dialect::Mysql,
            position: Position::new(0, 3),
            schema: None,
            options: CompletionOptions::default(),
        };
        let result = completion_items(&request);
        assert!(result.error.is_some());
        assert_eq!(result.dialect, Dialect::Mysql);
    }

    #[test]
    fn test_completion_items_reports_rule() {
        let request = CompletionRequest {
            sql: "select ".to_string(),
            dialect: Dialect::Pgsql,
            position: Position::new(1, 8),
            schema: None,
            options: CompletionOptions::default(),
        };
        let result = completion_items(&request);
        assert_eq!(result.rule.as_deref(), Some("select.column_list"));
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.suggestions[0].label, "*");
        assert!(result.error.is_none());
    }
}
