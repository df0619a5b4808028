use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Dialect, Range};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum CompletionItemKind {
    Table,
    Column,
    Keyword,
    Operator,
    Function,
    DataType,
    Snippet,
}

/// One candidate completion, before host-specific kind mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionItem {
    pub label: String,
    pub kind: CompletionItemKind,
    pub detail: String,
    pub insert_text: String,
    pub range: Range,
}

impl SuggestionItem {
    pub fn to_host(&self, kinds: &HostKindMap) -> HostCompletionItem {
        HostCompletionItem {
            label: self.label.clone(),
            kind: kinds.kind_for(self.kind),
            detail: self.detail.clone(),
            insert_text: self.insert_text.clone(),
            range: self.range,
        }
    }
}

/// Numeric completion kinds of the host editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HostKindMap {
    pub table: u32,
    pub column: u32,
    pub keyword: u32,
    pub operator: u32,
    pub function: u32,
    pub data_type: u32,
    pub snippet: u32,
}

impl HostKindMap {
    /// Monaco `languages.CompletionItemKind` values.
    pub const fn monaco() -> Self {
        Self {
            table: 3,     // Field
            column: 13,   // Value
            keyword: 17,  // Keyword
            operator: 11, // Operator
            function: 11, // Operator
            data_type: 17,
            snippet: 27,
        }
    }

    /// LSP `CompletionItemKind` values.
    pub const fn lsp() -> Self {
        Self {
            table: 7,  // Class
            column: 5, // Field
            keyword: 14,
            operator: 24,
            function: 3,
            data_type: 25, // TypeParameter
            snippet: 15,
        }
    }

    pub fn kind_for(&self, kind: CompletionItemKind) -> u32 {
        match kind {
            CompletionItemKind::Table => self.table,
            CompletionItemKind::Column => self.column,
            CompletionItemKind::Keyword => self.keyword,
            CompletionItemKind::Operator => self.operator,
            CompletionItemKind::Function => self.function,
            CompletionItemKind::DataType => self.data_type,
            CompletionItemKind::Snippet => self.snippet,
        }
    }
}

impl Default for HostKindMap {
    fn default() -> Self {
        Self::monaco()
    }
}

/// A completion item in the host editor's shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HostCompletionItem {
    pub label: String,
    pub kind: u32,
    pub detail: String,
    pub insert_text: String,
    pub range: Range,
}

/// Return value of `provideCompletionItems`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct CompletionList {
    pub suggestions: Vec<HostCompletionItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItemsResult {
    pub dialect: Dialect,
    /// Name of the planner rule that produced the suggestions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    pub suggestions: Vec<SuggestionItem>,
    /// Error message if the request could not be processed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CompletionItemsResult {
    pub fn empty(dialect: Dialect) -> Self {
        Self {
            dialect,
            rule: None,
            suggestions: Vec::new(),
            error: None,
        }
    }

    pub fn from_error(dialect: Dialect, message: impl Into<String>) -> Self {
        Self {
            dialect,
            rule: None,
            suggestions: Vec::new(),
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monaco_kind_mapping_matches_console() {
        let kinds = HostKindMap::monaco();
        assert_eq!(kinds.kind_for(CompletionItemKind::Table), 3);
        assert_eq!(kinds.kind_for(CompletionItemKind::Column), 13);
        assert_eq!(
            kinds.kind_for(CompletionItemKind::DataType),
            kinds.kind_for(CompletionItemKind::Keyword)
        );
        assert_eq!(
            kinds.kind_for(CompletionItemKind::Function),
            kinds.kind_for(CompletionItemKind::Operator)
        );
    }

    #[test]
    fn test_to_host_keeps_range_and_text() {
        let item = SuggestionItem {
            label: "users".to_string(),
            kind: CompletionItemKind::Table,
            detail: "Table in Schema: public".to_string(),
            insert_text: "users".to_string(),
            range: Range::on_line(1, 15, 17),
        };
        let host = item.to_host(&HostKindMap::lsp());
        assert_eq!(host.kind, 7);
        assert_eq!(host.range, item.range);
        assert_eq!(host.insert_text, "users");
    }

    #[test]
    fn test_host_item_wire_names() {
        let list = CompletionList {
            suggestions: vec![HostCompletionItem {
                label: "id".to_string(),
                kind: 13,
                detail: String::new(),
                insert_text: "id".to_string(),
                range: Range::on_line(1, 1, 1),
            }],
        };
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["suggestions"][0]["insertText"], "id");
    }
}
