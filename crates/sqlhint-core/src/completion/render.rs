//! Maps planner candidates to completion items.

use crate::types::{
    CompletionItemKind, HostCompletionItem, HostKindMap, Range, SuggestionItem,
};

use super::planner::Candidate;

const SELECT_ALL_DETAIL: &str = "Select all fields";

impl Candidate<'_> {
    /// Renders this candidate with the given replacement range.
    pub fn to_item(&self, range: Range) -> SuggestionItem {
        let (label, kind, detail, insert_text) = match self {
            // Hosts show `*` with the table icon (Monaco `Field`).
            Candidate::SelectAll => ("*", CompletionItemKind::Table, SELECT_ALL_DETAIL, "*"),
            Candidate::Table(table) => (
                table.name.as_str(),
                CompletionItemKind::Table,
                table.detail.as_str(),
                table.name.as_str(),
            ),
            Candidate::Column(column) => (
                column.name.as_str(),
                CompletionItemKind::Column,
                column.detail.as_str(),
                column.name.as_str(),
            ),
            Candidate::Keyword(entry) => {
                (entry.key, CompletionItemKind::Keyword, entry.detail, entry.key)
            }
            Candidate::DataType(entry) => {
                (entry.key, CompletionItemKind::DataType, entry.detail, entry.key)
            }
            Candidate::Function(entry) => (
                entry.key,
                CompletionItemKind::Function,
                entry.detail,
                entry.insert_text(),
            ),
            Candidate::Snippet(entry) => (
                entry.key,
                CompletionItemKind::Snippet,
                entry.detail,
                entry.insert_text(),
            ),
            Candidate::Operator(op) => (*op, CompletionItemKind::Operator, *op, *op),
        };

        SuggestionItem {
            label: label.to_string(),
            kind,
            detail: detail.to_string(),
            insert_text: insert_text.to_string(),
            range,
        }
    }
}

/// Renders every candidate with the same replacement range.
pub fn render(candidates: &[Candidate<'_>], range: Range) -> Vec<SuggestionItem> {
    candidates
        .iter()
        .map(|candidate| candidate.to_item(range))
        .collect()
}

/// Renders candidates directly into the host editor's item shape.
pub fn render_for_host(
    candidates: &[Candidate<'_>],
    range: Range,
    kinds: &HostKindMap,
) -> Vec<HostCompletionItem> {
    candidates
        .iter()
        .map(|candidate| candidate.to_item(range).to_host(kinds))
        .collect()
}
