//! Human-readable table output formatting.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use sqlhint_core::{
    CatalogEntry, CompletionItemKind, CompletionItemsResult, Dialect, DialectCatalog,
};
use std::fmt::Write;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct SuggestionRow<'a> {
    #[tabled(rename = "Label")]
    label: &'a str,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Detail")]
    detail: &'a str,
    #[tabled(rename = "Insert")]
    insert_text: &'a str,
}

#[derive(Tabled)]
struct EntryRow<'a> {
    #[tabled(rename = "Key")]
    key: &'a str,
    #[tabled(rename = "Detail")]
    detail: &'a str,
    #[tabled(rename = "Insert")]
    insert_text: &'a str,
}

/// Format the completion result as a human-readable table with optional colors.
pub fn format_table(result: &CompletionItemsResult, quiet: bool, use_colors: bool) -> String {
    let colored = use_colors && std::io::stdout().is_terminal();
    let mut out = String::new();

    if !quiet {
        write_header(&mut out, "SQLHint Completions", colored);
        write_summary(&mut out, result, colored);
    }

    if result.suggestions.is_empty() {
        writeln!(out, "No suggestions").unwrap();
        return out;
    }

    let rows = result.suggestions.iter().map(|item| SuggestionRow {
        label: &item.label,
        kind: kind_label(item.kind),
        detail: &item.detail,
        insert_text: &item.insert_text,
    });
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    writeln!(out, "{table}").unwrap();

    out
}

/// Format a dialect catalog as one table per vocabulary category.
pub fn format_catalog_table(
    dialect: Dialect,
    catalog: &DialectCatalog,
    use_colors: bool,
) -> String {
    let colored = use_colors && std::io::stdout().is_terminal();
    let mut out = String::new();

    write_header(&mut out, &format!("SQLHint Catalog ({dialect})"), colored);

    write_entries(&mut out, "Keywords", catalog.keywords, colored);

    let operators: Vec<CatalogEntry> = catalog
        .operators
        .iter()
        .copied()
        .map(|op| CatalogEntry::new(op, op))
        .collect();
    write_entries(&mut out, "Operators", &operators, colored);

    write_entries(&mut out, "Functions", catalog.functions, colored);
    write_entries(&mut out, "Data types", catalog.data_types, colored);
    write_entries(&mut out, "Snippets", catalog.snippets, colored);

    out
}

fn write_header(out: &mut String, title: &str, colored: bool) {
    let line = "═".repeat(50);

    if colored {
        writeln!(out, "{}", title.bold()).unwrap();
        writeln!(out, "{}", line.dimmed()).unwrap();
    } else {
        writeln!(out, "{title}").unwrap();
        writeln!(out, "{line}").unwrap();
    }
}

fn write_summary(out: &mut String, result: &CompletionItemsResult, colored: bool) {
    let stats = format!(
        "Dialect: {} | Rule: {} | {} suggestions",
        result.dialect,
        result.rule.as_deref().unwrap_or("none"),
        result.suggestions.len()
    );

    if colored {
        writeln!(out, "{}", stats.cyan()).unwrap();
    } else {
        writeln!(out, "{stats}").unwrap();
    }

    writeln!(out).unwrap();
}

fn write_entries(out: &mut String, title: &str, entries: &[CatalogEntry], colored: bool) {
    let heading = format!("{title} ({}):", entries.len());
    writeln!(out).unwrap();
    if colored {
        writeln!(out, "{}", heading.bold()).unwrap();
    } else {
        writeln!(out, "{heading}").unwrap();
    }

    let rows = entries.iter().map(|entry| EntryRow {
        key: entry.key,
        detail: entry.detail,
        insert_text: entry.insert_text(),
    });
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    writeln!(out, "{table}").unwrap();
}

fn kind_label(kind: CompletionItemKind) -> &'static str {
    match kind {
        CompletionItemKind::Table => "table",
        CompletionItemKind::Column => "column",
        CompletionItemKind::Keyword => "keyword",
        CompletionItemKind::Operator => "operator",
        CompletionItemKind::Function => "function",
        CompletionItemKind::DataType => "data type",
        CompletionItemKind::Snippet => "snippet",
    }
}
