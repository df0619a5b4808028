pub mod catalog;
pub mod completion;
pub mod error;
pub mod lexical;
pub mod schema_index;
pub mod types;

// Re-export main types and functions
pub use catalog::{
    for_dialect, language_definition, CatalogEntry, DialectCatalog, LanguageDefinition,
};
pub use completion::{
    classify, complete, completion_items, plan, render, render_for_host, Candidate,
    CompletionProvider, PlanContext, ProviderRegistry, StatementKind, TRIGGER_CHARACTERS,
};
pub use error::{AmbiguityKind, PlanError};
pub use lexical::{extract, extract_with, LexicalContext};
pub use schema_index::{ColumnRef, SchemaIndex, TableRef};

// Re-export types explicitly
pub use types::{
    ColumnSchema, ColumnSource, CompletionItemKind, CompletionItemsResult, CompletionList,
    CompletionOptions, CompletionRequest, Dialect, HostCompletionItem, HostKindMap, Position,
    Range, SchemaMetadata, SchemaTable, ScopeMode, SuggestionItem, TableSource,
};
