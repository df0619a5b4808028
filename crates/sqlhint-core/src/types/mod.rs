//! Types for the SQLHint completion API.
//!
//! This module defines the request and response types shared by the engine,
//! the WASM boundary and the CLI. Wire names follow the editor host's
//! conventions (camelCase, Monaco `IRange` field names).

mod common;
mod completion;
mod request;

pub use common::{Position, Range};
pub use completion::{
    CompletionItemKind, CompletionItemsResult, CompletionList, HostCompletionItem, HostKindMap,
    SuggestionItem,
};
pub use request::{
    ColumnSchema, ColumnSource, CompletionOptions, CompletionRequest, Dialect, SchemaMetadata,
    SchemaTable, ScopeMode, TableSource,
};
