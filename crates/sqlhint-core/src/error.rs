//! Error types for completion planning.
//!
//! # Error Handling Strategy
//!
//! Planning has a single, recoverable failure kind: the query fragment in
//! front of the cursor is too incomplete or ambiguous to classify (a JOIN
//! clause with no `ON`, a qualifier with no table name, and so on).
//!
//! - [`PlanError`] is returned by [`crate::completion::plan`] so every
//!   failure path can be asserted on directly.
//! - [`crate::completion::complete`] and the provider entry points convert it
//!   into an empty suggestion list. Partial SQL must never break the editing
//!   session.

use thiserror::Error;

use crate::types::Dialect;

/// The query fragment could not be classified for completion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Ambiguous query{}: {message}", dialect_suffix(.dialect))]
pub struct PlanError {
    /// Human-readable error message.
    pub message: String,
    /// The dialect being completed when the error occurred.
    pub dialect: Option<Dialect>,
    /// Which part of the query was ambiguous.
    pub kind: AmbiguityKind,
}

/// Category of ambiguity for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmbiguityKind {
    /// A `FROM … JOIN … ON` fragment could not be located on the line.
    #[default]
    MalformedJoin,
    /// A correlation pattern built from user text did not compile.
    InvalidPattern,
    /// A table-qualified position had no usable table name.
    MissingTableName,
}

impl PlanError {
    pub fn new(kind: AmbiguityKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            dialect: None,
            kind,
        }
    }

    /// Adds dialect context to the error.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = Some(dialect);
        self
    }
}

fn dialect_suffix(dialect: &Option<Dialect>) -> String {
    dialect.map(|d| format!(" ({d})")).unwrap_or_default()
}
