//! Statement classification and candidate planning.

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::catalog::{self, CatalogEntry, DialectCatalog};
use crate::error::PlanError;
use crate::lexical::LexicalContext;
use crate::schema_index::{ColumnRef, SchemaIndex, TableRef};
use crate::types::{Dialect, SuggestionItem};

use super::render::render;
use super::rules::{rules_for, Rule};

/// One unrendered suggestion chosen by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// The `*` column wildcard.
    SelectAll,
    Table(&'a TableRef),
    Column(&'a ColumnRef),
    Keyword(&'static CatalogEntry),
    Operator(&'static str),
    Function(&'static CatalogEntry),
    DataType(&'static CatalogEntry),
    Snippet(&'static CatalogEntry),
}

/// Leading keyword of the statement being completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Select,
    Create,
    Insert,
    Update,
    /// `DELETE FROM`; a bare `DELETE` is [`StatementKind::Other`].
    Delete,
    Alter,
    Drop,
    Other,
}

impl StatementKind {
    pub fn classify(lex: &LexicalContext) -> Self {
        match lex.token(0) {
            "select" => Self::Select,
            "create" => Self::Create,
            "insert" => Self::Insert,
            "update" => Self::Update,
            "delete" if lex.token(1) == "from" => Self::Delete,
            "alter" => Self::Alter,
            "drop" => Self::Drop,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Create => "create",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Alter => "alter",
            Self::Drop => "drop",
            Self::Other => "other",
        }
    }
}

/// Everything a rule may consult.
pub struct PlanContext<'a> {
    pub dialect: Dialect,
    pub catalog: &'static DialectCatalog,
    pub lex: &'a LexicalContext,
    pub schema: &'a SchemaIndex,
}

impl<'a> PlanContext<'a> {
    pub fn new(dialect: Dialect, lex: &'a LexicalContext, schema: &'a SchemaIndex) -> Self {
        Self {
            dialect,
            catalog: catalog::for_dialect(dialect),
            lex,
            schema,
        }
    }

    pub fn tables(&self) -> impl Iterator<Item = Candidate<'a>> + 'a {
        let schema: &'a SchemaIndex = self.schema;
        schema.all_tables().iter().map(Candidate::Table)
    }

    pub fn columns(&self) -> impl Iterator<Item = Candidate<'a>> + 'a {
        let schema: &'a SchemaIndex = self.schema;
        schema.all_columns().iter().map(Candidate::Column)
    }

    pub fn columns_of(&self, table: &str) -> impl Iterator<Item = Candidate<'a>> + 'a {
        let schema: &'a SchemaIndex = self.schema;
        schema.columns_of(table).map(Candidate::Column)
    }

    pub fn keywords(&self) -> impl Iterator<Item = Candidate<'a>> {
        self.catalog.keywords.iter().map(Candidate::Keyword)
    }

    pub fn operators(&self) -> impl Iterator<Item = Candidate<'a>> {
        self.catalog.operators.iter().copied().map(Candidate::Operator)
    }

    pub fn functions(&self) -> impl Iterator<Item = Candidate<'a>> {
        self.catalog.functions.iter().map(Candidate::Function)
    }

    pub fn data_types(&self) -> impl Iterator<Item = Candidate<'a>> {
        self.catalog.data_types.iter().map(Candidate::DataType)
    }

    pub fn snippets(&self) -> impl Iterator<Item = Candidate<'a>> {
        self.catalog.snippets.iter().map(Candidate::Snippet)
    }

    /// Keywords, then data types, then operators.
    pub fn fallback(&self) -> Vec<Candidate<'a>> {
        self.keywords()
            .chain(self.data_types())
            .chain(self.operators())
            .collect()
    }
}

/// Classifies the statement and picks the first applicable rule.
pub fn classify(
    dialect: Dialect,
    lex: &LexicalContext,
    schema: &SchemaIndex,
) -> (StatementKind, Option<&'static str>) {
    let ctx = PlanContext::new(dialect, lex, schema);
    let kind = StatementKind::classify(lex);
    let rule = select_rule(kind, &ctx).map(|rule| rule.name);
    (kind, rule)
}

fn select_rule(kind: StatementKind, ctx: &PlanContext<'_>) -> Option<&'static Rule> {
    rules_for(kind).iter().find(|rule| (rule.applies)(ctx))
}

/// Plans the candidates for the cursor described by `lex`.
///
/// Returns an empty list when no rule applies and an error when the query
/// fragment is too ambiguous to scope.
pub fn plan<'a>(
    dialect: Dialect,
    lex: &'a LexicalContext,
    schema: &'a SchemaIndex,
) -> Result<Vec<Candidate<'a>>, PlanError> {
    let ctx = PlanContext::new(dialect, lex, schema);
    let kind = StatementKind::classify(lex);

    let Some(rule) = select_rule(kind, &ctx) else {
        return Ok(Vec::new());
    };

    #[cfg(feature = "tracing")]
    trace!(statement = kind.as_str(), rule = rule.name, "planning completion");

    (rule.plan)(&ctx).map_err(|err| err.with_dialect(dialect))
}

/// Plans and renders suggestions, degrading any planning error to an empty
/// list.
pub fn complete(
    dialect: Dialect,
    lex: &LexicalContext,
    schema: &SchemaIndex,
) -> Vec<SuggestionItem> {
    match plan(dialect, lex, schema) {
        Ok(candidates) => render(&candidates, lex.replacement_range),
        Err(_err) => {
            #[cfg(feature = "tracing")]
            debug!(error = %_err, "completion planning failed");
            Vec::new()
        }
    }
}
