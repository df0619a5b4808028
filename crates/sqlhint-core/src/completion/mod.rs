//! SQL/CQL completion.
//!
//! The planner classifies the statement in front of the cursor and runs the
//! first matching rule for it; the renderer turns the resulting candidates
//! into completion items.

mod join;
mod planner;
mod provider;
mod render;
mod rules;

pub use planner::{classify, complete, plan, Candidate, PlanContext, StatementKind};
pub use provider::{completion_items, CompletionProvider, ProviderRegistry, TRIGGER_CHARACTERS};
pub use render::{render, render_for_host};
