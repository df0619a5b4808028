//! Per-statement rule tables.
//!
//! Each statement kind owns an ordered list of named rules; the first rule
//! whose predicate holds produces the candidates. `t[n]` in the rule docs
//! is the n-th query token, empty when the query is shorter.

use crate::error::{AmbiguityKind, PlanError};
use crate::lexical::is_word_char;
use crate::types::Dialect;

use super::join;
use super::planner::{Candidate, PlanContext, StatementKind};

type Planned<'a> = Result<Vec<Candidate<'a>>, PlanError>;

/// A named predicate and the planner it guards.
pub(crate) struct Rule {
    pub name: &'static str,
    pub applies: fn(&PlanContext<'_>) -> bool,
    pub plan: for<'a> fn(&PlanContext<'a>) -> Planned<'a>,
}

pub(crate) fn rules_for(kind: StatementKind) -> &'static [Rule] {
    match kind {
        StatementKind::Select => SELECT_RULES,
        StatementKind::Create => CREATE_RULES,
        StatementKind::Insert => INSERT_RULES,
        StatementKind::Update => UPDATE_RULES,
        StatementKind::Delete => DELETE_RULES,
        StatementKind::Alter => ALTER_RULES,
        StatementKind::Drop => DROP_RULES,
        StatementKind::Other => OTHER_RULES,
    }
}

fn always(_: &PlanContext<'_>) -> bool {
    true
}

fn fallback<'a>(ctx: &PlanContext<'a>) -> Planned<'a> {
    Ok(ctx.fallback())
}

fn tables<'a>(ctx: &PlanContext<'a>) -> Planned<'a> {
    Ok(ctx.tables().collect())
}

// SELECT

static SELECT_RULES: &[Rule] = &[
    Rule {
        name: "select.join",
        applies: select_has_join,
        plan: join::correlated_columns,
    },
    Rule {
        name: "select.column_list",
        applies: select_in_column_list,
        plan: select_column_list,
    },
    Rule {
        name: "select.qualified_columns",
        applies: select_has_qualifier,
        plan: select_qualified_columns,
    },
    Rule {
        name: "select.from_tables",
        applies: select_after_from,
        plan: tables,
    },
    Rule {
        name: "select.fallback",
        applies: always,
        plan: fallback,
    },
];

fn select_has_join(ctx: &PlanContext<'_>) -> bool {
    ctx.dialect.supports_join() && ctx.lex.line_contains("join")
}

/// `t[1]` is empty or the previous token ends with `,`.
fn select_in_column_list(ctx: &PlanContext<'_>) -> bool {
    ctx.lex.token(1).is_empty() || ctx.lex.last_token().ends_with(',')
}

fn select_column_list<'a>(ctx: &PlanContext<'a>) -> Planned<'a> {
    Ok(std::iter::once(Candidate::SelectAll)
        .chain(ctx.columns())
        .chain(ctx.tables())
        .collect())
}

fn select_has_qualifier(ctx: &PlanContext<'_>) -> bool {
    !ctx.lex.current_token().is_empty()
}

fn select_qualified_columns<'a>(ctx: &PlanContext<'a>) -> Planned<'a> {
    let table = qualifier_table(ctx.lex.current_token());
    if table.is_empty() {
        return Err(PlanError::new(
            AmbiguityKind::MissingTableName,
            format!("no table name in qualifier `{}`", ctx.lex.current_token()),
        ));
    }
    Ok(ctx.columns_of(table).collect())
}

/// Table name of a qualifier token: `users.` → `users`, `"Users".` →
/// `Users`, `users."` → `users`.
fn qualifier_table(token: &str) -> &str {
    let stem = token
        .strip_suffix(".\"")
        .or_else(|| token.strip_suffix(|ch: char| !is_word_char(ch)))
        .unwrap_or(token);
    stem.trim_matches('"')
}

fn select_after_from(ctx: &PlanContext<'_>) -> bool {
    ctx.lex.last_token() == "from"
}

// CREATE

static CREATE_RULES: &[Rule] = &[
    Rule {
        name: "create.tables",
        applies: create_table_name,
        plan: tables,
    },
    Rule {
        name: "create.fallback",
        applies: always,
        plan: fallback,
    },
];

fn create_table_name(ctx: &PlanContext<'_>) -> bool {
    ctx.dialect != Dialect::Cql && ctx.lex.token(1) == "table" && ctx.lex.token(2).is_empty()
}

// INSERT

static INSERT_RULES: &[Rule] = &[
    Rule {
        name: "insert.columns",
        applies: insert_in_column_list,
        plan: insert_columns,
    },
    Rule {
        name: "insert.tables",
        applies: insert_table_name,
        plan: tables,
    },
];

/// Target table of `INSERT INTO t (` or `INSERT INTO t(`, if the cursor is
/// inside its column list.
fn insert_target<'l>(ctx: &PlanContext<'l>) -> Option<&'l str> {
    let lex = ctx.lex;
    let target = lex.token(2);
    if target.is_empty() {
        return None;
    }
    if let Some((table, _)) = target.split_once('(') {
        return (!table.is_empty()).then_some(table);
    }
    let next = lex.token(3);
    (next == "(" || next.contains(',')).then_some(target)
}

fn insert_in_column_list(ctx: &PlanContext<'_>) -> bool {
    insert_target(ctx).is_some()
}

fn insert_columns<'a>(ctx: &PlanContext<'a>) -> Planned<'a> {
    Ok(insert_target(ctx)
        .map(|table| ctx.columns_of(table).collect())
        .unwrap_or_default())
}

fn insert_table_name(ctx: &PlanContext<'_>) -> bool {
    ctx.lex.token(1) == "into" && ctx.lex.token(2).is_empty()
}

// UPDATE

static UPDATE_RULES: &[Rule] = &[
    Rule {
        name: "update.tables",
        applies: update_table_name,
        plan: tables,
    },
    Rule {
        name: "update.set_columns",
        applies: update_in_set,
        plan: update_columns,
    },
    Rule {
        name: "update.where_columns",
        applies: has_where,
        plan: update_where_columns,
    },
    Rule {
        name: "update.fallback",
        applies: always,
        plan: fallback,
    },
];

fn update_table_name(ctx: &PlanContext<'_>) -> bool {
    ctx.lex.token(1).is_empty()
}

fn update_in_set(ctx: &PlanContext<'_>) -> bool {
    ctx.lex.token(2) == "set" && !ctx.lex.has_token("where")
}

fn has_where(ctx: &PlanContext<'_>) -> bool {
    ctx.lex.has_token("where")
}

fn update_columns<'a>(ctx: &PlanContext<'a>) -> Planned<'a> {
    Ok(ctx.columns_of(ctx.lex.token(1)).collect())
}

fn update_where_columns<'a>(ctx: &PlanContext<'a>) -> Planned<'a> {
    Ok(ctx
        .columns_of(ctx.lex.token(1))
        .chain(ctx.operators())
        .collect())
}

// DELETE FROM

static DELETE_RULES: &[Rule] = &[
    Rule {
        name: "delete.tables",
        applies: delete_table_name,
        plan: tables,
    },
    Rule {
        name: "delete.where_columns",
        applies: has_where,
        plan: delete_where_columns,
    },
    Rule {
        name: "delete.fallback",
        applies: always,
        plan: fallback,
    },
];

fn delete_table_name(ctx: &PlanContext<'_>) -> bool {
    ctx.lex.token(2).is_empty()
}

fn delete_where_columns<'a>(ctx: &PlanContext<'a>) -> Planned<'a> {
    Ok(ctx
        .columns_of(ctx.lex.token(2))
        .chain(ctx.operators())
        .collect())
}

// ALTER

static ALTER_RULES: &[Rule] = &[
    Rule {
        name: "alter.tables",
        applies: alter_target_name,
        plan: tables,
    },
    Rule {
        name: "alter.add_column",
        applies: alter_add_column,
        plan: alter_data_types,
    },
    Rule {
        name: "alter.add_constraint",
        applies: alter_add_constraint,
        plan: alter_constraint_columns,
    },
    Rule {
        name: "alter.drop",
        applies: alter_drop,
        plan: alter_drop_columns,
    },
    Rule {
        name: "alter.modify",
        applies: alter_modify,
        plan: alter_modify_columns,
    },
    Rule {
        name: "alter.fallback",
        applies: always,
        plan: fallback,
    },
];

/// `ALTER TABLE` (or `ALTER KEYSPACE` in CQL) with no name typed yet.
fn alter_target_name(ctx: &PlanContext<'_>) -> bool {
    let object = ctx.lex.token(1);
    let is_target = object == "table" || (ctx.dialect == Dialect::Cql && object == "keyspace");
    is_target && ctx.lex.token(2).is_empty()
}

/// `ALTER TABLE t <action>`; `t[3]` when a table name is present.
fn alter_action<'l>(ctx: &PlanContext<'l>) -> Option<&'l str> {
    let lex = ctx.lex;
    (!lex.token(2).is_empty()).then(|| lex.token(3))
}

fn alter_add_column(ctx: &PlanContext<'_>) -> bool {
    alter_action(ctx) == Some("add") && ctx.lex.token(4) != "constraint"
}

fn alter_add_constraint(ctx: &PlanContext<'_>) -> bool {
    alter_action(ctx) == Some("add") && ctx.lex.token(4) == "constraint"
}

fn alter_drop(ctx: &PlanContext<'_>) -> bool {
    alter_action(ctx) == Some("drop")
}

fn alter_modify(ctx: &PlanContext<'_>) -> bool {
    matches!(alter_action(ctx), Some("alter" | "modify"))
}

fn alter_data_types<'a>(ctx: &PlanContext<'a>) -> Planned<'a> {
    Ok(ctx.data_types().collect())
}

fn alter_constraint_columns<'a>(ctx: &PlanContext<'a>) -> Planned<'a> {
    Ok(ctx
        .data_types()
        .chain(ctx.columns_of(ctx.lex.token(2)))
        .collect())
}

fn alter_drop_columns<'a>(ctx: &PlanContext<'a>) -> Planned<'a> {
    Ok(ctx
        .columns_of(ctx.lex.token(2))
        .chain(ctx.keywords())
        .collect())
}

fn alter_modify_columns<'a>(ctx: &PlanContext<'a>) -> Planned<'a> {
    Ok(ctx
        .columns_of(ctx.lex.token(2))
        .chain(ctx.keywords())
        .chain(ctx.data_types())
        .collect())
}

// DROP

static DROP_RULES: &[Rule] = &[Rule {
    name: "drop.tables",
    applies: always,
    plan: tables,
}];

// Anything else

static OTHER_RULES: &[Rule] = &[
    Rule {
        name: "other.snippets",
        applies: at_line_start,
        plan: snippets,
    },
    Rule {
        name: "other.default",
        applies: always,
        plan: default_set,
    },
];

fn at_line_start(ctx: &PlanContext<'_>) -> bool {
    ctx.lex.at_line_start()
}

fn snippets<'a>(ctx: &PlanContext<'a>) -> Planned<'a> {
    Ok(ctx.snippets().collect())
}

fn default_set<'a>(ctx: &PlanContext<'a>) -> Planned<'a> {
    Ok(ctx
        .snippets()
        .chain(ctx.keywords())
        .chain(ctx.operators())
        .chain(ctx.functions())
        .chain(ctx.data_types())
        .collect())
}
