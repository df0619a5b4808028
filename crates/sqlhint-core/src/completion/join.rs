//! JOIN correlation: which side of a `FROM a x JOIN b y ON` clause the
//! qualifier in front of the cursor refers to.
//!
//! This reads the cursor line, not a parse tree. Anything it cannot locate
//! is reported as [`AmbiguityKind::MalformedJoin`].

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{AmbiguityKind, PlanError};

use super::planner::{Candidate, PlanContext};

fn before_join_regex() -> &'static Regex {
    static BEFORE_JOIN: OnceLock<Regex> = OnceLock::new();
    BEFORE_JOIN.get_or_init(|| Regex::new(r"(?i)from\s(.*)\sjoin").expect("Invalid regex pattern"))
}

fn after_join_regex() -> &'static Regex {
    static AFTER_JOIN: OnceLock<Regex> = OnceLock::new();
    AFTER_JOIN.get_or_init(|| Regex::new(r"(?i)join\s(.*)\son").expect("Invalid regex pattern"))
}

/// A table reference on one side of the JOIN keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct JoinSide {
    pub table: String,
    /// Alias if one is given, otherwise the table name.
    pub correlation: String,
}

impl JoinSide {
    fn parse(fragment: &str) -> Option<Self> {
        let fragment = fragment.replacen('\'', "", 1);
        let mut parts = fragment
            .split(' ')
            .filter(|part| !part.eq_ignore_ascii_case("as"));
        let table = parts.next()?.trim_matches('"');
        if table.is_empty() {
            return None;
        }
        let correlation = match parts.next() {
            Some(alias) if !alias.is_empty() => alias.trim_matches('"'),
            _ => table,
        };
        Some(Self {
            table: table.to_string(),
            correlation: correlation.to_string(),
        })
    }

    /// True when `query` ends with `<correlation>.` optionally followed by a
    /// partial identifier.
    fn qualifies(&self, query: &str) -> Result<bool, PlanError> {
        let pattern = format!(
            r#"(?i)(?:^|[^\w.]){}\."?[\w$]*$"#,
            regex::escape(&self.correlation)
        );
        let regex = Regex::new(&pattern)
            .map_err(|err| PlanError::new(AmbiguityKind::InvalidPattern, err.to_string()))?;
        Ok(regex.is_match(query))
    }
}

/// Extracts both sides of the JOIN on `line`.
pub(crate) fn join_sides(line: &str) -> Result<(JoinSide, JoinSide), PlanError> {
    let line = line.trim();
    let before = capture(before_join_regex(), line)
        .ok_or_else(|| PlanError::new(AmbiguityKind::MalformedJoin, "no `FROM … JOIN` fragment"))?;
    let after = capture(after_join_regex(), line)
        .ok_or_else(|| PlanError::new(AmbiguityKind::MalformedJoin, "no `JOIN … ON` fragment"))?;

    let before = JoinSide::parse(before).ok_or_else(|| {
        PlanError::new(AmbiguityKind::MalformedJoin, "missing table before JOIN")
    })?;
    let after = JoinSide::parse(after)
        .ok_or_else(|| PlanError::new(AmbiguityKind::MalformedJoin, "missing table after JOIN"))?;
    Ok((before, after))
}

fn capture<'l>(regex: &Regex, line: &'l str) -> Option<&'l str> {
    regex
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|group| group.as_str())
}

/// Columns of the JOIN side the query-so-far is qualified by. The joined
/// table is checked first.
pub(crate) fn correlated_columns<'a>(
    ctx: &PlanContext<'a>,
) -> Result<Vec<Candidate<'a>>, PlanError> {
    let (before, after) = join_sides(&ctx.lex.line_text)?;
    let query = ctx.lex.query_text.as_str();

    if after.qualifies(query)? {
        return Ok(ctx.columns_of(&after.table).collect());
    }
    if before.qualifies(query)? {
        return Ok(ctx.columns_of(&before.table).collect());
    }
    Ok(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn side(table: &str, correlation: &str) -> JoinSide {
        JoinSide {
            table: table.to_string(),
            correlation: correlation.to_string(),
        }
    }

    #[test]
    fn test_join_sides_with_aliases() {
        let (before, after) =
            join_sides("select u. from users u join orders o on u.id = o.user_id").unwrap();
        assert_eq!(before, side("users", "u"));
        assert_eq!(after, side("orders", "o"));
    }

    #[test]
    fn test_join_sides_without_aliases() {
        let (before, after) = join_sides("SELECT * FROM users JOIN orders ON").unwrap();
        assert_eq!(before, side("users", "users"));
        assert_eq!(after, side("orders", "orders"));
    }

    #[test]
    fn test_join_sides_skip_as() {
        let (before, after) = join_sides("select from users as u join orders as o on").unwrap();
        assert_eq!(before.correlation, "u");
        assert_eq!(after.correlation, "o");
    }

    #[test]
    fn test_missing_on_is_malformed() {
        let err = join_sides("select * from a join").unwrap_err();
        assert_eq!(err.kind, AmbiguityKind::MalformedJoin);

        let err = join_sides("select * join b on").unwrap_err();
        assert_eq!(err.kind, AmbiguityKind::MalformedJoin);
    }

    #[test]
    fn test_qualifies_requires_trailing_qualifier() {
        let o = side("orders", "o");
        assert!(o.qualifies("select o.").unwrap());
        assert!(o.qualifies("select u.id, o.").unwrap());
        assert!(o.qualifies("select o.\"").unwrap());
        assert!(!o.qualifies("select o.id from ").unwrap());
        assert!(!o.qualifies("select foo.").unwrap());
        assert!(!o.qualifies("select ").unwrap());
    }

    #[test]
    fn test_qualifies_escapes_alias() {
        let weird = side("t", "a+b");
        assert!(weird.qualifies("select a+b.").unwrap());
        assert!(!weird.qualifies("select aab.").unwrap());
    }
}
