//! Lexical context extraction.
//!
//! Turns the raw editor buffer and a cursor position into the handful of
//! values the planner inspects: the lowercased query text in front of the
//! word being typed, its token list, the cursor line and the range an
//! accepted suggestion replaces.
//!
//! Tokens come from a plain split on single spaces. Consecutive spaces or
//! line breaks inside the query produce empty or merged tokens; the planner
//! rules are written against that tokenization.

use sqlparser::tokenizer::{Token, Tokenizer};

use crate::types::{Dialect, Range, ScopeMode};

/// The request-scoped view of what has been typed so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalContext {
    /// Lowercased text from the scope start up to the word under the cursor,
    /// leading whitespace removed.
    pub query_text: String,
    /// `query_text` split on single spaces. Never empty.
    pub query_tokens: Vec<String>,
    /// The trimmed cursor line in its original case.
    pub line_text: String,
    /// Span of the word under the cursor, ending at the cursor.
    pub replacement_range: Range,
}

impl LexicalContext {
    /// Token at `index`, or `""` when the query is shorter.
    pub fn token(&self, index: usize) -> &str {
        self.query_tokens
            .get(index)
            .map(String::as_str)
            .unwrap_or("")
    }

    fn token_from_end(&self, back: usize) -> &str {
        match self.query_tokens.len().checked_sub(back) {
            Some(index) => self.token(index),
            None => "",
        }
    }

    /// The token directly in front of the word under the cursor. Non-empty
    /// only when no space separates them, as in `users.` or `users."`.
    pub fn current_token(&self) -> &str {
        self.token_from_end(1)
    }

    pub fn last_token(&self) -> &str {
        self.token_from_end(2)
    }

    pub fn second_last_token(&self) -> &str {
        self.token_from_end(3)
    }

    pub fn has_token(&self, word: &str) -> bool {
        self.query_tokens.iter().any(|token| token == word)
    }

    /// Case-insensitive substring test against the cursor line.
    pub fn line_contains(&self, needle: &str) -> bool {
        self.line_text
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }

    /// True when the cursor sits at column 1 with no word typed.
    pub fn at_line_start(&self) -> bool {
        self.replacement_range.start_column == 1 && self.replacement_range.end_column == 1
    }
}

/// Extracts the lexical context with per-statement scoping.
pub fn extract(text: &str, line: u32, column: u32) -> LexicalContext {
    extract_with(text, line, column, Dialect::default(), ScopeMode::default())
}

/// Extracts the lexical context for `dialect` with an explicit scope mode.
///
/// `line` and `column` are 1-based; `column` counts characters. Positions
/// outside the buffer are clamped to the nearest valid position.
pub fn extract_with(
    text: &str,
    line: u32,
    column: u32,
    dialect: Dialect,
    scope: ScopeMode,
) -> LexicalContext {
    let cursor = locate_cursor(text, line, column);

    let scope_start = match scope {
        ScopeMode::Document => 0,
        ScopeMode::Line => cursor.line_start,
        ScopeMode::Statement => statement_start(&text[..cursor.word_start], dialect),
    };

    let query_text = text[scope_start..cursor.word_start]
        .trim_start()
        .to_lowercase();
    let query_tokens = query_text.split(' ').map(str::to_string).collect();

    LexicalContext {
        query_text,
        query_tokens,
        line_text: cursor.line_content.trim().to_string(),
        replacement_range: Range::on_line(
            cursor.line_number,
            cursor.word_start_column,
            cursor.column,
        ),
    }
}

struct Cursor<'a> {
    line_number: u32,
    /// Byte offset of the cursor line in the buffer.
    line_start: usize,
    /// Cursor line without its terminator.
    line_content: &'a str,
    /// Byte offset of the word under the cursor in the buffer.
    word_start: usize,
    word_start_column: u32,
    column: u32,
}

fn locate_cursor(text: &str, line: u32, column: u32) -> Cursor<'_> {
    let lines: Vec<&str> = text.split('\n').collect();
    let index = (line.max(1) as usize - 1).min(lines.len() - 1);
    let line_start: usize = lines[..index].iter().map(|l| l.len() + 1).sum();
    let raw_line = lines[index];
    let line_content = raw_line.strip_suffix('\r').unwrap_or(raw_line);

    let char_count = line_content.chars().count();
    let column = (column.max(1) as usize).min(char_count + 1);
    let cursor_in_line = line_content
        .char_indices()
        .nth(column - 1)
        .map(|(offset, _)| offset)
        .unwrap_or(line_content.len());

    let (word_chars, word_bytes) = line_content[..cursor_in_line]
        .chars()
        .rev()
        .take_while(|ch| is_word_char(*ch))
        .fold((0usize, 0usize), |(chars, bytes), ch| {
            (chars + 1, bytes + ch.len_utf8())
        });

    Cursor {
        line_number: to_u32(index + 1),
        line_start,
        line_content,
        word_start: line_start + cursor_in_line - word_bytes,
        word_start_column: to_u32(column - word_chars),
        column: to_u32(column),
    }
}

pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Byte offset of the current statement's first token in `prefix`.
///
/// The statement starts after the last `;` and any comments or whitespace
/// that follow it. Uses the dialect tokenizer so that semicolons inside
/// string literals and comments are ignored. Incomplete input (an
/// unterminated string while typing) fails to tokenize; the last raw `;` is
/// used then.
fn statement_start(prefix: &str, dialect: Dialect) -> usize {
    let raw_boundary = || prefix.rfind(';').map(|offset| offset + 1).unwrap_or(0);

    let sqlparser_dialect = dialect.to_sqlparser_dialect();
    let mut tokenizer = Tokenizer::new(sqlparser_dialect.as_ref(), prefix);
    let Ok(tokens) = tokenizer.tokenize_with_location() else {
        return raw_boundary();
    };

    let after_semicolon = tokens
        .iter()
        .rposition(|token| matches!(token.token, Token::SemiColon))
        .map_or(0, |index| index + 1);

    let first = tokens[after_semicolon..]
        .iter()
        .find(|token| !matches!(token.token, Token::Whitespace(_) | Token::EOF));

    match first {
        Some(token) => line_col_to_offset(
            prefix,
            token.span.start.line as usize,
            token.span.start.column as usize,
        )
        .unwrap_or_else(raw_boundary),
        None => prefix.len(),
    }
}

/// Converts a 1-based line and character column into a byte offset.
fn line_col_to_offset(sql: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 || column == 0 {
        return None;
    }

    let mut current_line = 1usize;
    let mut current_col = 1usize;

    for (offset, ch) in sql.char_indices() {
        if current_line == line && current_col == column {
            return Some(offset);
        }
        if ch == '\n' {
            current_line += 1;
            current_col = 1;
        } else {
            current_col += 1;
        }
    }

    (current_line == line && current_col == column).then_some(sql.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_end(text: &str) -> LexicalContext {
        let line = text.split('\n').count() as u32;
        let column = text.rsplit('\n').next().unwrap().chars().count() as u32 + 1;
        extract(text, line, column)
    }

    #[test]
    fn test_empty_buffer() {
        let ctx = extract("", 1, 1);
        assert_eq!(ctx.query_tokens, vec![String::new()]);
        assert_eq!(ctx.current_token(), "");
        assert_eq!(ctx.last_token(), "");
        assert_eq!(ctx.second_last_token(), "");
        assert!(ctx.at_line_start());
    }

    #[test]
    fn test_trailing_space_yields_empty_current_token() {
        let ctx = at_end("SELECT ");
        assert_eq!(ctx.query_tokens, vec!["select", ""]);
        assert_eq!(ctx.token(0), "select");
        assert_eq!(ctx.token(1), "");
        assert_eq!(ctx.last_token(), "select");
    }

    #[test]
    fn test_word_under_cursor_is_excluded_from_query() {
        let ctx = at_end("select * from us");
        assert_eq!(ctx.query_text, "select * from ");
        assert_eq!(ctx.last_token(), "from");
        assert_eq!(ctx.replacement_range, Range::on_line(1, 15, 17));
    }

    #[test]
    fn test_qualifier_stays_in_current_token() {
        let ctx = at_end("select users.na");
        assert_eq!(ctx.current_token(), "users.");
        assert_eq!(ctx.replacement_range, Range::on_line(1, 14, 16));

        let ctx = at_end("select users.");
        assert_eq!(ctx.current_token(), "users.");
        assert!(ctx.replacement_range.is_empty());
    }

    #[test]
    fn test_position_is_clamped() {
        let ctx = extract("select *\nfrom us", 9, 99);
        assert_eq!(ctx.replacement_range, Range::on_line(2, 6, 8));

        let ctx = extract("select", 0, 0);
        assert_eq!(ctx.replacement_range, Range::on_line(1, 1, 1));
        assert_eq!(ctx.query_text, "");
    }

    #[test]
    fn test_statement_scope_starts_after_semicolon() {
        let ctx = at_end("select 1;\nupdate users set ");
        assert_eq!(ctx.token(0), "update");
        assert_eq!(ctx.token(2), "set");
    }

    #[test]
    fn test_semicolon_in_string_literal_does_not_split() {
        let ctx = at_end("select ';' from ");
        assert_eq!(ctx.token(0), "select");
        assert_eq!(ctx.last_token(), "from");
    }

    #[test]
    fn test_semicolon_in_comment_does_not_split() {
        let ctx = at_end("select 1 /* a; b */ from ");
        assert_eq!(ctx.token(0), "select");
        assert_eq!(ctx.last_token(), "from");
    }

    #[test]
    fn test_leading_comments_are_skipped() {
        let ctx = at_end("-- a; b\nselect * from ");
        assert_eq!(ctx.query_text, "select * from ");

        let ctx = at_end("/* é; */select * from ");
        assert_eq!(ctx.query_text, "select * from ");
        assert_eq!(ctx.token(0), "select");

        let ctx = at_end("select 1;\n-- next\n/* one */ update users set ");
        assert_eq!(ctx.token(0), "update");
        assert_eq!(ctx.token(2), "set");
    }

    #[test]
    fn test_only_comments_after_semicolon_yield_empty_query() {
        let ctx = at_end("select 1; -- done\n");
        assert_eq!(ctx.query_text, "");
        assert!(ctx.at_line_start());
    }

    #[test]
    fn test_unterminated_string_falls_back_to_raw_semicolon() {
        let ctx = at_end("select 1; select 'abc");
        assert_eq!(ctx.query_text, "select '");
    }

    #[test]
    fn test_scope_modes() {
        let text = "select *\nfrom ";
        let line = extract_with(text, 2, 6, Dialect::Pgsql, ScopeMode::Line);
        assert_eq!(line.query_text, "from ");

        let document = extract_with(text, 2, 6, Dialect::Pgsql, ScopeMode::Document);
        assert_eq!(document.query_text, "select *\nfrom ");

        let text = "select 1; select ";
        let document = extract_with(text, 1, 18, Dialect::Pgsql, ScopeMode::Document);
        assert_eq!(document.token(0), "select");
        assert_eq!(document.token(1), "1;");
    }

    #[test]
    fn test_line_text_is_trimmed_and_keeps_case() {
        let ctx = extract("  SELECT * FROM Users u JOIN orders o ON  ", 1, 3);
        assert_eq!(ctx.line_text, "SELECT * FROM Users u JOIN orders o ON");
        assert!(ctx.line_contains("join"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let ctx = extract("select *\r\nfrom us", 2, 8);
        assert_eq!(ctx.replacement_range, Range::on_line(2, 6, 8));
        assert_eq!(ctx.line_text, "from us");
    }

    #[test]
    fn test_columns_count_characters() {
        let ctx = at_end("select é");
        assert_eq!(ctx.replacement_range, Range::on_line(1, 8, 9));
        assert_eq!(ctx.query_text, "select ");
    }

    #[test]
    fn test_line_col_to_offset() {
        let sql = "ab\ncd";
        assert_eq!(line_col_to_offset(sql, 1, 1), Some(0));
        assert_eq!(line_col_to_offset(sql, 2, 2), Some(4));
        assert_eq!(line_col_to_offset(sql, 2, 3), Some(5));
        assert_eq!(line_col_to_offset(sql, 3, 1), None);
        assert_eq!(line_col_to_offset(sql, 0, 1), None);
    }
}
