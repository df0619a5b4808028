//! Input handling for file reading, stdin support and cursor placement.

use anyhow::{bail, Context, Result};
use sqlhint_core::Position;
use std::io::{self, Read};
use std::path::Path;

/// A named SQL buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlSource {
    pub name: String,
    pub content: String,
}

/// Read SQL input from a file, or from stdin when no file is given.
pub fn read_input(file: Option<&Path>) -> Result<SqlSource> {
    match file {
        Some(path) => read_from_file(path),
        None => read_from_stdin(),
    }
}

/// Read SQL from stdin
fn read_from_stdin() -> Result<SqlSource> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read from stdin")?;

    Ok(SqlSource {
        name: "<stdin>".to_string(),
        content,
    })
}

fn read_from_file(path: &Path) -> Result<SqlSource> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    Ok(SqlSource {
        name: path.display().to_string(),
        content,
    })
}

/// Where the cursor goes in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorSpec {
    /// Explicit 1-based line and character column.
    At(Position),
    /// The first lone occurrence of a marker character, which is removed.
    /// Doubled markers (`||` for `|`) are left alone. Falls back to the end
    /// of the buffer when no lone marker is present.
    Marker(char),
}

/// Resolves the cursor, returning the buffer to complete and the position.
pub fn place_cursor(content: &str, cursor: CursorSpec) -> Result<(String, Position)> {
    match cursor {
        CursorSpec::At(position) => {
            if position.line_number == 0 || position.column == 0 {
                bail!(
                    "Cursor position {}:{} must be 1-based",
                    position.line_number,
                    position.column
                );
            }
            Ok((content.to_string(), position))
        }
        CursorSpec::Marker(marker) => match find_marker(content, marker) {
            Some(offset) => {
                let mut sql = content.to_string();
                sql.replace_range(offset..offset + marker.len_utf8(), "");
                Ok((sql, position_at(content, offset)))
            }
            None => {
                let sql = content.trim_end_matches(['\n', '\r']);
                Ok((sql.to_string(), position_at(sql, sql.len())))
            }
        },
    }
}

/// Byte offset of the first marker that is not part of a run like `||`.
fn find_marker(content: &str, marker: char) -> Option<usize> {
    let mut chars = content.char_indices().peekable();
    while let Some((offset, ch)) = chars.next() {
        if ch != marker {
            continue;
        }
        if chars.peek().is_some_and(|&(_, next)| next == marker) {
            while chars.next_if(|&(_, next)| next == marker).is_some() {}
            continue;
        }
        return Some(offset);
    }
    None
}

/// 1-based line and character column of a byte offset.
fn position_at(content: &str, offset: usize) -> Position {
    let before = &content[..offset];
    let line_number = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |newline| newline + 1);
    let column = before[line_start..].chars().count() + 1;
    Position::new(to_u32(line_number), to_u32(column))
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
