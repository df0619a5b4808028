//! Column conversion between UTF-16 code units and characters.
//!
//! Monaco reports cursor columns in UTF-16 code units, while the completion
//! engine counts characters. Conversion happens per line at the WASM
//! boundary: request positions on the way in, suggestion ranges on the way
//! out.

use serde::{Deserialize, Serialize};
use sqlhint_core::{Position, Range};

/// Unit in which columns are expressed at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// UTF-16 code units (Monaco/JavaScript consumers).
    #[default]
    Utf16,
    /// Unicode scalar values, as the engine counts them.
    Chars,
}

/// The 1-based `line_number`-th line of `sql`, without its terminator.
pub fn line_at(sql: &str, line_number: u32) -> Option<&str> {
    let index = usize::try_from(line_number).ok()?.checked_sub(1)?;
    sql.split('\n')
        .nth(index)
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Convert a 1-based UTF-16 column on `line` to a 1-based character column.
///
/// # Returns
/// * `Ok(column)` - The corresponding character column
/// * `Err(message)` - If the column splits a surrogate pair or lies past the
///   end of the line
pub fn utf16_to_char_column(line: &str, utf16_column: u32) -> Result<u32, String> {
    let target = utf16_column.saturating_sub(1) as usize;
    let mut units = 0usize;
    let mut chars = 0u32;

    for ch in line.chars() {
        if units == target {
            return Ok(chars + 1);
        }
        // Characters outside the BMP take 2 UTF-16 code units
        units += ch.len_utf16();
        chars += 1;
        if units > target {
            return Err(format!(
                "UTF-16 column {utf16_column} splits a surrogate pair"
            ));
        }
    }

    if units == target {
        return Ok(chars + 1);
    }

    Err(format!(
        "UTF-16 column {} exceeds line length (max: {})",
        utf16_column,
        units + 1
    ))
}

/// Convert a 1-based character column on `line` to a 1-based UTF-16 column.
///
/// Columns past the end of the line count one unit per missing character.
pub fn char_to_utf16_column(line: &str, char_column: u32) -> u32 {
    let wanted = char_column.saturating_sub(1) as usize;
    let mut chars = line.chars();
    let mut units = 0u32;

    for _ in 0..wanted {
        units += chars.next().map_or(1, |ch| ch.len_utf16() as u32);
    }

    units + 1
}

/// Convert a request position from UTF-16 to character columns.
///
/// Positions on lines that do not exist, or with a zero coordinate, are
/// passed through for the engine to clamp or reject.
pub fn position_from_utf16(sql: &str, position: Position) -> Result<Position, String> {
    if position.column == 0 {
        return Ok(position);
    }
    let Some(line) = line_at(sql, position.line_number) else {
        return Ok(position);
    };
    let column = utf16_to_char_column(line, position.column)?;
    Ok(Position::new(position.line_number, column))
}

/// Convert a single-line suggestion range from character to UTF-16 columns.
pub fn range_to_utf16(sql: &str, range: Range) -> Range {
    match line_at(sql, range.start_line_number) {
        Some(line) => Range {
            start_column: char_to_utf16_column(line, range.start_column),
            end_column: char_to_utf16_column(line, range.end_column),
            ..range
        },
        None => range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_at() {
        let sql = "select *\r\nfrom users\n";
        assert_eq!(line_at(sql, 1), Some("select *"));
        assert_eq!(line_at(sql, 2), Some("from users"));
        assert_eq!(line_at(sql, 3), Some(""));
        assert_eq!(line_at(sql, 4), None);
        assert_eq!(line_at(sql, 0), None);
    }

    #[test]
    fn test_utf16_to_char_ascii_only() {
        let line = "SELECT * FROM users";
        assert_eq!(utf16_to_char_column(line, 1).unwrap(), 1);
        assert_eq!(utf16_to_char_column(line, 8).unwrap(), 8);
        assert_eq!(utf16_to_char_column(line, 20).unwrap(), 20);
    }

    #[test]
    fn test_utf16_to_char_multibyte() {
        // '日' is 3 UTF-8 bytes but 1 UTF-16 code unit and 1 character
        let line = "SELECT '日本語' ";
        assert_eq!(utf16_to_char_column(line, 10).unwrap(), 10);
        assert_eq!(utf16_to_char_column(line, 14).unwrap(), 14);
    }

    #[test]
    fn test_utf16_to_char_emoji() {
        // '😀' is 2 UTF-16 code units (surrogate pair) and 1 character
        let line = "SELECT '😀' ";
        assert_eq!(utf16_to_char_column(line, 9).unwrap(), 9);
        assert_eq!(utf16_to_char_column(line, 11).unwrap(), 10);
        assert_eq!(utf16_to_char_column(line, 13).unwrap(), 12);
        assert!(utf16_to_char_column(line, 10).is_err());
    }

    #[test]
    fn test_utf16_to_char_out_of_bounds() {
        assert!(utf16_to_char_column("SELECT", 100).is_err());
    }

    #[test]
    fn test_char_to_utf16() {
        let line = "SELECT '😀' ";
        assert_eq!(char_to_utf16_column(line, 1), 1);
        assert_eq!(char_to_utf16_column(line, 9), 9);
        assert_eq!(char_to_utf16_column(line, 10), 11);
        assert_eq!(char_to_utf16_column(line, 12), 13);
        assert_eq!(char_to_utf16_column("ab", 5), 5);
    }

    #[test]
    fn test_roundtrip_conversion() {
        let line = "select '日本😀語' from";
        for char_column in 1..=line.chars().count() as u32 + 1 {
            let utf16 = char_to_utf16_column(line, char_column);
            assert_eq!(
                utf16_to_char_column(line, utf16).unwrap(),
                char_column,
                "Roundtrip failed for column {char_column}"
            );
        }
    }

    #[test]
    fn test_position_from_utf16() {
        let sql = "select 1;\nselect '😀', ";
        let position = position_from_utf16(sql, Position::new(2, 14)).unwrap();
        assert_eq!(position, Position::new(2, 13));

        // Unknown lines and zero columns pass through untouched
        assert_eq!(
            position_from_utf16(sql, Position::new(9, 4)).unwrap(),
            Position::new(9, 4)
        );
        assert_eq!(
            position_from_utf16(sql, Position::new(1, 0)).unwrap(),
            Position::new(1, 0)
        );
    }

    #[test]
    fn test_range_to_utf16() {
        let sql = "select '😀', us";
        let range = range_to_utf16(sql, Range::on_line(1, 13, 15));
        assert_eq!(range, Range::on_line(1, 14, 16));
    }
}
