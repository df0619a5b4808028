//! Editor coordinates shared between requests and responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A cursor position in the editor buffer.
///
/// Both fields are 1-based. `column` counts characters on the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub line_number: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line_number: u32, column: u32) -> Self {
        Self {
            line_number,
            column,
        }
    }
}

/// A single-line or multi-line span of the buffer, inclusive start and
/// exclusive end column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    pub start_line_number: u32,
    pub start_column: u32,
    pub end_line_number: u32,
    pub end_column: u32,
}

impl Range {
    /// Creates a range on one line.
    pub fn on_line(line_number: u32, start_column: u32, end_column: u32) -> Self {
        Self {
            start_line_number: line_number,
            start_column,
            end_line_number: line_number,
            end_column,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_line_number == self.end_line_number && self.start_column == self.end_column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_serializes_with_host_field_names() {
        let range = Range::on_line(3, 5, 9);
        let json = serde_json::to_value(range).unwrap();
        assert_eq!(json["startLineNumber"], 3);
        assert_eq!(json["startColumn"], 5);
        assert_eq!(json["endLineNumber"], 3);
        assert_eq!(json["endColumn"], 9);
    }

    #[test]
    fn test_empty_range() {
        assert!(Range::on_line(1, 1, 1).is_empty());
        assert!(!Range::on_line(1, 1, 4).is_empty());
    }
}
