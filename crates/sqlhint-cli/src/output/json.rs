//! JSON output formatting.

use serde::Serialize;

/// Format any serializable result as JSON.
///
/// If `compact` is true, outputs minified JSON without whitespace.
pub fn format_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> String {
    if compact {
        serde_json::to_string(value).expect("serialization cannot fail")
    } else {
        serde_json::to_string_pretty(value).expect("serialization cannot fail")
    }
}
