#![no_main]

use libfuzzer_sys::fuzz_target;
use sqlhint_core::{completion_items, CompletionRequest, Dialect, Position};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(sql) = std::str::from_utf8(rest) else {
        return;
    };

    let dialect = Dialect::ALL[usize::from(selector) % Dialect::ALL.len()];
    let line = u32::from(selector >> 4) + 1;
    let column = u32::try_from(sql.len()).unwrap_or(u32::MAX).saturating_add(1);

    let request = CompletionRequest {
        sql: sql.to_string(),
        dialect,
        position: Position::new(line, column),
        schema: None,
        options: Default::default(),
    };

    let _ = completion_items(&request);
});
