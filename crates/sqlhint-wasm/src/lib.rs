use serde::Deserialize;
use sqlhint_core::{
    completion_items, language_definition, CompletionItemsResult, CompletionList,
    CompletionProvider, CompletionRequest, Dialect, Position, SchemaIndex, SchemaMetadata,
};
use wasm_bindgen::prelude::*;

pub mod encoding;

use encoding::{position_from_utf16, range_to_utf16, Encoding};

const SERIALIZE_FALLBACK: &str = r#"{"error":"Failed to serialize result"}"#;

/// Installs the panic hook and, with the `tracing` feature, the console
/// subscriber. Safe to call more than once.
#[wasm_bindgen(js_name = initEngine)]
pub fn init_engine() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "tracing")]
    {
        use std::sync::Once;
        static TRACING: Once = Once::new();
        TRACING.call_once(tracing_wasm::set_as_global_default);
    }
}

/// A completion request as sent by the editor host: the core request plus
/// the unit its columns are expressed in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WasmCompletionRequest {
    #[serde(flatten)]
    request: CompletionRequest,
    #[serde(default)]
    encoding: Encoding,
}

/// Stateless completion entry point - accepts JSON request, returns JSON result.
/// This function never throws - errors are returned in the result's `error` field.
#[wasm_bindgen]
pub fn completion_items_json(request_json: &str) -> String {
    let WasmCompletionRequest {
        mut request,
        encoding,
    } = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            let result = CompletionItemsResult::from_error(
                Dialect::default(),
                format!("Invalid request format: {e}"),
            );
            return to_json(&result);
        }
    };

    if encoding == Encoding::Utf16 {
        match position_from_utf16(&request.sql, request.position) {
            Ok(position) => request.position = position,
            Err(message) => {
                return to_json(&CompletionItemsResult::from_error(request.dialect, message));
            }
        }
    }

    let mut result = completion_items(&request);

    if encoding == Encoding::Utf16 {
        for item in &mut result.suggestions {
            item.range = range_to_utf16(&request.sql, item.range);
        }
    }

    to_json(&result)
}

/// Monaco language definition (keywords, type keywords, operators) for a
/// dialect, as JSON.
#[wasm_bindgen]
pub fn language_definition_json(dialect: &str) -> String {
    match dialect.parse::<Dialect>() {
        Ok(dialect) => to_json(&language_definition(dialect)),
        Err(message) => serde_json::json!({ "error": message }).to_string(),
    }
}

/// Get version information
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| SERIALIZE_FALLBACK.to_string())
}

/// Completion provider bound to one editor model.
///
/// Columns passed to and returned from the session are UTF-16 code units.
#[wasm_bindgen]
pub struct CompletionSession {
    provider: CompletionProvider,
}

impl CompletionSession {
    /// Builds a session from a dialect name (or connection product name) and
    /// optional schema metadata JSON.
    pub fn try_new(dialect: &str, schema_json: Option<&str>) -> Result<Self, String> {
        let dialect: Dialect = dialect.parse()?;
        let schema = parse_schema(schema_json)?;
        Ok(Self {
            provider: CompletionProvider::new(dialect, schema),
        })
    }

    /// Replaces the schema the session completes against.
    pub fn try_set_schema(&mut self, schema_json: Option<&str>) -> Result<(), String> {
        let schema = parse_schema(schema_json)?;
        self.provider = CompletionProvider::new(self.provider.dialect(), schema);
        Ok(())
    }

    /// Completions for the cursor at a UTF-16 position, in host shape.
    pub fn completion_list(&self, text: &str, line_number: u32, column: u32) -> CompletionList {
        let Ok(position) = position_from_utf16(text, Position::new(line_number, column)) else {
            return CompletionList::default();
        };

        let mut list = self.provider.provide_completion_items(text, position);
        for item in &mut list.suggestions {
            item.range = range_to_utf16(text, item.range);
        }
        list
    }
}

#[wasm_bindgen]
impl CompletionSession {
    #[wasm_bindgen(constructor)]
    pub fn new(dialect: &str, schema_json: Option<String>) -> Result<CompletionSession, JsValue> {
        Self::try_new(dialect, schema_json.as_deref()).map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(js_name = setSchema)]
    pub fn set_schema(&mut self, schema_json: Option<String>) -> Result<(), JsValue> {
        self.try_set_schema(schema_json.as_deref())
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Returns the `{ suggestions }` list as JSON. Never throws.
    #[wasm_bindgen(js_name = provideCompletionItems)]
    pub fn provide_completion_items(&self, text: &str, line_number: u32, column: u32) -> String {
        to_json(&self.completion_list(text, line_number, column))
    }

    #[wasm_bindgen(js_name = triggerCharacters)]
    pub fn trigger_characters(&self) -> Vec<String> {
        self.provider
            .trigger_characters()
            .iter()
            .map(char::to_string)
            .collect()
    }

    #[wasm_bindgen(getter, js_name = languageId)]
    pub fn language_id(&self) -> String {
        self.provider.language_id().to_string()
    }
}

fn parse_schema(schema_json: Option<&str>) -> Result<SchemaIndex, String> {
    match schema_json {
        Some(json) if !json.trim().is_empty() => SchemaMetadata::from_json(json)
            .map(|metadata| SchemaIndex::from_metadata(&metadata))
            .map_err(|e| format!("Invalid schema metadata: {e}")),
        _ => Ok(SchemaIndex::empty()),
    }
}
