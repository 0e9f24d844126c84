//! WASM bindings for restack
//!
//! This module provides JavaScript-accessible functions for stacking tables
//! in the browser.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::core::options::{MergeSpec, MoveSpec, StackOptions};

/// One merge entry as passed from JavaScript
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct JsMergeSpec {
    pub target: usize,
    pub sources: Vec<usize>,
}

/// One move entry as passed from JavaScript
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct JsMoveSpec {
    pub from: usize,
    pub to: usize,
}

/// Stacking options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct JsStackOptions {
    /// Columns to merge, in declaration order
    #[serde(default)]
    pub merge: Vec<JsMergeSpec>,
    /// Columns to render full-width
    #[serde(default)]
    pub span: Vec<usize>,
    /// Columns to relocate, in declaration order
    #[serde(default)]
    pub moves: Vec<JsMoveSpec>,
    /// Columns to drop
    #[serde(default)]
    pub skip: Vec<usize>,
    /// CSS class for the source table (document mode)
    #[serde(default = "default_origin_class")]
    pub css_class_origin: String,
    /// CSS class for the generated clone
    #[serde(default = "default_clone_class")]
    pub css_class_clone: String,
    /// Attributes rewritten to stay unique in the clone
    #[serde(default = "default_unique_attributes")]
    pub unique_attributes: Vec<String>,
    /// Suffix appended to rewritten attribute values
    #[serde(default = "default_attribute_suffix")]
    pub attribute_suffix: String,
}

#[cfg(feature = "wasm")]
fn default_origin_class() -> String {
    "restack-origin".to_string()
}

#[cfg(feature = "wasm")]
fn default_clone_class() -> String {
    "restack-clone".to_string()
}

#[cfg(feature = "wasm")]
fn default_unique_attributes() -> Vec<String> {
    vec!["id".to_string(), "for".to_string()]
}

#[cfg(feature = "wasm")]
fn default_attribute_suffix() -> String {
    "-restack-clone".to_string()
}

#[cfg(feature = "wasm")]
impl From<JsStackOptions> for StackOptions {
    fn from(js: JsStackOptions) -> Self {
        StackOptions {
            merge: js
                .merge
                .into_iter()
                .map(|m| MergeSpec::new(m.target, m.sources))
                .collect(),
            span: js.span,
            moves: js
                .moves
                .into_iter()
                .map(|m| MoveSpec::new(m.from, m.to))
                .collect(),
            skip: js.skip,
            css_class_origin: js.css_class_origin,
            css_class_clone: js.css_class_clone,
            unique_attributes: js.unique_attributes,
            attribute_suffix: js.attribute_suffix,
        }
    }
}

/// Stacking result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct StackOutcome {
    /// The serialized output
    pub output: String,
    /// Whether stacking succeeded
    pub success: bool,
    /// Error message if stacking failed
    pub error: Option<String>,
}

#[cfg(feature = "wasm")]
impl StackOutcome {
    fn ok(output: String) -> Self {
        Self {
            output,
            success: true,
            error: None,
        }
    }

    fn err(message: String) -> Self {
        Self {
            output: String::new(),
            success: false,
            error: Some(message),
        }
    }
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[cfg(feature = "wasm")]
fn parse_options(options: JsValue) -> Result<StackOptions, String> {
    if options.is_undefined() || options.is_null() {
        return Ok(StackOptions::default());
    }
    serde_wasm_bindgen::from_value::<JsStackOptions>(options)
        .map(StackOptions::from)
        .map_err(|e| format!("invalid options: {}", e))
}

#[cfg(feature = "wasm")]
fn to_outcome(result: Result<String, String>) -> JsValue {
    let outcome = match result {
        Ok(output) => StackOutcome::ok(output),
        Err(message) => StackOutcome::err(message),
    };
    serde_wasm_bindgen::to_value(&outcome).unwrap_or(JsValue::NULL)
}

/// Stack the first table of `html`, returning `{ output, success, error }`
/// where `output` is the serialized clone.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "stackTable")]
pub fn stack_table_wasm(html: &str, options: JsValue) -> JsValue {
    to_outcome(parse_options(options).and_then(|opts| {
        crate::stack_table_with_options(html, &opts).map_err(|e| e.to_string())
    }))
}

/// Stack the first table of `html`, returning the whole document with the
/// clone inserted immediately after the origin.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "stackDocument")]
pub fn stack_document_wasm(html: &str, options: JsValue) -> JsValue {
    to_outcome(parse_options(options).and_then(|opts| {
        crate::stack_document(html, &opts).map_err(|e| e.to_string())
    }))
}
