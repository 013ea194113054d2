//! The Quiver pipeline as a WASM module for editor shells.
//!
//! This crate exposes the pipeline via `wasm-bindgen`, suitable for running
//! in a browser Web Worker on every text change.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { compile, fingerprint } from 'quiver-wasm';
//!
//! await init();
//!
//! const output = JSON.parse(compile(source));
//! if (output.fingerprint !== fingerprint(editor.text)) {
//!   // stale: the text changed while compiling
//! }
//! ```

use std::fmt::Display;

use quiver_types::{Diagnostic, ErrorCode};
use serde_json::json;
use wasm_bindgen::prelude::*;

/// Run the full pipeline over `source`.
///
/// Returns a JSON string containing a `CompileOutput`:
/// ```json
/// {
///   "fingerprint": "3f1c...",
///   "lexemes": [{ "token": { "kind": "action" }, "span": { ... } }, ...],
///   "ast": [...],
///   "program": { "state": { ... }, "actions": { ... }, "reducers": { ... }, "tests": { ... } },
///   "results": { "Counter": { "Simple increment": { "verdict": "ok" } } },
///   "diagnostic": null
/// }
/// ```
///
/// When a stage fails, the outputs of later stages are `null` and
/// `diagnostic` holds the code, message, and span.
#[wasm_bindgen]
pub fn compile(source: &str) -> String {
    let output = quiver_compiler::compile(source);
    serde_json::to_string(&output)
        .unwrap_or_else(|e| serialization_failure(&output.fingerprint, e))
}

/// Output shape reported when a `CompileOutput` cannot be serialized.
fn serialization_failure(fingerprint: &str, error: impl Display) -> String {
    let diagnostic = Diagnostic::new(
        ErrorCode::OUTPUT_SERIALIZATION,
        format!("Serialization error: {error}"),
        None,
        "",
    );
    json!({
        "fingerprint": fingerprint,
        "lexemes": null,
        "ast": null,
        "program": null,
        "results": null,
        "diagnostic": diagnostic,
    })
    .to_string()
}

/// SHA-256 of `source`, as carried in `CompileOutput.fingerprint`.
#[wasm_bindgen]
pub fn fingerprint(source: &str) -> String {
    quiver_compiler::fingerprint(source)
}

/// Return the compiler version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
