//! WASM-compatible diagnostic types.
//!
//! This module provides JavaScript-compatible wrappers for generation
//! errors.

use procgen_mesh::GeometryError;
use std::fmt;
use wasm_bindgen::prelude::*;

/// A failed generation run, reported to JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try { generate_sweep(json); }
/// // catch (diag) { console.error(diag.kind(), diag.message()); }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    kind: String,
    message: String,
}

#[wasm_bindgen]
impl Diagnostic {
    /// Returns the error category, e.g. `"empty_stack"` or `"invalid_json"`.
    pub fn kind(&self) -> String {
        self.kind.clone()
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl From<GeometryError> for Diagnostic {
    fn from(err: GeometryError) -> Self {
        Self {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Diagnostic {
    fn from(err: serde_json::Error) -> Self {
        Self {
            kind: "invalid_json".to_string(),
            message: err.to_string(),
        }
    }
}
