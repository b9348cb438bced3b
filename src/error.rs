//! Error types for the apidoc2pdf library.
//!
//! The taxonomy follows the two failure modes of the pipeline:
//!
//! * **Structural** — the input is not shaped like a Postman collection at
//!   all ([`ConvertError::NotACollection`], [`ConvertError::InvalidJson`]).
//!   These abort the conversion before any text is emitted.
//!
//! * **Content fallback** — an individual request body or response that is
//!   not valid JSON. These are *not* errors: the flattener degrades to a
//!   verbatim fenced block for that one field and the traversal continues.
//!   No variant here represents them; they are invisible to callers.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the apidoc2pdf library.
#[derive(Debug, Error)]
pub enum ConvertError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The input string could not be recognised as Markdown or collection JSON.
    #[error("Invalid input '{input}': expected a .json, .md, or .markdown file")]
    InvalidInput { input: String },

    /// The input was not parseable as JSON at all.
    #[error("Input is not valid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    /// The JSON parsed but is not shaped like a Postman collection.
    #[error("Input does not look like a Postman collection: {detail}\nExpected a root object with an \"item\" array (Collection v2 export).")]
    NotACollection { detail: String },

    /// The item tree was deeper than the configured recursion ceiling.
    #[error("Collection nesting exceeds {limit} levels at '{path}'\nRaise max_depth if the collection is genuinely this deep.")]
    DepthExceeded { limit: usize, path: String },

    /// A collection entry could not be mapped onto the folder/request model.
    #[error("Malformed collection item: {detail}")]
    MalformedItem { detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write an output file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Renderer boundary ─────────────────────────────────────────────────
    /// The external PDF renderer reported a failure.
    #[error("Document renderer failed: {detail}")]
    RenderFailed { detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_collection_display_mentions_item() {
        let e = ConvertError::NotACollection {
            detail: "missing \"item\" field".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("item"), "got: {msg}");
        assert!(msg.contains("Postman"), "got: {msg}");
    }

    #[test]
    fn depth_exceeded_display() {
        let e = ConvertError::DepthExceeded {
            limit: 64,
            path: "Auth > Tokens".into(),
        };
        assert!(e.to_string().contains("64"));
        assert!(e.to_string().contains("Auth > Tokens"));
    }

    #[test]
    fn invalid_json_preserves_source() {
        let source = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let e = ConvertError::InvalidJson { source };
        assert!(e.to_string().starts_with("Input is not valid JSON"));
        assert!(std::error::Error::source(&e).is_some());
    }
}
