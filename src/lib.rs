//! # apidoc2pdf
//!
//! Convert Postman collection exports — or plain Markdown — into a pair of
//! print-ready artefacts: a linear Markdown document and a page stylesheet
//! with a custom running header.
//!
//! ## Why this crate?
//!
//! A Postman collection export is a deeply nested JSON tree of folders and
//! requests. Handing it straight to a Markdown/PDF renderer produces nothing
//! useful. This crate flattens the tree into a single readable document —
//! headings that track nesting depth, parameter tables, pretty-printed JSON
//! bodies — and composes the CSS a paged-media renderer needs to print it
//! with a per-page header.
//!
//! ## Pipeline Overview
//!
//! ```text
//! Postman JSON ──▶ parse ──▶ flatten ─┐
//!                                     ├──▶ DocumentRenderer ──▶ PDF bytes
//! Markdown ────────(pass-through)─────┤        (external)
//!                                     │
//! header text ──▶ stylesheet ─────────┘
//! ```
//!
//! The final Markdown+CSS→PDF step is deliberately out of scope: the
//! [`render::DocumentRenderer`] trait defines the contract, and any engine
//! that understands fenced code blocks, GFM tables, and `@page` margin boxes
//! can sit behind it.
//!
//! ## Quick Start
//!
//! ```rust
//! use apidoc2pdf::{convert, ConversionConfig, DocumentSource};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let json = r#"{"info": {"name": "Demo"}, "item": []}"#;
//! let config = ConversionConfig::builder()
//!     .header_text("Demo API Reference")
//!     .build()?;
//! let output = convert(DocumentSource::PostmanJson(json.to_string()), &config)?;
//! println!("{}", output.markdown);
//! eprintln!("requests: {}", output.stats.requests);
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `apidoc2pdf` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! apidoc2pdf = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod render;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use convert::{convert, convert_to_files, convert_with_renderer, DocumentSource};
pub use error::ConvertError;
pub use model::Collection;
pub use output::{ConversionOutput, FlattenStats};
pub use render::DocumentRenderer;
