//! Pipeline stages for collection-to-document conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations without touching other stages.
//!
//! ## Data Flow
//!
//! ```text
//! parse ──────▶ flatten ──────▶ (renderer)
//! (JSON text)   (Markdown)
//!
//! stylesheet ─────────────────▶ (renderer)
//! (header text → CSS)
//! ```
//!
//! 1. [`parse`]      — validate the collection shape and build the typed model
//! 2. [`flatten`]    — depth-first walk of the item tree emitting Markdown
//! 3. [`stylesheet`] — compose the page stylesheet with the escaped header
//!
//! All three stages are pure functions of their input: no I/O, no shared
//! state, safe to call from any number of threads without coordination.

pub mod flatten;
pub mod parse;
pub mod stylesheet;
