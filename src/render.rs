//! The external rendering boundary.
//!
//! Turning Markdown + CSS into PDF bytes is the job of a paged-media engine
//! (WeasyPrint-class tools, headless browsers, purpose-built layout crates).
//! This crate does not ship one; it defines the contract an engine must
//! satisfy and hands it the two artefacts unmodified.
//!
//! An implementation must support fenced code blocks and GFM tables on the
//! Markdown side, and `@page` margin boxes (`@top-center` content) on the
//! CSS side for the running header to appear.

use crate::error::ConvertError;

/// A Markdown + CSS → PDF engine.
///
/// Implementations receive the flattened Markdown document and the composed
/// stylesheet exactly as produced by the pipeline and return the finished
/// PDF bytes.
pub trait DocumentRenderer {
    /// Render `markdown` styled by `stylesheet` into PDF bytes.
    ///
    /// # Errors
    /// [`ConvertError::RenderFailed`] for any engine-side failure.
    fn render(&self, markdown: &str, stylesheet: &str) -> Result<Vec<u8>, ConvertError>;
}

impl<T: DocumentRenderer + ?Sized> DocumentRenderer for &T {
    fn render(&self, markdown: &str, stylesheet: &str) -> Result<Vec<u8>, ConvertError> {
        (**self).render(markdown, stylesheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoRenderer;

    impl DocumentRenderer for EchoRenderer {
        fn render(&self, markdown: &str, stylesheet: &str) -> Result<Vec<u8>, ConvertError> {
            Ok(format!("{markdown}\u{0}{stylesheet}").into_bytes())
        }
    }

    #[test]
    fn trait_object_is_usable() {
        let renderer: &dyn DocumentRenderer = &EchoRenderer;
        let bytes = renderer.render("# Doc", "@page {}").unwrap();
        assert!(bytes.starts_with(b"# Doc"));
    }

    #[test]
    fn blanket_ref_impl_forwards() {
        let renderer = EchoRenderer;
        let by_ref = &renderer;
        assert!(by_ref.render("a", "b").is_ok());
    }
}
