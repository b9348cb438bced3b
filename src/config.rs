//! Configuration types for the conversion pipeline.
//!
//! All behaviour is controlled through [`ConversionConfig`], built via its
//! [`ConversionConfigBuilder`]. Keeping every knob in one struct makes it
//! trivial to share configs across threads, serialise them for logging, and
//! diff two runs to understand why their outputs differ.

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};

/// Configuration for a collection-to-document conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use apidoc2pdf::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .header_text("Payments API v2")
///     .max_depth(16)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Text printed in the top-centre running header of every page.
    /// Default: "Documentation".
    ///
    /// This is end-user input (a form field in the original service) and is
    /// treated as untrusted: embedded double quotes are escaped before the
    /// text lands in the generated stylesheet.
    pub header_text: String,

    /// Recursion ceiling for the folder tree. Default: 64.
    ///
    /// A parsed collection cannot contain reference cycles, so a depth cap
    /// is the whole defence against pathological nesting. Real exports
    /// rarely go past 5 or 6 levels; 64 leaves a wide margin while keeping
    /// stack usage bounded. Exceeding it fails the conversion with
    /// [`ConvertError::DepthExceeded`] rather than overflowing the stack.
    pub max_depth: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            header_text: "Documentation".to_string(),
            max_depth: 64,
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn header_text(mut self, text: impl Into<String>) -> Self {
        self.config.header_text = text.into();
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, ConvertError> {
        if self.config.max_depth == 0 {
            return Err(ConvertError::InvalidConfig(
                "max_depth must be ≥ 1".into(),
            ));
        }
        Ok(self.config)
    }
}
