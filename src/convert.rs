//! Conversion entry points.
//!
//! Everything here is a thin composition of the pipeline stages:
//! [`crate::pipeline::parse`] → [`crate::pipeline::flatten`] for collection
//! input (Markdown input passes straight through), plus
//! [`crate::pipeline::stylesheet`] for the CSS. The stages themselves are
//! pure; the only I/O in this module is the optional file output of
//! [`convert_to_files`].

use crate::config::ConversionConfig;
use crate::error::ConvertError;
use crate::output::{ConversionOutput, FlattenStats};
use crate::pipeline::{flatten, parse, stylesheet};
use crate::render::DocumentRenderer;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// An input document, already read into memory.
///
/// The original service accepted either a Markdown upload or a Postman
/// collection export; this enum is that branch made explicit.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// Raw Markdown text, passed to the renderer unmodified.
    Markdown(String),
    /// A Postman collection JSON export, flattened before rendering.
    PostmanJson(String),
}

impl DocumentSource {
    /// Classify `contents` by the extension of the file it came from:
    /// `.json` is a collection export, `.md`/`.markdown` is Markdown.
    ///
    /// # Errors
    /// [`ConvertError::InvalidInput`] for any other extension (or none) —
    /// guessing between the two formats from content alone invites silently
    /// treating a malformed collection as prose.
    pub fn from_path_hint(path: &Path, contents: String) -> Result<Self, ConvertError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::PostmanJson(contents)),
            Some("md") | Some("markdown") => Ok(Self::Markdown(contents)),
            _ => Err(ConvertError::InvalidInput {
                input: path.display().to_string(),
            }),
        }
    }
}

/// Convert an input document into its Markdown + stylesheet artefacts.
///
/// This is the primary entry point for the library.
///
/// # Errors
/// Structural errors only: input that is not valid JSON, not collection
/// shaped, or nested beyond `config.max_depth`. Individual bodies that fail
/// to parse as JSON degrade to verbatim rendering and are not errors.
pub fn convert(
    source: DocumentSource,
    config: &ConversionConfig,
) -> Result<ConversionOutput, ConvertError> {
    let (markdown, stats) = match source {
        DocumentSource::Markdown(text) => {
            debug!(bytes = text.len(), "passing Markdown input through");
            (text, FlattenStats::default())
        }
        DocumentSource::PostmanJson(text) => {
            let collection = parse::parse_collection(&text)?;
            flatten::flatten(&collection, config)?
        }
    };

    let css = stylesheet::compose(&config.header_text);

    info!(
        markdown_bytes = markdown.len(),
        requests = stats.requests,
        folders = stats.folders,
        "conversion complete"
    );

    Ok(ConversionOutput {
        markdown,
        stylesheet: css,
        stats,
    })
}

/// Convert and write the artefacts to `<stem>.md` and `<stem>.css`.
///
/// Both writes are atomic (temp file in the target directory, then rename)
/// so a crash mid-write never leaves a truncated artefact behind.
pub fn convert_to_files(
    source: DocumentSource,
    output_stem: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, ConvertError> {
    let output = convert(source, config)?;
    let stem = output_stem.as_ref();

    write_atomic(&stem.with_extension("md"), output.markdown.as_bytes())?;
    write_atomic(&stem.with_extension("css"), output.stylesheet.as_bytes())?;

    Ok(output)
}

/// Convert and hand both artefacts to an external PDF engine.
///
/// # Errors
/// Conversion errors as for [`convert`], plus whatever the renderer reports
/// as [`ConvertError::RenderFailed`].
pub fn convert_with_renderer<R: DocumentRenderer>(
    source: DocumentSource,
    config: &ConversionConfig,
    renderer: &R,
) -> Result<Vec<u8>, ConvertError> {
    let output = convert(source, config)?;
    renderer.render(&output.markdown, &output.stylesheet)
}

/// Write `bytes` to `path` via a named temp file in the same directory.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ConvertError> {
    let map_io = |source: std::io::Error| ConvertError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        std::fs::create_dir_all(parent).map_err(map_io)?;
    }

    let dir = parent.unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(map_io)?;
    tmp.write_all(bytes).map_err(map_io)?;
    tmp.persist(path)
        .map_err(|e| map_io(e.error))
        .map(|_| ())
}
