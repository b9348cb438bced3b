//! Flattening: typed [`Collection`] → linear Markdown.
//!
//! ## Why flatten?
//!
//! A collection is a recursive tree of folders and requests, which no
//! Markdown renderer can display directly. The flattener performs a
//! depth-first walk, mapping nesting depth onto heading levels: the
//! collection name is the single `#` heading, top-level folders and requests
//! get `##`, their children `###`, and so on. Sibling order is significant
//! in Postman (authors arrange requests deliberately) and is reproduced
//! exactly — nothing here sorts.
//!
//! Request bodies and example responses are content-sniffed: text that
//! parses as JSON is re-serialised with 2-space indentation inside a
//! ` ```json ` fence, normalising whatever whitespace the export carried.
//! Anything else goes into an untagged fence verbatim. A failed JSON parse
//! is a per-field fallback, never an error.
//!
//! Only the first of a request's saved responses is rendered. This is a
//! deliberate simplification: exports routinely carry half a dozen near
//! identical examples per request and printing them all doubles the page
//! count for no informational gain.

use crate::config::ConversionConfig;
use crate::error::ConvertError;
use crate::model::{Body, Collection, Folder, Node, Parameter, RequestEntry};
use crate::output::FlattenStats;
use tracing::{debug, trace};

/// Default document title when the collection has no `info.name`.
const DEFAULT_TITLE: &str = "API Documentation";

/// Default heading for a request item with no name.
const DEFAULT_REQUEST_NAME: &str = "Unnamed Endpoint";

/// Heading level assigned to top-level items (directly under the `#` title).
const TOP_LEVEL: usize = 2;

/// Flatten a collection into a single Markdown document.
///
/// Pure function of its input: no I/O, deterministic, and on success returns
/// the full accumulated text — never a partial document.
///
/// # Errors
/// [`ConvertError::DepthExceeded`] when the folder tree nests deeper than
/// `config.max_depth`.
pub fn flatten(
    collection: &Collection,
    config: &ConversionConfig,
) -> Result<(String, FlattenStats), ConvertError> {
    let mut flattener = Flattener {
        blocks: Vec::new(),
        stats: FlattenStats::default(),
        path: Vec::new(),
        max_depth: config.max_depth,
    };

    let info = collection.info.as_ref();
    let title = info
        .and_then(|i| i.name.as_deref())
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_TITLE);
    flattener.blocks.push(format!("# {title}"));

    if let Some(description) = info.and_then(|i| i.description.as_deref()) {
        if !description.is_empty() {
            flattener.blocks.push(description.to_string());
        }
    }

    flattener.visit_items(&collection.item, TOP_LEVEL)?;

    debug!(
        folders = flattener.stats.folders,
        requests = flattener.stats.requests,
        skipped = flattener.stats.skipped_items,
        "flattened collection"
    );

    let mut markdown = flattener.blocks.join("\n\n");
    markdown.push('\n');
    Ok((markdown, flattener.stats))
}

/// Traversal state: accumulated blocks (joined with one blank line at the
/// end), counters, and the folder path for error messages.
struct Flattener {
    blocks: Vec<String>,
    stats: FlattenStats,
    path: Vec<String>,
    max_depth: usize,
}

impl Flattener {
    /// Visit one sibling sequence at the given heading level, in input order.
    fn visit_items(&mut self, items: &[Node], level: usize) -> Result<(), ConvertError> {
        // level - 1 is the nesting depth (top-level items sit at depth 1).
        if level - 1 > self.max_depth {
            return Err(ConvertError::DepthExceeded {
                limit: self.max_depth,
                path: self.path.join(" > "),
            });
        }

        for node in items {
            match node {
                Node::Folder(folder) => self.visit_folder(folder, level)?,
                Node::Request(entry) => self.visit_request(entry, level),
                Node::Unknown(value) => {
                    trace!(?value, "skipping unrecognised collection item");
                    self.stats.skipped_items += 1;
                }
            }
        }
        Ok(())
    }

    fn visit_folder(&mut self, folder: &Folder, level: usize) -> Result<(), ConvertError> {
        let name = folder.name.as_deref().unwrap_or_default();
        self.heading(level, name);
        self.stats.folders += 1;

        if let Some(description) = folder.description.as_deref() {
            if !description.is_empty() {
                self.blocks.push(description.to_string());
            }
        }

        self.path.push(name.to_string());
        let result = self.visit_items(&folder.item, level + 1);
        self.path.pop();
        result
    }

    fn visit_request(&mut self, entry: &RequestEntry, level: usize) {
        let name = entry.name.as_deref().unwrap_or(DEFAULT_REQUEST_NAME);
        self.heading(level, name);
        self.stats.requests += 1;

        let request = &entry.request;
        if let Some(description) = request.description.as_deref() {
            if !description.is_empty() {
                self.blocks.push(description.to_string());
            }
        }

        // Method always renders; the URL line only exists when the export
        // carries a non-empty raw URL string.
        let method = request.method.as_deref().unwrap_or("GET");
        let mut request_line = format!("**Method:** `{method}`");
        if let Some(raw) = request.url.as_ref().and_then(|u| u.raw.as_deref()) {
            if !raw.is_empty() {
                request_line.push_str(&format!("\n**URL:** `{raw}`"));
            }
        }
        self.blocks.push(request_line);

        if let Some(url) = &request.url {
            self.parameter_table("Query", &url.query);
            self.parameter_table("Path", &url.variable);
        }
        self.parameter_table("Header", &request.header);
        self.parameter_table("Cookie", &request.cookie);

        if let Some(block) = self.body_block(request.body.as_ref()) {
            self.blocks.push("### Request Body:".to_string());
            self.blocks.push(block);
        }

        // First saved response only; the rest are intentionally ignored.
        if let Some(body) = entry
            .response
            .first()
            .and_then(|r| r.body.as_deref())
        {
            let block = self.code_block(body);
            self.blocks.push("### Example Response:".to_string());
            self.blocks.push(block);
        }
    }

    fn heading(&mut self, level: usize, text: &str) {
        self.blocks.push(format!("{} {}", "#".repeat(level), text));
        self.stats.max_depth_seen = self.stats.max_depth_seen.max(level);
    }

    /// Emit a labelled parameter table, or nothing when the category is
    /// empty — an empty table is worse than no table.
    fn parameter_table(&mut self, label: &str, params: &[Parameter]) {
        if params.is_empty() {
            return;
        }

        self.blocks.push(format!("#### {label} Parameters:"));

        let mut table = String::from("| Name | Example Value | Description |\n|---|---|---|");
        for param in params {
            let description = param
                .description
                .as_deref()
                .unwrap_or_default()
                .replace('\n', " ");
            table.push_str(&format!(
                "\n| `{}` | `{}` | {} |",
                param.display_name(),
                param.display_value(),
                description.trim(),
            ));
        }
        self.blocks.push(table);
        self.stats.parameter_tables += 1;
    }

    /// Render a request body, or `None` when there is nothing to show.
    /// Only `mode: "raw"` with non-empty content renders; form-data,
    /// url-encoded, and GraphQL bodies are out of scope.
    fn body_block(&mut self, body: Option<&Body>) -> Option<String> {
        let body = body?;
        if body.mode.as_deref() != Some("raw") {
            return None;
        }
        let raw = body.raw.as_deref().filter(|r| !r.is_empty())?;
        Some(self.code_block(raw))
    }

    /// The JSON-or-raw rule shared by bodies and responses: content that
    /// parses as JSON is re-serialised pretty (2-space indent) in a tagged
    /// fence, normalising input whitespace; anything else goes verbatim in
    /// an untagged fence.
    fn code_block(&mut self, raw: &str) -> String {
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(value) => {
                let pretty =
                    serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_string());
                self.stats.json_blocks += 1;
                format!("```json\n{pretty}\n```")
            }
            Err(_) => {
                self.stats.raw_blocks += 1;
                format!("```\n{raw}\n```")
            }
        }
    }
}
