//! Read-only data model for a Postman Collection v2 export.
//!
//! The model is deliberately *informal*: it mirrors the fields the flattener
//! actually consumes and tolerates everything else. Postman exports carry a
//! lot of tool-specific baggage (`event`, `protocolProfileBehavior`, auth
//! blocks) that we never look at, so every struct accepts unknown fields.
//!
//! Everything here is constructed once from parsed JSON, walked by the
//! flattener, and dropped. Nothing is mutated after construction.

use serde::Deserialize;

/// Root of a Postman collection export.
#[derive(Debug, Deserialize)]
pub struct Collection {
    /// Collection metadata (`info.name`, `info.description`).
    #[serde(default)]
    pub info: Option<Info>,
    /// Top-level item tree. Presence is validated before deserialisation;
    /// see [`crate::pipeline::parse`].
    #[serde(default)]
    pub item: Vec<Node>,
}

/// The `info` block of a collection.
#[derive(Debug, Deserialize)]
pub struct Info {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// One entry in an `item[]` array: a folder, a request, or something we
/// do not recognise.
///
/// Variant order matters: Postman distinguishes folders from requests purely
/// by shape (`item` present vs. `request` present), and serde's untagged
/// matching tries variants top to bottom. `Unknown` is the catch-all so a
/// single odd entry degrades to a skip instead of failing the whole parse.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Folder(Folder),
    Request(RequestEntry),
    Unknown(serde_json::Value),
}

/// A folder: named grouping with a child item tree.
#[derive(Debug, Deserialize)]
pub struct Folder {
    pub name: Option<String>,
    pub description: Option<String>,
    pub item: Vec<Node>,
}

/// A request item: the leaf of the tree, plus saved example responses.
#[derive(Debug, Deserialize)]
pub struct RequestEntry {
    pub name: Option<String>,
    pub request: RequestDetails,
    #[serde(default)]
    pub response: Vec<Response>,
}

/// The `request` object inside a request item.
#[derive(Debug, Deserialize)]
pub struct RequestDetails {
    pub method: Option<String>,
    pub description: Option<String>,
    pub url: Option<Url>,
    #[serde(default)]
    pub header: Vec<Parameter>,
    #[serde(default)]
    pub cookie: Vec<Parameter>,
    pub body: Option<Body>,
}

/// Request URL: the raw string plus query parameters and path variables.
#[derive(Debug, Deserialize)]
pub struct Url {
    pub raw: Option<String>,
    #[serde(default)]
    pub query: Vec<Parameter>,
    #[serde(default)]
    pub variable: Vec<Parameter>,
}

/// One parameter row: query, path variable, header, or cookie.
///
/// Exports are inconsistent about the name field (`key` for most categories,
/// `name` in some older ones) and about value types (booleans and numbers
/// show up in the wild), so `value` stays a raw JSON value until render time.
#[derive(Debug, Deserialize)]
pub struct Parameter {
    pub key: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    pub description: Option<String>,
}

impl Parameter {
    /// The display name: `key` wins over `name`, both absent renders empty.
    pub fn display_name(&self) -> &str {
        self.key
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }

    /// The example value as display text. JSON strings render without
    /// quotes; any other JSON type falls back to its compact serialisation.
    pub fn display_value(&self) -> String {
        match &self.value {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }
}

/// Request body. Only `mode: "raw"` bodies are rendered.
#[derive(Debug, Deserialize)]
pub struct Body {
    pub mode: Option<String>,
    pub raw: Option<String>,
}

/// A saved example response. Only the raw body is consumed.
#[derive(Debug, Deserialize)]
pub struct Response {
    pub body: Option<String>,
}
