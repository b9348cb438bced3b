//! Input validation: JSON text → typed [`Collection`].
//!
//! Validation happens in two layers. The shape check runs first on the raw
//! [`serde_json::Value`] so a non-collection input fails with a pointed
//! message ("missing \"item\"") instead of a generic serde type error.
//! Only then does the typed deserialisation run. Within the tree, individual
//! entries that fit neither the folder nor the request shape degrade to
//! [`crate::model::Node::Unknown`] rather than failing the parse.

use crate::error::ConvertError;
use crate::model::Collection;
use serde_json::Value;

/// Parse collection JSON text into the typed model.
///
/// # Errors
/// * [`ConvertError::InvalidJson`] — the text is not JSON at all
/// * [`ConvertError::NotACollection`] — JSON, but the root is not an object
///   with an `item` array
pub fn parse_collection(json_text: &str) -> Result<Collection, ConvertError> {
    let value: Value =
        serde_json::from_str(json_text).map_err(|source| ConvertError::InvalidJson { source })?;
    parse_collection_value(value)
}

/// Parse an already-decoded JSON value into the typed model.
///
/// Same validation as [`parse_collection`], for callers that hold a
/// [`serde_json::Value`] (e.g. a web service that decoded the upload once).
pub fn parse_collection_value(value: Value) -> Result<Collection, ConvertError> {
    let obj = value.as_object().ok_or_else(|| ConvertError::NotACollection {
        detail: format!("root is {}, not an object", json_type_name(&value)),
    })?;

    // "item" must exist at the root, and must be an array. Its absence is a
    // structural failure, never a silent empty document.
    match obj.get("item") {
        None => {
            return Err(ConvertError::NotACollection {
                detail: "missing \"item\" field".into(),
            })
        }
        Some(item) if !item.is_array() => {
            return Err(ConvertError::NotACollection {
                detail: format!("\"item\" is {}, not an array", json_type_name(item)),
            })
        }
        Some(_) => {}
    }

    serde_json::from_value(value).map_err(|e| ConvertError::MalformedItem {
        detail: e.to_string(),
    })
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Node;

    #[test]
    fn minimal_collection_parses() {
        let c = parse_collection(r#"{"item": []}"#).unwrap();
        assert!(c.info.is_none());
        assert!(c.item.is_empty());
    }

    #[test]
    fn info_fields_are_read() {
        let c = parse_collection(
            r#"{"info": {"name": "Orders API", "description": "v3"}, "item": []}"#,
        )
        .unwrap();
        let info = c.info.unwrap();
        assert_eq!(info.name.as_deref(), Some("Orders API"));
        assert_eq!(info.description.as_deref(), Some("v3"));
    }

    #[test]
    fn missing_item_is_structural_error() {
        let err = parse_collection(r#"{"info": {"name": "X"}}"#).unwrap_err();
        assert!(matches!(err, ConvertError::NotACollection { .. }));
    }

    #[test]
    fn non_object_root_is_structural_error() {
        let err = parse_collection(r#"[1, 2, 3]"#).unwrap_err();
        match err {
            ConvertError::NotACollection { detail } => {
                assert!(detail.contains("an array"), "got: {detail}")
            }
            other => panic!("expected NotACollection, got {other:?}"),
        }
    }

    #[test]
    fn item_must_be_an_array() {
        let err = parse_collection(r#"{"item": "oops"}"#).unwrap_err();
        assert!(matches!(err, ConvertError::NotACollection { .. }));
    }

    #[test]
    fn garbage_text_is_invalid_json() {
        let err = parse_collection("definitely not json").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidJson { .. }));
    }

    #[test]
    fn nested_folders_parse_recursively() {
        let c = parse_collection(
            r#"{"item": [{"name": "outer", "item": [{"name": "inner", "item": []}]}]}"#,
        )
        .unwrap();
        let Node::Folder(outer) = &c.item[0] else {
            panic!("expected folder");
        };
        assert!(matches!(outer.item[0], Node::Folder(_)));
    }

    #[test]
    fn odd_entry_does_not_poison_the_parse() {
        let c = parse_collection(
            r#"{"item": [
                {"weird": {"deeply": ["nested"]}},
                {"name": "Ping", "request": {"method": "GET"}}
            ]}"#,
        )
        .unwrap();
        assert!(matches!(c.item[0], Node::Unknown(_)));
        assert!(matches!(c.item[1], Node::Request(_)));
    }
}
