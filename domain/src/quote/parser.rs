//! Quote payload parser
//!
//! Public quote APIs disagree on field names. The accepted shapes are:
//!
//! | field      | accepted keys                          |
//! |------------|----------------------------------------|
//! | text       | `content`, `quote`                     |
//! | author     | `author`, `by` (default `"Unknown"`)   |
//! | tags       | `tags` (array) or a single `tag`       |
//! | identifier | `_id`, `id` (string or number)         |
//!
//! A top-level array is unwrapped to its first element.

use super::entities::{Quote, QuoteId};
use crate::core::error::DomainError;
use crate::core::string::normalize_whitespace;
use serde_json::{Map, Value};

const TEXT_KEYS: &[&str] = &["content", "quote"];
const AUTHOR_KEYS: &[&str] = &["author", "by"];
const ID_KEYS: &[&str] = &["_id", "id"];

/// Parse a quote out of a raw response body
pub fn parse_quote(body: &str) -> Result<Quote, DomainError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| DomainError::InvalidQuote(format!("malformed JSON: {}", e)))?;
    parse_quote_value(&value)
}

/// Parse a quote out of an already-decoded JSON value
pub fn parse_quote_value(value: &Value) -> Result<Quote, DomainError> {
    let object = match value {
        Value::Object(map) => map,
        Value::Array(items) => match items.first() {
            Some(Value::Object(map)) => map,
            Some(_) => {
                return Err(DomainError::InvalidQuote(
                    "array element is not an object".to_string(),
                ));
            }
            None => return Err(DomainError::InvalidQuote("empty array".to_string())),
        },
        _ => {
            return Err(DomainError::InvalidQuote(
                "expected a JSON object".to_string(),
            ));
        }
    };

    let text = first_string(object, TEXT_KEYS)
        .map(|t| normalize_whitespace(&t))
        .filter(|t| !t.is_empty())
        .ok_or_else(|| DomainError::InvalidQuote("missing quote text".to_string()))?;

    let mut quote = Quote::new(text).with_tags(parse_tags(object));

    if let Some(author) = first_string(object, AUTHOR_KEYS) {
        quote = quote.with_author(author.trim());
    }

    if let Some(id) = parse_id(object) {
        quote = quote.with_id(id);
    }

    Ok(quote)
}

/// First non-blank string among `keys`; a blank value falls through to the next key
fn first_string(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find_map(|v| {
            v.as_str()
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        })
}

fn parse_tags(object: &Map<String, Value>) -> Vec<String> {
    match object.get("tags") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        _ => object
            .get("tag")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| vec![t.to_string()])
            .unwrap_or_default(),
    }
}

fn parse_id(object: &Map<String, Value>) -> Option<QuoteId> {
    ID_KEYS
        .iter()
        .filter_map(|key| object.get(*key))
        .find_map(|v| match v {
            Value::String(s) if !s.is_empty() => Some(QuoteId::new(s.clone())),
            Value::Number(n) => Some(QuoteId::new(n.to_string())),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_quotable_shape() {
        let q = parse_quote_value(&json!({
            "_id": "1",
            "content": "X",
            "author": "Y",
            "tags": ["a", "b"]
        }))
        .unwrap();
        assert_eq!(q.text(), "X");
        assert_eq!(q.author(), "Y");
        assert_eq!(q.tags(), &["a".to_string(), "b".to_string()]);
        assert_eq!(q.id().unwrap().as_str(), "1");
    }

    #[test]
    fn test_parse_alternate_keys() {
        let q = parse_quote_value(&json!({
            "quote": "Simplicity is prerequisite for reliability.",
            "by": "Dijkstra",
            "tag": "software",
            "id": 42
        }))
        .unwrap();
        assert_eq!(q.author(), "Dijkstra");
        assert_eq!(q.tags(), &["software".to_string()]);
        assert_eq!(q.id().unwrap().as_str(), "42");
    }

    #[test]
    fn test_blank_primary_key_falls_back_to_alternate() {
        let q = parse_quote_value(&json!({ "content": "", "quote": "X" })).unwrap();
        assert_eq!(q.text(), "X");

        let q = parse_quote_value(&json!({ "content": "T", "author": "", "by": "Y" })).unwrap();
        assert_eq!(q.author(), "Y");
        assert_eq!(q.author_line(), "— Y");
    }

    #[test]
    fn test_parse_defaults_author_and_tags() {
        let q = parse_quote_value(&json!({ "content": "Alone" })).unwrap();
        assert_eq!(q.author(), "Unknown");
        assert!(q.tags().is_empty());
        assert!(q.id().is_none());
    }

    #[test]
    fn test_parse_unwraps_array() {
        let q = parse_quote(r#"[{"content": "First"}, {"content": "Second"}]"#).unwrap();
        assert_eq!(q.text(), "First");
    }

    #[test]
    fn test_parse_normalizes_whitespace() {
        let q = parse_quote_value(&json!({ "content": "line one\n  line two" })).unwrap();
        assert_eq!(q.text(), "line one line two");
    }

    #[test]
    fn test_parse_missing_text_fails() {
        let err = parse_quote_value(&json!({ "author": "Nobody" })).unwrap_err();
        assert!(err.is_invalid_quote());
        assert!(err.to_string().contains("missing quote text"));
    }

    #[test]
    fn test_parse_blank_text_fails() {
        assert!(parse_quote_value(&json!({ "content": "   " })).is_err());
    }

    #[test]
    fn test_parse_malformed_json_fails() {
        let err = parse_quote("{not json").unwrap_err();
        assert!(err.to_string().contains("malformed JSON"));
    }

    #[test]
    fn test_parse_rejects_scalars_and_empty_arrays() {
        assert!(parse_quote("42").is_err());
        assert!(parse_quote("[]").is_err());
        assert!(parse_quote("[1]").is_err());
    }

    #[test]
    fn test_parse_skips_non_string_tags() {
        let q = parse_quote_value(&json!({ "content": "X", "tags": ["a", 3, "", "b"] })).unwrap();
        assert_eq!(q.tags_line(), "Tags: a, b");
    }
}
