//! Wire format for the hosted service's REST document protocol.
//!
//! The service types every field value on the wire: `{"stringValue": "a"}`,
//! `{"integerValue": "3"}`, `{"mapValue": {"fields": ...}}` and so on, and
//! names documents with full resource paths. This module converts between
//! plain JSON values and that representation.

use serde_json::{json, Map, Value};

use crate::document::{Document, Fields};
use crate::error::StoreError;

/// Encode a field map as a wire document body: `{"fields": {...}}`.
pub(super) fn encode_body(fields: &Fields) -> Value {
    let encoded: Map<String, Value> = fields
        .iter()
        .map(|(name, value)| (name.clone(), encode_value(value)))
        .collect();
    json!({ "fields": encoded })
}

fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(flag) => json!({ "booleanValue": flag }),
        Value::Number(number) => {
            // The service carries integers as decimal strings.
            if let Some(int) = number.as_i64() {
                json!({ "integerValue": int.to_string() })
            } else if let Some(int) = number.as_u64() {
                json!({ "integerValue": int.to_string() })
            } else {
                json!({ "doubleValue": number })
            }
        }
        Value::String(text) => json!({ "stringValue": text }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(encode_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => {
            let fields: Map<String, Value> = map
                .iter()
                .map(|(name, value)| (name.clone(), encode_value(value)))
                .collect();
            json!({ "mapValue": { "fields": fields } })
        }
    }
}

/// Decode a wire document (`name` + `fields`) into a [`Document`].
pub(super) fn decode_document(doc: &Value) -> Result<Document, StoreError> {
    let name = doc
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| StoreError::Codec("wire document has no name".to_string()))?;
    let fields = doc
        .get("fields")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();
    Ok(Document::new(doc_id(name), decode_fields(&fields)?))
}

fn decode_fields(fields: &Map<String, Value>) -> Result<Fields, StoreError> {
    fields
        .iter()
        .map(|(name, value)| Ok((name.clone(), decode_value(value)?)))
        .collect()
}

fn decode_value(value: &Value) -> Result<Value, StoreError> {
    let map = value
        .as_object()
        .ok_or_else(|| StoreError::Codec("wire value is not an object".to_string()))?;
    let (kind, inner) = map
        .iter()
        .next()
        .ok_or_else(|| StoreError::Codec("wire value is empty".to_string()))?;
    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" | "doubleValue" => Ok(inner.clone()),
        // Timestamps and references decode as their string forms.
        "stringValue" | "timestampValue" | "referenceValue" => Ok(inner.clone()),
        "integerValue" => {
            let text = match inner {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            if let Ok(int) = text.parse::<i64>() {
                return Ok(json!(int));
            }
            let int: u64 = text
                .parse()
                .map_err(|_| StoreError::Codec(format!("bad integer value: {}", text)))?;
            Ok(json!(int))
        }
        "arrayValue" => {
            let values = inner
                .get("values")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            let decoded = values.iter().map(decode_value).collect::<Result<_, _>>()?;
            Ok(Value::Array(decoded))
        }
        "mapValue" => {
            let fields = inner
                .get("fields")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default();
            Ok(Value::Object(decode_fields(&fields)?))
        }
        other => Err(StoreError::Codec(format!(
            "unsupported wire value kind: {}",
            other
        ))),
    }
}

/// Last segment of a document resource name.
pub(super) fn doc_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::object_fields;

    #[test]
    fn encodes_every_json_kind() {
        let fields = object_fields(json!({
            "none": null,
            "flag": true,
            "count": 42,
            "ratio": 0.5,
            "name": "Alice",
            "tags": ["a", "b"],
            "nested": { "deep": 1 }
        }))
        .unwrap();

        let body = encode_body(&fields);
        let encoded = &body["fields"];
        assert_eq!(encoded["none"], json!({ "nullValue": null }));
        assert_eq!(encoded["flag"], json!({ "booleanValue": true }));
        assert_eq!(encoded["count"], json!({ "integerValue": "42" }));
        assert_eq!(encoded["ratio"], json!({ "doubleValue": 0.5 }));
        assert_eq!(encoded["name"], json!({ "stringValue": "Alice" }));
        assert_eq!(
            encoded["tags"],
            json!({ "arrayValue": { "values": [
                { "stringValue": "a" },
                { "stringValue": "b" }
            ] } })
        );
        assert_eq!(
            encoded["nested"],
            json!({ "mapValue": { "fields": { "deep": { "integerValue": "1" } } } })
        );
    }

    #[test]
    fn decodes_what_it_encodes() {
        let fields = object_fields(json!({
            "none": null,
            "flag": false,
            "count": -7,
            "ratio": 2.25,
            "name": "Bob",
            "tags": [1, "two"],
            "nested": { "deep": { "deeper": true } }
        }))
        .unwrap();

        let body = encode_body(&fields);
        let wire = json!({
            "name": "projects/p/databases/(default)/documents/users/U9",
            "fields": body["fields"]
        });

        let doc = decode_document(&wire).unwrap();
        assert_eq!(doc.id, "U9");
        assert_eq!(doc.fields, fields);
    }

    #[test]
    fn decodes_document_without_fields() {
        let wire = json!({ "name": "projects/p/databases/(default)/documents/users/U1" });
        let doc = decode_document(&wire).unwrap();
        assert_eq!(doc.id, "U1");
        assert!(doc.fields.is_empty());
    }

    #[test]
    fn decodes_timestamps_as_strings() {
        let decoded = decode_value(&json!({ "timestampValue": "2024-01-01T00:00:00Z" })).unwrap();
        assert_eq!(decoded, json!("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn rejects_unknown_wire_kind() {
        let err = decode_value(&json!({ "geoPointValue": {} })).unwrap_err();
        assert!(matches!(err, StoreError::Codec(_)));
    }

    #[test]
    fn keeps_integers_beyond_i64_exact() {
        let fields = object_fields(json!({ "big": u64::MAX })).unwrap();
        let body = encode_body(&fields);
        assert_eq!(
            body["fields"]["big"],
            json!({ "integerValue": u64::MAX.to_string() })
        );

        let decoded = decode_value(&json!({ "integerValue": u64::MAX.to_string() })).unwrap();
        assert_eq!(decoded, json!(u64::MAX));
    }

    #[test]
    fn rejects_bad_integer() {
        let err = decode_value(&json!({ "integerValue": "not-a-number" })).unwrap_err();
        assert!(matches!(err, StoreError::Codec(_)));
    }

    #[test]
    fn doc_id_takes_last_segment() {
        assert_eq!(doc_id("projects/p/databases/(default)/documents/users/U1"), "U1");
        assert_eq!(doc_id("bare"), "bare");
    }
}
