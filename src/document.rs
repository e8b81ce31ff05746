use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::StoreError;

/// The field map of a document: JSON field names to values.
pub type Fields = Map<String, Value>;

/// A snapshot of one stored document, tagged with its service-assigned id.
///
/// Serializes as `{ "id": ..., ...fields }`. A `Document` is a copy of what
/// the service returned, not a live reference; later writes to the store do
/// not show up in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Document {
            id: id.into(),
            fields,
        }
    }

    /// Value of a single field, if present.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// Require a JSON object payload. Anything else is rejected before a request
/// is issued.
pub(crate) fn object_fields(data: Value) -> Result<Fields, StoreError> {
    match data {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Codec(format!(
            "document payload must be a JSON object, got {}",
            value_kind(&other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
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
    use serde_json::json;

    #[test]
    fn serializes_with_inline_fields() {
        let fields = object_fields(json!({ "name": "Alice", "age": 30 })).unwrap();
        let doc = Document::new("U1", fields);
        let encoded = serde_json::to_value(&doc).unwrap();
        assert_eq!(encoded, json!({ "id": "U1", "name": "Alice", "age": 30 }));
    }

    #[test]
    fn roundtrips_through_json() {
        let source = json!({ "id": "U2", "name": "Bob" });
        let doc: Document = serde_json::from_value(source.clone()).unwrap();
        assert_eq!(doc.id, "U2");
        assert_eq!(doc.field("name"), Some(&json!("Bob")));
        assert_eq!(serde_json::to_value(&doc).unwrap(), source);
    }

    #[test]
    fn rejects_non_object_payloads() {
        for payload in [json!(null), json!(true), json!(7), json!("x"), json!([1])] {
            let err = object_fields(payload).unwrap_err();
            assert!(matches!(err, StoreError::Codec(_)));
        }
    }
}
