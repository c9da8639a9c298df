//! Typed attribute values attached to entity snapshots.

use serde::{Deserialize, Serialize};

/// A single attribute value as reported by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Json(serde_json::Value),
}

impl AttributeValue {
    /// The string payload, if this is a string attribute.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_plain_string_as_string_variant() {
        let val: AttributeValue = serde_json::from_str("\"mdi:fan\"").unwrap();
        assert_eq!(val.as_str(), Some("mdi:fan"));
    }

    #[test]
    fn should_not_expose_non_string_as_str() {
        let val: AttributeValue = serde_json::from_str("42").unwrap();
        assert_eq!(val, AttributeValue::Int(42));
        assert_eq!(val.as_str(), None);
    }

    #[test]
    fn should_deserialize_json_object_as_json_variant() {
        let val: AttributeValue = serde_json::from_str(r#"{"nested": "value"}"#).unwrap();
        assert!(matches!(val, AttributeValue::Json(_)));
    }
}
