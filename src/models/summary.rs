use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of a summarize call. `language` falls back to the configured default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    pub translated: String,
}

/// Opaque identifier of a stored summary. Stores may hand out integers or
/// strings; both are carried as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Read an identifier out of a JSON value. Falsy values (null, "", 0,
    /// false) and non-scalar values count as missing.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(Self(n.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::String(s) => Ok(Self(s)),
            Value::Number(n) => Ok(Self(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "expected string or number id, got {}",
                other
            ))),
        }
    }
}

/// Payload of a save call. Missing fields are stored as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSummaryRecord {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub id: RecordId,
    pub url: String,
    pub summary: String,
    pub translation: String,
    pub language: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_ids_are_missing() {
        for value in [json!(null), json!(""), json!(0), json!(false), json!([1])] {
            assert_eq!(RecordId::from_json(&value), None, "{value}");
        }
    }

    #[test]
    fn numeric_and_string_ids_are_accepted() {
        assert_eq!(RecordId::from_json(&json!(42)), Some(RecordId::new("42")));
        assert_eq!(
            RecordId::from_json(&json!("3f2c-uuid")),
            Some(RecordId::new("3f2c-uuid"))
        );
    }

    #[test]
    fn record_deserializes_store_rows() {
        let row = json!({
            "id": 7,
            "url": "https://example.com/post",
            "summary": "s",
            "translation": "t",
            "language": "French",
            "created_at": "2025-03-01T10:00:00.123456+00:00"
        });
        let record: SummaryRecord = serde_json::from_value(row).unwrap();
        assert_eq!(record.id.as_str(), "7");
        assert_eq!(serde_json::to_value(&record.id).unwrap(), json!("7"));
    }

    #[test]
    fn new_record_tolerates_missing_fields() {
        let record: NewSummaryRecord =
            serde_json::from_value(json!({"url": "https://example.com"})).unwrap();
        assert_eq!(record.url, "https://example.com");
        assert!(record.summary.is_empty());
    }
}
