use crate::utils::error::{FlowError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Decoded JSON object as returned by the endpoint. Unused fields are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceRecord {
    pub fields: Map<String, Value>,
}

impl SourceRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Decodes a response body. Anything but a JSON object is rejected.
    pub fn from_json_str(body: &str) -> Result<Self> {
        let fields: Map<String, Value> = serde_json::from_str(body)?;
        Ok(Self { fields })
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn require_str(&self, key: &str) -> Result<&str> {
        match self.fields.get(key) {
            None => Err(FlowError::missing_field(key)),
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(_) => Err(FlowError::InvalidFieldType {
                field: key.to_string(),
                expected: "string".to_string(),
            }),
        }
    }
}

/// `processed` is always true; build with `new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedRecord {
    pub processed: bool,
    pub title: String,
}

impl ProcessedRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            processed: true,
            title: title.into(),
        }
    }
}

impl fmt::Display for ProcessedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"processed\": {}, \"title\": {}}}",
            self.processed,
            Value::String(self.title.clone())
        )
    }
}
