use serde_json::{Map, Value};
use tracing::debug;

use crate::config::DESTINATIONS_KEY;
use crate::error::{Result, SeedError};

/// One connector definition as published by the registry. Read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRecord {
    fields: Map<String, Value>,
}

impl SourceRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn required(&self, key: &str) -> Result<&Value> {
        self.fields.get(key).ok_or_else(|| SeedError::missing(key))
    }

    /// The nested connector `spec` object.
    pub fn spec(&self) -> Result<&Map<String, Value>> {
        self.required("spec")?
            .as_object()
            .ok_or_else(|| SeedError::InvalidField {
                field: "spec".to_string(),
                expected: "an object",
            })
    }
}

impl TryFrom<Value> for SourceRecord {
    type Error = Value;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(SourceRecord::new(fields)),
            other => Err(other),
        }
    }
}

/// Parse the registry document and pull out the destination definitions.
pub fn parse(body: &str) -> Result<Vec<SourceRecord>> {
    let document: Value = serde_json::from_str(body).map_err(SeedError::Parse)?;
    let records = destinations(document)?;
    debug!(count = records.len(), "parsed destination definitions");
    Ok(records)
}

fn destinations(document: Value) -> Result<Vec<SourceRecord>> {
    let entries = match document {
        Value::Object(mut top) => match top.remove(DESTINATIONS_KEY) {
            Some(Value::Array(entries)) => entries,
            _ => return Err(SeedError::MissingArray(DESTINATIONS_KEY.to_string())),
        },
        _ => return Err(SeedError::MissingArray(DESTINATIONS_KEY.to_string())),
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            SourceRecord::try_from(entry).map_err(|_| SeedError::InvalidRecord { index })
        })
        .collect()
}
