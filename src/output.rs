use serde_json::{Map, Value};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, SeedError};
use crate::transform::TransformedRecord;

const SECRET_MARKER: &str = "airbyte_secret";
const CREDENTIAL_MARKER: &str = "credential_field";

/// Render the seed file: 2-space indented JSON, keys sorted at every depth.
///
/// `airbyte_secret` is rewritten to `credential_field` on the rendered text,
/// so the substitution also reaches string values that merely contain it.
pub fn serialize(records: &[TransformedRecord]) -> Result<String> {
    let value = serde_json::to_value(records).map_err(SeedError::Serialize)?;
    let text = serde_json::to_string_pretty(&sort_keys(value)).map_err(SeedError::Serialize)?;
    Ok(text.replace(SECRET_MARKER, CREDENTIAL_MARKER))
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, sort_keys(value)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Destination for the rendered seed text.
pub trait SeedWriter {
    fn write(&self, text: &str) -> Result<()>;
}

/// Creates or truncates a file. The parent directory must already exist.
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SeedError {
        SeedError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SeedWriter for FileWriter {
    fn write(&self, text: &str) -> Result<()> {
        let mut file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        file.write_all(text.as_bytes()).map_err(|e| self.io_error(e))?;
        file.flush().map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), bytes = text.len(), "seed file written");
        Ok(())
    }
}
