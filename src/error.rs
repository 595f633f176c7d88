use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SeedError>;

/// Errors raised while building the seed file. None of them are recovered.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to fetch registry: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Registry request to {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to parse registry JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Registry document has no `{0}` array")]
    MissingArray(String),

    #[error("Registry entry {index} is not a JSON object")]
    InvalidRecord { index: usize },

    #[error("Missing required field `{field}`")]
    MissingField { field: String },

    #[error("Field `{field}` must be {expected}")]
    InvalidField { field: String, expected: &'static str },

    #[error("Docker repository `{0}` has no `/` separated image name")]
    InvalidDockerRepository(String),

    #[error("Destination record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: Box<SeedError>,
    },

    #[error("Failed to serialize definitions: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SeedError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        SeedError::MissingField { field: field.into() }
    }
}
