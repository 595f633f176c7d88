// Airbyte registry → connector seed definitions
pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod pipeline;
pub mod registry;
pub mod transform;

// Re-export core types for convenience
pub use config::Args;
pub use error::{Result, SeedError};
pub use fetch::{HttpFetcher, RegistryFetcher};
pub use output::{serialize, FileWriter, SeedWriter};
pub use pipeline::{run, RunSummary};
pub use registry::{parse, SourceRecord};
pub use transform::{transform_all, transform_record, TransformedRecord, VendorAttributes, VendorSpec};
