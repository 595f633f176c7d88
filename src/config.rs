use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const REGISTRY_URL: &str = "https://connectors.airbyte.com/files/registries/v0/oss_registry.json";
pub const OUTPUT_PATH: &str = "./seed/definitions.json";

/// Name of the registry array holding destination connector definitions
pub const DESTINATIONS_KEY: &str = "destinations";

#[derive(Parser, Debug, Clone)]
#[command(name = "airbyte-registry-seed")]
#[command(about = "Convert the Airbyte destination registry into connector seed definitions")]
pub struct Args {
    /// Registry document to download
    #[arg(long, value_name = "URL", default_value = REGISTRY_URL)]
    pub url: String,

    /// Seed file to create or overwrite (its directory must already exist)
    #[arg(long, value_name = "PATH", default_value = OUTPUT_PATH)]
    pub output: PathBuf,

    /// Abort the registry request after this many seconds (no timeout by default)
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}

impl Args {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
