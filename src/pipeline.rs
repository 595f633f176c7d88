use serde_json::Value;
use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::error::{Result, SeedError};
use crate::fetch::RegistryFetcher;
use crate::output::{serialize, SeedWriter};
use crate::registry::parse;
use crate::transform::{transform_all, TransformedRecord};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub records_written: usize,
    /// Union of top-level keys across all written records.
    pub top_level_keys: BTreeSet<String>,
}

/// Fetch the registry, normalize the destination definitions and write them out.
///
/// Nothing reaches the writer unless every record transformed and the whole
/// batch serialized.
pub async fn run<F, W>(fetcher: &F, writer: &W) -> Result<RunSummary>
where
    F: RegistryFetcher + ?Sized,
    W: SeedWriter + ?Sized,
{
    let body = fetcher.fetch().await?;
    let sources = parse(&body)?;
    let records = transform_all(&sources)?;

    let top_level_keys = top_level_keys(&records)?;
    debug!(keys = ?top_level_keys, "top-level keys in seed definitions");

    let text = serialize(&records)?;
    writer.write(&text)?;

    info!(records = records.len(), "seed definitions written");
    Ok(RunSummary {
        records_written: records.len(),
        top_level_keys,
    })
}

fn top_level_keys(records: &[TransformedRecord]) -> Result<BTreeSet<String>> {
    let mut keys = BTreeSet::new();
    for record in records {
        if let Value::Object(map) = serde_json::to_value(record).map_err(SeedError::Serialize)? {
            keys.extend(map.into_iter().map(|(key, _)| key));
        }
    }
    Ok(keys)
}
