use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::{Result, SeedError};
use crate::registry::SourceRecord;

/// Top-level record keys that move under `vendorAttributes` (or become `uid`/`title`).
pub const RELOCATED_RECORD_KEYS: [&str; 12] = [
    "destinationDefinitionId",
    "name",
    "dockerRepository",
    "dockerImageTag",
    "releaseStage",
    "tags",
    "license",
    "githubIssueLabel",
    "sourceType",
    "resourceRequirements",
    "normalizationConfig",
    "supportsDbt",
];

/// Connector spec keys that move under `vendorAttributes.spec`.
pub const RELOCATED_SPEC_KEYS: [&str; 9] = [
    "supportsIncremental",
    "supportsNormalization",
    "supportsDBT",
    "supported_destination_sync_modes",
    "authSpecification",
    "advanced_auth",
    "supportsNamespaces",
    "protocol_version",
    "$schema",
];

const GENERATED_KEYS: [&str; 4] = ["uid", "id", "title", "vendorAttributes"];

const SYNC_MODES_KEY: &str = "supported_destination_sync_modes";

/// A destination definition in the normalized seed layout.
///
/// Serializes to the seed JSON shape: the four normalized keys, followed by
/// every source key that was not relocated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformedRecord {
    pub uid: Value,
    pub id: String,
    pub title: Value,
    #[serde(rename = "vendorAttributes")]
    pub vendor_attributes: VendorAttributes,
    #[serde(flatten)]
    pub passthrough: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorAttributes {
    pub docker_repository: String,
    pub docker_image_tag: Value,
    pub release_stage: Value,
    pub tags: Value,
    pub license: Value,
    pub github_issue_label: Value,
    pub source_type: Value,
    pub resource_requirements: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalization_config: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_dbt: Option<Value>,
    pub spec: VendorSpec,
}

/// Protocol-level capabilities lifted out of the connector spec.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorSpec {
    #[serde(rename = "supported_destination_sync_modes")]
    pub supported_destination_sync_modes: Value,
    #[serde(rename = "supportsIncremental", skip_serializing_if = "Option::is_none")]
    pub supports_incremental: Option<Value>,
    #[serde(rename = "supportsNormalization", skip_serializing_if = "Option::is_none")]
    pub supports_normalization: Option<Value>,
    #[serde(rename = "supportsDBT", skip_serializing_if = "Option::is_none")]
    pub supports_dbt: Option<Value>,
    #[serde(rename = "authSpecification", skip_serializing_if = "Option::is_none")]
    pub auth_specification: Option<Value>,
    #[serde(rename = "advanced_auth", skip_serializing_if = "Option::is_none")]
    pub advanced_auth: Option<Value>,
    #[serde(rename = "supportsNamespaces", skip_serializing_if = "Option::is_none")]
    pub supports_namespaces: Option<Value>,
    #[serde(rename = "protocol_version", skip_serializing_if = "Option::is_none")]
    pub protocol_version: Option<Value>,
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

/// Build the normalized record for one registry entry.
///
/// The source is left untouched; fields are copied into their new location
/// and left out of the pass-through set.
pub fn transform_record(record: &SourceRecord) -> Result<TransformedRecord> {
    let uid = record.required("destinationDefinitionId")?.clone();
    let docker_repository = docker_repository(record)?;
    let id = connector_id(&docker_repository)?;
    let title = record.required("name")?.clone();

    let spec = record.spec()?;
    let vendor_spec = VendorSpec {
        supported_destination_sync_modes: spec
            .get(SYNC_MODES_KEY)
            .cloned()
            .ok_or_else(|| SeedError::missing(format!("spec.{}", SYNC_MODES_KEY)))?,
        supports_incremental: spec.get("supportsIncremental").cloned(),
        supports_normalization: spec.get("supportsNormalization").cloned(),
        supports_dbt: spec.get("supportsDBT").cloned(),
        auth_specification: spec.get("authSpecification").cloned(),
        advanced_auth: spec.get("advanced_auth").cloned(),
        supports_namespaces: spec.get("supportsNamespaces").cloned(),
        protocol_version: spec.get("protocol_version").cloned(),
        schema: spec.get("$schema").cloned(),
    };

    let vendor_attributes = VendorAttributes {
        docker_repository,
        docker_image_tag: record.required("dockerImageTag")?.clone(),
        release_stage: record.required("releaseStage")?.clone(),
        tags: record.required("tags")?.clone(),
        license: record.required("license")?.clone(),
        github_issue_label: record.required("githubIssueLabel")?.clone(),
        source_type: record.required("sourceType")?.clone(),
        resource_requirements: record
            .get("resourceRequirements")
            .cloned()
            .unwrap_or_else(|| json!({})),
        normalization_config: record.get("normalizationConfig").cloned(),
        supports_dbt: record.get("supportsDbt").cloned(),
        spec: vendor_spec,
    };

    let mut passthrough = Map::new();
    for (key, value) in record.fields() {
        if RELOCATED_RECORD_KEYS.contains(&key.as_str()) || GENERATED_KEYS.contains(&key.as_str()) {
            continue;
        }
        passthrough.insert(key.clone(), value.clone());
    }
    passthrough.insert("spec".to_string(), Value::Object(residual_spec(spec)));

    Ok(TransformedRecord {
        uid,
        id,
        title,
        vendor_attributes,
        passthrough,
    })
}

/// Transform every record in order. The first failure aborts the batch.
pub fn transform_all(records: &[SourceRecord]) -> Result<Vec<TransformedRecord>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            transform_record(record).map_err(|e| SeedError::Record {
                index,
                source: Box::new(e),
            })
        })
        .collect()
}

fn docker_repository(record: &SourceRecord) -> Result<String> {
    record
        .required("dockerRepository")?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| SeedError::InvalidField {
            field: "dockerRepository".to_string(),
            expected: "a string",
        })
}

/// `airbyte/destination-postgres` becomes `airbyte-destination-postgres`.
fn connector_id(docker_repository: &str) -> Result<String> {
    docker_repository
        .split('/')
        .nth(1)
        .map(|image| format!("airbyte-{}", image))
        .ok_or_else(|| SeedError::InvalidDockerRepository(docker_repository.to_string()))
}

fn residual_spec(spec: &Map<String, Value>) -> Map<String, Value> {
    spec.iter()
        .filter(|(key, _)| !RELOCATED_SPEC_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
