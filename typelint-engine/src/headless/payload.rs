//! Headless input payload: versioned file→rule assignments.
//!
//! The current shape is version 2. The legacy, version-absent shape is
//! still accepted and upgraded in memory before dispatch.

use serde::Deserialize;
use typelint_core::ConfigError;

/// Version 2 payload: `{"version": 2, "configs": [...]}`.
#[derive(Debug, Deserialize)]
pub struct HeadlessPayload {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub configs: Vec<HeadlessConfig>,
}

/// One group of files sharing a rule set.
#[derive(Debug, Deserialize)]
pub struct HeadlessConfig {
    pub file_paths: Vec<String>,
    pub rules: Vec<HeadlessRule>,
}

#[derive(Debug, Deserialize)]
pub struct HeadlessRule {
    pub name: String,
}

/// Legacy shape: `{"files": [{"file_path": .., "rules": [..]}]}`.
#[derive(Debug, Deserialize)]
struct PayloadV1 {
    #[serde(default)]
    files: Vec<FileConfigV1>,
}

#[derive(Debug, Deserialize)]
struct FileConfigV1 {
    file_path: String,
    rules: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct VersionProbe {
    #[serde(default)]
    version: u32,
}

/// Parse a headless payload, upgrading the legacy shape to version 2.
pub fn deserialize_payload(data: &[u8]) -> Result<HeadlessPayload, ConfigError> {
    let probe: VersionProbe =
        serde_json::from_slice(data).map_err(|e| ConfigError::Malformed(e.to_string()))?;

    match probe.version {
        2 => serde_json::from_slice(data)
            .map_err(|e| ConfigError::Malformed(format!("failed to deserialize V2 payload: {e}"))),
        0 => {
            let v1: PayloadV1 = serde_json::from_slice(data).map_err(|e| {
                ConfigError::Malformed(format!("failed to deserialize V1 payload: {e}"))
            })?;
            if v1.files.is_empty() {
                return Err(ConfigError::Empty);
            }
            Ok(HeadlessPayload {
                version: 2,
                configs: v1
                    .files
                    .into_iter()
                    .map(|f| HeadlessConfig {
                        file_paths: vec![f.file_path],
                        rules: f.rules.into_iter().map(|name| HeadlessRule { name }).collect(),
                    })
                    .collect(),
            })
        }
        other => Err(ConfigError::UnsupportedVersion(other)),
    }
}
