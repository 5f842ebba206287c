// ============================================================
// Layer 6 - Partition Config File
// ============================================================
// Loads and saves PartitionConfig as JSON.
//
// Missing fields fall back to PartitionConfig::default(), so a
// minimal file only needs the dataset root:
//
//   { "root_dir": "DIPDataSet" }
//
// A full file:
//
//   {
//     "root_dir":    "DIPDataSet",
//     "train_ratio": 0.6,
//     "test_ratio":  0.2,
//     "valid_ratio": 0.2,
//     "train_dir":   "Train",
//     "test_dir":    "Test",
//     "valid_dir":   "Valid",
//     "seed":        42,
//     "extensions":  ["jpg", "png"]
//   }
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json crate documentation

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::application::split_use_case::PartitionConfig;

/// Read a PartitionConfig from a JSON file.
pub fn load_config(path: &Path) -> Result<PartitionConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    let cfg: PartitionConfig = serde_json::from_str(&json)
        .with_context(|| format!("Invalid config file '{}'", path.display()))?;

    tracing::debug!("Loaded partition config from '{}'", path.display());
    Ok(cfg)
}

/// Write a PartitionConfig to a JSON file, creating parent directories.
pub fn save_config(path: &Path, cfg: &PartitionConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create '{}'", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(cfg)?;
    fs::write(path, json)
        .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

    tracing::debug!("Saved partition config to '{}'", path.display());
    Ok(())
}
