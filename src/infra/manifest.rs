// ============================================================
// Layer 6 - Split Manifest
// ============================================================
// Optional JSON record of which sample went to which split.
//
// Layout:
//   {
//     "seed": 42,
//     "ratios": { "train": 0.6, "test": 0.2, "valid": 0.2 },
//     "root_dir": "DIPDataSet",
//     "outputs": { "train": "Train", "test": "Test", "valid": "Valid" },
//     "totals": { "train": 6, "test": 2, "valid": 2 },
//     "classes": [
//       { "class": "cat", "train": [...], "test": [...], "valid": [...] }
//     ]
//   }
//
// With a seed recorded, the same split can be regenerated.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::copier::OutputDirs;
use crate::domain::class_set::{ClassPlan, PartitionReport};
use crate::domain::split::{SplitCounts, SplitRatios};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub seed:     Option<u64>,
    pub ratios:   SplitRatios,
    pub root_dir: PathBuf,
    pub outputs:  OutputDirs,
    pub totals:   SplitCounts,
    pub classes:  Vec<ClassPlan>,
}

impl Manifest {
    pub fn from_report(
        report:   &PartitionReport,
        seed:     Option<u64>,
        ratios:   SplitRatios,
        root_dir: &Path,
        outputs:  &OutputDirs,
    ) -> Self {
        Self {
            seed,
            ratios,
            root_dir: root_dir.to_path_buf(),
            outputs:  outputs.clone(),
            totals:   report.totals(),
            classes:  report.classes.clone(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create '{}'", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write manifest to '{}'", path.display()))?;

        tracing::info!("Wrote split manifest to '{}'", path.display());
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read manifest '{}'", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Invalid manifest '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::split::Split;
    use tempfile::TempDir;

    fn report() -> PartitionReport {
        PartitionReport {
            classes: vec![ClassPlan {
                class: "cat".into(),
                train: vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()],
                test:  vec!["d.jpg".into()],
                valid: vec!["e.jpg".into()],
            }],
            dry_run: false,
        }
    }

    #[test]
    fn test_save_and_load() {
        let tmp  = TempDir::new().unwrap();
        let path = tmp.path().join("out/manifest.json");
        let outs = OutputDirs::new("Train", "Test", "Valid");

        let manifest = Manifest::from_report(
            &report(),
            Some(42),
            SplitRatios::default(),
            Path::new("data"),
            &outs,
        );
        manifest.save(&path).unwrap();

        let loaded = Manifest::load(&path).unwrap();
        assert_eq!(loaded, manifest);
        assert_eq!(loaded.totals, SplitCounts { train: 3, test: 1, valid: 1 });
        assert_eq!(loaded.classes[0].files(Split::Test), ["d.jpg".to_string()]);
    }

    #[test]
    fn test_split_names_are_lowercase_in_json() {
        let json = serde_json::to_string(&Split::Valid).unwrap();
        assert_eq!(json, "\"valid\"");
    }
}
