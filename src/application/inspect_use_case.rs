// ============================================================
// Layer 2 - InspectUseCase
// ============================================================
// Summarises one or more split directories as an image loader
// would read them: classes, label indices, image counts.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::data::inspector::{DatasetSummary, Inspector};

pub struct InspectUseCase {
    dirs:      Vec<PathBuf>,
    inspector: Inspector,
}

impl InspectUseCase {
    /// An empty `extensions` list uses the loaders' .jpg/.png filter
    pub fn new(dirs: Vec<PathBuf>, extensions: &[String]) -> Self {
        let inspector = if extensions.is_empty() {
            Inspector::default()
        } else {
            Inspector::with_extensions(extensions)
        };
        Self { dirs, inspector }
    }

    pub fn execute(&self) -> Result<Vec<DatasetSummary>> {
        self.dirs
            .iter()
            .map(|dir| -> Result<DatasetSummary> {
                let summary = self
                    .inspector
                    .inspect(dir)
                    .with_context(|| format!("Cannot inspect '{}'", dir.display()))?;
                tracing::info!(
                    "'{}': {} classes, {} images, {} skipped",
                    dir.display(),
                    summary.classes.len(),
                    summary.total_images(),
                    summary.skipped,
                );
                Ok(summary)
            })
            .collect()
    }
}
