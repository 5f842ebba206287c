// ============================================================
// Layer 4 - Split Directory Inspector
// ============================================================
// Reads a split directory (Train/, Test/ or Valid/) the way the
// classification loaders do:
//   - each subdirectory is a class
//   - label index = position of the class in sorted name order
//   - only .jpg / .png files count as images by default
//
// Nothing is decoded; this only reports what a loader would see.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::data::scanner::{DirectoryScanner, LOADER_EXTENSIONS};
use crate::domain::error::PartitionError;
use crate::domain::traits::SampleSource;

/// One class as a loader would see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub name:   String,
    pub label:  usize,
    pub images: usize,
}

/// What a loader would read from one split directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub dir:     PathBuf,
    pub classes: Vec<ClassSummary>,

    /// Files inside class directories that are not images
    pub skipped: usize,
}

impl DatasetSummary {
    pub fn total_images(&self) -> usize {
        self.classes.iter().map(|c| c.images).sum()
    }
}

pub struct Inspector {
    scanner: DirectoryScanner,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::with_extensions(LOADER_EXTENSIONS)
    }
}

impl Inspector {
    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            scanner: DirectoryScanner::new().with_extensions(extensions),
        }
    }

    pub fn inspect(&self, dir: &Path) -> Result<DatasetSummary, PartitionError> {
        let classes = self.scanner.classes(dir)?;

        let skipped = classes.iter().map(|c| c.rejected).sum();
        let classes = classes
            .into_iter()
            .enumerate()
            .map(|(label, c)| ClassSummary {
                images: c.len(),
                name:   c.name,
                label,
            })
            .collect();

        Ok(DatasetSummary {
            dir: dir.to_path_buf(),
            classes,
            skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_labels_follow_sorted_class_names() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("zebra/1.jpg"));
        touch(&tmp.path().join("ant/1.png"));
        touch(&tmp.path().join("moth/1.jpg"));

        let summary = Inspector::default().inspect(tmp.path()).unwrap();
        let labels: Vec<(&str, usize)> = summary
            .classes
            .iter()
            .map(|c| (c.name.as_str(), c.label))
            .collect();
        assert_eq!(labels, vec![("ant", 0), ("moth", 1), ("zebra", 2)]);
    }

    #[test]
    fn test_non_images_are_skipped() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("cat/a.jpg"));
        touch(&tmp.path().join("cat/b.png"));
        touch(&tmp.path().join("cat/c.txt"));
        touch(&tmp.path().join("cat/d.jpeg"));

        let summary = Inspector::default().inspect(tmp.path()).unwrap();
        assert_eq!(summary.total_images(), 2);
        assert_eq!(summary.skipped, 2);
    }

    #[test]
    fn test_custom_extensions() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("cat/a.jpeg"));

        let summary = Inspector::with_extensions(["jpeg"]).inspect(tmp.path()).unwrap();
        assert_eq!(summary.total_images(), 1);
    }

    #[test]
    fn test_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let err = Inspector::default().inspect(&tmp.path().join("Train")).unwrap_err();
        assert!(matches!(err, PartitionError::RootNotFound { .. }));
    }
}
