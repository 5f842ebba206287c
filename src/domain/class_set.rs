// ============================================================
// Layer 3 - Class Domain Types
// ============================================================
// A class directory's samples before splitting (ClassSamples),
// the split assignment for that class (ClassPlan), and the
// result of a whole run (PartitionReport).
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §8 (Vectors)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::split::{Split, SplitCounts};

/// The sample files found directly inside one class directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSamples {
    /// Directory name, used as the class label
    pub name: String,

    /// Full path to the class directory
    pub dir: PathBuf,

    /// Sample file names (not paths), sorted
    pub files: Vec<String>,

    /// Files left out by an extension filter
    pub rejected: usize,
}

impl ClassSamples {
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>, files: Vec<String>) -> Self {
        Self {
            name:  name.into(),
            dir:   dir.into(),
            files,
            rejected: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// The split assignment for one class: three disjoint lists of
/// file names that together cover every sample of the class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassPlan {
    pub class: String,
    pub train: Vec<String>,
    pub test:  Vec<String>,
    pub valid: Vec<String>,
}

impl ClassPlan {
    pub fn files(&self, split: Split) -> &[String] {
        match split {
            Split::Train => &self.train,
            Split::Test  => &self.test,
            Split::Valid => &self.valid,
        }
    }

    pub fn counts(&self) -> SplitCounts {
        SplitCounts {
            train: self.train.len(),
            test:  self.test.len(),
            valid: self.valid.len(),
        }
    }
}

/// Outcome of a partition run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionReport {
    /// One plan per processed class, in processing order
    pub classes: Vec<ClassPlan>,

    /// True when nothing was written to disk
    pub dry_run: bool,
}

impl PartitionReport {
    /// Sum of the per-class counts
    pub fn totals(&self) -> SplitCounts {
        let mut totals = SplitCounts::default();
        for plan in &self.classes {
            totals += plan.counts();
        }
        totals
    }
}

#[cfg(test)]
impl PartitionReport {
    pub fn class(&self, name: &str) -> Option<&ClassPlan> {
        self.classes.iter().find(|p| p.class == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> ClassPlan {
        ClassPlan {
            class: "cat".into(),
            train: vec!["a.jpg".into(), "b.jpg".into()],
            test:  vec!["c.jpg".into()],
            valid: vec!["d.jpg".into()],
        }
    }

    #[test]
    fn test_files_by_split() {
        let p = plan();
        assert_eq!(p.files(Split::Train), ["a.jpg".to_string(), "b.jpg".to_string()]);
        assert_eq!(p.files(Split::Valid), ["d.jpg".to_string()]);
        assert_eq!(p.counts().total(), 4);
    }

    #[test]
    fn test_report_totals() {
        let mut dog = plan();
        dog.class = "dog".into();
        let report = PartitionReport { classes: vec![plan(), dog], dry_run: false };
        assert_eq!(report.totals(), SplitCounts { train: 4, test: 2, valid: 2 });
        assert!(report.class("dog").is_some());
        assert!(report.class("bird").is_none());
    }
}
