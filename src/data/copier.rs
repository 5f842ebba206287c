// ============================================================
// Layer 4 - Output Writers
// ============================================================
// Places assigned samples into the split output trees:
//
//   <train_dir>/<class>/<file>
//   <test_dir>/<class>/<file>
//   <valid_dir>/<class>/<file>
//
// FileCopier copies (never moves) so the source dataset stays
// intact. Directories are created on demand with create_dir_all,
// which does nothing if they already exist. A file already at
// the destination is overwritten by fs::copy.
//
// An output root may not be the dataset root, and a copy never
// targets its own source: fs::copy onto the same file truncates it.
//
// DryRunSink records what would be written and touches nothing.
//
// Reference: Rust Book §12 (I/O and File Handling)

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::domain::error::PartitionError;
use crate::domain::split::{Split, SplitCounts};
use crate::domain::traits::SampleSink;

/// The three output roots of a partition run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDirs {
    pub train: PathBuf,
    pub test:  PathBuf,
    pub valid: PathBuf,
}

impl OutputDirs {
    pub fn new(train: impl Into<PathBuf>, test: impl Into<PathBuf>, valid: impl Into<PathBuf>) -> Self {
        Self {
            train: train.into(),
            test:  test.into(),
            valid: valid.into(),
        }
    }

    pub fn for_split(&self, split: Split) -> &Path {
        match split {
            Split::Train => &self.train,
            Split::Test  => &self.test,
            Split::Valid => &self.valid,
        }
    }

    /// Destination path of `file` of class `class` in `split`
    pub fn destination(&self, split: Split, class: &str, file: &str) -> PathBuf {
        self.for_split(split).join(class).join(file)
    }
}

// ─── FileCopier ───────────────────────────────────────────────────────────────
/// Copies samples into the output trees on disk.
pub struct FileCopier {
    dirs: OutputDirs,

    /// Class directories already created this run, per split
    created: HashSet<(Split, String)>,

    copied: usize,
}

impl FileCopier {
    pub fn new(dirs: OutputDirs) -> Self {
        Self {
            dirs,
            created: HashSet::new(),
            copied:  0,
        }
    }

    /// Number of files copied so far
    pub fn copied(&self) -> usize {
        self.copied
    }
}

impl SampleSink for FileCopier {
    fn prepare(&mut self, root: &Path) -> Result<(), PartitionError> {
        for split in Split::ALL {
            let dir = self.dirs.for_split(split);
            if same_path(dir, root) {
                return Err(PartitionError::Config(format!(
                    "{split} output directory '{}' is the dataset root",
                    dir.display()
                )));
            }
        }

        for split in Split::ALL {
            let dir = self.dirs.for_split(split);
            fs::create_dir_all(dir).map_err(|e| {
                PartitionError::io(format!("creating {split} output directory"), dir, e)
            })?;
        }
        Ok(())
    }

    fn place(
        &mut self,
        split: Split,
        class: &str,
        file:  &str,
        src:   &Path,
    ) -> Result<(), PartitionError> {
        let dest = self.dirs.destination(split, class, file);
        let class_dir = self.dirs.for_split(split).join(class);

        if self.created.insert((split, class.to_string())) {
            fs::create_dir_all(&class_dir).map_err(|e| {
                PartitionError::io(
                    format!("creating {split} directory for class '{class}'"),
                    &class_dir,
                    e,
                )
            })?;
        }

        if same_path(src, &dest) {
            return Err(PartitionError::SameFile { path: dest });
        }

        fs::copy(src, &dest).map_err(|e| {
            PartitionError::io(
                format!(
                    "copying '{file}' of class '{class}' from '{}' to {split}",
                    src.display()
                ),
                &dest,
                e,
            )
        })?;

        self.copied += 1;
        tracing::debug!("Copied '{}' -> '{}'", src.display(), dest.display());
        Ok(())
    }
}

/// True when both paths exist and resolve to the same file or directory
fn same_path(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

// ─── DryRunSink ───────────────────────────────────────────────────────────────
/// Counts placements without touching the filesystem.
#[derive(Debug, Default)]
pub struct DryRunSink {
    placed: SplitCounts,
}

impl DryRunSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placed(&self) -> SplitCounts {
        self.placed
    }
}

impl SampleSink for DryRunSink {
    fn prepare(&mut self, _root: &Path) -> Result<(), PartitionError> {
        Ok(())
    }

    fn place(
        &mut self,
        split: Split,
        class: &str,
        file:  &str,
        _src:  &Path,
    ) -> Result<(), PartitionError> {
        tracing::debug!("[dry run] {} -> {}/{}", file, split, class);
        match split {
            Split::Train => self.placed.train += 1,
            Split::Test  => self.placed.test  += 1,
            Split::Valid => self.placed.valid += 1,
        }
        Ok(())
    }
}
