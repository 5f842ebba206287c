// ============================================================
// Layer 4 - Directory Scanner
// ============================================================
// Finds the class directories under a dataset root and the
// sample files directly inside each one.
//
// Expected layout:
//   root/
//     cat/
//       img_001.jpg
//       img_002.png
//     dog/
//       img_003.jpg
//
// Rules:
//   - Non-directory entries at the root are ignored
//   - Only files directly inside a class directory count
//     (nested subdirectories are skipped, no recursion)
//   - An optional extension filter keeps only matching files
//     (case-insensitive, e.g. "jpg" matches "A.JPG")
//   - A class or file name that is not valid UTF-8 is an error
//   - Classes come back sorted by name, files sorted by name,
//     so a seeded shuffle reproduces across filesystems
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::class_set::ClassSamples;
use crate::domain::error::PartitionError;
use crate::domain::traits::SampleSource;

/// The image extensions the classification loaders accept
pub const LOADER_EXTENSIONS: &[&str] = &["jpg", "png"];

/// Lists class directories and their sample files from disk.
/// Implements the SampleSource trait from Layer 3.
#[derive(Debug, Clone, Default)]
pub struct DirectoryScanner {
    /// Lower-cased extensions without a leading dot.
    /// None means every file is a sample.
    extensions: Option<Vec<String>>,

    /// Directories that must never be treated as classes
    /// (output roots placed inside the dataset root)
    skip_dirs: Vec<PathBuf>,
}

impl DirectoryScanner {
    /// Scanner that accepts every file
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only files whose extension is in `extensions`.
    /// An empty list is treated as "no filter".
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalised: Vec<String> = extensions
            .into_iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        self.extensions = if normalised.is_empty() { None } else { Some(normalised) };
        self
    }

    /// Never treat `dir` as a class directory.
    /// Paths are compared after canonicalisation at scan time, so
    /// `dir` does not need to exist yet.
    pub fn skipping(mut self, dir: impl Into<PathBuf>) -> Self {
        self.skip_dirs.push(dir.into());
        self
    }

    /// True if `file_name` passes the extension filter
    pub fn accepts(&self, file_name: &str) -> bool {
        match &self.extensions {
            None => true,
            Some(exts) => Path::new(file_name)
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| exts.iter().any(|x| x.eq_ignore_ascii_case(e)))
                .unwrap_or(false),
        }
    }

    fn is_skipped(&self, dir: &Path) -> bool {
        if self.skip_dirs.is_empty() {
            return false;
        }
        let canonical = canonical_or_raw(dir);
        self.skip_dirs.iter().any(|s| canonical_or_raw(s) == canonical)
    }

    /// List the sample files directly inside one class directory.
    /// Returns the accepted file names (sorted) and the number of
    /// files rejected by the extension filter.
    pub fn sample_files(&self, class: &str, dir: &Path) -> Result<(Vec<String>, usize), PartitionError> {
        let entries = fs::read_dir(dir).map_err(|e| {
            PartitionError::io(format!("listing class '{class}'"), dir, e)
        })?;

        let mut files    = Vec::new();
        let mut rejected = 0;

        for entry in entries {
            let entry = entry.map_err(|e| {
                PartitionError::io(format!("listing class '{class}'"), dir, e)
            })?;
            let path = entry.path();

            // Depth 1 only: nested folders inside a class are not samples
            if !path.is_file() {
                tracing::debug!("Skipping non-file entry '{}'", path.display());
                continue;
            }

            // Every sample must be split, so an unusable name stops the scan
            let name = entry
                .file_name()
                .into_string()
                .map_err(|_| PartitionError::InvalidName { path: path.clone() })?;

            if self.accepts(&name) {
                files.push(name);
            } else {
                rejected += 1;
            }
        }

        files.sort();
        Ok((files, rejected))
    }
}

fn canonical_or_raw(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

impl SampleSource for DirectoryScanner {
    fn classes(&self, root: &Path) -> Result<Vec<ClassSamples>, PartitionError> {
        if !root.is_dir() {
            return Err(PartitionError::RootNotFound { path: root.to_path_buf() });
        }

        let entries = fs::read_dir(root)
            .map_err(|e| PartitionError::io("listing dataset root", root, e))?;

        let mut classes = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| PartitionError::io("listing dataset root", root, e))?;
            let path  = entry.path();

            if !path.is_dir() {
                continue;
            }

            if self.is_skipped(&path) {
                tracing::warn!(
                    "Skipping '{}': it is one of the output directories",
                    path.display()
                );
                continue;
            }

            let name = entry
                .file_name()
                .into_string()
                .map_err(|_| PartitionError::InvalidName { path: path.clone() })?;

            let (files, rejected) = self.sample_files(&name, &path)?;
            if rejected > 0 {
                tracing::debug!(
                    "Class '{}': {} files did not match the extension filter",
                    name,
                    rejected
                );
            }
            let mut class = ClassSamples::new(name, path, files);
            class.rejected = rejected;
            classes.push(class);
        }

        classes.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::info!("Found {} class directories under '{}'", classes.len(), root.display());
        Ok(classes)
    }
}
