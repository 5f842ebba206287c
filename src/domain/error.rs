// ============================================================
// Layer 3 - Partition Errors
// ============================================================
// Typed failures of the partitioner. The application layer wraps
// these in anyhow with extra context; tests match on the variants.

use std::path::PathBuf;

/// Everything that can stop a partition run.
#[derive(Debug, thiserror::Error)]
pub enum PartitionError {
    /// The dataset root (or an inspected split directory) is missing
    /// or is not a directory.
    #[error("Dataset directory '{}' does not exist or is not a directory", .path.display())]
    RootNotFound { path: PathBuf },

    /// Ratios or configuration values are unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A class directory or sample file name is not valid UTF-8.
    /// The run stops rather than leaving the sample out of the split.
    #[error("Name of '{}' is not valid UTF-8", .path.display())]
    InvalidName { path: PathBuf },

    /// A copy would write a sample onto itself.
    #[error("Refusing to copy '{}' onto itself", .path.display())]
    SameFile { path: PathBuf },

    /// A filesystem operation failed. `context` names the class and file.
    #[error("{context} ('{}'): {source}", .path.display())]
    Io {
        context: String,
        path:    PathBuf,
        source:  std::io::Error,
    },
}

impl PartitionError {
    /// Shorthand for building an `Io` error from a closure's result
    pub fn io(context: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PartitionError::Io {
            context: context.into(),
            path:    path.into(),
            source,
        }
    }
}
