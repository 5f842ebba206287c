// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The partitioner is written against these traits, not against
// the filesystem directly:
//   - DirectoryScanner implements SampleSource
//   - FileCopier and DryRunSink implement SampleSink
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::path::Path;

use crate::domain::class_set::ClassSamples;
use crate::domain::error::PartitionError;
use crate::domain::split::Split;

// ─── SampleSource ─────────────────────────────────────────────────────────────
/// Anything that can list the class directories of a dataset.
pub trait SampleSource {
    /// Return every class found under `root`, with its sample files.
    fn classes(&self, root: &Path) -> Result<Vec<ClassSamples>, PartitionError>;
}

// ─── SampleSink ───────────────────────────────────────────────────────────────
/// Anything that can receive a sample assigned to a split.
pub trait SampleSink {
    /// Prepare the output roots before any class of `root` is processed.
    fn prepare(&mut self, root: &Path) -> Result<(), PartitionError>;

    /// Place `file` of class `class` (found at `src`) into `split`.
    fn place(
        &mut self,
        split: Split,
        class: &str,
        file:  &str,
        src:   &Path,
    ) -> Result<(), PartitionError>;
}
