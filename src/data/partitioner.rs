// ============================================================
// Layer 4 - Dataset Partitioner
// ============================================================
// Splits every class of a dataset into train/test/valid:
//
//   for each class (sorted by name):
//     1. list its sample files          (SampleSource)
//     2. shuffle + slice into 3 runs    (splitter::plan_class)
//     3. hand each sample to the sink   (SampleSink)
//
// One RNG is threaded through the classes in order, so a
// seeded RNG fixes the assignment of every class.
//
// The run stops at the first error. Files already copied by
// then stay where they are.
//
// Reference: Rust Book §10 (Generic Types and Traits)

use rand::Rng;
use std::path::Path;

use crate::data::splitter::plan_class;
use crate::domain::class_set::PartitionReport;
use crate::domain::error::PartitionError;
use crate::domain::split::{Split, SplitRatios};
use crate::domain::traits::{SampleSink, SampleSource};

pub struct Partitioner<S: SampleSource> {
    source: S,
    ratios: SplitRatios,
}

impl<S: SampleSource> Partitioner<S> {
    /// Validates the ratios up front so a bad config fails
    /// before anything is written.
    pub fn new(source: S, ratios: SplitRatios) -> Result<Self, PartitionError> {
        ratios.validate()?;
        Ok(Self { source, ratios })
    }

    /// Partition every class under `root` into `sink`.
    pub fn run<K, R>(&self, root: &Path, sink: &mut K, rng: &mut R) -> Result<PartitionReport, PartitionError>
    where
        K: SampleSink,
        R: Rng + ?Sized,
    {
        if !root.is_dir() {
            return Err(PartitionError::RootNotFound { path: root.to_path_buf() });
        }

        sink.prepare(root)?;

        let classes = self.source.classes(root)?;
        let mut report = PartitionReport::default();

        for class in &classes {
            if class.is_empty() {
                tracing::warn!("Class '{}' has no samples", class.name);
            }

            let plan   = plan_class(class, &self.ratios, rng);
            let counts = plan.counts();

            tracing::info!(
                "Class '{}': {} samples -> {} train, {} test, {} valid",
                class.name,
                class.len(),
                counts.train,
                counts.test,
                counts.valid,
            );

            for split in Split::ALL {
                for file in plan.files(split) {
                    sink.place(split, &class.name, file, &class.dir.join(file))?;
                }
            }

            report.classes.push(plan);
        }

        Ok(report)
    }
}
