// ============================================================
// Layer 2 - SplitUseCase
// ============================================================
// Orchestrates one partition run:
//
//   Step 1: Validate ratios                (Layer 3 - domain)
//   Step 2: Pick the random source         (seeded or fresh)
//   Step 3: Scan, split and copy classes   (Layer 4 - data)
//   Step 4: Write the manifest, if asked   (Layer 6 - infra)
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{Context, Result};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    copier::{DryRunSink, FileCopier, OutputDirs},
    partitioner::Partitioner,
    scanner::DirectoryScanner,
};
use crate::domain::class_set::PartitionReport;
use crate::domain::split::SplitRatios;
use crate::infra::manifest::Manifest;

// ─── Partition Configuration ─────────────────────────────────────────────────
// Everything a run needs, passed explicitly; no path is resolved
// against anything but what the caller supplies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionConfig {
    pub root_dir:    PathBuf,
    pub train_ratio: f64,
    pub test_ratio:  f64,
    pub valid_ratio: f64,
    pub train_dir:   PathBuf,
    pub test_dir:    PathBuf,
    pub valid_dir:   PathBuf,

    /// Fixed seed for a reproducible split; None shuffles freshly
    pub seed: Option<u64>,

    /// Extensions to keep (e.g. ["jpg", "png"]); empty copies every file
    pub extensions: Vec<String>,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            root_dir:    PathBuf::from("DataSet"),
            train_ratio: 0.6,
            test_ratio:  0.2,
            valid_ratio: 0.2,
            train_dir:   PathBuf::from("Train"),
            test_dir:    PathBuf::from("Test"),
            valid_dir:   PathBuf::from("Valid"),
            seed:        None,
            extensions:  Vec::new(),
        }
    }
}

impl PartitionConfig {
    pub fn ratios(&self) -> SplitRatios {
        SplitRatios {
            train: self.train_ratio,
            test:  self.test_ratio,
            valid: self.valid_ratio,
        }
    }

    pub fn output_dirs(&self) -> OutputDirs {
        OutputDirs::new(&self.train_dir, &self.test_dir, &self.valid_dir)
    }

    /// Scanner with the configured extension filter. Output roots
    /// are excluded in case they sit inside the dataset root.
    fn scanner(&self) -> DirectoryScanner {
        DirectoryScanner::new()
            .with_extensions(&self.extensions)
            .skipping(&self.train_dir)
            .skipping(&self.test_dir)
            .skipping(&self.valid_dir)
    }
}

// ─── SplitUseCase ─────────────────────────────────────────────────────────────
pub struct SplitUseCase {
    config:   PartitionConfig,
    dry_run:  bool,
    manifest: Option<PathBuf>,
}

impl SplitUseCase {
    pub fn new(config: PartitionConfig) -> Self {
        Self {
            config,
            dry_run:  false,
            manifest: None,
        }
    }

    /// Compute and report the split without writing files
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Write a JSON manifest of the assignment to `path`
    pub fn manifest(mut self, path: Option<PathBuf>) -> Self {
        self.manifest = path;
        self
    }

    /// Run with the configured seed, or a fresh thread RNG.
    pub fn execute(&self) -> Result<PartitionReport> {
        let mut rng: Box<dyn RngCore> = match self.config.seed {
            Some(seed) => {
                tracing::info!("Shuffling with fixed seed {}", seed);
                Box::new(StdRng::seed_from_u64(seed))
            }
            None => Box::new(rand::thread_rng()),
        };
        self.execute_with_rng(&mut *rng)
    }

    /// Run with a caller-provided random source.
    pub fn execute_with_rng<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<PartitionReport> {
        let cfg = &self.config;

        // ── Step 1: Validate ratios ───────────────────────────────────────────
        let partitioner = Partitioner::new(cfg.scanner(), cfg.ratios())
            .context("Cannot start partitioning")?;

        // ── Step 2-3: Scan, split, copy ──────────────────────────────────────
        tracing::info!(
            "Partitioning '{}' ({:.2}/{:.2}/{:.2}){}",
            cfg.root_dir.display(),
            cfg.train_ratio,
            cfg.test_ratio,
            cfg.valid_ratio,
            if self.dry_run { " [dry run]" } else { "" },
        );

        let failed  = || format!("Partitioning '{}' failed", cfg.root_dir.display());
        let outputs = cfg.output_dirs();
        let mut report = if self.dry_run {
            let mut sink = DryRunSink::new();
            let report = partitioner.run(&cfg.root_dir, &mut sink, rng).with_context(failed)?;
            tracing::info!("Dry run: {} files would be copied", sink.placed().total());
            report
        } else {
            let mut sink = FileCopier::new(outputs.clone());
            let report = partitioner.run(&cfg.root_dir, &mut sink, rng).with_context(failed)?;
            tracing::info!("Copied {} files", sink.copied());
            report
        };
        report.dry_run = self.dry_run;

        let totals = report.totals();
        tracing::info!(
            "Done: {} classes, {} train, {} test, {} valid",
            report.classes.len(),
            totals.train,
            totals.test,
            totals.valid,
        );

        // ── Step 4: Manifest ─────────────────────────────────────────────────
        if let Some(path) = &self.manifest {
            Manifest::from_report(&report, cfg.seed, cfg.ratios(), &cfg.root_dir, &outputs)
                .save(path)?;
        }

        Ok(report)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::PartitionError;
    use std::{fs, path::Path};
    use tempfile::TempDir;

    fn dataset(root: &Path) {
        for class in ["cat", "dog"] {
            let dir = root.join("data").join(class);
            fs::create_dir_all(&dir).unwrap();
            for i in 0..10 {
                fs::write(dir.join(format!("{i}.jpg")), b"img").unwrap();
            }
            fs::write(dir.join("labels.txt"), b"meta").unwrap();
        }
    }

    fn config(root: &Path, seed: Option<u64>) -> PartitionConfig {
        PartitionConfig {
            root_dir:  root.join("data"),
            train_dir: root.join("Train"),
            test_dir:  root.join("Test"),
            valid_dir: root.join("Valid"),
            seed,
            ..PartitionConfig::default()
        }
    }

    #[test]
    fn test_execute_copies_everything_by_default() {
        let tmp = TempDir::new().unwrap();
        dataset(tmp.path());

        let report = SplitUseCase::new(config(tmp.path(), Some(1))).execute().unwrap();
        // 11 files per class, txt included
        assert_eq!(report.class("cat").unwrap().counts().total(), 11);
        assert_eq!(report.totals().total(), 22);
    }

    #[test]
    fn test_extension_filter_from_config() {
        let tmp = TempDir::new().unwrap();
        dataset(tmp.path());

        let cfg = PartitionConfig {
            extensions: vec!["jpg".into(), "png".into()],
            ..config(tmp.path(), Some(1))
        };
        let report = SplitUseCase::new(cfg).execute().unwrap();
        let counts = report.class("dog").unwrap().counts();
        assert_eq!((counts.train, counts.test, counts.valid), (6, 2, 2));
    }

    #[test]
    fn test_seeded_runs_match_manifest() {
        let tmp = TempDir::new().unwrap();
        dataset(tmp.path());
        let first_path  = tmp.path().join("first.json");
        let second_path = tmp.path().join("second.json");

        SplitUseCase::new(config(tmp.path(), Some(11)))
            .dry_run(true)
            .manifest(Some(first_path.clone()))
            .execute()
            .unwrap();
        SplitUseCase::new(config(tmp.path(), Some(11)))
            .dry_run(true)
            .manifest(Some(second_path.clone()))
            .execute()
            .unwrap();

        let first  = Manifest::load(&first_path).unwrap();
        let second = Manifest::load(&second_path).unwrap();
        assert_eq!(first.classes, second.classes);
        assert_eq!(first.seed, Some(11));
    }

    #[test]
    fn test_dry_run_marks_report_and_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        dataset(tmp.path());

        let report = SplitUseCase::new(config(tmp.path(), None))
            .dry_run(true)
            .execute()
            .unwrap();
        assert!(report.dry_run);
        assert!(!tmp.path().join("Train").exists());
    }

    #[test]
    fn test_missing_root_surfaces_typed_error() {
        let tmp = TempDir::new().unwrap();
        let err = SplitUseCase::new(config(tmp.path(), None)).execute().unwrap_err();
        let typed = err.downcast_ref::<PartitionError>();
        assert!(matches!(typed, Some(PartitionError::RootNotFound { .. })));
    }

    #[test]
    fn test_bad_ratios_surface_config_error() {
        let tmp = TempDir::new().unwrap();
        dataset(tmp.path());
        let cfg = PartitionConfig {
            test_ratio: -0.2,
            ..config(tmp.path(), None)
        };
        let err = SplitUseCase::new(cfg).execute().unwrap_err();
        assert!(matches!(err.downcast_ref::<PartitionError>(), Some(PartitionError::Config(_))));
    }

    #[test]
    fn test_output_dir_equal_to_root_is_refused() {
        let tmp = TempDir::new().unwrap();
        dataset(tmp.path());
        let cfg = PartitionConfig {
            train_dir: tmp.path().join("data"),
            ..config(tmp.path(), Some(1))
        };

        let err = SplitUseCase::new(cfg).execute().unwrap_err();
        assert!(matches!(err.downcast_ref::<PartitionError>(), Some(PartitionError::Config(_))));
        for i in 0..10 {
            assert_eq!(fs::read(tmp.path().join(format!("data/cat/{i}.jpg"))).unwrap(), b"img");
        }
    }

    #[test]
    fn test_execute_with_caller_rng() {
        let tmp = TempDir::new().unwrap();
        dataset(tmp.path());
        let mut rng = StdRng::seed_from_u64(3);

        let report = SplitUseCase::new(config(tmp.path(), None))
            .execute_with_rng(&mut rng)
            .unwrap();

        let cat = report.class("cat").unwrap();
        for file in &cat.train {
            assert!(tmp.path().join("Train/cat").join(file).is_file());
        }
        for file in &cat.valid {
            assert!(tmp.path().join("Valid/cat").join(file).is_file());
        }
        assert!(tmp.path().join("data/cat/0.jpg").is_file());
    }
}
