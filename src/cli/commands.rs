// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Two subcommands:
//   split   - partition a labelled image folder into
//             Train/Test/Valid copies
//   inspect - report classes and image counts of split folders
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::split_use_case::PartitionConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a dataset of class folders into train/test/valid folders
    Split(SplitArgs),

    /// Show the classes and image counts a loader would see
    Inspect(InspectArgs),
}

/// All arguments for the `split` command.
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Dataset root; each subdirectory is one class
    #[arg(long, default_value = "DataSet")]
    pub root_dir: PathBuf,

    /// Fraction of each class copied to the training folder
    #[arg(long, default_value_t = 0.6)]
    pub train_ratio: f64,

    /// Fraction of each class copied to the test folder
    #[arg(long, default_value_t = 0.2)]
    pub test_ratio: f64,

    /// Fraction of each class copied to the validation folder.
    /// Validation also receives whatever rounding leaves over.
    #[arg(long, default_value_t = 0.2)]
    pub valid_ratio: f64,

    #[arg(long, default_value = "Train")]
    pub train_dir: PathBuf,

    #[arg(long, default_value = "Test")]
    pub test_dir: PathBuf,

    #[arg(long, default_value = "Valid")]
    pub valid_dir: PathBuf,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only copy files with these extensions (comma separated, e.g. jpg,png).
    /// By default every file is copied.
    #[arg(long, value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Read the configuration from a JSON file instead of the flags above
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Save the effective configuration as JSON for later reruns
    #[arg(long)]
    pub save_config: Option<PathBuf>,

    /// Write a JSON manifest of which file went to which split
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Compute and print the split without copying anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Flags → application config. The application layer never sees clap types.
impl From<&SplitArgs> for PartitionConfig {
    fn from(a: &SplitArgs) -> Self {
        PartitionConfig {
            root_dir:    a.root_dir.clone(),
            train_ratio: a.train_ratio,
            test_ratio:  a.test_ratio,
            valid_ratio: a.valid_ratio,
            train_dir:   a.train_dir.clone(),
            test_dir:    a.test_dir.clone(),
            valid_dir:   a.valid_dir.clone(),
            seed:        a.seed,
            extensions:  a.extensions.clone(),
        }
    }
}

/// All arguments for the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Split directories to inspect
    #[arg(required = true)]
    pub dirs: Vec<PathBuf>,

    /// Image extensions to count (default: jpg,png)
    #[arg(long, value_delimiter = ',')]
    pub extensions: Vec<String>,
}
