// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, hands the work to Layer 2 and
// prints the results. Nothing here shuffles or copies.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InspectArgs, SplitArgs};

use crate::application::split_use_case::PartitionConfig;
use crate::data::inspector::DatasetSummary;
use crate::domain::class_set::PartitionReport;
use crate::infra::config_file::{load_config, save_config};

#[derive(Parser, Debug)]
#[command(
    name = "dataset-split",
    version,
    about = "Split a folder of labelled images into train/test/validation copies."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Split(args)   => run_split(args),
            Commands::Inspect(args) => run_inspect(args),
        }
    }
}

fn run_split(args: SplitArgs) -> Result<()> {
    use crate::application::split_use_case::SplitUseCase;

    let config: PartitionConfig = match &args.config {
        Some(path) => load_config(path)?,
        None       => (&args).into(),
    };

    if let Some(path) = &args.save_config {
        save_config(path, &config)?;
        println!("Saved configuration to '{}'", path.display());
    }

    let report = SplitUseCase::new(config)
        .dry_run(args.dry_run)
        .manifest(args.manifest)
        .execute()?;

    print_report(&report);
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;

    let summaries = InspectUseCase::new(args.dirs, &args.extensions).execute()?;
    for summary in &summaries {
        print_summary(summary);
    }
    Ok(())
}

fn print_report(report: &PartitionReport) {
    if report.dry_run {
        println!("Dry run, nothing was copied.");
    }
    println!("{:<24} {:>7} {:>7} {:>7}", "class", "train", "test", "valid");
    for plan in &report.classes {
        let c = plan.counts();
        println!("{:<24} {:>7} {:>7} {:>7}", plan.class, c.train, c.test, c.valid);
    }
    let t = report.totals();
    println!("{:<24} {:>7} {:>7} {:>7}", "total", t.train, t.test, t.valid);
}

fn print_summary(summary: &DatasetSummary) {
    println!("\n{}", summary.dir.display());
    for class in &summary.classes {
        println!("  [{:>3}] {:<24} {:>7}", class.label, class.name, class.images);
    }
    println!(
        "  {} images in {} classes ({} other files skipped)",
        summary.total_images(),
        summary.classes.len(),
        summary.skipped
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_flags() {
        let cli = Cli::try_parse_from([
            "dataset-split",
            "split",
            "--root-dir", "photos",
            "--train-ratio", "0.7",
            "--test-ratio", "0.15",
            "--valid-ratio", "0.15",
            "--seed", "9",
            "--extensions", "jpg,png",
            "--dry-run",
        ])
        .unwrap();

        let Commands::Split(args) = cli.command else {
            panic!("expected split");
        };
        assert!(args.dry_run);
        let cfg: PartitionConfig = (&args).into();
        assert_eq!(cfg.root_dir, std::path::PathBuf::from("photos"));
        assert_eq!(cfg.train_ratio, 0.7);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.extensions, vec!["jpg".to_string(), "png".to_string()]);
    }

    #[test]
    fn test_split_defaults() {
        let cli = Cli::try_parse_from(["dataset-split", "split"]).unwrap();
        let Commands::Split(args) = cli.command else {
            panic!("expected split");
        };
        let cfg: PartitionConfig = (&args).into();
        assert_eq!(cfg, PartitionConfig::default());
    }

    #[test]
    fn test_inspect_requires_a_dir() {
        assert!(Cli::try_parse_from(["dataset-split", "inspect"]).is_err());
    }
}
