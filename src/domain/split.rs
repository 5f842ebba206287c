// ============================================================
// Layer 3 - Split Domain Types
// ============================================================
// The three dataset splits, the ratios that size them and the
// per-class sample counts derived from those ratios.
//
// Count rule for a class of n samples:
//   num_train = floor(n * train_ratio)
//   num_test  = floor(n * test_ratio)
//   num_valid = n - num_train - num_test
//
// The validation split always takes the remainder, so the three
// counts add up to n even when the ratios round badly.
//
// Reference: Rust Book §5 (Structs), §6 (Enums)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::PartitionError;

/// Allowed slack above 1.0 when summing the three ratios
const RATIO_SUM_TOLERANCE: f64 = 1e-6;

/// One of the three output partitions of a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Test,
    Valid,
}

impl Split {
    /// All splits in slicing order
    pub const ALL: [Split; 3] = [Split::Train, Split::Test, Split::Valid];
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Split::Train => write!(f, "train"),
            Split::Test  => write!(f, "test"),
            Split::Valid => write!(f, "valid"),
        }
    }
}

// ─── SplitRatios ──────────────────────────────────────────────────────────────
/// Target fraction of each class assigned to each split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitRatios {
    pub train: f64,
    pub test:  f64,
    pub valid: f64,
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self { train: 0.6, test: 0.2, valid: 0.2 }
    }
}

impl SplitRatios {
    /// Each ratio must be finite and non-negative, and together they
    /// may not ask for more than the whole class.
    /// A sum below 1.0 is fine: the slack lands in validation.
    pub fn validate(&self) -> Result<(), PartitionError> {
        for (split, value) in Split::ALL.iter().zip([self.train, self.test, self.valid]) {
            if !value.is_finite() || value < 0.0 {
                return Err(PartitionError::Config(format!(
                    "{split} ratio must be a non-negative number, got {value}"
                )));
            }
        }

        let sum = self.train + self.test + self.valid;
        if sum > 1.0 + RATIO_SUM_TOLERANCE {
            return Err(PartitionError::Config(format!(
                "ratios sum to {sum}, which is more than 1.0"
            )));
        }

        if (sum - 1.0).abs() > RATIO_SUM_TOLERANCE {
            tracing::warn!(
                "Split ratios sum to {:.4}; the remainder goes to the validation split",
                sum
            );
        }
        Ok(())
    }

    /// Compute how many of `n` samples land in each split.
    pub fn counts_for(&self, n: usize) -> SplitCounts {
        let num_train = ((n as f64) * self.train).floor() as usize;
        let num_train = num_train.min(n);

        // Floating point slop can push train + test past n; clamp so the
        // remainder below can never underflow.
        let num_test = ((n as f64) * self.test).floor() as usize;
        let num_test = num_test.min(n - num_train);

        SplitCounts {
            train: num_train,
            test:  num_test,
            valid: n - num_train - num_test,
        }
    }
}

// ─── SplitCounts ──────────────────────────────────────────────────────────────
/// Number of samples per split for one class (or summed over classes).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitCounts {
    pub train: usize,
    pub test:  usize,
    pub valid: usize,
}

impl SplitCounts {
    pub fn total(&self) -> usize {
        self.train + self.test + self.valid
    }
}

impl std::ops::AddAssign for SplitCounts {
    fn add_assign(&mut self, other: Self) {
        self.train += other.train;
        self.test  += other.test;
        self.valid += other.valid;
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_samples_default_ratios() {
        let counts = SplitRatios::default().counts_for(10);
        assert_eq!(counts, SplitCounts { train: 6, test: 2, valid: 2 });
    }

    #[test]
    fn test_single_sample_goes_to_valid() {
        let counts = SplitRatios::default().counts_for(1);
        assert_eq!(counts, SplitCounts { train: 0, test: 0, valid: 1 });
    }

    #[test]
    fn test_counts_always_sum_to_n() {
        let triples = [
            (0.6, 0.2, 0.2),
            (0.7, 0.15, 0.15),
            (0.8, 0.1, 0.1),
            (1.0, 0.0, 0.0),
            (0.0, 0.0, 1.0),
            (0.33, 0.33, 0.34),
        ];
        for (train, test, valid) in triples {
            let ratios = SplitRatios { train, test, valid };
            ratios.validate().unwrap();
            for n in 0..200 {
                assert_eq!(ratios.counts_for(n).total(), n, "n={n} ratios={ratios:?}");
            }
        }
    }

    #[test]
    fn test_empty_class() {
        let counts = SplitRatios::default().counts_for(0);
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_under_one_sum_puts_slack_in_valid() {
        let ratios = SplitRatios { train: 0.5, test: 0.1, valid: 0.0 };
        ratios.validate().unwrap();
        assert_eq!(ratios.counts_for(10), SplitCounts { train: 5, test: 1, valid: 4 });
    }

    #[test]
    fn test_rejects_negative_ratio() {
        let err = SplitRatios { train: 0.8, test: -0.1, valid: 0.3 }.validate().unwrap_err();
        assert!(matches!(err, PartitionError::Config(_)));
    }

    #[test]
    fn test_rejects_nan_ratio() {
        assert!(SplitRatios { train: f64::NAN, test: 0.2, valid: 0.2 }.validate().is_err());
    }

    #[test]
    fn test_rejects_sum_over_one() {
        assert!(SplitRatios { train: 0.7, test: 0.3, valid: 0.2 }.validate().is_err());
    }

    #[test]
    fn test_split_display() {
        let names: Vec<String> = Split::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["train", "test", "valid"]);
    }
}
