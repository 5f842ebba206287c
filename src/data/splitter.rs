// ============================================================
// Layer 4 - Train/Test/Validation Splitter
// ============================================================
// Randomly shuffles a class's samples and slices them into
// three contiguous runs:
//
//   [ ---- train ---- | -- test -- | -- valid -- ]
//     num_train         num_test     remainder
//
// The sizes come from SplitRatios::counts_for, so the runs are
// disjoint and cover every sample exactly once.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom. The RNG
// is passed in by the caller: a seeded StdRng gives a
// reproducible split, thread_rng() gives a fresh one each run.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

use rand::{seq::SliceRandom, Rng};

use crate::domain::class_set::{ClassPlan, ClassSamples};
use crate::domain::split::SplitRatios;

/// Shuffle `samples` with `rng` and split into (train, test, valid).
///
/// # Example
/// ```ignore
/// let mut rng = StdRng::seed_from_u64(7);
/// let (train, test, valid) = split_three(items, &SplitRatios::default(), &mut rng);
/// ```
pub fn split_three<T, R>(mut samples: Vec<T>, ratios: &SplitRatios, rng: &mut R) -> (Vec<T>, Vec<T>, Vec<T>)
where
    R: Rng + ?Sized,
{
    samples.shuffle(rng);

    let counts = ratios.counts_for(samples.len());

    // split_off(n) keeps [0..n) in place and returns [n..)
    let mut rest = samples.split_off(counts.train);
    let valid    = rest.split_off(counts.test);
    let test     = rest;

    tracing::debug!(
        "Split {} samples: {} train, {} test, {} valid",
        counts.total(),
        samples.len(),
        test.len(),
        valid.len(),
    );

    (samples, test, valid)
}

/// Build the split assignment for one class.
pub fn plan_class<R>(class: &ClassSamples, ratios: &SplitRatios, rng: &mut R) -> ClassPlan
where
    R: Rng + ?Sized,
{
    let (train, test, valid) = split_three(class.files.clone(), ratios, rng);
    ClassPlan {
        class: class.name.clone(),
        train,
        test,
        valid,
    }
}
