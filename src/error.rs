use thiserror::Error;

/// BenchError enumerates over all possible errors that this package
/// shall return.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BenchError {
    /// Trial count must be at least one, carries the rejected value.
    #[error("runs must be at least 1, got {0}")]
    InvalidRuns(i64),
    /// `C_BENCH_SEED` is set but is not an unsigned 64-bit integer.
    #[error("invalid seed {0:?}")]
    InvalidSeed(String),
    /// Query phase found a different number of keys than the ones that
    /// were never deleted. The container under test is broken and the
    /// timings of that trial are not trustworthy.
    #[error("Test failed! {observed} {expected}")]
    Integrity { observed: usize, expected: usize },
    /// Asked for a mean before any trial was accumulated.
    #[error("no trials to aggregate")]
    NoTrials,
    /// Conformance check failed, the String component describes the step.
    #[error("conformance: {0}")]
    Conformance(String),
}
