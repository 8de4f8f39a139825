use std::num::NonZeroUsize;

use tracing::{debug, warn};

use crate::error::BenchError;
use crate::runner::{run_trial, PhaseTimings, Trial};
use crate::set::OrderedSet;
use crate::workload::Workload;

/// Running sum of phase timings across trials.
#[derive(Clone, Debug, Default)]
pub struct Totals {
    sum: PhaseTimings,
    trials: usize,
}

impl Totals {
    pub fn new() -> Totals {
        Default::default()
    }

    pub fn accumulate(&mut self, timings: &PhaseTimings) {
        self.sum += timings;
        self.trials += 1;
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Mean duration per phase over all accumulated trials.
    pub fn mean(&self) -> Result<PhaseTimings, BenchError> {
        match self.trials {
            0 => Err(BenchError::NoTrials),
            n => Ok(self.sum.divided(n)),
        }
    }
}

/// Aggregated result of all trials over one workload.
#[derive(Clone, Debug)]
pub struct Summary {
    pub size: usize,
    pub runs: usize,
    pub means: PhaseTimings,
    /// One entry per trial that failed its query-count check.
    pub violations: Vec<BenchError>,
}

impl Summary {
    /// Timings are only meaningful when every trial passed verification.
    pub fn is_trustworthy(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Run `runs` trials over the same workload, each against a fresh set
/// from `make_set`, and average their timings. Integrity violations are
/// collected, not fatal.
pub fn run_trials<S, F>(workload: &Workload, runs: NonZeroUsize, mut make_set: F) -> Summary
where
    S: OrderedSet,
    F: FnMut() -> S,
{
    let mut totals = Totals::new();
    let mut violations = vec![];
    for i in 0..runs.get() {
        let trial: Trial = run_trial(make_set(), workload);
        debug!(trial = i, timings = ?trial.timings.as_array(), present = trial.present, "trial done");
        if let Err(err) = trial.verify() {
            warn!(trial = i, "{}", err);
            violations.push(err);
        }
        totals.accumulate(&trial.timings);
    }

    // runs is non-zero, so at least one trial was accumulated.
    let means = totals.mean().unwrap_or_default();
    Summary {
        size: workload.len(),
        runs: runs.get(),
        means,
        violations,
    }
}
