use std::{
    hint::black_box,
    ops::{AddAssign, Index},
    time::Instant,
};

use crate::error::BenchError;
use crate::set::OrderedSet;
use crate::workload::Workload;

/// One of the five timed operations of a trial, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    UniqueInsert = 0,
    RepeatedInsert,
    UniqueDelete,
    RepeatedDelete,
    Query,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::UniqueInsert,
        Phase::RepeatedInsert,
        Phase::UniqueDelete,
        Phase::RepeatedDelete,
        Phase::Query,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Phase::UniqueInsert => "Unique Inserts",
            Phase::RepeatedInsert => "Repeated Inserts",
            Phase::UniqueDelete => "Unique Deletes",
            Phase::RepeatedDelete => "Repeated Deletes",
            Phase::Query => "Queries",
        }
    }

    /// Number of set operations this phase performs for a workload of
    /// `size` keys.
    pub fn op_count(self, size: usize) -> usize {
        match self {
            Phase::UniqueDelete | Phase::RepeatedDelete => size / 2,
            _ => size,
        }
    }
}

/// Elapsed seconds per [`Phase`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhaseTimings([f64; 5]);

impl PhaseTimings {
    pub fn new(secs: [f64; 5]) -> PhaseTimings {
        PhaseTimings(secs)
    }

    pub fn as_array(&self) -> &[f64; 5] {
        &self.0
    }

    /// Divide every phase by `n`.
    pub fn divided(&self, n: usize) -> PhaseTimings {
        let mut out = *self;
        out.0.iter_mut().for_each(|t| *t /= n as f64);
        out
    }
}

impl Index<Phase> for PhaseTimings {
    type Output = f64;

    fn index(&self, phase: Phase) -> &f64 {
        &self.0[phase as usize]
    }
}

impl AddAssign<&PhaseTimings> for PhaseTimings {
    fn add_assign(&mut self, other: &PhaseTimings) {
        for (t, o) in self.0.iter_mut().zip(other.0.iter()) {
            *t += *o;
        }
    }
}

/// Outcome of a single trial.
#[derive(Clone, Debug)]
pub struct Trial {
    pub timings: PhaseTimings,
    /// Keys found present by the query phase.
    pub present: usize,
    /// Keys that should have been found, the ones never deleted.
    pub expected: usize,
    /// Set length after each phase, sampled outside the timed brackets.
    pub sizes: [usize; 5],
}

impl Trial {
    pub fn verify(&self) -> Result<(), BenchError> {
        if self.present == self.expected {
            Ok(())
        } else {
            Err(BenchError::Integrity {
                observed: self.present,
                expected: self.expected,
            })
        }
    }
}

/// Run the five phases against `set`, which must be empty, and drop it
/// before returning.
///
/// * Insert every key, each insert grows the set.
/// * Insert every key again, each insert is rejected as duplicate.
/// * Erase the leading half of the workload.
/// * Erase the same half again, each erase misses.
/// * Look up every key, counting the ones found.
pub fn run_trial<S: OrderedSet>(mut set: S, workload: &Workload) -> Trial {
    let keys = workload.keys();
    let half = &keys[..workload.half()];
    let mut secs = [0_f64; 5];
    let mut sizes = [0_usize; 5];

    let start = Instant::now();
    for &key in keys.iter() {
        set.insert(key);
    }
    secs[Phase::UniqueInsert as usize] = start.elapsed().as_secs_f64();
    sizes[Phase::UniqueInsert as usize] = set.len();

    let start = Instant::now();
    for &key in keys.iter() {
        set.insert(key);
    }
    secs[Phase::RepeatedInsert as usize] = start.elapsed().as_secs_f64();
    sizes[Phase::RepeatedInsert as usize] = set.len();

    let start = Instant::now();
    for key in half.iter() {
        set.erase(key);
    }
    secs[Phase::UniqueDelete as usize] = start.elapsed().as_secs_f64();
    sizes[Phase::UniqueDelete as usize] = set.len();

    let start = Instant::now();
    for key in half.iter() {
        set.erase(key);
    }
    secs[Phase::RepeatedDelete as usize] = start.elapsed().as_secs_f64();
    sizes[Phase::RepeatedDelete as usize] = set.len();

    let start = Instant::now();
    let mut present = 0_usize;
    for key in keys.iter() {
        present += set.count(key);
    }
    secs[Phase::Query as usize] = start.elapsed().as_secs_f64();
    sizes[Phase::Query as usize] = set.len();

    drop(black_box(set));
    Trial {
        timings: PhaseTimings(secs),
        present,
        expected: workload.survivors(),
        sizes,
    }
}
