//! Microbenchmark harness for ordered sets.
//!
//! Times five phases, unique insert, repeated insert, unique delete,
//! repeated delete and query, over a shuffled permutation of `0..N`, and
//! averages them across repeated trials on fresh containers. Any type
//! implementing [`OrderedSet`] can be benchmarked, [`BTreeSet`] is the
//! default.
//!
//! [`BTreeSet`]: std::collections::BTreeSet

mod check;
mod config;
mod error;
mod harness;
mod logging;
mod report;
mod runner;
mod set;
mod workload;

pub use crate::check::{check_inserts_and_deletes, check_queries};
pub use crate::config::{
    atoi, parse_args, parse_seed, seed_from_env, Command, Config, DEFAULT_RUNS, DEFAULT_SIZE,
    SEED_ENV, USAGE,
};
pub use crate::error::BenchError;
pub use crate::harness::{run_trials, Summary, Totals};
pub use crate::logging::init_logging;
pub use crate::runner::{run_trial, Phase, PhaseTimings, Trial};
pub use crate::set::{Key, OrderedSet};
pub use crate::workload::{make_rng, Order, Workload};

#[cfg(test)]
mod check_test;
