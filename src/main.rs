// Performance measurement for ordered sets. Measure, over a shuffled
// permutation of 0..N:
// * Unique inserts, N keys into an empty set.
// * Repeated inserts, the same N keys again.
// * Unique deletes, the first N/2 keys.
// * Repeated deletes, the same N/2 keys again.
// * Queries, all N keys, N - N/2 of them must be found.
//
// Each trial runs on a fresh std::collections::BTreeSet, the workload is
// shared. Report the mean of every phase over all trials.

use std::{collections::BTreeSet, env, process::ExitCode};

use tracing::{error, info};

use ordset_bench::{init_logging, make_rng, parse_args, run_trials, seed_from_env, Command, Key};
use ordset_bench::{Config, Workload};

fn main() -> ExitCode {
    init_logging();

    let config = match parse_args(env::args().skip(1)) {
        Command::Usage => {
            println!("{}", ordset_bench::USAGE);
            return ExitCode::SUCCESS;
        }
        Command::Run(config) => config,
    };
    let config = match seed_from_env() {
        Ok(seed) => Config { seed, ..config },
        Err(err) => {
            error!("{}", err);
            eprintln!("c_bench: {}", err);
            return ExitCode::from(2);
        }
    };
    let runs = match config.validate() {
        Ok(runs) => runs,
        Err(err) => {
            error!("{}", err);
            eprintln!("c_bench: {}", err);
            return ExitCode::from(2);
        }
    };

    info!(size = config.size, runs = runs.get(), seed = ?config.seed, "generating workload");
    let mut rng = make_rng(config.seed);
    let workload = Workload::shuffled(config.size, &mut rng);

    let summary = run_trials(&workload, runs, BTreeSet::<Key>::new);
    print!("{}", summary);

    if summary.is_trustworthy() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
