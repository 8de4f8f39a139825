use std::{env, num::NonZeroUsize};

use crate::error::BenchError;

pub const USAGE: &str = "usage: c_bench [size runs]";

/// Environment variable holding an optional workload seed.
pub const SEED_ENV: &str = "C_BENCH_SEED";

pub const DEFAULT_SIZE: usize = 100_000;
pub const DEFAULT_RUNS: i64 = 5;

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Run(Config),
    Usage,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Number of keys in the workload.
    pub size: usize,
    /// Number of trials, as parsed. Checked by [`Config::validate`].
    pub runs: i64,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            size: DEFAULT_SIZE,
            runs: DEFAULT_RUNS,
            seed: None,
        }
    }
}

impl Config {
    /// Return the trial count, rejecting anything below one.
    pub fn validate(&self) -> Result<NonZeroUsize, BenchError> {
        if self.runs < 1 {
            return Err(BenchError::InvalidRuns(self.runs));
        }
        NonZeroUsize::new(self.runs as usize).ok_or(BenchError::InvalidRuns(self.runs))
    }
}

/// Parse positional arguments, excluding the program name. Either none or
/// exactly `<size> <runs>` are accepted, anything else asks for usage.
pub fn parse_args<I, S>(args: I) -> Command
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    match args.as_slice() {
        [] => Command::Run(Config::default()),
        [size, runs] => Command::Run(Config {
            size: atoi(size.as_ref()).max(0) as usize,
            runs: atoi(runs.as_ref()),
            seed: None,
        }),
        _ => Command::Usage,
    }
}

/// Read the workload seed from the environment, if set.
pub fn seed_from_env() -> Result<Option<u64>, BenchError> {
    match env::var(SEED_ENV) {
        Ok(val) => parse_seed(&val).map(Some),
        Err(_) => Ok(None),
    }
}

pub fn parse_seed(val: &str) -> Result<u64, BenchError> {
    val.trim()
        .parse()
        .map_err(|_| BenchError::InvalidSeed(val.to_string()))
}

/// Lenient integer parsing: optional leading whitespace and sign, then as
/// many digits as present. No digits yields 0, overflow saturates.
pub fn atoi(s: &str) -> i64 {
    let s = s.trim_start();
    let (neg, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut n: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        n = n.saturating_mul(10).saturating_add(d);
    }
    if neg {
        -n
    } else {
        n
    }
}
