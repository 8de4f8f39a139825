//! Conformance checks for [`OrderedSet`] implementations.
//!
//! Timings of a container are only comparable if it behaves as a set.
//! These checks walk a container through the same kind of inserts, duplicate
//! inserts, erases and duplicate erases that the benchmark performs, and
//! validate length and membership after every step.

use crate::error::BenchError;
use crate::set::{Key, OrderedSet};

/// Number of slices the query check divides the keys into.
const QUERY_DIVS: usize = 4;

/// Insert then erase every key, twice each, validating the length after
/// every operation. `keys` must be unique.
pub fn check_inserts_and_deletes<S, F>(mut make_set: F, keys: &[Key]) -> Result<(), BenchError>
where
    S: OrderedSet,
    F: FnMut() -> S,
{
    let mut set = make_set();
    let mut count = 0;
    for key in keys.iter() {
        set.insert(*key);
        count += 1;
        expect_len(&set, count, "insert", key)?;

        set.insert(*key);
        expect_len(&set, count, "repeated insert", key)?;
    }

    for key in keys.iter() {
        set.erase(key);
        count -= 1;
        expect_len(&set, count, "erase", key)?;

        set.erase(key);
        expect_len(&set, count, "repeated erase", key)?;
    }
    Ok(())
}

/// Fill the set one slice of `keys` at a time, then drain it the same way,
/// checking after each slice that exactly the expected slices are present.
pub fn check_queries<S, F>(mut make_set: F, keys: &[Key]) -> Result<(), BenchError>
where
    S: OrderedSet,
    F: FnMut() -> S,
{
    let divs: Vec<&[Key]> = (0..QUERY_DIVS)
        .map(|i| &keys[(keys.len() * i) / QUERY_DIVS..(keys.len() * (i + 1)) / QUERY_DIVS])
        .collect();

    let mut set = make_set();
    for (i, div) in divs.iter().enumerate() {
        div.iter().for_each(|key| {
            set.insert(*key);
        });
        expect_slices(&set, &divs, |j| j <= i, "insert", i)?;
    }
    for (i, div) in divs.iter().enumerate() {
        div.iter().for_each(|key| {
            set.erase(key);
        });
        expect_slices(&set, &divs, |j| j > i, "erase", i)?;
    }
    Ok(())
}

fn expect_len<S: OrderedSet>(set: &S, want: usize, op: &str, key: &Key) -> Result<(), BenchError> {
    let got = set.len();
    if got != want {
        let msg = format!("{} {}: len {} expected {}", op, key, got, want);
        return Err(BenchError::Conformance(msg));
    }
    Ok(())
}

fn expect_slices<S, P>(
    set: &S,
    divs: &[&[Key]],
    present: P,
    op: &str,
    at: usize,
) -> Result<(), BenchError>
where
    S: OrderedSet,
    P: Fn(usize) -> bool,
{
    for (j, div) in divs.iter().enumerate() {
        for key in div.iter() {
            if set.contains(key) != present(j) {
                let msg = format!(
                    "after {} of slice {}: key {} contains {}",
                    op,
                    at,
                    key,
                    set.contains(key)
                );
                return Err(BenchError::Conformance(msg));
            }
        }
    }
    Ok(())
}
