use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

use crate::set::Key;

/// Arrangement of keys within a [`Workload`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Random,
    Ascending,
    Descending,
}

/// Workload is a permutation of `0..size`, generated once and then
/// replayed, unmodified, by every trial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Workload {
    keys: Vec<Key>,
}

impl Workload {
    /// Keys `0..size` in a uniformly random order.
    pub fn shuffled<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Workload {
        let mut wl = Workload::ascending(size);
        wl.keys.shuffle(rng);
        wl
    }

    /// Keys `0..size` in increasing order.
    pub fn ascending(size: usize) -> Workload {
        let keys = (0..size).map(|k| k as Key).collect();
        Workload { keys }
    }

    /// Keys `0..size` in decreasing order.
    pub fn descending(size: usize) -> Workload {
        let keys = (0..size).rev().map(|k| k as Key).collect();
        Workload { keys }
    }

    pub fn generate<R: Rng + ?Sized>(size: usize, order: Order, rng: &mut R) -> Workload {
        match order {
            Order::Random => Workload::shuffled(size, rng),
            Order::Ascending => Workload::ascending(size),
            Order::Descending => Workload::descending(size),
        }
    }

    #[inline]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of keys deleted by the delete phases, the leading half.
    #[inline]
    pub fn half(&self) -> usize {
        self.keys.len() / 2
    }

    /// Number of keys left in the set after the delete phases.
    #[inline]
    pub fn survivors(&self) -> usize {
        self.keys.len() - self.half()
    }

    /// Check that every key in `0..len()` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.keys.len()];
        for &key in self.keys.iter() {
            if key < 0 || (key as usize) >= seen.len() || seen[key as usize] {
                return false;
            }
            seen[key as usize] = true;
        }
        true
    }
}

impl From<Vec<Key>> for Workload {
    fn from(keys: Vec<Key>) -> Workload {
        Workload { keys }
    }
}

/// Random source for workload generation. A fixed seed makes the
/// permutation reproducible, otherwise it is drawn from OS entropy.
pub fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}
