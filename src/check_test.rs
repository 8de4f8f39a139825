use std::collections::BTreeSet;

use crate::check::{check_inserts_and_deletes, check_queries};
use crate::error::BenchError;
use crate::set::{Key, OrderedSet};
use crate::workload::{make_rng, Order, Workload};

// Set that keeps at most `cap` keys, dropping inserts beyond that.
struct Capped {
    cap: usize,
    keys: BTreeSet<Key>,
}

impl OrderedSet for Capped {
    fn insert(&mut self, key: Key) -> bool {
        if self.keys.len() >= self.cap {
            return false;
        }
        self.keys.insert(key)
    }

    fn erase(&mut self, key: &Key) -> bool {
        self.keys.remove(key)
    }

    fn contains(&self, key: &Key) -> bool {
        self.keys.contains(key)
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}

#[test]
fn test_btreeset_conforms() {
    let mut rng = make_rng(Some(0xC0FFEE));
    let n = 10_000;
    for order in [Order::Random, Order::Ascending, Order::Descending].iter() {
        let wl = Workload::generate(n, *order, &mut rng);
        check_inserts_and_deletes(BTreeSet::<Key>::new, wl.keys()).unwrap();
        check_queries(BTreeSet::<Key>::new, wl.keys()).unwrap();
    }
}

#[test]
fn test_empty_keys() {
    assert!(check_inserts_and_deletes(BTreeSet::<Key>::new, &[]).is_ok());
    assert!(check_queries(BTreeSet::<Key>::new, &[]).is_ok());
}

#[test]
fn test_capped_fails() {
    let wl = Workload::ascending(100);
    let make = || Capped {
        cap: 50,
        keys: BTreeSet::new(),
    };

    match check_inserts_and_deletes(make, wl.keys()) {
        Err(BenchError::Conformance(msg)) => {
            assert_eq!(msg, "insert 50: len 50 expected 51");
        }
        res => panic!("unexpected {:?}", res),
    }
    match check_queries(make, wl.keys()) {
        Err(BenchError::Conformance(msg)) => {
            assert!(msg.starts_with("after insert of slice 2"), "{}", msg);
        }
        res => panic!("unexpected {:?}", res),
    }
}
