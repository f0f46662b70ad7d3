//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations, apply them to a queue
//! and to a simple model (a map from index to key), and verify that both agree
//! and that the queue's structural invariants hold after every step.

use index_fib_heap::simple_binary::IndexBinaryMinPq;
use index_fib_heap::{IndexFibonacciMinPq, IndexedMinQueue, PqError};
use proptest::prelude::*;
use std::collections::BTreeMap;

const CAPACITY: usize = 32;

#[derive(Debug, Clone)]
enum Op {
    Insert(usize, i32),
    DelMin,
    Delete(usize),
    DecreaseKey(usize, i32),
    IncreaseKey(usize, i32),
    ChangeKey(usize, i32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // Indices slightly beyond capacity exercise the out-of-range path
    let index = 0..CAPACITY + 2;
    let key = -100i32..100;
    prop_oneof![
        4 => (index.clone(), key.clone()).prop_map(|(i, k)| Op::Insert(i, k)),
        2 => Just(Op::DelMin),
        1 => index.clone().prop_map(Op::Delete),
        2 => (index.clone(), key.clone()).prop_map(|(i, k)| Op::DecreaseKey(i, k)),
        1 => (index.clone(), key.clone()).prop_map(|(i, k)| Op::IncreaseKey(i, k)),
        1 => (index, key).prop_map(|(i, k)| Op::ChangeKey(i, k)),
    ]
}

/// Reference behaviour of an indexed min-queue
#[derive(Default)]
struct Model {
    keys: BTreeMap<usize, i32>,
}

impl Model {
    fn lookup(&self, i: usize) -> Result<i32, PqError> {
        if i >= CAPACITY {
            return Err(PqError::InvalidArgument {
                index: i,
                capacity: CAPACITY,
            });
        }
        self.keys.get(&i).copied().ok_or(PqError::NotFound(i))
    }

    fn min_key(&self) -> Option<i32> {
        self.keys.values().min().copied()
    }

    /// Lowest index holding the minimum key
    fn min_index(&self) -> Option<usize> {
        let min = self.min_key()?;
        self.keys.iter().find(|&(_, &k)| k == min).map(|(&i, _)| i)
    }

    /// Applies `op`, returning the expected result. `DelMin` returns the
    /// removed index.
    fn apply(&mut self, op: &Op) -> Result<Option<usize>, PqError> {
        match *op {
            Op::Insert(i, k) => {
                match self.lookup(i) {
                    Err(PqError::NotFound(_)) => {}
                    Err(e) => return Err(e),
                    Ok(_) => return Err(PqError::AlreadyExists(i)),
                }
                self.keys.insert(i, k);
                Ok(None)
            }
            Op::DelMin => {
                let i = self.min_index().ok_or(PqError::EmptyQueue)?;
                self.keys.remove(&i);
                Ok(Some(i))
            }
            Op::Delete(i) => {
                self.lookup(i)?;
                self.keys.remove(&i);
                Ok(None)
            }
            Op::DecreaseKey(i, k) => {
                if k > self.lookup(i)? {
                    return Err(PqError::InvalidDecrease(i));
                }
                self.keys.insert(i, k);
                Ok(None)
            }
            Op::IncreaseKey(i, k) => {
                if k <= self.lookup(i)? {
                    return Err(PqError::InvalidIncrease(i));
                }
                self.keys.insert(i, k);
                Ok(None)
            }
            Op::ChangeKey(i, k) => {
                self.lookup(i)?;
                self.keys.insert(i, k);
                Ok(None)
            }
        }
    }
}

fn apply_to_queue<Q: IndexedMinQueue<i32>>(
    pq: &mut Q,
    op: &Op,
) -> Result<Option<usize>, PqError> {
    match *op {
        Op::Insert(i, k) => pq.insert(i, k).map(|_| None),
        Op::DelMin => pq.del_min().map(Some),
        Op::Delete(i) => pq.delete(i).map(|_| None),
        Op::DecreaseKey(i, k) => pq.decrease_key(i, k).map(|_| None),
        Op::IncreaseKey(i, k) => pq.increase_key(i, k).map(|_| None),
        Op::ChangeKey(i, k) => pq.change_key(i, k).map(|_| None),
    }
}

/// Runs `ops` against a queue and the model, comparing after every step
fn check_against_model<Q: IndexedMinQueue<i32>>(
    ops: &[Op],
    mut check: impl FnMut(&Q) -> Result<(), String>,
) -> Result<(), TestCaseError> {
    let mut pq = Q::with_capacity(CAPACITY);
    let mut model = Model::default();

    for op in ops {
        let expected = model.apply(op);
        let actual = apply_to_queue(&mut pq, op);
        prop_assert_eq!(expected, actual, "op {:?}", op);

        check(&pq).map_err(TestCaseError::fail)?;
        prop_assert_eq!(pq.len(), model.keys.len());
        prop_assert_eq!(pq.is_empty(), model.keys.is_empty());
        prop_assert_eq!(pq.min_key().ok(), model.min_key());
        prop_assert_eq!(pq.min_index().ok(), model.min_index());
        prop_assert_eq!(pq.to_vec(), model.keys.keys().copied().collect::<Vec<_>>());
        for i in 0..CAPACITY + 2 {
            prop_assert_eq!(pq.contains(i), model.keys.contains_key(&i));
            prop_assert_eq!(pq.key_of(i), model.lookup(i));
        }
    }
    Ok(())
}

/// Test that all deleted keys come out in non-decreasing order
fn check_del_min_order<Q: IndexedMinQueue<i32>>(keys: &[i32]) -> Result<(), TestCaseError> {
    let mut pq = Q::with_capacity(keys.len());
    for (i, &k) in keys.iter().enumerate() {
        pq.insert(i, k).unwrap();
    }

    let mut last = i32::MIN;
    let mut count = 0;
    while !pq.is_empty() {
        let key = pq.min_key().unwrap();
        let i = pq.del_min().unwrap();
        prop_assert_eq!(key, keys[i]);
        prop_assert!(key >= last, "deleted key {} after {}", key, last);
        last = key;
        count += 1;
    }
    prop_assert_eq!(count, keys.len());
    Ok(())
}

fn fibonacci_invariants(pq: &IndexFibonacciMinPq<i32>) -> Result<(), String> {
    pq.check_invariants()
}

fn no_check(_: &IndexBinaryMinPq<i32>) -> Result<(), String> {
    Ok(())
}

proptest! {
    #[test]
    fn test_fibonacci_matches_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        check_against_model::<IndexFibonacciMinPq<i32>>(&ops, fibonacci_invariants)?;
    }

    #[test]
    fn test_binary_matches_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        check_against_model::<IndexBinaryMinPq<i32>>(&ops, no_check)?;
    }

    #[test]
    fn test_fibonacci_del_min_order(keys in prop::collection::vec(-1000i32..1000, 0..200)) {
        check_del_min_order::<IndexFibonacciMinPq<i32>>(&keys)?;
    }

    #[test]
    fn test_binary_del_min_order(keys in prop::collection::vec(-1000i32..1000, 0..200)) {
        check_del_min_order::<IndexBinaryMinPq<i32>>(&keys)?;
    }

    #[test]
    fn test_fibonacci_agrees_with_binary(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut fib = IndexFibonacciMinPq::<i32>::new(CAPACITY);
        let mut bin = IndexBinaryMinPq::<i32>::with_capacity(CAPACITY);
        for op in &ops {
            let f = apply_to_queue(&mut fib, op);
            let b = apply_to_queue(&mut bin, op);
            // Ties break by index in both, so even del_min agrees exactly
            prop_assert_eq!(f, b, "op {:?}", op);
            prop_assert_eq!(fib.min_index(), bin.min_index());
            prop_assert_eq!(fib.min_key(), bin.min_key());
            prop_assert_eq!(fib.to_vec(), bin.to_vec());
        }
    }

    #[test]
    fn test_insert_delete_round_trip(
        keys in prop::collection::vec(-100i32..100, 1..30),
        victim_key in -200i32..200,
    ) {
        let mut pq = IndexFibonacciMinPq::<i32>::new(keys.len() + 1);
        for (i, &k) in keys.iter().enumerate() {
            pq.insert(i, k).unwrap();
        }
        // Force some tree structure before the round trip
        pq.del_min().unwrap();
        let before = (pq.len(), pq.to_vec(), pq.min_index(), pq.min_key());
        let victim = keys.len();

        pq.insert(victim, victim_key).unwrap();
        pq.delete(victim).unwrap();
        prop_assert_eq!((pq.len(), pq.to_vec(), pq.min_index(), pq.min_key()), before);
        pq.check_invariants().map_err(TestCaseError::fail)?;
    }
}
