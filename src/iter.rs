//! Iterators over the contents of an [`IndexFibonacciMinPq`].
//!
//! [`Indices`] and [`Entries`] walk the slot table, so they cost
//! O(capacity) and yield in ascending index order, independent of the heap
//! shape. Each call starts a fresh walk; they are snapshots of a borrowed
//! queue, not live views. [`DrainSorted`] repeatedly removes the minimum.

use crate::fibonacci::{IndexFibonacciMinPq, Node};
use crate::storage::{NodeArena, NodeKey};
use crate::traits::IndexedMinQueue;
use std::iter::{Enumerate, FusedIterator};
use std::slice;

/// Iterator over the indices present in a queue.
///
/// Created by [`IndexFibonacciMinPq::indices`].
#[derive(Clone)]
pub struct Indices<'a> {
    slots: Enumerate<slice::Iter<'a, Option<NodeKey>>>,
    remaining: usize,
}

impl<'a> Indices<'a> {
    pub(crate) fn new(slots: &'a [Option<NodeKey>], len: usize) -> Self {
        Self {
            slots: slots.iter().enumerate(),
            remaining: len,
        }
    }
}

impl Iterator for Indices<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let (i, _) = self.slots.find(|(_, slot)| slot.is_some())?;
        self.remaining -= 1;
        Some(i)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Indices<'_> {}
impl FusedIterator for Indices<'_> {}

/// Iterator over `(index, key)` pairs of a queue.
///
/// Created by [`IndexFibonacciMinPq::entries`].
pub struct Entries<'a, K> {
    indices: Indices<'a>,
    slots: &'a [Option<NodeKey>],
    arena: &'a NodeArena<Node<K>>,
}

impl<'a, K> Entries<'a, K> {
    pub(crate) fn new(
        slots: &'a [Option<NodeKey>],
        arena: &'a NodeArena<Node<K>>,
        len: usize,
    ) -> Self {
        Self {
            indices: Indices::new(slots, len),
            slots,
            arena,
        }
    }
}

impl<K: Copy> Iterator for Entries<'_, K> {
    type Item = (usize, K);

    fn next(&mut self) -> Option<(usize, K)> {
        let i = self.indices.next()?;
        let x = self.slots[i]?;
        Some((i, self.arena.get(x)?.key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<K: Copy> ExactSizeIterator for Entries<'_, K> {}
impl<K: Copy> FusedIterator for Entries<'_, K> {}

/// Draining iterator yielding `(index, key)` in non-decreasing key order.
///
/// Created by [`IndexFibonacciMinPq::drain_sorted`]. Each step is a
/// `del_min`, so the amortized cost is O(log n) per item.
pub struct DrainSorted<'a, K: PartialOrd + Copy> {
    pq: &'a mut IndexFibonacciMinPq<K>,
}

impl<'a, K: PartialOrd + Copy> DrainSorted<'a, K> {
    pub(crate) fn new(pq: &'a mut IndexFibonacciMinPq<K>) -> Self {
        Self { pq }
    }
}

impl<K: PartialOrd + Copy> Iterator for DrainSorted<'_, K> {
    type Item = (usize, K);

    fn next(&mut self) -> Option<(usize, K)> {
        let key = self.pq.min_key().ok()?;
        let index = self.pq.del_min().ok()?;
        Some((index, key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.pq.len(), Some(self.pq.len()))
    }
}

impl<K: PartialOrd + Copy> ExactSizeIterator for DrainSorted<'_, K> {}
impl<K: PartialOrd + Copy> FusedIterator for DrainSorted<'_, K> {}
