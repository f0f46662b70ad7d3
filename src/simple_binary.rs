//! Indexed Binary Heap implementation
//!
//! A straightforward indexed binary min-heap implementing the same
//! [`IndexedMinQueue`] trait as
//! [`IndexFibonacciMinPq`](crate::fibonacci::IndexFibonacciMinPq).
//!
//! It is the baseline the Fibonacci queue is measured against: simpler,
//! worst-case rather than amortized bounds, and usually faster for small
//! queues thanks to its flat layout.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(log n)   |
//! | `del_min`      | O(log n)   |
//! | `decrease_key` | O(log n)   |
//! | `increase_key` | O(log n)   |
//! | `delete`       | O(log n)   |
//! | `min_key`      | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use index_fib_heap::IndexedMinQueue;
//! use index_fib_heap::simple_binary::IndexBinaryMinPq;
//!
//! let mut pq = IndexBinaryMinPq::with_capacity(4);
//! pq.insert(3, 3.0).unwrap();
//! pq.insert(1, 1.0).unwrap();
//! pq.insert(2, 2.0).unwrap();
//!
//! assert_eq!(pq.min_index(), Ok(1));
//! assert_eq!(pq.del_min(), Ok(1));
//! assert_eq!(pq.del_min(), Ok(2));
//! assert_eq!(pq.del_min(), Ok(3));
//! assert!(pq.is_empty());
//! ```

use crate::error::PqError;
use crate::traits::{check_index, check_key, greater, precedes, IndexedMinQueue};

/// An indexed binary min-heap
#[derive(Debug, Clone)]
pub struct IndexBinaryMinPq<K = f64> {
    /// (key, index) pairs, heap-ordered by key then index
    heap: Vec<(K, usize)>,
    /// index -> position in `heap`
    positions: Vec<Option<usize>>,
}

impl<K: PartialOrd + Copy> IndexBinaryMinPq<K> {
    #[inline]
    fn key_at(&self, pos: usize) -> K {
        self.heap[pos].0
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].1] = Some(a);
        self.positions[self.heap[b].1] = Some(b);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !precedes(self.heap[pos], self.heap[parent]) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smaller = if right < len && precedes(self.heap[right], self.heap[left]) {
                right
            } else {
                left
            };
            if !precedes(self.heap[smaller], self.heap[pos]) {
                break;
            }
            self.swap(pos, smaller);
            pos = smaller;
        }
    }

    fn position(&self, i: usize) -> Result<usize, PqError> {
        check_index(i, self.positions.len())?;
        self.positions[i].ok_or(PqError::NotFound(i))
    }

    /// Removes the entry at heap position `pos`, returning its index.
    fn remove_at(&mut self, pos: usize) -> usize {
        let (_, i) = self.heap.swap_remove(pos);
        self.positions[i] = None;
        if pos < self.heap.len() {
            self.positions[self.heap[pos].1] = Some(pos);
            self.sift_up(pos);
            self.sift_down(pos);
        }
        i
    }
}

impl<K: PartialOrd + Copy> IndexedMinQueue<K> for IndexBinaryMinPq<K> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
        }
    }

    fn capacity(&self) -> usize {
        self.positions.len()
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn contains(&self, i: usize) -> bool {
        matches!(self.positions.get(i), Some(Some(_)))
    }

    fn insert(&mut self, i: usize, key: K) -> Result<(), PqError> {
        check_index(i, self.positions.len())?;
        if self.positions[i].is_some() {
            return Err(PqError::AlreadyExists(i));
        }
        check_key(i, &key)?;
        self.positions[i] = Some(self.heap.len());
        self.heap.push((key, i));
        self.sift_up(self.heap.len() - 1);
        Ok(())
    }

    fn min_index(&self) -> Result<usize, PqError> {
        self.heap.first().map(|&(_, i)| i).ok_or(PqError::EmptyQueue)
    }

    fn min_key(&self) -> Result<K, PqError> {
        if self.heap.is_empty() {
            return Err(PqError::EmptyQueue);
        }
        Ok(self.key_at(0))
    }

    fn del_min(&mut self) -> Result<usize, PqError> {
        if self.heap.is_empty() {
            return Err(PqError::EmptyQueue);
        }
        Ok(self.remove_at(0))
    }

    fn key_of(&self, i: usize) -> Result<K, PqError> {
        let pos = self.position(i)?;
        Ok(self.key_at(pos))
    }

    fn decrease_key(&mut self, i: usize, key: K) -> Result<(), PqError> {
        let pos = self.position(i)?;
        check_key(i, &key)?;
        if greater(key, self.key_at(pos)) {
            return Err(PqError::InvalidDecrease(i));
        }
        self.heap[pos].0 = key;
        self.sift_up(pos);
        Ok(())
    }

    fn increase_key(&mut self, i: usize, key: K) -> Result<(), PqError> {
        let pos = self.position(i)?;
        check_key(i, &key)?;
        if !greater(key, self.key_at(pos)) {
            return Err(PqError::InvalidIncrease(i));
        }
        self.heap[pos].0 = key;
        self.sift_down(pos);
        Ok(())
    }

    fn delete(&mut self, i: usize) -> Result<(), PqError> {
        let pos = self.position(i)?;
        self.remove_at(pos);
        Ok(())
    }

    fn to_vec(&self) -> Vec<usize> {
        (0..self.positions.len())
            .filter(|&i| self.contains(i))
            .collect()
    }
}
