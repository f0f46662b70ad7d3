//! Common trait for indexed priority queues
//!
//! An indexed priority queue associates keys with caller-chosen integer
//! indices in `[0, capacity)`. The index is the handle: callers refer to an
//! entry by its index to read, change or delete its key, which is what
//! algorithms like Dijkstra's shortest path need when relaxing edges.
//!
//! [`IndexedMinQueue`] is implemented by
//! [`IndexFibonacciMinPq`](crate::fibonacci::IndexFibonacciMinPq) and by the
//! [`IndexBinaryMinPq`](crate::simple_binary::IndexBinaryMinPq) baseline.

use crate::error::PqError;

/// Indexed minimum priority queue
///
/// # Example
///
/// ```rust
/// use index_fib_heap::{IndexFibonacciMinPq, IndexedMinQueue};
///
/// let mut pq = IndexFibonacciMinPq::with_capacity(10);
/// pq.insert(4, 0.4).unwrap();
/// pq.insert(2, 0.2).unwrap();
/// pq.decrease_key(4, 0.1).unwrap();
///
/// assert_eq!(pq.min_index(), Ok(4));
/// assert_eq!(pq.del_min(), Ok(4));
/// assert_eq!(pq.del_min(), Ok(2));
/// assert!(pq.is_empty());
/// ```
pub trait IndexedMinQueue<K: PartialOrd + Copy> {
    /// Creates an empty queue accepting indices in `[0, capacity)`
    ///
    /// # Time Complexity
    /// O(capacity)
    fn with_capacity(capacity: usize) -> Self
    where
        Self: Sized;

    /// Returns the number of valid indices
    fn capacity(&self) -> usize;

    /// Returns true if no index is in the queue
    fn is_empty(&self) -> bool;

    /// Returns the number of indices in the queue
    fn len(&self) -> usize;

    /// Returns true if `i` is in the queue. Out-of-range indices are simply absent.
    fn contains(&self, i: usize) -> bool;

    /// Associates `key` with index `i`
    ///
    /// # Errors
    /// - `InvalidArgument` if `i` is out of range
    /// - `AlreadyExists` if `i` is already in the queue
    /// - `UnorderedKey` if `key` is not comparable (NaN)
    fn insert(&mut self, i: usize, key: K) -> Result<(), PqError>;

    /// Returns the index associated with the minimum key
    ///
    /// Among equal minimum keys this is the lowest index, so the answer
    /// depends only on the queue's contents.
    ///
    /// # Errors
    /// `EmptyQueue` if the queue is empty
    fn min_index(&self) -> Result<usize, PqError>;

    /// Returns the minimum key
    ///
    /// # Errors
    /// `EmptyQueue` if the queue is empty
    fn min_key(&self) -> Result<K, PqError>;

    /// Removes the minimum key, returning its index
    ///
    /// # Errors
    /// `EmptyQueue` if the queue is empty
    fn del_min(&mut self) -> Result<usize, PqError>;

    /// Returns the key associated with index `i`
    ///
    /// # Errors
    /// `InvalidArgument` if `i` is out of range, `NotFound` if it is absent
    fn key_of(&self, i: usize) -> Result<K, PqError>;

    /// Changes the key of `i`, increasing or decreasing as needed
    ///
    /// A key equal to the current one takes the decrease path and leaves the
    /// queue unchanged.
    fn change_key(&mut self, i: usize, key: K) -> Result<(), PqError> {
        let current = self.key_of(i)?;
        if greater(key, current) {
            self.increase_key(i, key)
        } else {
            self.decrease_key(i, key)
        }
    }

    /// Decreases the key of `i`
    ///
    /// An equal key is accepted and changes nothing.
    ///
    /// # Errors
    /// `InvalidArgument`, `NotFound`, `UnorderedKey`, or `InvalidDecrease`
    /// if `key` is greater than the current key
    fn decrease_key(&mut self, i: usize, key: K) -> Result<(), PqError>;

    /// Increases the key of `i`
    ///
    /// # Errors
    /// `InvalidArgument`, `NotFound`, `UnorderedKey`, or `InvalidIncrease`
    /// if `key` is not strictly greater than the current key
    fn increase_key(&mut self, i: usize, key: K) -> Result<(), PqError>;

    /// Removes index `i` and its key
    ///
    /// # Errors
    /// `InvalidArgument` if `i` is out of range, `NotFound` if it is absent
    fn delete(&mut self, i: usize) -> Result<(), PqError>;

    /// Returns the indices currently in the queue, in ascending index order
    fn to_vec(&self) -> Vec<usize>;
}

/// The single ordering primitive: strict `a > b`.
#[inline]
pub(crate) fn greater<K: PartialOrd>(a: K, b: K) -> bool {
    a > b
}

/// Entry order: key first, then index. Indices are distinct, so among equal
/// keys the lowest index is the minimum.
#[inline]
pub(crate) fn precedes<K: PartialOrd + Copy>(a: (K, usize), b: (K, usize)) -> bool {
    greater(b.0, a.0) || (!greater(a.0, b.0) && a.1 < b.1)
}

#[inline]
pub(crate) fn check_index(i: usize, capacity: usize) -> Result<(), PqError> {
    if i >= capacity {
        return Err(PqError::InvalidArgument { index: i, capacity });
    }
    Ok(())
}

/// Rejects keys that cannot take part in a total order.
#[inline]
pub(crate) fn check_key<K: PartialOrd>(i: usize, key: &K) -> Result<(), PqError> {
    if key.partial_cmp(key).is_none() {
        return Err(PqError::UnorderedKey(i));
    }
    Ok(())
}
