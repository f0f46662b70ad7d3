//! Indexed Fibonacci Min-Priority Queue
//!
//! This crate provides an indexed minimum priority queue backed by a Fibonacci
//! heap. Keys are associated with caller-chosen indices in `[0, capacity)`, and
//! the index is all a caller needs to read, change or delete a key later. This
//! is the shape of queue that shortest-path search and event-driven simulation
//! spend most of their time in.
//!
//! # Complexity
//!
//! | Operation | IndexFibonacciMinPq | IndexBinaryMinPq |
//! |-----------|---------------------|------------------|
//! | `insert` | O(1) | O(log n) |
//! | `min_index`, `min_key`, `key_of`, `contains` | O(1) | O(1) |
//! | `decrease_key` | O(1) amortized | O(log n) |
//! | `del_min`, `delete` | O(log n) amortized | O(log n) |
//! | `increase_key`, `change_key` | O(log n) amortized | O(log n) |
//! | construction, `to_vec` | O(capacity) | O(capacity) |
//!
//! # Example
//!
//! ```rust
//! use index_fib_heap::{IndexFibonacciMinPq, IndexedMinQueue, PqError};
//!
//! let mut pq = IndexFibonacciMinPq::new(10);
//! pq.insert(1, 0.1).unwrap();
//! pq.insert(4, 0.4).unwrap();
//! pq.insert(9, 0.9).unwrap();
//!
//! pq.decrease_key(9, 0.01).unwrap();
//! assert_eq!(pq.del_min(), Ok(9));
//! assert_eq!(pq.insert(4, 0.2), Err(PqError::AlreadyExists(4)));
//! assert_eq!(pq.to_vec(), vec![1, 4]);
//! ```
//!
//! # Logging
//!
//! Structural work is reported through [`tracing`] at `trace` level
//! (consolidation, cascading cuts) and construction at `debug` level. The
//! crate never installs a subscriber.

pub mod error;
pub mod fibonacci;
pub mod iter;
mod order;
mod ring;
pub mod simple_binary;
mod storage;
pub mod traits;

pub use error::PqError;
pub use fibonacci::IndexFibonacciMinPq;
pub use traits::IndexedMinQueue;
