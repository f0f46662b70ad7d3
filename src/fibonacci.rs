//! Indexed Fibonacci min-priority queue
//!
//! A Fibonacci heap is a data structure for priority queue operations with:
//! - O(1) insert, min_index, min_key, key_of and contains
//! - O(1) amortized decrease_key
//! - O(log n) amortized del_min, delete, increase_key and change_key
//!
//! The structure consists of a collection of heap-ordered trees whose roots
//! are linked in a circular doubly linked list. Insertion only adds a
//! singleton tree to that list; the trees are merged lazily by the
//! consolidation pass that follows a removal. Decreasing a key cuts the node
//! from its parent, and a parent that loses a second child is cut as well
//! (cascading cut), which keeps tree sizes exponential in their order.
//!
//! Nodes live in an arena and are addressed by generational handles. A slot
//! table maps each external index in `[0, capacity)` to the handle of its node,
//! which makes the index itself the caller's handle.

use crate::error::PqError;
use crate::iter::{DrainSorted, Entries, Indices};
use crate::order::{self, Order};
use crate::ring::{self, Linked, RingLink};
use crate::storage::{NodeArena, NodeKey};
use crate::traits::{check_index, check_key, greater, precedes, IndexedMinQueue};
use smallvec::{smallvec, SmallVec};
use std::fmt;
use tracing::{debug, trace};

#[derive(Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    order: Order,
    index: usize,
    parent: Option<NodeKey>,
    child: Option<NodeKey>,
    link: RingLink,
    mark: bool,
}

impl<K> Node<K> {
    fn new(key: K, index: usize) -> Self {
        Self {
            key,
            order: 0,
            index,
            parent: None,
            child: None,
            link: RingLink::unlinked(),
            mark: false,
        }
    }
}

impl<K> Linked for Node<K> {
    fn link(&self) -> &RingLink {
        &self.link
    }

    fn link_mut(&mut self) -> &mut RingLink {
        &mut self.link
    }
}

impl<K: fmt::Debug> fmt::Debug for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("order", &self.order)
            .field("index", &self.index)
            .finish()
    }
}

/// Indexed minimum priority queue backed by a Fibonacci heap
///
/// Keys may be any `PartialOrd + Copy` type whose values are totally ordered
/// (floats other than NaN, integers). The index range is fixed at
/// construction. Heap order is on `(key, index)`, so equal keys come out
/// lowest index first.
///
/// # Example
///
/// ```rust
/// use index_fib_heap::{IndexFibonacciMinPq, IndexedMinQueue};
///
/// let mut pq: IndexFibonacciMinPq<f32> = IndexFibonacciMinPq::new(10);
/// pq.insert(2, 1.0).unwrap();
/// pq.insert(1, 2.0).unwrap();
/// assert_eq!(pq.len(), 2);
/// assert_eq!(pq.min_index(), Ok(2));
///
/// pq.change_key(1, 0.5).unwrap();
/// assert_eq!(pq.min_key(), Ok(0.5));
/// assert_eq!(pq.to_vec(), vec![1, 2]);
/// ```
#[derive(Clone)]
pub struct IndexFibonacciMinPq<K = f64> {
    arena: NodeArena<Node<K>>,
    /// index -> node handle
    slots: Vec<Option<NodeKey>>,
    /// Any member of the root list
    head: Option<NodeKey>,
    /// Root holding the minimum key
    min: Option<NodeKey>,
    len: usize,
}

impl<K> Default for IndexFibonacciMinPq<K> {
    fn default() -> Self {
        Self {
            arena: NodeArena::default(),
            slots: Vec::new(),
            head: None,
            min: None,
            len: 0,
        }
    }
}

impl<K: PartialOrd + Copy> IndexFibonacciMinPq<K> {
    /// Creates an empty queue accepting indices in `[0, capacity)`
    pub fn new(capacity: usize) -> Self {
        debug!(capacity, "creating indexed fibonacci priority queue");
        Self {
            arena: NodeArena::with_capacity(capacity),
            slots: vec![None; capacity],
            head: None,
            min: None,
            len: 0,
        }
    }

    /// Creates an empty queue from a signed capacity
    ///
    /// # Errors
    /// `NegativeCapacity` if `capacity < 0`
    pub fn try_with_capacity(capacity: isize) -> Result<Self, PqError> {
        if capacity < 0 {
            return Err(PqError::NegativeCapacity(capacity));
        }
        Ok(Self::new(capacity.unsigned_abs()))
    }

    /// Iterates over the indices in the queue, in ascending index order
    pub fn indices(&self) -> Indices<'_> {
        Indices::new(&self.slots, self.len)
    }

    /// Iterates over `(index, key)` pairs, in ascending index order
    pub fn entries(&self) -> Entries<'_, K> {
        Entries::new(&self.slots, &self.arena, self.len)
    }

    /// Removes entries in ascending key order, yielding `(index, key)`
    ///
    /// Entries that are not consumed stay in the queue.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, K> {
        DrainSorted::new(self)
    }

    /// The `(key, index)` pair heap order is kept on.
    #[inline]
    fn entry(&self, x: NodeKey) -> (K, usize) {
        let node = &self.arena[x];
        (node.key, node.index)
    }

    fn node_key(&self, i: usize) -> Result<NodeKey, PqError> {
        check_index(i, self.slots.len())?;
        self.slots[i].ok_or(PqError::NotFound(i))
    }

    /// Adds a singleton tree to the root list. The index must be free.
    fn insert_node(&mut self, i: usize, key: K) {
        let x = self.arena.insert(Node::new(key, i));
        self.slots[i] = Some(x);
        self.len += 1;
        self.head = Some(ring::splice(&mut self.arena, x, self.head));
        match self.min {
            Some(m) if !precedes((key, i), self.entry(m)) => {}
            _ => self.min = Some(x),
        }
    }

    /// Removes node `x` wherever it sits in the forest, returning its index.
    fn remove_node(&mut self, x: NodeKey) -> usize {
        if self.arena[x].parent.is_some() {
            self.cut(x);
        }
        self.remove_root(x)
    }

    /// Removes root `x`, promotes its children and consolidates.
    fn remove_root(&mut self, x: NodeKey) -> usize {
        debug_assert!(self.arena[x].parent.is_none());
        self.head = match self.head {
            Some(head) => ring::unlink(&mut self.arena, x, head),
            None => None,
        };
        self.promote_children(x);
        self.len -= 1;
        if self.len == 0 {
            self.head = None;
            self.min = None;
        } else {
            self.consolidate();
        }

        let index = self.arena[x].index;
        self.arena.remove(x);
        self.slots[index] = None;
        index
    }

    /// Moves every child of `x` to the root list.
    fn promote_children(&mut self, x: NodeKey) {
        let Some(first) = self.arena[x].child.take() else {
            return;
        };
        self.arena[x].order = 0;

        let mut c = first;
        loop {
            let node = &mut self.arena[c];
            node.parent = None;
            node.mark = false;
            c = node.link.next;
            if c == first {
                break;
            }
        }
        self.head = ring::meld(&mut self.arena, self.head, Some(first));
    }

    /// Makes root `y` a child of root `x`.
    ///
    /// `y`'s root-list links are overwritten; only `consolidate` links, and it
    /// rebuilds the root list afterwards.
    fn link(&mut self, y: NodeKey, x: NodeKey) {
        let node = &mut self.arena[y];
        node.parent = Some(x);
        node.mark = false;

        let children = self.arena[x].child;
        let children = ring::splice(&mut self.arena, y, children);
        let parent = &mut self.arena[x];
        parent.child = Some(children);
        parent.order = order::checked_increment(parent.order);
    }

    /// Merges roots of equal order until all orders differ, then rebuilds the
    /// root list and `min` from the survivors.
    fn consolidate(&mut self) {
        let roots: Vec<NodeKey> = ring::iter(&self.arena, self.head).collect();
        let mut table: SmallVec<[Option<NodeKey>; 64]> =
            smallvec![None; order::table_bound(self.len)];

        for &root in &roots {
            let mut y = root;
            loop {
                let d = self.arena[y].order as usize;
                if d >= table.len() {
                    table.resize(d + 1, None);
                }
                let Some(z) = table[d].take() else {
                    table[d] = Some(y);
                    break;
                };
                if precedes(self.entry(z), self.entry(y)) {
                    self.link(y, z);
                    y = z;
                } else {
                    self.link(z, y);
                }
            }
        }

        self.head = None;
        self.min = None;
        let mut survivors = 0usize;
        for root in table.into_iter().flatten() {
            survivors += 1;
            self.head = Some(ring::splice(&mut self.arena, root, self.head));
            match self.min {
                Some(m) if !precedes(self.entry(root), self.entry(m)) => {}
                _ => self.min = Some(root),
            }
        }
        trace!(
            roots_before = roots.len(),
            roots_after = survivors,
            len = self.len,
            "consolidated root list"
        );
    }

    /// Cuts `x` from its parent and moves it to the root list. Walks up while
    /// each former parent was already marked and is not a root.
    fn cut(&mut self, mut x: NodeKey) {
        let mut cuts = 0usize;
        while let Some(parent) = self.arena[x].parent {
            let siblings = self.arena[parent].child.unwrap_or(x);
            let siblings = ring::unlink(&mut self.arena, x, siblings);

            let p = &mut self.arena[parent];
            p.child = siblings;
            p.order = order::saturating_decrement(p.order);
            p.mark = !p.mark;
            let cascade = !p.mark && p.parent.is_some();

            let node = &mut self.arena[x];
            node.parent = None;
            node.mark = false;
            self.head = Some(ring::splice(&mut self.arena, x, self.head));

            cuts += 1;
            if !cascade {
                break;
            }
            x = parent;
        }
        if cuts > 1 {
            trace!(cuts, "cascading cut");
        }
    }

    /// Verifies the structural invariants of the forest.
    ///
    /// Checks slot/node agreement, the size counter, every sibling ring,
    /// parent links, orders, heap order and that `min` is a minimal root.
    #[doc(hidden)]
    pub fn check_invariants(&self) -> Result<(), String> {
        let occupied = self.slots.iter().filter(|s| s.is_some()).count();
        if occupied != self.len || self.arena.len() != self.len {
            return Err(format!(
                "size {} but {} occupied slots and {} nodes",
                self.len,
                occupied,
                self.arena.len()
            ));
        }
        for (i, slot) in self.slots.iter().enumerate() {
            if let Some(x) = *slot {
                match self.arena.get(x) {
                    Some(node) if node.index == i => {}
                    Some(node) => {
                        return Err(format!("slot {i} holds the node of index {}", node.index))
                    }
                    None => return Err(format!("slot {i} holds a stale handle")),
                }
            }
        }

        let (head, min) = match (self.head, self.min) {
            (None, None) if self.len == 0 && self.arena.is_empty() => return Ok(()),
            (Some(head), Some(min)) if self.len > 0 => (head, min),
            _ => return Err(format!("head/min presence disagrees with size {}", self.len)),
        };

        let mut stack = Vec::new();
        self.check_ring(Some(head), None, &mut stack)?;
        if !stack.contains(&min) {
            return Err("min is not in the root list".to_string());
        }
        let min_entry = self.entry(min);
        if let Some(&root) = stack
            .iter()
            .find(|&&r| precedes(self.entry(r), min_entry))
        {
            return Err(format!("root of index {} precedes min", self.arena[root].index));
        }

        let mut seen = 0usize;
        while let Some(x) = stack.pop() {
            seen += 1;
            let node = &self.arena[x];
            let children = self.check_ring(node.child, Some(x), &mut stack)?;
            if children != node.order as usize {
                return Err(format!(
                    "index {} has order {} but {} children",
                    node.index, node.order, children
                ));
            }
        }
        if seen != self.len {
            return Err(format!("forest holds {seen} nodes but size is {}", self.len));
        }
        Ok(())
    }

    /// Checks one sibling ring and pushes its members onto `stack`.
    fn check_ring(
        &self,
        head: Option<NodeKey>,
        parent: Option<NodeKey>,
        stack: &mut Vec<NodeKey>,
    ) -> Result<usize, String> {
        let mut count = 0usize;
        let mut x = match head {
            Some(head) => head,
            None => return Ok(0),
        };
        loop {
            let node = self
                .arena
                .get(x)
                .ok_or_else(|| "ring holds a stale handle".to_string())?;
            let next = node.link.next;
            let linked_back = self
                .arena
                .get(next)
                .is_some_and(|n| n.link.prev == x);
            if !node.link.is_linked() || !linked_back {
                return Err(format!("broken sibling ring at index {}", node.index));
            }
            if node.parent != parent {
                return Err(format!("index {} has the wrong parent", node.index));
            }
            if let Some(p) = parent {
                if precedes((node.key, node.index), self.entry(p)) {
                    return Err(format!("index {} violates heap order", node.index));
                }
            }
            stack.push(x);
            count += 1;
            if count > self.len {
                return Err("sibling ring does not close".to_string());
            }
            x = next;
            if Some(x) == head {
                return Ok(count);
            }
        }
    }
}

impl<K: PartialOrd + Copy> IndexedMinQueue<K> for IndexFibonacciMinPq<K> {
    fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity)
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn len(&self) -> usize {
        self.len
    }

    fn contains(&self, i: usize) -> bool {
        matches!(self.slots.get(i), Some(Some(_)))
    }

    fn insert(&mut self, i: usize, key: K) -> Result<(), PqError> {
        check_index(i, self.slots.len())?;
        if self.slots[i].is_some() {
            return Err(PqError::AlreadyExists(i));
        }
        check_key(i, &key)?;
        self.insert_node(i, key);
        Ok(())
    }

    fn min_index(&self) -> Result<usize, PqError> {
        self.min
            .map(|m| self.arena[m].index)
            .ok_or(PqError::EmptyQueue)
    }

    fn min_key(&self) -> Result<K, PqError> {
        self.min
            .map(|m| self.arena[m].key)
            .ok_or(PqError::EmptyQueue)
    }

    fn del_min(&mut self) -> Result<usize, PqError> {
        let min = self.min.ok_or(PqError::EmptyQueue)?;
        Ok(self.remove_root(min))
    }

    fn key_of(&self, i: usize) -> Result<K, PqError> {
        let x = self.node_key(i)?;
        Ok(self.arena[x].key)
    }

    fn decrease_key(&mut self, i: usize, key: K) -> Result<(), PqError> {
        let x = self.node_key(i)?;
        check_key(i, &key)?;
        if greater(key, self.arena[x].key) {
            return Err(PqError::InvalidDecrease(i));
        }

        self.arena[x].key = key;
        if let Some(m) = self.min {
            if precedes((key, i), self.entry(m)) {
                self.min = Some(x);
            }
        }
        if let Some(parent) = self.arena[x].parent {
            if precedes((key, i), self.entry(parent)) {
                self.cut(x);
            }
        }
        Ok(())
    }

    fn increase_key(&mut self, i: usize, key: K) -> Result<(), PqError> {
        let x = self.node_key(i)?;
        check_key(i, &key)?;
        if !greater(key, self.arena[x].key) {
            return Err(PqError::InvalidIncrease(i));
        }

        trace!(index = i, "increasing key by reinsertion");
        self.remove_node(x);
        self.insert_node(i, key);
        Ok(())
    }

    fn delete(&mut self, i: usize) -> Result<(), PqError> {
        let x = self.node_key(i)?;
        self.remove_node(x);
        Ok(())
    }

    fn to_vec(&self) -> Vec<usize> {
        self.indices().collect()
    }
}

impl<'a, K: PartialOrd + Copy> IntoIterator for &'a IndexFibonacciMinPq<K> {
    type Item = usize;
    type IntoIter = Indices<'a>;

    fn into_iter(self) -> Indices<'a> {
        self.indices()
    }
}

impl<K: fmt::Debug> fmt::Debug for IndexFibonacciMinPq<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes: Vec<&Node<K>> = self.slots.iter().flatten().map(|&x| &self.arena[x]).collect();
        f.debug_struct("IndexFibonacciMinPq")
            .field("capacity", &self.slots.len())
            .field("len", &self.len)
            .field("min", &self.min.map(|m| &self.arena[m]))
            .field("nodes", &nodes)
            .finish()
    }
}
