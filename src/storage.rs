//! Arena storage for heap nodes
//!
//! Nodes live in a [`SlotMap`] and refer to each other through [`NodeKey`]
//! handles instead of pointers. Parent, child and sibling links therefore form
//! cycles of plain `Copy` values, and removing a node is a single slot
//! invalidation. Keys are generational, so a handle to a removed node never
//! aliases a node inserted later into the same slot.

use slotmap::{new_key_type, SlotMap};
use std::ops::{Index, IndexMut};

new_key_type! {
    /// Handle to a node stored in a [`NodeArena`]
    pub struct NodeKey;
}

/// Slot-map backed arena owning every node of one heap
#[derive(Debug, Clone)]
pub struct NodeArena<N> {
    nodes: SlotMap<NodeKey, N>,
}

impl<N> Default for NodeArena<N> {
    fn default() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }
}

impl<N> NodeArena<N> {
    /// Creates an arena with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Stores a node, returning its handle
    #[inline]
    pub fn insert(&mut self, node: N) -> NodeKey {
        self.nodes.insert(node)
    }

    /// Removes a node, returning it if the handle was live
    #[inline]
    pub fn remove(&mut self, key: NodeKey) -> Option<N> {
        self.nodes.remove(key)
    }

    #[inline]
    pub fn get(&self, key: NodeKey) -> Option<&N> {
        self.nodes.get(key)
    }

    /// Number of live nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Panics on a stale handle. Heap code only indexes with handles reachable
/// from the slot table or the root list, which are live by construction.
impl<N> Index<NodeKey> for NodeArena<N> {
    type Output = N;

    #[inline]
    fn index(&self, key: NodeKey) -> &N {
        &self.nodes[key]
    }
}

impl<N> IndexMut<NodeKey> for NodeArena<N> {
    #[inline]
    fn index_mut(&mut self, key: NodeKey) -> &mut N {
        &mut self.nodes[key]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_basic() {
        let mut arena: NodeArena<i32> = NodeArena::with_capacity(4);
        assert!(arena.is_empty());

        let key = arena.insert(42);
        assert_eq!(arena.get(key), Some(&42));
        assert_eq!(arena[key], 42);

        arena[key] = 100;
        assert_eq!(arena.get(key), Some(&100));
        assert_eq!(arena.len(), 1);

        assert_eq!(arena.remove(key), Some(100));
        assert_eq!(arena.get(key), None);
        assert!(arena.is_empty());
    }

    #[test]
    fn test_stale_key_does_not_alias() {
        let mut arena: NodeArena<&str> = NodeArena::default();

        let old = arena.insert("old");
        arena.remove(old);
        let new = arena.insert("new");

        // The slot is reused but the generation differs
        assert_ne!(old, new);
        assert_eq!(arena.get(old), None);
        assert_eq!(arena.get(new), Some(&"new"));
        assert_eq!(arena.remove(old), None);
    }
}
