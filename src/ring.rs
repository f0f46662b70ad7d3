//! Circular doubly-linked lists over arena handles.
//!
//! Siblings of a Fibonacci heap node, and the roots of the forest, form
//! circular lists. A ring is identified by any one of its members, its
//! *head*; an empty ring is `None`.
//!
//! In a circular list:
//! - A single node points to itself (both `next` and `prev`)
//! - Splicing two rings together is O(1)
//! - Iteration wraps around, so it stops on returning to the head
//!
//! Membership is decided by handle identity, never by comparing node contents.

use crate::storage::{NodeArena, NodeKey};
use slotmap::Key;

/// Sibling links embedded in every node.
///
/// When unlinked, both handles are null. When linked (even as a single
/// node), both refer to live nodes of the same ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingLink {
    pub prev: NodeKey,
    pub next: NodeKey,
}

impl RingLink {
    /// Creates an unlinked `RingLink`.
    #[inline]
    pub fn unlinked() -> Self {
        Self {
            prev: NodeKey::null(),
            next: NodeKey::null(),
        }
    }

    #[inline]
    pub fn is_linked(&self) -> bool {
        !self.next.is_null()
    }
}

/// Types that carry a [`RingLink`].
pub trait Linked {
    fn link(&self) -> &RingLink;
    fn link_mut(&mut self) -> &mut RingLink;
}

#[inline]
fn next<N: Linked>(arena: &NodeArena<N>, x: NodeKey) -> NodeKey {
    arena[x].link().next
}

#[inline]
fn prev<N: Linked>(arena: &NodeArena<N>, x: NodeKey) -> NodeKey {
    arena[x].link().prev
}

/// Inserts `x` into the ring entered at `head`, just before `head`.
///
/// `x` must not belong to any ring, or its old links must be abandoned.
/// Returns `x`, which becomes the new head.
pub fn splice<N: Linked>(arena: &mut NodeArena<N>, x: NodeKey, head: Option<NodeKey>) -> NodeKey {
    match head {
        None => {
            *arena[x].link_mut() = RingLink { prev: x, next: x };
        }
        Some(head) => {
            let tail = prev(arena, head);
            arena[tail].link_mut().next = x;
            *arena[x].link_mut() = RingLink {
                prev: tail,
                next: head,
            };
            arena[head].link_mut().prev = x;
        }
    }
    x
}

/// Removes `x` from the ring entered at `head` and clears its links.
///
/// Returns the head of the remaining ring: unchanged unless `x` was the head,
/// in which case its successor takes over, and `None` when `x` was alone.
pub fn unlink<N: Linked>(arena: &mut NodeArena<N>, x: NodeKey, head: NodeKey) -> Option<NodeKey> {
    let RingLink { prev: p, next: n } = *arena[x].link();
    *arena[x].link_mut() = RingLink::unlinked();
    if n == x {
        return None;
    }
    arena[p].link_mut().next = n;
    arena[n].link_mut().prev = p;
    if head == x {
        Some(n)
    } else {
        Some(head)
    }
}

/// Joins two rings into one, returning the head of the result.
pub fn meld<N: Linked>(
    arena: &mut NodeArena<N>,
    a: Option<NodeKey>,
    b: Option<NodeKey>,
) -> Option<NodeKey> {
    let (a, b) = match (a, b) {
        (None, b) => return b,
        (a, None) => return a,
        (Some(a), Some(b)) => (a, b),
    };
    // a .. a_tail, b .. b_tail  =>  a .. a_tail b .. b_tail
    let a_tail = prev(arena, a);
    let b_tail = prev(arena, b);
    arena[a_tail].link_mut().next = b;
    arena[b].link_mut().prev = a_tail;
    arena[b_tail].link_mut().next = a;
    arena[a].link_mut().prev = b_tail;
    Some(a)
}

/// Iterator over the members of a ring, starting at its head.
pub struct RingIter<'a, N> {
    arena: &'a NodeArena<N>,
    head: NodeKey,
    cursor: Option<NodeKey>,
}

impl<'a, N: Linked> Iterator for RingIter<'a, N> {
    type Item = NodeKey;

    fn next(&mut self) -> Option<NodeKey> {
        let current = self.cursor?;
        let following = next(self.arena, current);
        self.cursor = (following != self.head).then_some(following);
        Some(current)
    }
}

/// Walks the ring entered at `head`.
pub fn iter<N: Linked>(arena: &NodeArena<N>, head: Option<NodeKey>) -> RingIter<'_, N> {
    RingIter {
        arena,
        head: head.unwrap_or_default(),
        cursor: head,
    }
}
