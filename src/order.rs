//! Order (rank) type for Fibonacci heap nodes.
//!
//! The order of a node is its number of direct children. In a Fibonacci heap
//! a node of order `d` roots a subtree of at least `F(d + 2)` nodes, so the
//! order is bounded by `log_φ(n)`. Even a heap spanning all of addressable
//! memory stays below order 100, which makes `u8` ample and keeps the node
//! small.

/// Number of direct children of a node.
pub type Order = u8;

/// Increment an order, panicking on overflow.
///
/// # Panics
///
/// Panics if `order == Order::MAX`, which would require more nodes than fit
/// in memory and therefore indicates a corrupted heap.
#[inline]
pub fn checked_increment(order: Order) -> Order {
    order.checked_add(1).expect(
        "order overflow: a node of order 255 needs more than F(257) descendants",
    )
}

/// Decrement an order, stopping at zero.
#[inline]
pub fn saturating_decrement(order: Order) -> Order {
    order.saturating_sub(1)
}

/// Number of order-table slots needed to consolidate `len` nodes.
///
/// Returns `floor(log_φ(len)) + 2`, the Fibonacci heap degree bound with one
/// slot of headroom.
pub fn table_bound(len: usize) -> usize {
    if len < 2 {
        return 2;
    }
    const PHI: f64 = 1.618_033_988_749_895;
    ((len as f64).ln() / PHI.ln()) as usize + 2
}
