//! Node storage and handles for the singly-linked list.
//!
//! ## Purpose
//!
//! This module defines the chain element ([`Node`]) and the opaque handle
//! ([`NodeId`]) through which callers and the sorting algorithms refer to a
//! node without owning it.
//!
//! ## Design notes
//!
//! * **Arena slots**: A `Node` is a slot in its list's arena; `NodeId` is the
//!   slot index. The list exclusively owns every slot.
//! * **Stable identity**: Sorting moves values between nodes, never nodes
//!   themselves, so a `NodeId` keeps pointing at the same chain position
//!   across any sort.
//! * **Invalidation**: `remove` recycles the matched slot; handles obtained
//!   before a removal must not be reused afterwards. Stale handles are
//!   memory-safe (accessors are bounds-checked), never undefined behavior.

// ============================================================================
// Node Handle
// ============================================================================

/// Opaque handle to a node in its owning list.
///
/// Obtained from [`IntList::head`](crate::primitives::list::IntList::head),
/// [`IntList::next`](crate::primitives::list::IntList::next), or
/// [`IntList::node_at`](crate::primitives::list::IntList::node_at), and only
/// meaningful for the list that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(pub(crate) usize);

// ============================================================================
// Node Slot
// ============================================================================

/// A single chain element: one value and the successor link.
#[derive(Debug, Clone)]
pub struct Node {
    /// The stored integer value.
    pub(crate) value: i64,

    /// Successor in the chain; `None` marks end-of-chain.
    pub(crate) next: Option<NodeId>,
}
