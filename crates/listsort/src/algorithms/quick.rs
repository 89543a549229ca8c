//! Linked-list-adapted quicksort.
//!
//! ## Purpose
//!
//! Quicksort over node ranges `[low, high]`, both ends inclusive, with
//! recursion on node identity rather than index bounds. There is no
//! random-access partition step; every walk follows successor links.
//!
//! ## Key concepts
//!
//! * **Partition**: The high node's value is the pivot. A boundary node `i`
//!   starts at `low` while `j` walks from `low` to the node just before
//!   `high`; whenever `j`'s value is at most the pivot, `i` and `j` swap
//!   values and `i` advances. A final swap of `i` and `high` settles the
//!   pivot at `i`, the partition point.
//! * **Recursion bounds**: The partition also reports the node just before
//!   the partition point, so the left recursion covers exactly the elements
//!   ahead of the settled pivot and the right recursion starts at its
//!   successor. Adjacent pairs are ordered by the partition itself.
//!
//! ## Invariants
//!
//! * After partitioning, everything left of the partition point is at most
//!   the pivot and everything right of it was greater before the walk began.
//! * Recursion depth is bounded by chain length (degenerate pivots yield the
//!   classic O(n^2) behavior).

// Internal dependencies
use crate::primitives::list::IntList;
use crate::primitives::node::NodeId;

/// Sort `list` ascending with quicksort over node ranges.
pub fn quick_sort(list: &mut IntList) {
    let head = match list.head() {
        Some(head) => head,
        None => return,
    };

    // Find the last node.
    let mut last = head;
    while let Some(next) = list.next(last) {
        last = next;
    }
    if head == last {
        return;
    }

    sort_range(list, head, last);
}

/// Sort the inclusive node range `[low, high]`.
fn sort_range(list: &mut IntList, low: NodeId, high: NodeId) {
    if low == high {
        return;
    }

    let (before_pivot, pivot) = partition(list, low, high);

    if let Some(left_high) = before_pivot {
        sort_range(list, low, left_high);
    }
    if pivot != high {
        if let Some(right_low) = list.next(pivot) {
            sort_range(list, right_low, high);
        }
    }
}

/// Partition `[low, high]` around the high node's value.
///
/// Returns the partition point together with the node just before it
/// (`None` when the partition point is `low` itself).
fn partition(list: &mut IntList, low: NodeId, high: NodeId) -> (Option<NodeId>, NodeId) {
    let pivot = list.val(high);

    let mut boundary = low;
    let mut before_boundary: Option<NodeId> = None;

    let mut walker = low;
    while walker != high {
        if list.val(walker) <= pivot {
            list.swap_values(boundary, walker);
            if let Some(next) = list.next(boundary) {
                before_boundary = Some(boundary);
                boundary = next;
            }
        }
        walker = match list.next(walker) {
            Some(next) => next,
            None => break,
        };
    }

    list.swap_values(boundary, high);
    (before_boundary, boundary)
}
