//! Insertion sort via value shifting.
//!
//! The prefix ending just before the current node is kept sorted. Each
//! subsequent node's value is copied out, the prefix is walked for the first
//! strictly greater position, and values ripple one node rightward through
//! the current node before the picked-up value is dropped at the insertion
//! point. Values move between nodes; the chain is never relinked, so node
//! identity is not preserved across this sort.

// Internal dependencies
use crate::primitives::list::IntList;

/// Sort `list` ascending by shifting values within the existing chain.
pub fn insertion_sort(list: &mut IntList) {
    let head = match list.head() {
        Some(head) => head,
        None => return,
    };

    let mut current = list.next(head);
    while let Some(cur) = current {
        let key = list.val(cur);

        // First node of the sorted prefix whose value exceeds the key.
        let mut pos = head;
        while pos != cur && list.val(pos) <= key {
            pos = match list.next(pos) {
                Some(next) => next,
                None => break,
            };
        }

        // Ripple values rightward from the insertion point through the
        // current node, dropping the key at `pos`. When `pos == cur` the
        // ripple is a single self-assignment.
        let mut carry = key;
        let mut node = pos;
        loop {
            let displaced = list.val(node);
            list.set_val(node, carry);
            carry = displaced;
            if node == cur {
                break;
            }
            node = match list.next(node) {
                Some(next) => next,
                None => break,
            };
        }

        current = list.next(cur);
    }
}
