//! Bubble sort over the node chain.
//!
//! Repeated passes from the head compare adjacent pairs and swap values when
//! the left exceeds the right. A pass that performs zero swaps terminates the
//! algorithm, and the node where each pass stops becomes the boundary for the
//! next one: every completed pass fixes at least one more trailing element,
//! so the active range properly shrinks.

// Internal dependencies
use crate::primitives::list::IntList;
use crate::primitives::node::NodeId;

/// Sort `list` ascending with adjacent-swap passes.
pub fn bubble_sort(list: &mut IntList) {
    let head = match list.head() {
        Some(head) => head,
        None => return,
    };

    // First node already in final position; None while no pass has finished.
    let mut last: Option<NodeId> = None;

    loop {
        let mut swapped = false;
        let mut current = head;

        while list.next(current) != last {
            let next = match list.next(current) {
                Some(next) => next,
                None => break,
            };
            if list.val(current) > list.val(next) {
                list.swap_values(current, next);
                swapped = true;
            }
            current = next;
        }

        last = Some(current);
        if !swapped {
            break;
        }
    }
}
