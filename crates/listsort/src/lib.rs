//! # listsort — in-place sorting for a singly-linked integer list
//!
//! A singly-linked list of `i64` values with four in-place sorting algorithms
//! (bubble, insertion, selection, and a linked-list-adapted quicksort) that
//! operate directly on list nodes rather than on an array. The sorts move
//! values between nodes; they never relink the chain and never allocate.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use listsort::prelude::*;
//!
//! let mut list = IntList::from_values([42, 17, 99, 5])?;
//!
//! // Build the sorter
//! let sorter = Sorter::new()
//!     .algorithm(Quick)   // Linked-list quicksort
//!     .verify()           // Re-check the chain after sorting
//!     .build()?;
//!
//! // Sort the list in place
//! let outcome = sorter.sort(&mut list);
//!
//! assert!(outcome.is_verified());
//! assert_eq!(list.to_string(), "[5, 17, 42, 99]");
//! # Result::<(), ListSortError>::Ok(())
//! ```
//!
//! ### Building and Mutating Lists
//!
//! Lists are created empty and grown one node at a time. `append` walks to
//! the tail (O(n)); `prepend` is O(1). The cached length is maintained
//! transactionally by every structural mutation.
//!
//! ```rust
//! use listsort::prelude::*;
//!
//! let mut list = IntList::new();
//! list.append(42)?;
//! list.append(17)?;
//! list.append(99)?;
//! list.prepend(5)?;
//!
//! assert_eq!(list.len(), 4);
//! assert!(list.contains(17));
//!
//! assert!(list.remove(17));
//! assert_eq!(list.to_string(), "[5, 42, 99]");
//! # Result::<(), ListSortError>::Ok(())
//! ```
//!
//! ### Choosing an Algorithm
//!
//! All four algorithms sort ascending and share the same node-value swap
//! primitive. Bubble and insertion preserve the relative order of equal
//! values; quicksort does not.
//!
//! ```rust
//! use listsort::prelude::*;
//!
//! for algorithm in [Bubble, Insertion, Selection, Quick] {
//!     let mut list = IntList::from_values([99, 5, 42])?;
//!     algorithm.apply(&mut list);
//!     assert!(list.is_sorted());
//! }
//! # Result::<(), ListSortError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Structural mutations return `Result<_, ListSortError>`; the only failure
//! on the core path is allocation exhaustion, which leaves the list exactly
//! as it was. Sorting itself never fails on a valid list, so
//! [`prelude::Sorter`]-built sorters return a plain outcome value. The `?`
//! operator is idiomatic:
//!
//! ```rust
//! use listsort::prelude::*;
//!
//! let mut list = IntList::from_values([3, 1, 2])?;
//! let outcome = Sorter::new().build()?.sort(&mut list);
//! assert_eq!(outcome.len, 3);
//! # Result::<(), ListSortError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments; the core layers only require
//! `alloc`. Disable default features to remove the standard library
//! dependency (this also removes the file/random number adapters):
//!
//! ```toml
//! [dependencies]
//! listsort = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - the node/list data structure and shared errors.
mod primitives;

// Layer 2: Algorithms - the four in-place sorting algorithms.
mod algorithms;

// Layer 3: Engine - orchestration, validation, and outcome reporting.
mod engine;

// Layer 4: Adapters - number source/sink collaborators (std only).
#[cfg(feature = "std")]
mod adapters;

// High-level fluent API for list sorting.
mod api;

// Standard listsort prelude.
pub mod prelude {
    pub use crate::api::{
        IntList, Iter, ListSortError, ListSorter, NodeId, SortAlgorithm,
        SortAlgorithm::{Bubble, Insertion, Quick, Selection},
        SortOutcome, SorterBuilder as Sorter,
    };

    #[cfg(feature = "std")]
    pub use crate::api::{
        random_list, read_numbers, read_numbers_from_path, write_numbers, write_numbers_to_path,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    #[cfg(feature = "std")]
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
