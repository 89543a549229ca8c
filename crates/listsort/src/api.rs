//! High-level API for list sorting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for sorting. It
//! implements a fluent builder for selecting the algorithm and the optional
//! post-condition verification, producing a reusable [`ListSorter`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters.
//! * **Validated**: Builder hygiene is checked when `build()` is called.
//! * **Infallible sorting**: A built sorter returns a plain
//!   [`SortOutcome`]; sorting never fails on a valid list.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SorterBuilder`] via `Sorter::new()` (prelude alias).
//! 2. Chain configuration methods (`.algorithm()`, `.verify()`).
//! 3. Call `.build()` to obtain a [`ListSorter`], then `.sort(&mut list)`.

// Internal dependencies
use crate::engine::executor::{SortConfig, SortExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::SortAlgorithm;
pub use crate::engine::output::SortOutcome;
pub use crate::primitives::errors::ListSortError;
pub use crate::primitives::list::{IntList, Iter};
pub use crate::primitives::node::NodeId;

#[cfg(feature = "std")]
pub use crate::adapters::sink::{write_numbers, write_numbers_to_path};
#[cfg(feature = "std")]
pub use crate::adapters::source::{random_list, read_numbers, read_numbers_from_path};

// ============================================================================
// Sorter Builder
// ============================================================================

/// Fluent builder for configuring a list sorter.
#[derive(Debug, Clone)]
pub struct SorterBuilder {
    /// Sorting algorithm (default: quicksort).
    pub algorithm: Option<SortAlgorithm>,

    /// Run the post-condition oracles after sorting.
    pub verify: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for SorterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SorterBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            algorithm: None,
            verify: None,
            duplicate_param: None,
        }
    }

    /// Select the sorting algorithm.
    pub fn algorithm(mut self, algorithm: SortAlgorithm) -> Self {
        if self.algorithm.is_some() {
            self.duplicate_param = Some("algorithm");
        }
        self.algorithm = Some(algorithm);
        self
    }

    /// Re-check sortedness and the length invariant after every sort.
    pub fn verify(mut self) -> Self {
        self.verify = Some(true);
        self
    }

    /// Build the sorter.
    pub fn build(self) -> Result<ListSorter, ListSortError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(ListSorter {
            config: SortConfig {
                algorithm: self.algorithm.unwrap_or_default(),
                verify: self.verify.unwrap_or(false),
            },
        })
    }
}

// ============================================================================
// List Sorter
// ============================================================================

/// A configured, reusable sorter.
#[derive(Debug, Clone, Copy)]
pub struct ListSorter {
    config: SortConfig,
}

impl ListSorter {
    /// Sort `list` in place and report the outcome.
    pub fn sort(&self, list: &mut IntList) -> SortOutcome {
        SortExecutor::run_with_config(list, self.config)
    }

    /// The algorithm this sorter applies.
    pub fn algorithm(&self) -> SortAlgorithm {
        self.config.algorithm
    }
}
