//! Validation for sorter configuration and list structure.
//!
//! ## Purpose
//!
//! This module provides the builder-hygiene check used at `build()` time and
//! the structural oracles the executor runs when verification is requested.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Configuration validation stops at the first error.
//! * **Oracles, not operations**: The structural checks re-traverse the
//!   chain; they exist for verification and tests only. Normal operation
//!   relies on the cached length.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort or mutate lists.
//! * This module does not repair violated invariants.

// Internal dependencies
use crate::primitives::errors::ListSortError;
use crate::primitives::list::IntList;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sorter configuration and list structure.
///
/// Provides static methods returning `Result<(), ListSortError>` for
/// configuration checks and plain booleans for the structural oracles.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Configuration Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ListSortError> {
        if let Some(parameter) = duplicate_param {
            return Err(ListSortError::DuplicateParameter { parameter });
        }
        Ok(())
    }

    // ========================================================================
    // Structural Oracles
    // ========================================================================

    /// Whether the chain is in ascending order.
    pub fn verify_sorted(list: &IntList) -> bool {
        list.is_sorted()
    }

    /// Whether the cached length matches the number of reachable nodes.
    pub fn chain_len_matches(list: &IntList) -> bool {
        list.iter().count() == list.len()
    }
}
