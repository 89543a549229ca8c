//! Unified execution engine for list sorting.
//!
//! ## Purpose
//!
//! This module runs one configured sort against a list: it dispatches the
//! selected algorithm, optionally checks the post-conditions, and packages
//! the outcome for the caller.
//!
//! ## Design notes
//!
//! * **Single mode**: All sorting is synchronous and in-memory; there is one
//!   execution path.
//! * **Infallible sorting**: Sorting never fails on a valid list, so the
//!   executor returns a plain [`SortOutcome`] rather than a `Result`.
//! * **Opt-in verification**: The post-condition oracles (sortedness and the
//!   length/reachability invariant) re-traverse the chain and are therefore
//!   only run when requested.

// Internal dependencies
use crate::algorithms::SortAlgorithm;
use crate::engine::output::SortOutcome;
use crate::engine::validator::Validator;
use crate::primitives::list::IntList;

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration for one sort run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortConfig {
    /// Algorithm to apply.
    pub algorithm: SortAlgorithm,

    /// Run the post-condition oracles after sorting.
    pub verify: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Executes one configured sort against a list.
pub struct SortExecutor;

impl SortExecutor {
    /// Apply the configured algorithm to `list` in place.
    pub fn run_with_config(list: &mut IntList, config: SortConfig) -> SortOutcome {
        config.algorithm.apply(list);

        let verified = if config.verify {
            Some(Validator::verify_sorted(list) && Validator::chain_len_matches(list))
        } else {
            None
        };

        SortOutcome {
            algorithm: config.algorithm,
            len: list.len(),
            verified,
        }
    }
}
