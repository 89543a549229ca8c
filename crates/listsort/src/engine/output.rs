//! Output types for sort operations.
//!
//! ## Purpose
//!
//! This module defines the [`SortOutcome`] struct reported by the executor:
//! which algorithm ran, over how many elements, and whether the
//! post-condition oracles passed when they were requested.
//!
//! ## Design notes
//!
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//! * **Optional verification**: `verified` is `None` when the oracles were
//!   not requested, distinguishing "not checked" from "checked and failed".
//!
//! ## Non-goals
//!
//! * This module does not perform sorting or verification; it only reports.

// External dependencies
use core::fmt::{Display, Formatter};

// Internal dependencies
use crate::algorithms::SortAlgorithm;

// ============================================================================
// Outcome Structure
// ============================================================================

/// Summary of one sort run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOutcome {
    /// Algorithm that was applied.
    pub algorithm: SortAlgorithm,

    /// Number of elements in the sorted list.
    pub len: usize,

    /// Post-condition oracle result; `None` when verification was not
    /// requested.
    pub verified: Option<bool>,
}

impl SortOutcome {
    /// Whether verification ran and passed.
    pub fn is_verified(&self) -> bool {
        self.verified == Some(true)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Algorithm: {}", self.algorithm.name())?;
        writeln!(f, "  Elements:  {}", self.len)?;
        if let Some(verified) = self.verified {
            writeln!(f, "  Verified:  {}", if verified { "yes" } else { "NO" })?;
        }
        Ok(())
    }
}
