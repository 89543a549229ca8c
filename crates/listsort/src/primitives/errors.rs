//! Error types for list and sorter operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building or
//! mutating a list, configuring a sorter, or exchanging numbers with an
//! external source or sink.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending
//!   token and its line number).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic
//!   messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Allocation failure**: Node storage could not be reserved; the list is
//!    left exactly as it was before the call.
//! 2. **Builder hygiene**: A sorter parameter was configured more than once.
//! 3. **Source data**: A number source produced a token that is not an
//!    integer, or the underlying I/O failed.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * A reported allocation failure implies no partial mutation took place.
//!
//! ## Non-goals
//!
//! * This module does not perform validation or recovery itself.
//! * Value-not-found on `remove`/`contains` is a normal negative result, not
//!   an error, and has no variant here.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for list construction, sorter configuration, and number I/O.
#[derive(Debug, Clone, PartialEq)]
pub enum ListSortError {
    /// Storage for new nodes could not be reserved.
    AllocationFailed {
        /// Number of nodes the failed reservation asked for.
        nodes: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// A number source produced a token that does not parse as an integer.
    InvalidNumber {
        /// One-based line number the token was read from.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// An underlying I/O operation failed while reading or writing numbers.
    #[cfg(feature = "std")]
    Io(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ListSortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::AllocationFailed { nodes } => {
                write!(f, "Failed to reserve storage for {nodes} node(s)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::InvalidNumber { line, token } => {
                write!(f, "Invalid number on line {line}: '{token}'")
            }
            #[cfg(feature = "std")]
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ListSortError {}
