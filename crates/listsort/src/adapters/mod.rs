//! Layer 4: Adapters
//!
//! # Purpose
//!
//! This layer connects the in-memory list to its external collaborators:
//!
//! - **Source**: reads whitespace-separated integers from any reader or
//!   path, or generates them with an injected random number generator.
//! - **Sink**: records a list's values, one per line, on any writer or path
//!   without mutating the list.
//!
//! Only available with the `std` feature.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Number sources: readers and random generation.
pub mod source;

/// Number sinks: writers.
pub mod sink;
