//! Number sources feeding the list.
//!
//! ## Purpose
//!
//! This module builds lists from external sequences of integers: a reader
//! of whitespace-separated tokens, a file path, or a uniform random
//! generator. Any finite sequence is accepted, including the empty one.
//!
//! ## Design notes
//!
//! * **Repeated append**: Sources populate the list through the ordinary
//!   `append` operation, preserving input order.
//! * **Injected randomness**: Generation takes a caller-supplied [`Rng`]
//!   instead of seeding a global generator, so tests stay deterministic.
//! * **Strict parsing**: A token that does not parse as an integer is a
//!   [`ListSortError::InvalidNumber`] with line context, not a silent stop.

// External dependencies
use core::ops::RangeInclusive;
use rand::Rng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// Internal dependencies
use crate::primitives::errors::ListSortError;
use crate::primitives::list::IntList;

// ============================================================================
// Reader Sources
// ============================================================================

/// Read whitespace-separated integers from `reader` into a new list.
///
/// Values are appended in the order they appear. Empty input yields an
/// empty list.
pub fn read_numbers<R: BufRead>(reader: R) -> Result<IntList, ListSortError> {
    let mut list = IntList::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ListSortError::Io(e.to_string()))?;
        for token in line.split_whitespace() {
            let value = token
                .parse::<i64>()
                .map_err(|_| ListSortError::InvalidNumber {
                    line: index + 1,
                    token: token.to_string(),
                })?;
            list.append(value)?;
        }
    }
    Ok(list)
}

/// Read whitespace-separated integers from the file at `path`.
pub fn read_numbers_from_path<P: AsRef<Path>>(path: P) -> Result<IntList, ListSortError> {
    let file = File::open(path).map_err(|e| ListSortError::Io(e.to_string()))?;
    read_numbers(BufReader::new(file))
}

// ============================================================================
// Random Source
// ============================================================================

/// Build a list of `count` uniformly distributed values drawn from `range`.
pub fn random_list<R: Rng>(
    rng: &mut R,
    count: usize,
    range: RangeInclusive<i64>,
) -> Result<IntList, ListSortError> {
    let mut list = IntList::new();
    for _ in 0..count {
        list.append(rng.gen_range(range.clone()))?;
    }
    Ok(list)
}
