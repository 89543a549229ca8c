//! Number sinks draining the list.
//!
//! Records a list's values through an ordinary head-to-tail traversal, one
//! value per line. Sinks never mutate the list.

// External dependencies
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// Internal dependencies
use crate::primitives::errors::ListSortError;
use crate::primitives::list::IntList;

/// Write every value of `list` to `writer`, one per line.
pub fn write_numbers<W: Write>(mut writer: W, list: &IntList) -> Result<(), ListSortError> {
    for value in list.iter() {
        writeln!(writer, "{value}").map_err(|e| ListSortError::Io(e.to_string()))?;
    }
    writer.flush().map_err(|e| ListSortError::Io(e.to_string()))
}

/// Write every value of `list` to the file at `path`, one per line.
pub fn write_numbers_to_path<P: AsRef<Path>>(path: P, list: &IntList) -> Result<(), ListSortError> {
    let file = File::create(path).map_err(|e| ListSortError::Io(e.to_string()))?;
    write_numbers(BufWriter::new(file), list)
}
