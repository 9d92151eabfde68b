//! Dataset file reading, writing and random generation.
//!
//! The on-disk format is UTF-8 text with one decimal integer per line,
//! surrounding whitespace stripped before parsing. Any line that fails to
//! parse aborts the read with no partial result.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::errors::{ErrorInfo, SortError};
use crate::rng::RngHandle;
use crate::Sequence;

/// Inclusive bounds for generated dataset values.
pub const GENERATED_RANGE: (i64, i64) = (1, 1000);

/// Reads a dataset file into a sequence.
///
/// Returns [`SortError::Io`] when the file is missing or unreadable and
/// [`SortError::Dataset`] (with the 1-based line number in context) when a
/// line is not a valid integer.
pub fn read_dataset(path: &Path) -> Result<Sequence, SortError> {
    let contents = fs::read_to_string(path).map_err(|err| {
        SortError::Io(
            ErrorInfo::new("dataset-unreadable", "failed to read dataset file")
                .with_context("path", path.display().to_string())
                .with_context("cause", err.to_string()),
        )
    })?;

    let mut data = Sequence::with_capacity(contents.lines().count());
    for (index, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        let value: i64 = trimmed.parse().map_err(|_| {
            SortError::Dataset(
                ErrorInfo::new("invalid-integer", "dataset line is not a valid integer")
                    .with_context("path", path.display().to_string())
                    .with_context("line", (index + 1).to_string())
                    .with_context("text", trimmed.to_string())
                    .with_hint("expected one decimal integer per line"),
            )
        })?;
        data.push(value);
    }
    Ok(data)
}

/// Writes a sequence to a dataset file, one integer per line.
pub fn write_dataset(path: &Path, data: &[i64]) -> Result<(), SortError> {
    let io_error = |err: std::io::Error| {
        SortError::Io(
            ErrorInfo::new("dataset-unwritable", "failed to write dataset file")
                .with_context("path", path.display().to_string())
                .with_context("cause", err.to_string()),
        )
    };

    let mut file = fs::File::create(path).map_err(io_error)?;
    for value in data {
        writeln!(file, "{value}").map_err(io_error)?;
    }
    Ok(())
}

/// Generates `len` uniformly random integers in [`GENERATED_RANGE`].
pub fn generate_dataset(len: usize, rng: &mut RngHandle) -> Sequence {
    let (low, high) = GENERATED_RANGE;
    (0..len).map(|_| rng.value_in(low, high)).collect()
}
