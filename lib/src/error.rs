//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Invalid symbol {symbol:?} at row {row}, column {col}.
    InvalidSymbol {
        row: usize,
        col: usize,
        symbol: char,
    },
    /// Row {row} has {found} cells, expected {expected}.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The number of workers should be positive.
    NonPositiveWorkers,
    /// Unable to build the thread pool: {0}.
    ThreadPool(String),
    /// Cell at row {row}, column {col} is out of bounds.
    CellOutOfBounds { row: usize, col: usize },
    /// Worker for rows {start}..{end} panicked: {message}.
    WorkerPanicked {
        start: usize,
        end: usize,
        message: String,
    },
    /// Worker for rows {start}..{end} failed in generation {generation}: {source}
    WorkerFailed {
        generation: usize,
        start: usize,
        end: usize,
        source: Box<Error>,
    },
    /// No result for rows {start}..{end} in generation {generation}.
    MissingBand {
        generation: usize,
        start: usize,
        end: usize,
    },
    /// Worker for rows {start}..{end} returned {found} rows in generation {generation}.
    BandSizeMismatch {
        generation: usize,
        start: usize,
        end: usize,
        found: usize,
    },
    /// Worker for rows {start}..{end} returned {found} cells for row {row} in generation {generation}, expected {expected}.
    BandWidthMismatch {
        generation: usize,
        start: usize,
        end: usize,
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Expected {expected} rows but got {found} in generation {generation}.
    RowCountMismatch {
        generation: usize,
        expected: usize,
        found: usize,
    },
    /// Invalid save: {0}.
    SaveMismatch(String),
}
