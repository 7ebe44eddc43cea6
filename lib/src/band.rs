//! Splitting the grid into bands of rows.

use std::ops::Range;

/// A contiguous range of rows, computed by a single worker.
///
/// `start` is inclusive, `end` is exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Band {
    /// The first row of the band.
    pub start: usize,
    /// One past the last row of the band.
    pub end: usize,
}

impl Band {
    /// Number of rows in the band.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the band contains no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// The rows of the band, as a range.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Splits `rows` rows into at most `workers` bands.
///
/// The number of workers is clamped to `1..=rows`. Every band but the last
/// has `rows / workers` rows; the last one also takes the remainder.
/// The bands are in ascending order, and cover every row exactly once.
///
/// Returns no bands when `rows` is `0`.
pub fn partition(rows: usize, workers: usize) -> Vec<Band> {
    if rows == 0 {
        return Vec::new();
    }
    let workers = workers.clamp(1, rows);
    let rows_per_band = (rows / workers).max(1);
    let mut bands = Vec::with_capacity(workers);
    for i in 0..workers {
        let start = i * rows_per_band;
        if start >= rows {
            break;
        }
        let end = if i == workers - 1 {
            rows
        } else {
            start + rows_per_band
        };
        bands.push(Band { start, end });
    }
    bands
}
