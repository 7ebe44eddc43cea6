//! Computing one generation in parallel.
//!
//! The grid is split into [bands](crate::band) of rows. Each band is
//! computed by its own task on a thread pool, reading the current grid
//! and writing into an output slot that no other task can touch. Once
//! every task has finished, the slots are concatenated in ascending row
//! order, so the result does not depend on which task finished first.

use crate::{
    band::{partition, Band},
    cells::State,
    error::Error,
    grid::Grid,
    rules::next_state,
};
use log::trace;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::{
    any::Any,
    fmt::{self, Debug, Formatter},
    panic::{self, AssertUnwindSafe},
};

/// The rows computed by one worker, or the reason it failed.
type BandResult = Result<Vec<Vec<State>>, Error>;

/// Runs the steps of the simulation on a fixed number of workers.
pub struct Stepper {
    /// Number of workers.
    workers: usize,

    /// The thread pool the workers run on.
    pool: ThreadPool,
}

impl Stepper {
    /// Creates a stepper with `workers` worker threads.
    ///
    /// Returns an error if `workers` is `0`.
    pub fn new(workers: usize) -> Result<Self, Error> {
        if workers == 0 {
            return Err(Error::NonPositiveWorkers);
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("cellsim-worker-{}", i))
            .build()
            .map_err(|e| Error::ThreadPool(e.to_string()))?;
        Ok(Stepper { workers, pool })
    }

    /// Number of workers.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Computes the generation after `grid`.
    ///
    /// `generation` is the number of the generation being computed,
    /// and is only used in error messages.
    ///
    /// Blocks until every band is computed. If any worker fails,
    /// the whole step fails and no grid is returned.
    pub fn step(&self, grid: &Grid, generation: usize) -> Result<Grid, Error> {
        let bands = partition(grid.rows(), self.workers);
        if bands.is_empty() {
            return Ok(Grid::new(0, grid.cols()));
        }

        let mut slots: Vec<Option<BandResult>> = bands.iter().map(|_| None).collect();
        self.pool.scope(|s| {
            for (&band, slot) in bands.iter().zip(slots.iter_mut()) {
                s.spawn(move |_| *slot = Some(run_worker(band, || compute_band(band, grid))));
            }
        });

        recombine(grid, &bands, slots, generation)
    }
}

impl Debug for Stepper {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stepper")
            .field("workers", &self.workers)
            .finish()
    }
}

/// Runs the computation of a band, turning a panic into an error.
fn run_worker<F>(band: Band, compute: F) -> BandResult
where
    F: FnOnce() -> BandResult,
{
    panic::catch_unwind(AssertUnwindSafe(compute)).unwrap_or_else(|payload| {
        Err(Error::WorkerPanicked {
            start: band.start,
            end: band.end,
            message: panic_message(payload.as_ref()),
        })
    })
}

/// Computes the next state of every cell in the band.
fn compute_band(band: Band, grid: &Grid) -> BandResult {
    trace!("Computing rows {}..{}", band.start, band.end);
    band.range()
        .map(|row| {
            (0..grid.cols())
                .map(|col| next_state(grid, row, col).ok_or(Error::CellOutOfBounds { row, col }))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

/// Concatenates the results of all bands, in the order of the bands.
fn recombine(
    grid: &Grid,
    bands: &[Band],
    slots: Vec<Option<BandResult>>,
    generation: usize,
) -> Result<Grid, Error> {
    let mut rows = Vec::with_capacity(grid.rows());
    for (band, slot) in bands.iter().zip(slots) {
        let band_rows = slot
            .ok_or(Error::MissingBand {
                generation,
                start: band.start,
                end: band.end,
            })?
            .map_err(|e| Error::WorkerFailed {
                generation,
                start: band.start,
                end: band.end,
                source: Box::new(e),
            })?;
        if band_rows.len() != band.len() {
            return Err(Error::BandSizeMismatch {
                generation,
                start: band.start,
                end: band.end,
                found: band_rows.len(),
            });
        }
        for (row, cells) in band.range().zip(&band_rows) {
            if cells.len() != grid.cols() {
                return Err(Error::BandWidthMismatch {
                    generation,
                    start: band.start,
                    end: band.end,
                    row,
                    expected: grid.cols(),
                    found: cells.len(),
                });
            }
        }
        rows.extend(band_rows);
    }

    if rows.len() != grid.rows() {
        return Err(Error::RowCountMismatch {
            generation,
            expected: grid.rows(),
            found: rows.len(),
        });
    }

    // Every row already has the width of `grid`.
    Grid::from_rows(rows)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("unknown panic")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::from_rows(vec![vec![State::WeakPositive; 2]; 3]).unwrap()
    }

    fn rows(count: usize, cols: usize) -> BandResult {
        Ok(vec![vec![State::Dead; cols]; count])
    }

    #[test]
    fn recombine_in_band_order() {
        let grid = grid();
        let bands = partition(3, 2);
        let slots = vec![
            Some(Ok(vec![vec![State::HealthyPositive; 2]])),
            Some(Ok(vec![vec![State::Dead; 2], vec![State::HealthyNegative; 2]])),
        ];
        let next = recombine(&grid, &bands, slots, 1).unwrap();
        assert_eq!(next.to_string(), "OO\n..\nXX\n");
    }

    #[test]
    fn missing_band() {
        let grid = grid();
        let bands = partition(3, 2);
        let slots = vec![Some(rows(1, 2)), None];
        assert_eq!(
            recombine(&grid, &bands, slots, 4),
            Err(Error::MissingBand {
                generation: 4,
                start: 1,
                end: 3,
            })
        );
    }

    #[test]
    fn failed_band() {
        let grid = grid();
        let bands = partition(3, 2);
        let failure = Error::CellOutOfBounds { row: 0, col: 5 };
        let slots = vec![Some(Err(failure.clone())), Some(rows(2, 2))];
        assert_eq!(
            recombine(&grid, &bands, slots, 7),
            Err(Error::WorkerFailed {
                generation: 7,
                start: 0,
                end: 1,
                source: Box::new(failure),
            })
        );
    }

    #[test]
    fn short_band() {
        let grid = grid();
        let bands = partition(3, 2);
        let slots = vec![Some(rows(1, 2)), Some(rows(1, 2))];
        assert_eq!(
            recombine(&grid, &bands, slots, 2),
            Err(Error::BandSizeMismatch {
                generation: 2,
                start: 1,
                end: 3,
                found: 1,
            })
        );
    }

    #[test]
    fn narrow_row() {
        let grid = grid();
        let bands = partition(3, 2);
        let slots = vec![
            Some(rows(1, 2)),
            Some(Ok(vec![vec![State::Dead; 2], vec![State::Dead; 1]])),
        ];
        assert_eq!(
            recombine(&grid, &bands, slots, 3),
            Err(Error::BandWidthMismatch {
                generation: 3,
                start: 1,
                end: 3,
                row: 2,
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn bands_not_covering_the_grid() {
        let grid = grid();
        let bands = [Band { start: 0, end: 2 }];
        let slots = vec![Some(rows(2, 2))];
        assert_eq!(
            recombine(&grid, &bands, slots, 5),
            Err(Error::RowCountMismatch {
                generation: 5,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn panic_becomes_error() {
        let band = Band { start: 2, end: 5 };
        let result = run_worker(band, || panic!("boom at row {}", 3));
        assert_eq!(
            result,
            Err(Error::WorkerPanicked {
                start: 2,
                end: 5,
                message: String::from("boom at row 3"),
            })
        );

        let result = run_worker(band, || panic!("boom"));
        assert!(matches!(
            result,
            Err(Error::WorkerPanicked { ref message, .. }) if message == "boom"
        ));

        assert_eq!(run_worker(band, || rows(3, 1)), rows(3, 1));
    }
}
