//! Simulation configuration.

use crate::{error::Error, grid::Grid, simulator::Simulator};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Simulation configuration.
///
/// The simulator will be generated from this configuration and an
/// initial grid.
#[derive(Clone, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Number of workers computing each generation.
    ///
    /// Must be positive. It is reduced to the number of rows of the grid
    /// when the grid has fewer rows, since each worker computes at least
    /// one row.
    #[educe(Default = 1)]
    pub workers: usize,

    /// Number of generations to simulate.
    #[educe(Default = 100)]
    pub generations: usize,
}

impl Config {
    /// Sets up a new configuration.
    pub fn new(workers: usize, generations: usize) -> Self {
        Config {
            workers,
            generations,
        }
    }

    /// Sets the number of workers.
    pub fn set_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Sets the number of generations.
    pub fn set_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Checks the configuration.
    pub fn validate(&self) -> Result<(), Error> {
        if self.workers == 0 {
            return Err(Error::NonPositiveWorkers);
        }
        Ok(())
    }

    /// The number of workers actually used for a grid with `rows` rows.
    ///
    /// Always at least 1, even for an empty grid.
    pub fn effective_workers(&self, rows: usize) -> usize {
        self.workers.min(rows).max(1)
    }

    /// Creates a new simulator from the configuration, starting at
    /// the given grid.
    ///
    /// Returns an error if the configuration is invalid.
    pub fn simulator(&self, grid: Grid) -> Result<Simulator, Error> {
        Simulator::new(self, grid)
    }
}
