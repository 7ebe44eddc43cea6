//! The simulator.

use crate::{cells::State, config::Config, error::Error, grid::Grid, step::Stepper};
use log::{debug, info, log_enabled, Level};

/// Drives the simulation, one generation at a time.
///
/// Only the current grid and the generation counter are kept
/// between generations.
#[derive(Debug)]
pub struct Simulator {
    /// Simulation configuration.
    pub(crate) config: Config,

    /// The current grid.
    grid: Grid,

    /// Number of generations computed so far.
    pub(crate) generation: usize,

    /// Computes the next generation.
    stepper: Stepper,
}

impl Simulator {
    /// Creates a new simulator, starting at generation 0 with the given grid.
    pub fn new(config: &Config, grid: Grid) -> Result<Self, Error> {
        config.validate()?;
        let workers = config.effective_workers(grid.rows());
        if workers < config.workers {
            debug!(
                "Reduced the number of workers from {} to {} for {} rows",
                config.workers,
                workers,
                grid.rows()
            );
        }
        Ok(Simulator {
            config: config.clone(),
            grid,
            generation: 0,
            stepper: Stepper::new(workers)?,
        })
    }

    /// Simulation configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consumes the simulator, returning the current grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Number of generations computed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Number of workers actually used.
    pub fn workers(&self) -> usize {
        self.stepper.workers()
    }

    /// Whether all the configured generations have been computed.
    pub fn is_finished(&self) -> bool {
        self.generation >= self.config.generations
    }

    /// Computes the next generation and makes it the current one.
    ///
    /// On error the current grid is left unchanged.
    pub fn step(&mut self) -> Result<(), Error> {
        let generation = self.generation + 1;
        self.grid = self.stepper.step(&self.grid, generation)?;
        self.generation = generation;
        if log_enabled!(Level::Debug) {
            debug!("Generation {}: {}", generation, self.population());
        }
        Ok(())
    }

    /// Runs until the configured number of generations is reached.
    pub fn run(&mut self) -> Result<(), Error> {
        self.run_with(|_, _| ())
    }

    /// Runs until the configured number of generations is reached,
    /// calling `observer` with the number and the grid of
    /// each new generation.
    pub fn run_with<F>(&mut self, mut observer: F) -> Result<(), Error>
    where
        F: FnMut(usize, &Grid),
    {
        info!(
            "Simulating generations {}..{} of a {}x{} grid with {} workers",
            self.generation,
            self.config.generations,
            self.grid.rows(),
            self.grid.cols(),
            self.workers()
        );
        while !self.is_finished() {
            self.step()?;
            observer(self.generation, &self.grid);
        }
        info!("Finished at generation {}", self.generation);
        Ok(())
    }

    /// Number of cells in each state, e.g. `O: 1, o: 0, .: 3, x: 0, X: 0`.
    fn population(&self) -> String {
        State::ALL
            .iter()
            .map(|&state| format!("{}: {}", state, self.grid.count(state)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
