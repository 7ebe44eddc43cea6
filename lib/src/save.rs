#![cfg(feature = "serde")]
//! Saves the simulator.

use crate::{config::Config, error::Error, grid::Grid, simulator::Simulator};
use serde::{Deserialize, Serialize};

/// A representation of the simulator which can be easily serialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorSer {
    /// Simulation configuration.
    pub config: Config,

    /// Number of generations computed so far.
    pub generation: usize,

    /// The current grid, in the text format.
    pub grid: String,
}

impl SimulatorSer {
    /// Restores the simulator from the `SimulatorSer`.
    pub fn simulator(&self) -> Result<Simulator, Error> {
        if self.generation > self.config.generations {
            return Err(Error::SaveMismatch(format!(
                "generation {} is past the configured {} generations",
                self.generation, self.config.generations
            )));
        }
        let grid = self.grid.parse::<Grid>()?;
        let mut simulator = Simulator::new(&self.config, grid)?;
        simulator.generation = self.generation;
        Ok(simulator)
    }
}

impl Simulator {
    /// Saves the simulator as a `SimulatorSer`.
    pub fn ser(&self) -> SimulatorSer {
        SimulatorSer {
            config: self.config.clone(),
            generation: self.generation,
            grid: self.grid().to_string(),
        }
    }
}
