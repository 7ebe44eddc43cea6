//! A five-state cellular automaton, simulated on a rectangular grid.
//!
//! Each generation is split into bands of rows, computed in parallel,
//! and joined back in row order. The result never depends on the
//! number of workers.

pub mod band;
mod cells;
mod config;
mod error;
mod grid;
pub mod rules;
#[cfg(feature = "serde")]
mod save;
mod simulator;
mod step;

pub use cells::{Coord, State};
pub use config::Config;
pub use error::Error;
pub use grid::Grid;
#[cfg(feature = "serde")]
pub use save::SimulatorSer;
pub use simulator::Simulator;
pub use step::Stepper;
