//! The rules of the cellular automaton.
//!
//! The next state of a cell depends only on its current state and
//! the [neighbor sum](neighbor_sum) around it. The rules are fixed;
//! [`transition`] is the only place where the meaning of each state
//! is defined.

mod neighbor;
mod transition;

use crate::{cells::State, grid::Grid};
pub use neighbor::neighbor_sum;
pub use transition::{is_power_of_two, is_prime, transition};

/// Computes the state of a cell in the next generation.
///
/// Returns `None` if the position is outside the grid.
#[inline]
pub fn next_state(grid: &Grid, row: usize, col: usize) -> Option<State> {
    let state = grid.get(row, col)?;
    Some(transition(state, neighbor_sum(grid, row, col)))
}
