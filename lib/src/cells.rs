//! Cells in the cellular automaton.

use crate::error::Error;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
///
/// Positive and negative cells come in a healthy and a weakened form;
/// together with [`Dead`](State::Dead) they make up a closed alphabet of
/// five symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// `O`.
    ///
    /// Healthy positive cell. Contributes `+2` to its neighbors.
    HealthyPositive,
    /// `o`.
    ///
    /// Weakened positive cell. Contributes `+1` to its neighbors.
    WeakPositive,
    /// `.`.
    ///
    /// Dead cell. Contributes nothing.
    Dead,
    /// `x`.
    ///
    /// Weakened negative cell. Contributes `-1` to its neighbors.
    WeakNegative,
    /// `X`.
    ///
    /// Healthy negative cell. Contributes `-2` to its neighbors.
    HealthyNegative,
}

impl State {
    /// All five states, in descending order of weight.
    pub const ALL: [State; 5] = [
        State::HealthyPositive,
        State::WeakPositive,
        State::Dead,
        State::WeakNegative,
        State::HealthyNegative,
    ];

    /// The weight this cell contributes to the neighbor sum of each
    /// of its neighbors.
    #[inline]
    pub const fn weight(self) -> i32 {
        match self {
            State::HealthyPositive => 2,
            State::WeakPositive => 1,
            State::Dead => 0,
            State::WeakNegative => -1,
            State::HealthyNegative => -2,
        }
    }

    /// The character representing this state in the text format.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            State::HealthyPositive => 'O',
            State::WeakPositive => 'o',
            State::Dead => '.',
            State::WeakNegative => 'x',
            State::HealthyNegative => 'X',
        }
    }

    /// Parses a single symbol.
    ///
    /// `coord` is only used to locate the symbol in the error.
    pub(crate) fn from_symbol(symbol: char, coord: Coord) -> Result<Self, Error> {
        match symbol {
            'O' => Ok(State::HealthyPositive),
            'o' => Ok(State::WeakPositive),
            '.' => Ok(State::Dead),
            'x' => Ok(State::WeakNegative),
            'X' => Ok(State::HealthyNegative),
            _ => Err(Error::InvalidSymbol {
                row: coord.0,
                col: coord.1,
                symbol,
            }),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        State::Dead
    }
}

impl TryFrom<char> for State {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        State::from_symbol(symbol, (0, 0))
    }
}

impl From<State> for char {
    fn from(state: State) -> Self {
        state.symbol()
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The coordinates of a cell.
///
/// `(row, column)`, both 0-indexed.
pub type Coord = (usize, usize);
