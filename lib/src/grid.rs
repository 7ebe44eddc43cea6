//! The grid.

use crate::{
    cells::{Coord, State},
    error::Error,
};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A rectangular grid of cells.
///
/// A grid is never modified after its creation. Each generation of the
/// simulation builds a new grid, so that the current one can be shared
/// between workers without any locking.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Number of rows.
    rows: usize,

    /// Number of columns.
    cols: usize,

    /// All the cells, row by row.
    cells: Box<[State]>,
}

impl Grid {
    /// Creates a grid of the given size, filled with dead cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![State::Dead; rows * cols].into_boxed_slice(),
        }
    }

    /// Creates a grid from a list of rows.
    ///
    /// Returns an error if the rows do not all have the same length.
    pub fn from_rows(rows: Vec<Vec<State>>) -> Result<Self, Error> {
        let cols = rows.first().map_or(0, Vec::len);
        let height = rows.len();
        let mut cells = Vec::with_capacity(height * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(Error::RaggedRow {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Grid {
            rows: height,
            cols,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Gets the state of a cell.
    ///
    /// Returns `None` if the position is outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<State> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Gets the state of a cell by its [`Coord`].
    pub fn get_coord(&self, (row, col): Coord) -> Option<State> {
        self.get(row, col)
    }

    /// Gets a whole row.
    pub fn row(&self, row: usize) -> Option<&[State]> {
        if row < self.rows {
            Some(&self.cells[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    /// Iterates over the rows, from top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[State]> + '_ {
        (0..self.rows).map(move |row| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Number of cells in the given state.
    pub fn count(&self, state: State) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }
}

/// Parses the text format: one row per line, one symbol per cell.
///
/// An empty string is an empty grid.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, c)| State::from_symbol(c, (row, col)))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_rows(rows)
    }
}

/// Writes the text format, with a newline after every row.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for state in row {
                write!(f, "{}", state.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
