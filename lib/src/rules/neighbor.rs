use crate::grid::Grid;

/// Offsets of the eight cells in the Moore neighborhood.
const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The weighted sum of the eight neighbors of a cell.
///
/// The grid has hard edges: neighbors outside the grid are skipped.
pub fn neighbor_sum(grid: &Grid, row: usize, col: usize) -> i32 {
    NEIGHBORHOOD
        .iter()
        .filter_map(|&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            grid.get(r, c)
        })
        .map(|state| state.weight())
        .sum()
}
