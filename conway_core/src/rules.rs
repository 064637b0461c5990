// rules.rs - Conway's B3/S23 update rule over a bounded (non-wrapping) grid

use crate::grid::Grid;

/// Moore neighbourhood offsets.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Live cells among the 8 neighbours of `(row, col)`.
///
/// Neighbours beyond the edges count as dead; there is no wraparound.
pub fn count_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for &(dr, dc) in &NEIGHBORS {
        let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };
        if grid.in_bounds(nr, nc) && grid.is_alive(nr, nc) {
            count += 1;
        }
    }
    count
}

/// Next state of a single cell.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,  // Survival
        (false, 3)            => true,  // Birth
        _                     => false, // Death or stays dead
    }
}

/// Compute the next generation. The input is left untouched.
pub fn step(grid: &Grid) -> Grid {
    Grid::from_fn(grid.rows(), grid.cols(), |row, col| {
        next_state(grid.is_alive(row, col), count_neighbors(grid, row, col))
    })
}
