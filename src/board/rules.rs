//! Stateless placement predicates.
//!
//! Used by the backtracking generator to prune candidates. All predicates
//! treat 0 (empty) as matching nothing.

use super::Grid;

/// True when `value` does not appear anywhere in `row`.
pub fn absent_from_row(grid: &Grid, row: usize, value: u8) -> bool {
    (0..grid.size()).all(|col| grid.get(row, col) != value)
}

/// True when `value` does not appear anywhere in `col`.
pub fn absent_from_col(grid: &Grid, col: usize, value: u8) -> bool {
    (0..grid.size()).all(|row| grid.get(row, col) != value)
}

/// True when `value` does not appear in the block whose top-left corner is
/// `(box_row, box_col)`.
pub fn absent_from_box(grid: &Grid, box_row: usize, box_col: usize, value: u8) -> bool {
    let b = grid.box_size();
    (0..b).all(|i| (0..b).all(|j| grid.get(box_row + i, box_col + j) != value))
}

/// True when placing `value` at `(row, col)` violates no row, column, or
/// block constraint.
pub fn placement_fits(grid: &Grid, row: usize, col: usize, value: u8) -> bool {
    let b = grid.box_size();
    absent_from_row(grid, row, value)
        && absent_from_col(grid, col, value)
        && absent_from_box(grid, row - row % b, col - col % b, value)
}
