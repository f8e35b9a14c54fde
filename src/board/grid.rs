//! Contiguous grid buffer and fixed-cell mask.

use std::fmt;

use crate::error::Error;

/// Board sizes this crate supports. `box_size = sqrt(size)` must be exact.
pub const SUPPORTED_SIZES: [usize; 3] = [4, 9, 16];

fn box_size_of(size: usize) -> Option<usize> {
    match size {
        4 => Some(2),
        9 => Some(3),
        16 => Some(4),
        _ => None,
    }
}

/// An N×N Sudoku grid, N ∈ {4, 9, 16}.
///
/// Cells hold values in `0..=N` where 0 denotes empty. Storage is a single
/// contiguous buffer addressed by `row * size + col`; there is one owner
/// per buffer, and copies are always explicit (`Clone`).
///
/// # Examples
///
/// ```
/// use sudoku_anneal::Grid;
///
/// let mut grid = Grid::new(9)?;
/// grid.set(0, 0, 5);
/// assert_eq!(grid.get(0, 0), 5);
/// assert!(!grid.is_complete());
/// # Ok::<(), sudoku_anneal::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size: usize,
    box_size: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Creates an empty grid. Rejects sizes outside {4, 9, 16}.
    pub fn new(size: usize) -> Result<Self, Error> {
        let box_size = box_size_of(size).ok_or(Error::UnsupportedSize(size))?;
        Ok(Self {
            size,
            box_size,
            cells: vec![0; size * size],
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Side length of one block (`sqrt(size)`).
    pub fn box_size(&self) -> usize {
        self.box_size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) out of bounds for a {0}x{0} grid",
            self.size
        );
        row * self.size + col
    }

    /// Value at `(row, col)`; 0 means empty.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[self.index(row, col)]
    }

    /// Writes `value` at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        debug_assert!(value as usize <= self.size);
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// Resets every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Top-left corner of block `block`, blocks numbered row-major in
    /// `0..size`.
    pub fn block_origin(&self, block: usize) -> (usize, usize) {
        debug_assert!(block < self.size);
        (
            (block / self.box_size) * self.box_size,
            (block % self.box_size) * self.box_size,
        )
    }

    /// True when no cell is empty.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Row-major view of the raw cells.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Copies every cell from `other`. Both grids must have the same size.
    pub(crate) fn copy_from(&mut self, other: &Grid) {
        debug_assert_eq!(self.size, other.size);
        self.cells.copy_from_slice(&other.cells);
    }
}

impl fmt::Display for Grid {
    /// Renders the grid one row per line, `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get(row, col) {
                    0 => write!(f, " .")?,
                    v => write!(f, "{v:2}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parallel boolean grid marking cells whose value is given and must never
/// be altered by search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedMask {
    size: usize,
    cells: Vec<bool>,
}

impl FixedMask {
    /// Creates an all-free mask for a `size`×`size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Marks every non-empty cell of `grid` as fixed.
    pub fn from_filled(grid: &Grid) -> Self {
        let size = grid.size();
        let mut mask = Self::new(size);
        for row in 0..size {
            for col in 0..size {
                if grid.get(row, col) != 0 {
                    mask.set(row, col, true);
                }
            }
        }
        mask
    }

    /// Side length of the mask.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_fixed(&self, row: usize, col: usize) -> bool {
        assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, fixed: bool) {
        assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col] = fixed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_supported_sizes() {
        for size in SUPPORTED_SIZES {
            let grid = Grid::new(size).unwrap();
            assert_eq!(grid.size(), size);
            assert_eq!(grid.box_size() * grid.box_size(), size);
        }
    }

    #[test]
    fn test_new_rejects_unsupported_size() {
        for size in [0, 1, 2, 3, 5, 6, 25] {
            assert_eq!(Grid::new(size), Err(Error::UnsupportedSize(size)));
        }
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut grid = Grid::new(4).unwrap();
        grid.set(3, 2, 4);
        assert_eq!(grid.get(3, 2), 4);
        assert_eq!(grid.get(2, 3), 0);
        assert_eq!(grid.cells()[3 * 4 + 2], 4);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let grid = Grid::new(4).unwrap();
        grid.get(4, 0);
    }

    #[test]
    fn test_block_origin() {
        let grid = Grid::new(9).unwrap();
        assert_eq!(grid.block_origin(0), (0, 0));
        assert_eq!(grid.block_origin(1), (0, 3));
        assert_eq!(grid.block_origin(3), (3, 0));
        assert_eq!(grid.block_origin(8), (6, 6));
    }

    #[test]
    fn test_is_complete() {
        let mut grid = Grid::new(4).unwrap();
        assert!(!grid.is_complete());
        for row in 0..4 {
            for col in 0..4 {
                grid.set(row, col, 1);
            }
        }
        assert!(grid.is_complete());
        grid.clear();
        assert!(!grid.is_complete());
    }

    #[test]
    fn test_mask_from_filled() {
        let mut grid = Grid::new(4).unwrap();
        grid.set(0, 0, 3);
        grid.set(2, 1, 1);
        let mask = FixedMask::from_filled(&grid);
        assert!(mask.is_fixed(0, 0));
        assert!(mask.is_fixed(2, 1));
        assert!(!mask.is_fixed(1, 1));
    }

    #[test]
    fn test_display_marks_empties() {
        let mut grid = Grid::new(4).unwrap();
        grid.set(0, 0, 1);
        let rendered = grid.to_string();
        let first = rendered.lines().next().unwrap();
        assert_eq!(first, " 1  .  .  .");
        assert_eq!(rendered.lines().count(), 4);
    }
}
