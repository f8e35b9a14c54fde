//! Backtracking board generator.

use rand::Rng;

use crate::board::{rules, Grid};
use crate::error::Error;

/// Generates fully solved boards.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use sudoku_anneal::generator::BoardGenerator;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let grid = BoardGenerator::generate(9, &mut rng)?;
/// assert!(grid.is_complete());
/// # Ok::<(), sudoku_anneal::Error>(())
/// ```
pub struct BoardGenerator;

impl BoardGenerator {
    /// Produces a grid in which every row, column, and block contains each
    /// value in `1..=size` exactly once.
    ///
    /// Returns [`Error::UnsupportedSize`] for sizes outside {4, 9, 16} and
    /// [`Error::GenerationFailed`] if the completion search leaves an empty
    /// cell. The latter is not expected after valid diagonal seeding but is
    /// recoverable: regenerate with fresh seeding, or use
    /// [`generate_with_retries`](Self::generate_with_retries).
    pub fn generate<R: Rng>(size: usize, rng: &mut R) -> Result<Grid, Error> {
        let mut grid = Grid::new(size)?;
        fill_diagonal(&mut grid, rng);
        if fill_remaining(&mut grid, 0) && grid.is_complete() {
            Ok(grid)
        } else {
            Err(Error::GenerationFailed { size })
        }
    }

    /// Retries [`generate`](Self::generate) up to `attempts` times, seeding
    /// afresh each time, and surfaces the last failure if all attempts fail.
    pub fn generate_with_retries<R: Rng>(
        size: usize,
        rng: &mut R,
        attempts: usize,
    ) -> Result<Grid, Error> {
        let mut last = Error::GenerationFailed { size };
        for _ in 0..attempts.max(1) {
            match Self::generate(size, rng) {
                Ok(grid) => return Ok(grid),
                Err(err @ Error::UnsupportedSize(_)) => return Err(err),
                Err(err) => last = err,
            }
        }
        Err(last)
    }
}

/// Fills each diagonal block with a random permutation of `1..=size`.
///
/// Values are drawn uniformly and re-rolled while already present in the
/// block. Expected draws per block are bounded (coupon collector), and the
/// diagonal blocks constrain each other in no unit.
fn fill_diagonal<R: Rng>(grid: &mut Grid, rng: &mut R) {
    let size = grid.size();
    let b = grid.box_size();
    for origin in (0..size).step_by(b) {
        for i in 0..b {
            for j in 0..b {
                let value = loop {
                    let candidate = rng.random_range(1..=size) as u8;
                    if rules::absent_from_box(grid, origin, origin, candidate) {
                        break candidate;
                    }
                };
                grid.set(origin + i, origin + j, value);
            }
        }
    }
}

/// Completes the grid from flat cell index `idx` onward, row-major.
///
/// For each empty cell, tries candidates in increasing order and recurses;
/// a cell is restored to empty before returning failure, so no sibling
/// branch ever observes a partially committed placement.
fn fill_remaining(grid: &mut Grid, idx: usize) -> bool {
    let size = grid.size();
    if idx == size * size {
        return true;
    }
    let (row, col) = (idx / size, idx % size);
    if grid.get(row, col) != 0 {
        return fill_remaining(grid, idx + 1);
    }
    for value in 1..=size as u8 {
        if rules::placement_fits(grid, row, col, value) {
            grid.set(row, col, value);
            if fill_remaining(grid, idx + 1) {
                return true;
            }
            grid.set(row, col, 0);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Asserts every row, column, and block holds the full value set.
    fn assert_valid(grid: &Grid) {
        let size = grid.size();
        let b = grid.box_size();
        let full: std::collections::BTreeSet<u8> = (1..=size as u8).collect();

        for row in 0..size {
            let unit: std::collections::BTreeSet<u8> =
                (0..size).map(|col| grid.get(row, col)).collect();
            assert_eq!(unit, full, "row {row} is not a permutation");
        }
        for col in 0..size {
            let unit: std::collections::BTreeSet<u8> =
                (0..size).map(|row| grid.get(row, col)).collect();
            assert_eq!(unit, full, "column {col} is not a permutation");
        }
        for block in 0..size {
            let (r0, c0) = grid.block_origin(block);
            let unit: std::collections::BTreeSet<u8> = (0..b)
                .flat_map(|i| (0..b).map(move |j| (i, j)))
                .map(|(i, j)| grid.get(r0 + i, c0 + j))
                .collect();
            assert_eq!(unit, full, "block {block} is not a permutation");
        }
    }

    #[test]
    fn test_generate_valid_all_sizes() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in [4, 9, 16] {
            let grid = BoardGenerator::generate(size, &mut rng).unwrap();
            assert_valid(&grid);
        }
    }

    #[test]
    fn test_generate_rejects_unsupported_size() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            BoardGenerator::generate(6, &mut rng),
            Err(Error::UnsupportedSize(6))
        );
        assert_eq!(
            BoardGenerator::generate_with_retries(6, &mut rng, 3),
            Err(Error::UnsupportedSize(6))
        );
    }

    #[test]
    fn test_generate_100_seeds_size_9() {
        for seed in 0..100u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = BoardGenerator::generate(9, &mut rng).unwrap();
            assert_valid(&grid);
        }
    }

    #[test]
    fn test_diagonal_seeding_fills_only_diagonal_blocks() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(9).unwrap();
        fill_diagonal(&mut grid, &mut rng);

        let full: std::collections::BTreeSet<u8> = (1..=9).collect();
        for block in [0usize, 4, 8] {
            let (r0, c0) = grid.block_origin(block);
            let unit: std::collections::BTreeSet<u8> = (0..3)
                .flat_map(|i| (0..3).map(move |j| (i, j)))
                .map(|(i, j)| grid.get(r0 + i, c0 + j))
                .collect();
            assert_eq!(unit, full);
        }
        // Off-diagonal blocks stay untouched.
        assert!(grid.get(0, 3) == 0 && grid.get(3, 0) == 0 && grid.get(8, 0) == 0);
    }

    #[test]
    fn test_backtracking_restores_on_failure() {
        // (0,0) admits 1 and 2, but either choice leaves (0,1) with no
        // candidate: the row pins 3 and 4, the column pins 1 and 2. The
        // search commits at (0,0), fails at (0,1), and must undo fully.
        let mut grid = Grid::new(4).unwrap();
        grid.set(0, 2, 3);
        grid.set(0, 3, 4);
        grid.set(2, 1, 1);
        grid.set(3, 1, 2);
        let before = grid.clone();
        assert!(!fill_remaining(&mut grid, 0));
        assert_eq!(grid, before, "failed search must undo every placement");
    }

    #[test]
    fn test_generate_with_retries_returns_complete_board() {
        let mut rng = StdRng::seed_from_u64(99);
        let grid = BoardGenerator::generate_with_retries(16, &mut rng, 5).unwrap();
        assert_valid(&grid);
    }
}
