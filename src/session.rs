//! Puzzle session: solution, playing board, and fixed givens in one value.
//!
//! The orchestration layer over the two searches. Owns every buffer for the
//! lifetime of one game; the core algorithms borrow them per call and hold
//! no state of their own.

use rand::Rng;

use crate::board::{FixedMask, Grid};
use crate::error::Error;
use crate::generator::BoardGenerator;
use crate::sa::{AnnealConfig, AnnealOutcome, AnnealRunner};

/// Regeneration attempts before a generation failure is surfaced.
const GENERATE_ATTEMPTS: usize = 10;

/// Outcome of a single move on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// The value matches the solution and was written to the board.
    Correct,
    /// The value contradicts the solution; the board is unchanged.
    Wrong,
    /// The cell was emptied.
    Cleared,
    /// The cell was already empty; clearing did nothing.
    AlreadyEmpty,
    /// The cell is a given and cannot be altered.
    Fixed,
}

/// A playable puzzle: a solved grid, the board derived from it by blanking
/// cells, and the mask of givens.
pub struct PuzzleSession {
    solution: Grid,
    board: Grid,
    fixed: FixedMask,
}

impl PuzzleSession {
    /// Generates a fresh puzzle of the given size with `blanks` empty
    /// cells (clamped to `1..=size*size - 1`).
    pub fn new<R: Rng>(size: usize, blanks: usize, rng: &mut R) -> Result<Self, Error> {
        let solution = BoardGenerator::generate_with_retries(size, rng, GENERATE_ATTEMPTS)?;
        let board = solution.clone();
        let mut session = Self {
            solution,
            board,
            fixed: FixedMask::new(size),
        };
        let blanks = blanks.clamp(1, size * size - 1);
        session.remove_cells(blanks, rng);
        session.fixed = FixedMask::from_filled(&session.board);
        Ok(session)
    }

    /// Blanks `count` cells: random positions first, then a row-major
    /// sweep if random probing runs out of attempts.
    fn remove_cells<R: Rng>(&mut self, count: usize, rng: &mut R) {
        let size = self.board.size();
        let mut removed = 0;
        let max_attempts = size * size * 2;
        for _ in 0..max_attempts {
            if removed == count {
                return;
            }
            let row = rng.random_range(0..size);
            let col = rng.random_range(0..size);
            if self.board.get(row, col) != 0 {
                self.board.set(row, col, 0);
                removed += 1;
            }
        }
        for row in 0..size {
            for col in 0..size {
                if removed == count {
                    return;
                }
                if self.board.get(row, col) != 0 {
                    self.board.set(row, col, 0);
                    removed += 1;
                }
            }
        }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// The playing board, blanks included.
    pub fn board(&self) -> &Grid {
        &self.board
    }

    /// The fully solved grid the board was derived from.
    pub fn solution(&self) -> &Grid {
        &self.solution
    }

    /// The mask of givens.
    pub fn fixed(&self) -> &FixedMask {
        &self.fixed
    }

    /// True once every cell of the board is filled.
    pub fn is_complete(&self) -> bool {
        self.board.is_complete()
    }

    /// Plays `value` at `(row, col)`; `value` 0 clears the cell.
    ///
    /// A value is only written when it matches the solution; givens are
    /// refused. Coordinates and values outside the board surface
    /// [`Error::OutOfRange`].
    pub fn place(&mut self, row: usize, col: usize, value: u8) -> Result<Move, Error> {
        let size = self.board.size();
        if row >= size || col >= size || value as usize > size {
            return Err(Error::OutOfRange { row, col, value });
        }
        if self.fixed.is_fixed(row, col) {
            return Ok(Move::Fixed);
        }
        if value == 0 {
            if self.board.get(row, col) == 0 {
                return Ok(Move::AlreadyEmpty);
            }
            self.board.set(row, col, 0);
            return Ok(Move::Cleared);
        }
        if self.solution.get(row, col) == value {
            self.board.set(row, col, value);
            Ok(Move::Correct)
        } else {
            Ok(Move::Wrong)
        }
    }

    /// Hands the board to the annealer and, when it comes back fully
    /// filled, marks every filled cell as a given.
    pub fn anneal(&mut self, config: &AnnealConfig) -> Result<AnnealOutcome, Error> {
        let outcome = AnnealRunner::run(&mut self.board, &self.fixed, config)?;
        for row in 0..self.board.size() {
            for col in 0..self.board.size() {
                if self.board.get(row, col) != 0 {
                    self.fixed.set(row, col, true);
                }
            }
        }
        Ok(outcome)
    }
}
