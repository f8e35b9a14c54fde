//! Crate-wide error taxonomy.
//!
//! Every failure is reported to the immediate caller as a value; no entry
//! point panics on bad input, and no caller-owned buffer is partially
//! overwritten before a result is fully computed.

use thiserror::Error;

/// Errors surfaced by board generation, annealing, and puzzle sessions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Board size outside the supported set {4, 9, 16}.
    #[error("unsupported board size {0}, expected 4, 9 or 16")]
    UnsupportedSize(usize),

    /// An annealing parameter failed validation.
    #[error("invalid annealing config: {0}")]
    InvalidConfig(String),

    /// Backtracking left an empty cell after diagonal seeding.
    ///
    /// Not expected in steady state for supported sizes; recoverable by
    /// regenerating with fresh seeding.
    #[error("backtracking failed to complete a {size}x{size} board")]
    GenerationFailed { size: usize },

    /// A grid and its fixed mask disagree on dimensions.
    #[error("grid is {grid}x{grid} but fixed mask is {mask}x{mask}")]
    DimensionMismatch { grid: usize, mask: usize },

    /// Block initialization could not place a missing value, which means
    /// the block's fixed cells already duplicate a value.
    #[error("block {block} has no free slot for a missing value; fixed cells conflict")]
    MalformedPuzzle { block: usize },

    /// A move addressed a cell or used a value outside the board.
    #[error("move ({row}, {col}) = {value} is outside the board")]
    OutOfRange { row: usize, col: usize, value: u8 },
}
