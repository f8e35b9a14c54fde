//! Sudoku grid construction and repair.
//!
//! Two search strategies over the same combinatorial structure
//! (Latin-square-like grids with block constraints):
//!
//! - **Board generation**: exact constructive search. Seeds the diagonal
//!   blocks with random permutations, then completes the grid by recursive
//!   backtracking with chronological undo. See [`generator::BoardGenerator`].
//! - **Grid repair**: stochastic local search. Fills each block up to a
//!   permutation of the value set, then drives intra-block swaps through a
//!   Metropolis acceptance rule under a geometric cooling schedule. A
//!   best-effort optimizer, not a complete solver. See [`sa::AnnealRunner`].
//!
//! The [`session`] module ties both together into a playable puzzle:
//! generate a solution, blank cells, validate moves, optionally hand the
//! board back to the annealer.
//!
//! # Randomness
//!
//! Nothing in this crate owns a hidden RNG. Generation takes `&mut impl Rng`;
//! annealing derives its generator from [`sa::AnnealConfig`]'s optional seed.
//! Fixing the seed makes every run reproducible.

pub mod board;
pub mod error;
pub mod generator;
pub mod sa;
pub mod session;

pub use board::{FixedMask, Grid};
pub use error::Error;
