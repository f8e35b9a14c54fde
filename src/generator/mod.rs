//! Complete-board generation by constrained backtracking.
//!
//! Seeds the diagonal blocks with random permutations (they share no row,
//! column, or block, so they cannot conflict), then completes the rest of
//! the grid with an exhaustive row-major backtracking search.

mod runner;

pub use runner::BoardGenerator;
