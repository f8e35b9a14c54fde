//! Grid storage and placement rules.
//!
//! [`Grid`] is a contiguous `row * size + col` buffer of cell values
//! (0 = empty); [`FixedMask`] is the parallel boolean grid marking givens.
//! The [`rules`] functions are the stateless predicates both searches
//! share: is a value absent from a row, a column, a block.

mod grid;
pub mod rules;

pub use grid::{FixedMask, Grid, SUPPORTED_SIZES};
