//! Simulated-annealing grid repair.
//!
//! Repairs a partially filled board toward a conflict-free state. Every
//! block is first completed to a permutation of the value set; the search
//! then swaps pairs of non-fixed cells inside a random block, accepting
//! worsening swaps with probability `exp(-delta / T)` under geometric
//! cooling. Best-effort: the returned energy must be checked, 0 means a
//! fully valid grid.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Lewis (2007), "Metaheuristics can solve sudoku puzzles"

mod config;
mod energy;
mod runner;
mod state;

pub use config::AnnealConfig;
pub use energy::energy;
pub use runner::{AnnealOutcome, AnnealRunner};
