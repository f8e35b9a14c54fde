//! Annealing execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::AnnealConfig;
use super::state::SearchState;
use crate::board::{FixedMask, Grid};
use crate::error::Error;

/// Best-energy samples are recorded once per this many iterations.
const HISTORY_INTERVAL: usize = 100;

/// Result of an annealing run.
///
/// The repaired grid itself is written back into the caller's buffer by
/// [`AnnealRunner::run`]; this struct carries the run statistics.
#[derive(Debug, Clone)]
pub struct AnnealOutcome {
    /// Energy of the best grid found. 0 means fully conflict-free; any
    /// other value means a best-effort result that still conflicts.
    pub final_energy: usize,

    /// Total neighbor proposals evaluated.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Accepted proposals, improving ones included.
    pub accepted_moves: usize,

    /// Proposals that strictly lowered the energy.
    pub improving_moves: usize,

    /// Whether the run was stopped through the cancellation token.
    pub cancelled: bool,

    /// Best energy sampled at the start and then every 100 iterations;
    /// the final best energy is always the last entry. Non-increasing.
    pub energy_history: Vec<usize>,
}

/// Executes the simulated-annealing repair.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Repairs `initial` in place toward zero conflicts, honoring `fixed`.
    ///
    /// On return `initial` holds the best grid found; check
    /// [`AnnealOutcome::final_energy`] to learn whether it is fully valid.
    /// The caller's grid is only written once the run has finished — a
    /// failed run leaves it untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoku_anneal::sa::{AnnealConfig, AnnealRunner};
    /// use sudoku_anneal::{FixedMask, Grid};
    ///
    /// let mut grid = Grid::new(9)?;
    /// let fixed = FixedMask::new(9);
    /// let config = AnnealConfig::default()
    ///     .with_max_iterations(10_000)
    ///     .with_seed(42);
    /// let outcome = AnnealRunner::run(&mut grid, &fixed, &config)?;
    /// assert!(outcome.energy_history.windows(2).all(|w| w[1] <= w[0]));
    /// # Ok::<(), sudoku_anneal::Error>(())
    /// ```
    pub fn run(
        initial: &mut Grid,
        fixed: &FixedMask,
        config: &AnnealConfig,
    ) -> Result<AnnealOutcome, Error> {
        Self::run_with_cancel(initial, fixed, config, None)
    }

    /// Like [`run`](Self::run), but stops early once `cancel` is set.
    ///
    /// A cancelled run still writes the best grid found so far back into
    /// `initial` and reports `cancelled = true`.
    pub fn run_with_cancel(
        initial: &mut Grid,
        fixed: &FixedMask,
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealOutcome, Error> {
        config.validate().map_err(Error::InvalidConfig)?;
        if initial.size() != fixed.size() {
            return Err(Error::DimensionMismatch {
                grid: initial.size(),
                mask: fixed.size(),
            });
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut current = SearchState::from_puzzle(initial, fixed, &mut rng)?;
        let mut neighbor = current.clone();
        let mut best = current.clone();

        let mut temperature = config.initial_temperature;
        let mut iteration = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;
        let mut energy_history = vec![best.energy()];

        while temperature > config.min_temperature
            && best.energy() > 0
            && iteration < config.max_iterations
        {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            neighbor.propose_from(&current, fixed, &mut rng);
            let delta = neighbor.energy() as i64 - current.energy() as i64;

            // Metropolis acceptance criterion.
            let accept = if delta < 0 {
                improving_moves += 1;
                true
            } else {
                rng.random_range(0.0..1.0) < (-(delta as f64) / temperature).exp()
            };

            if accept {
                current.copy_from(&neighbor);
                accepted_moves += 1;
                if current.energy() < best.energy() {
                    best.copy_from(&current);
                }
            }

            temperature *= config.alpha;
            iteration += 1;

            if iteration % HISTORY_INTERVAL == 0 {
                energy_history.push(best.energy());
            }
        }

        if energy_history.last() != Some(&best.energy()) {
            energy_history.push(best.energy());
        }

        // The caller's buffer is only touched once the result is complete.
        initial.copy_from(best.grid());

        Ok(AnnealOutcome {
            final_energy: best.energy(),
            iterations: iteration,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
            energy_history,
        })
    }
}
