//! Search state: a grid plus its cached energy.

use rand::Rng;

use super::energy::energy;
use crate::board::{FixedMask, Grid};
use crate::error::Error;

/// Attempts per missing value when sampling a free slot during block
/// initialization. Exhausting this means the block's fixed cells already
/// duplicate a value, so no valid slot can exist.
const INIT_RETRY_LIMIT: usize = 10_000;

/// One point of the annealing trajectory.
///
/// The cached energy is recomputed inline with every mutating operation;
/// it is never observable stale.
#[derive(Debug, Clone)]
pub(crate) struct SearchState {
    grid: Grid,
    energy: usize,
}

impl SearchState {
    /// Builds the starting state: copies `initial`, then fills each block
    /// up to a permutation of `1..=size` by dropping every value missing
    /// from the block's fixed cells into a uniformly random free slot of
    /// that block.
    ///
    /// Rows and columns may still conflict afterwards; that is what the
    /// annealing loop works on. A block whose fixed cells duplicate a
    /// value has fewer free slots than missing values and surfaces
    /// [`Error::MalformedPuzzle`] once the slot sampling budget runs out.
    pub(crate) fn from_puzzle<R: Rng>(
        initial: &Grid,
        fixed: &FixedMask,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let size = initial.size();
        let b = initial.box_size();
        let mut grid = initial.clone();

        for block in 0..size {
            let (r0, c0) = grid.block_origin(block);

            let mut used = vec![false; size + 1];
            for i in 0..b {
                for j in 0..b {
                    if fixed.is_fixed(r0 + i, c0 + j) {
                        used[grid.get(r0 + i, c0 + j) as usize] = true;
                    }
                }
            }

            for value in 1..=size as u8 {
                if used[value as usize] {
                    continue;
                }
                let mut placed = false;
                for _ in 0..INIT_RETRY_LIMIT {
                    let row = r0 + rng.random_range(0..b);
                    let col = c0 + rng.random_range(0..b);
                    if !fixed.is_fixed(row, col) && grid.get(row, col) == 0 {
                        grid.set(row, col, value);
                        placed = true;
                        break;
                    }
                }
                if !placed {
                    return Err(Error::MalformedPuzzle { block });
                }
            }
        }

        let energy = energy(&grid);
        Ok(Self { grid, energy })
    }

    pub(crate) fn energy(&self) -> usize {
        self.energy
    }

    pub(crate) fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Overwrites this state with `other`, reusing the existing buffer.
    pub(crate) fn copy_from(&mut self, other: &SearchState) {
        self.grid.copy_from(&other.grid);
        self.energy = other.energy;
    }

    /// Turns this state into a neighbor of `current`: picks a uniformly
    /// random block and swaps two distinct non-fixed cells within it.
    ///
    /// A block with fewer than two non-fixed cells admits no swap; the
    /// neighbor then equals `current` unchanged (a wasted iteration, not
    /// an error).
    pub(crate) fn propose_from<R: Rng>(
        &mut self,
        current: &SearchState,
        fixed: &FixedMask,
        rng: &mut R,
    ) {
        self.copy_from(current);

        let size = self.grid.size();
        let b = self.grid.box_size();
        let block = rng.random_range(0..size);
        let (r0, c0) = self.grid.block_origin(block);

        let mut free: Vec<(usize, usize)> = Vec::with_capacity(b * b);
        for i in 0..b {
            for j in 0..b {
                if !fixed.is_fixed(r0 + i, c0 + j) {
                    free.push((r0 + i, c0 + j));
                }
            }
        }

        if free.len() >= 2 {
            let a = rng.random_range(0..free.len());
            let other = loop {
                let candidate = rng.random_range(0..free.len());
                if candidate != a {
                    break candidate;
                }
            };
            let (r1, c1) = free[a];
            let (r2, c2) = free[other];
            let tmp = self.grid.get(r1, c1);
            self.grid.set(r1, c1, self.grid.get(r2, c2));
            self.grid.set(r2, c2, tmp);
            self.energy = energy(&self.grid);
        }
    }
}
