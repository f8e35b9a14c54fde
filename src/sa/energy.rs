//! Conflict counting: the annealer's sole objective function.

use crate::board::Grid;

/// Counts constraint violations in `grid`.
///
/// For every row, column, and block, each value occurring `c > 1` times
/// among the non-zero cells contributes `c - 1`. Empty cells never
/// conflict. Zero iff the filled cells contain no duplicate in any unit.
///
/// Always a full recomputation; the single-swap neighborhood would admit
/// an incremental update, but the grids are small enough that the full
/// sweep stays cheap.
pub fn energy(grid: &Grid) -> usize {
    let size = grid.size();
    let mut total = 0;
    let mut row_count = vec![0u8; size + 1];
    let mut col_count = vec![0u8; size + 1];

    // Rows and columns in one sweep: pass i counts row i and column i.
    for i in 0..size {
        row_count.fill(0);
        col_count.fill(0);
        for j in 0..size {
            let r = grid.get(i, j);
            let c = grid.get(j, i);
            if r != 0 {
                row_count[r as usize] += 1;
            }
            if c != 0 {
                col_count[c as usize] += 1;
            }
        }
        total += surplus(&row_count) + surplus(&col_count);
    }

    let b = grid.box_size();
    let mut block_count = vec![0u8; size + 1];
    for block in 0..size {
        block_count.fill(0);
        let (r0, c0) = grid.block_origin(block);
        for i in 0..b {
            for j in 0..b {
                let v = grid.get(r0 + i, c0 + j);
                if v != 0 {
                    block_count[v as usize] += 1;
                }
            }
        }
        total += surplus(&block_count);
    }

    total
}

/// Sum of `c - 1` over counts greater than one.
fn surplus(counts: &[u8]) -> usize {
    counts
        .iter()
        .filter(|&&c| c > 1)
        .map(|&c| c as usize - 1)
        .sum()
}
