//! Fills the matrices in row-major order, handles boundary initialization
//! under the terminal-gap policy, and (for local variants) tracks the
//! argmax cell.

use crate::scoring::{GapParams, ScoringProvider, TerminalGapView};
use crate::sequence::GAP;

use super::recurrence::{
    global_affine_cell, global_linear_cell, local_affine_cell, local_linear_cell,
};
use super::types::{Direction, Matrices};

/// Result of filling the matrices: the filled storage plus, for local
/// variants, the argmax cell (ties broken to the lexicographically
/// smallest `(i,j)`, which row-major scanning gives for free since we only
/// overwrite the incumbent on a strictly greater score).
pub struct FillResult {
    pub matrices: Matrices,
    pub max_score: i32,
    pub max_i: usize,
    pub max_j: usize,
}

/// Global linear fill (Needleman-Wunsch).
///
/// Boundary row/column: `M[0][j] = M[0][j-1] + score(gap, b[j-1])`,
/// `M[i][0] = M[i-1][0] + score(a[i-1], gap)`, forced LEFT/UP direction.
/// The boundary is always priced through a [`TerminalGapView`] set to
/// [`GapParams::effective_terminal_gap`], which is `gap_open` itself unless
/// the caller explicitly supplied a different terminal cost.
pub fn fill_global_linear(
    a: &[char],
    b: &[char],
    provider: &dyn ScoringProvider,
    gaps: &GapParams,
) -> Matrices {
    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let mut mats = Matrices::new(rows, cols, false);

    let boundary = TerminalGapView::new(provider, gaps.effective_terminal_gap());

    let origin = mats.idx(0, 0);
    mats.m[origin] = 0;
    mats.n[origin] = Direction::Terminate;

    for j in 1..cols {
        let idx = mats.idx(0, j);
        let prev = mats.m[mats.idx(0, j - 1)];
        mats.m[idx] = prev + boundary.score(GAP, b[j - 1]);
        mats.n[idx] = Direction::Left;
    }
    for i in 1..rows {
        let idx = mats.idx(i, 0);
        let prev = mats.m[mats.idx(i - 1, 0)];
        mats.m[idx] = prev + boundary.score(a[i - 1], GAP);
        mats.n[idx] = Direction::Up;
    }

    for i in 1..rows {
        for j in 1..cols {
            global_linear_cell(&mut mats, i, j, a[i - 1], b[j - 1], provider);
        }
    }

    mats
}

/// Global affine fill (Gotoh). Boundary uses
/// [`GapParams::effective_terminal_gap`]/[`GapParams::effective_terminal_gap_extend`]
/// (which fall back to `gap_open`/`gap_extend` unless the caller overrides
/// them); the interior uses `gap_open`/`gap_extend` directly.
pub fn fill_global_affine(
    a: &[char],
    b: &[char],
    provider: &dyn ScoringProvider,
    gaps: &GapParams,
) -> Matrices {
    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let mut mats = Matrices::new(rows, cols, true);

    let neg_inf = i32::MIN / 2;
    mats.d.as_mut().unwrap()[0] = neg_inf;
    mats.r.as_mut().unwrap()[0] = neg_inf;
    let origin = mats.idx(0, 0);
    mats.m[origin] = 0;
    mats.n[origin] = Direction::Terminate;

    let terminal_open = gaps.effective_terminal_gap();
    let terminal_extend = gaps.effective_terminal_gap_extend();

    // Boundary column (j = 0): pure run of UP steps, terminal-gap priced.
    for i in 1..rows {
        let idx = mats.idx(i, 0);
        let cost = if i == 1 { terminal_open } else { terminal_extend };
        let prev = mats.m[mats.idx(i - 1, 0)];
        mats.m[idx] = prev + cost;
        mats.n[idx] = Direction::Up;
        mats.d.as_mut().unwrap()[idx] = mats.m[idx];
        mats.r.as_mut().unwrap()[idx] = neg_inf;
    }
    // Boundary row (i = 0): pure run of LEFT steps, terminal-gap priced.
    for j in 1..cols {
        let idx = mats.idx(0, j);
        let cost = if j == 1 { terminal_open } else { terminal_extend };
        let prev = mats.m[mats.idx(0, j - 1)];
        mats.m[idx] = prev + cost;
        mats.n[idx] = Direction::Left;
        mats.r.as_mut().unwrap()[idx] = mats.m[idx];
        mats.d.as_mut().unwrap()[idx] = neg_inf;
    }

    for i in 1..rows {
        for j in 1..cols {
            global_affine_cell(
                &mut mats,
                i,
                j,
                a[i - 1],
                b[j - 1],
                provider,
                gaps.gap_open,
                gaps.gap_extend,
            );
        }
    }

    mats
}

/// Local linear fill (Smith-Waterman). Boundary is all zero.
pub fn fill_local_linear(a: &[char], b: &[char], provider: &dyn ScoringProvider) -> FillResult {
    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let mut mats = Matrices::new(rows, cols, false);
    // Rows/cols already zero-initialized by `Matrices::new`; direction
    // defaults to `Terminate`.

    let mut max_score = 0;
    let mut max_i = 0;
    let mut max_j = 0;

    for i in 1..rows {
        for j in 1..cols {
            local_linear_cell(&mut mats, i, j, a[i - 1], b[j - 1], provider);
            let value = mats.m[mats.idx(i, j)];
            if value > max_score {
                max_score = value;
                max_i = i;
                max_j = j;
            }
        }
    }

    FillResult {
        matrices: mats,
        max_score,
        max_i,
        max_j,
    }
}

/// Local affine fill. Boundary is all zero (local alignment has no
/// terminal-gap concept: a path can start anywhere); `D`/`R` boundaries
/// seeded at `-inf` so they never dominate the first interior row/column.
pub fn fill_local_affine(
    a: &[char],
    b: &[char],
    provider: &dyn ScoringProvider,
    gaps: &GapParams,
) -> FillResult {
    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let mut mats = Matrices::new(rows, cols, true);

    let neg_inf = i32::MIN / 2;
    for v in mats.d.as_mut().unwrap().iter_mut() {
        *v = neg_inf;
    }
    for v in mats.r.as_mut().unwrap().iter_mut() {
        *v = neg_inf;
    }

    let mut max_score = 0;
    let mut max_i = 0;
    let mut max_j = 0;

    for i in 1..rows {
        for j in 1..cols {
            local_affine_cell(
                &mut mats,
                i,
                j,
                a[i - 1],
                b[j - 1],
                provider,
                gaps.gap_open,
                gaps.gap_extend,
            );
            let value = mats.m[mats.idx(i, j)];
            if value > max_score {
                max_score = value;
                max_i = i;
                max_j = j;
            }
        }
    }

    FillResult {
        matrices: mats,
        max_score,
        max_i,
        max_j,
    }
}
