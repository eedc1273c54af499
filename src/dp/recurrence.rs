//! Per-cell update rules. Each function reads only the cells at
//! `(i-1,j-1)`, `(i-1,j)`, `(i,j-1)` (and, for affine, the matching D/R
//! neighbors) and writes `M[i][j]`/`N[i][j]` (and `D[i][j]`/`R[i][j]`).
//!
//! Tie-break is fixed at MATCH > UP > LEFT: candidates are compared with
//! `>=` in that order, so a diagonal match wins any tie over a gap move,
//! and a vertical gap wins any tie over a horizontal one.

use crate::scoring::ScoringProvider;

use super::types::{Direction, Matrices};

/// `M[i][j] = max(x, y, z)` where `x` is the diagonal candidate, `y` is the
/// UP candidate (`a[i-1]` against a gap), `z` is the LEFT candidate (`b[j-1]`
/// against a gap). Tie-break MATCH > UP > LEFT.
pub fn global_linear_cell(
    mats: &mut Matrices,
    i: usize,
    j: usize,
    a: char,
    b: char,
    provider: &dyn ScoringProvider,
) {
    let x = mats.m[mats.idx(i - 1, j - 1)] + provider.score(a, b);
    let y = mats.m[mats.idx(i - 1, j)] + provider.score(a, crate::sequence::GAP);
    let z = mats.m[mats.idx(i, j - 1)] + provider.score(crate::sequence::GAP, b);

    let (value, dir) = if x >= y && x >= z {
        (x, Direction::Match)
    } else if y >= z {
        (y, Direction::Up)
    } else {
        (z, Direction::Left)
    };

    let idx = mats.idx(i, j);
    mats.m[idx] = value;
    mats.n[idx] = dir;
}

/// Gotoh affine recurrence. `open`/`extend` are the ordinary gap costs;
/// callers pass terminal-gap costs instead when filling a boundary cell.
#[allow(clippy::too_many_arguments)]
pub fn global_affine_cell(
    mats: &mut Matrices,
    i: usize,
    j: usize,
    a: char,
    b: char,
    provider: &dyn ScoringProvider,
    open: i32,
    extend: i32,
) {
    let idx = mats.idx(i, j);
    let up_idx = mats.idx(i - 1, j);
    let left_idx = mats.idx(i, j - 1);
    let diag_idx = mats.idx(i - 1, j - 1);

    let d = mats.d.as_ref().unwrap();
    let r = mats.r.as_ref().unwrap();

    // D: gap in `a` — an UP step, extending downward.
    let d_val = (d[up_idx] + extend).max(mats.m[up_idx] + open);
    // R: gap in `b` — a LEFT step, extending rightward.
    let r_val = (r[left_idx] + extend).max(mats.m[left_idx] + open);

    let diag = mats.m[diag_idx] + provider.score(a, b);

    let (value, dir) = if diag >= d_val && diag >= r_val {
        (diag, Direction::Match)
    } else if d_val >= r_val {
        (d_val, Direction::Up)
    } else {
        (r_val, Direction::Left)
    };

    mats.d.as_mut().unwrap()[idx] = d_val;
    mats.r.as_mut().unwrap()[idx] = r_val;
    mats.m[idx] = value;
    mats.n[idx] = dir;
}

/// Same interior as [`global_linear_cell`] but floored at 0; `TERMINATE`
/// when the floor wins.
pub fn local_linear_cell(
    mats: &mut Matrices,
    i: usize,
    j: usize,
    a: char,
    b: char,
    provider: &dyn ScoringProvider,
) {
    let x = mats.m[mats.idx(i - 1, j - 1)] + provider.score(a, b);
    let y = mats.m[mats.idx(i - 1, j)] + provider.score(a, crate::sequence::GAP);
    let z = mats.m[mats.idx(i, j - 1)] + provider.score(crate::sequence::GAP, b);

    let value = x.max(y).max(z).max(0);
    let dir = if value == 0 {
        Direction::Terminate
    } else if value == x {
        Direction::Match
    } else if value == y {
        Direction::Up
    } else {
        Direction::Left
    };

    let idx = mats.idx(i, j);
    mats.m[idx] = value;
    mats.n[idx] = dir;
}

/// Same interior as [`global_affine_cell`] with the local floor at 0.
#[allow(clippy::too_many_arguments)]
pub fn local_affine_cell(
    mats: &mut Matrices,
    i: usize,
    j: usize,
    a: char,
    b: char,
    provider: &dyn ScoringProvider,
    open: i32,
    extend: i32,
) {
    let idx = mats.idx(i, j);
    let up_idx = mats.idx(i - 1, j);
    let left_idx = mats.idx(i, j - 1);
    let diag_idx = mats.idx(i - 1, j - 1);

    let d = mats.d.as_ref().unwrap();
    let r = mats.r.as_ref().unwrap();

    let d_val = ((d[up_idx] + extend).max(mats.m[up_idx] + open)).max(0);
    let r_val = ((r[left_idx] + extend).max(mats.m[left_idx] + open)).max(0);

    let diag = mats.m[diag_idx] + provider.score(a, b);

    let value = diag.max(d_val).max(r_val).max(0);
    let dir = if value == 0 {
        Direction::Terminate
    } else if value == diag {
        Direction::Match
    } else if value == d_val {
        Direction::Up
    } else {
        Direction::Left
    };

    mats.d.as_mut().unwrap()[idx] = d_val;
    mats.r.as_mut().unwrap()[idx] = r_val;
    mats.m[idx] = value;
    mats.n[idx] = dir;
}
