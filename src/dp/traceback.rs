//! Iterative reconstruction of aligned strings from the direction matrix.
//! Recursion from `(|a|,|b|)` to `(0,0)` would risk stack overflow on long
//! sequences; this walks an explicit loop into reversed buffers and
//! reverses once at the end.

use super::types::{Direction, Matrices};

/// Gapped alignment columns, built bottom-up then reversed once.
pub struct TracebackResult {
    pub seq1_gapped: String,
    pub seq2_gapped: String,
    /// Diagonal-only projection of `seq1_gapped` (local alignments only).
    pub ungapped_seq1: String,
    /// Diagonal-only projection of `seq2_gapped` (local alignments only).
    pub ungapped_seq2: String,
}

/// Global traceback: starts at `(|a|,|b|)`, stops at `(0,0)` or
/// `TERMINATE`. Forces LEFT on row 0 and UP on column 0 even if `N` wasn't
/// written there (defensive; the driver always writes it, but a caller
/// handing in matrices built elsewhere shouldn't be able to corrupt this).
pub fn traceback_global(mats: &Matrices, a: &[char], b: &[char]) -> TracebackResult {
    let mut seq1 = Vec::new();
    let mut seq2 = Vec::new();

    let mut i = a.len();
    let mut j = b.len();

    while i > 0 || j > 0 {
        let dir = if i == 0 {
            Direction::Left
        } else if j == 0 {
            Direction::Up
        } else {
            mats.n[mats.idx(i, j)]
        };

        match dir {
            Direction::Match => {
                seq1.push(a[i - 1]);
                seq2.push(b[j - 1]);
                i -= 1;
                j -= 1;
            }
            Direction::Up => {
                seq1.push(a[i - 1]);
                seq2.push('-');
                i -= 1;
            }
            Direction::Left => {
                seq1.push('-');
                seq2.push(b[j - 1]);
                j -= 1;
            }
            Direction::Terminate => break,
        }
    }

    seq1.reverse();
    seq2.reverse();

    TracebackResult {
        seq1_gapped: seq1.into_iter().collect(),
        seq2_gapped: seq2.into_iter().collect(),
        ungapped_seq1: String::new(),
        ungapped_seq2: String::new(),
    }
}

/// Local traceback: starts at `(start_i, start_j)`, additionally stops the
/// moment `M[i][j] == 0`. Diagonal (MATCH) steps also feed the two
/// ungapped buffers.
pub fn traceback_local(
    mats: &Matrices,
    a: &[char],
    b: &[char],
    start_i: usize,
    start_j: usize,
) -> TracebackResult {
    let mut seq1 = Vec::new();
    let mut seq2 = Vec::new();
    let mut ungapped1 = Vec::new();
    let mut ungapped2 = Vec::new();

    let mut i = start_i;
    let mut j = start_j;

    while i > 0 && j > 0 && mats.m[mats.idx(i, j)] > 0 {
        match mats.n[mats.idx(i, j)] {
            Direction::Match => {
                seq1.push(a[i - 1]);
                seq2.push(b[j - 1]);
                ungapped1.push(a[i - 1]);
                ungapped2.push(b[j - 1]);
                i -= 1;
                j -= 1;
            }
            Direction::Up => {
                seq1.push(a[i - 1]);
                seq2.push('-');
                i -= 1;
            }
            Direction::Left => {
                seq1.push('-');
                seq2.push(b[j - 1]);
                j -= 1;
            }
            Direction::Terminate => break,
        }
    }

    seq1.reverse();
    seq2.reverse();
    ungapped1.reverse();
    ungapped2.reverse();

    TracebackResult {
        seq1_gapped: seq1.into_iter().collect(),
        seq2_gapped: seq2.into_iter().collect(),
        ungapped_seq1: ungapped1.into_iter().collect(),
        ungapped_seq2: ungapped2.into_iter().collect(),
    }
}
