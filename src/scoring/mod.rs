pub mod blosum62;
pub mod matrix;
pub mod nucleotide;

pub use matrix::SubstitutionMatrix;
pub use nucleotide::NucleotideParams;

use crate::sequence::GAP;

/// A substitution-score provider: the only operation the recurrence layer
/// needs from a scoring scheme.
///
/// Implementors map a pair of symbols (an alphabet symbol or [`GAP`]) to an
/// integer score. For a gap-involved pair this doubles as the affine "open"
/// cost (`open = score(·, gap)`); the separate extend cost lives in
/// [`GapParams`] since no provider tracks run length itself.
pub trait ScoringProvider {
    fn score(&self, x: char, y: char) -> i32;

    /// Fallible variant used at call boundaries to fail fast on a symbol
    /// absent from the provider's alphabet, rather than panicking mid-fill.
    fn score_checked(&self, x: char, y: char) -> Result<i32, crate::error::AlignError> {
        Ok(self.score(x, y))
    }
}

/// Gap-open / gap-extend costs shared by every affine entry point, plus an
/// optional terminal-gap override.
///
/// `terminal_gap`/`terminal_gap_extend` default to `None`, meaning "no
/// override": a gap touching either sequence's boundary costs exactly what
/// an interior gap costs. Only a caller who explicitly sets `Some(cost)`
/// gets free or cheapened end-gaps; a bare `0` is a real, distinct cost,
/// not a sentinel for "unset", which is why this isn't a plain `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GapParams {
    /// Penalty for opening a new gap (should be negative).
    pub gap_open: i32,
    /// Penalty for extending an existing gap (should be negative).
    pub gap_extend: i32,
    /// Penalty for a gap that touches either sequence's boundary, if
    /// different from `gap_open`.
    #[serde(default)]
    pub terminal_gap: Option<i32>,
    /// Penalty for extending a boundary-touching gap, if different from
    /// `gap_extend`.
    #[serde(default)]
    pub terminal_gap_extend: Option<i32>,
}

impl Default for GapParams {
    fn default() -> Self {
        Self {
            gap_open: -8,
            gap_extend: -2,
            terminal_gap: None,
            terminal_gap_extend: None,
        }
    }
}

impl GapParams {
    /// The cost actually charged for opening a boundary-touching gap:
    /// `terminal_gap` if the caller set one, `gap_open` otherwise.
    pub fn effective_terminal_gap(&self) -> i32 {
        self.terminal_gap.unwrap_or(self.gap_open)
    }

    /// The cost actually charged for extending a boundary-touching gap:
    /// `terminal_gap_extend` if the caller set one, `gap_extend` otherwise.
    pub fn effective_terminal_gap_extend(&self) -> i32 {
        self.terminal_gap_extend.unwrap_or(self.gap_extend)
    }
}

/// Wraps a provider so a gap-involved query returns the terminal-gap cost
/// instead of the ordinary one.
///
/// The recurrence layer never asks "am I on the boundary" itself; the
/// driver decides, cell by cell, whether to pass this wrapper or the
/// unwrapped provider into a recurrence call.
pub struct TerminalGapView<'a, P: ScoringProvider + ?Sized> {
    inner: &'a P,
    terminal_gap: i32,
}

impl<'a, P: ScoringProvider + ?Sized> TerminalGapView<'a, P> {
    pub fn new(inner: &'a P, terminal_gap: i32) -> Self {
        Self {
            inner,
            terminal_gap,
        }
    }
}

impl<'a, P: ScoringProvider + ?Sized> ScoringProvider for TerminalGapView<'a, P> {
    fn score(&self, x: char, y: char) -> i32 {
        if x == GAP || y == GAP {
            self.terminal_gap
        } else {
            self.inner.score(x, y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_terminal_gap_falls_back_to_ordinary() {
        let gaps = GapParams::default();
        assert_eq!(gaps.effective_terminal_gap(), gaps.gap_open);
        assert_eq!(gaps.effective_terminal_gap_extend(), gaps.gap_extend);
    }

    #[test]
    fn test_explicit_terminal_override_wins() {
        let gaps = GapParams {
            gap_open: -8,
            gap_extend: -2,
            terminal_gap: Some(0),
            terminal_gap_extend: Some(0),
        };
        assert_eq!(gaps.effective_terminal_gap(), 0);
        assert_eq!(gaps.effective_terminal_gap_extend(), 0);
    }
}
