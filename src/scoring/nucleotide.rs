use serde::{Deserialize, Serialize};

use crate::sequence::GAP;

use super::ScoringProvider;

/// Parameter-bundle scoring provider for nucleic-acid alignment: match,
/// mismatch, an optional transition bonus, and gap costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NucleotideParams {
    /// Score awarded for a matching base pair.
    pub match_score: i32,
    /// Penalty for a mismatching base pair (should be negative).
    pub mismatch_score: i32,
    /// Penalty for opening a new gap (should be negative).
    pub gap_open: i32,
    /// Penalty for extending an existing gap (should be negative).
    pub gap_extend: i32,
    /// Bonus/penalty for a transition substitution (A<->G, C<->T), applied
    /// in place of `mismatch_score` when set.
    #[serde(default)]
    pub transition: Option<i32>,
    /// Penalty for a gap that touches either sequence's boundary, if
    /// different from `gap_open`. `None` means boundary gaps cost the same
    /// as interior ones.
    #[serde(default)]
    pub terminal_gap: Option<i32>,
    /// Penalty for extending a boundary-touching gap, if different from
    /// `gap_extend`.
    #[serde(default)]
    pub terminal_gap_extend: Option<i32>,
}

impl Default for NucleotideParams {
    fn default() -> Self {
        Self {
            match_score: 4,
            mismatch_score: -4,
            gap_open: -8,
            gap_extend: -2,
            transition: None,
            terminal_gap: None,
            terminal_gap_extend: None,
        }
    }
}

/// The purine/pyrimidine partner of a base under the transition relation
/// (A<->G, C<->T). Anything else (including `N` and IUPAC ambiguity codes)
/// maps to `N`, which never equals a real base, so it never counts as a
/// transition.
fn transition_partner(base: char) -> char {
    match base.to_ascii_uppercase() {
        'A' => 'G',
        'G' => 'A',
        'C' => 'T',
        'T' => 'C',
        _ => 'N',
    }
}

impl ScoringProvider for NucleotideParams {
    fn score(&self, x: char, y: char) -> i32 {
        if x == GAP || y == GAP {
            return self.gap_open;
        }
        let (x, y) = (x.to_ascii_uppercase(), y.to_ascii_uppercase());
        if x == y {
            return self.match_score;
        }
        if let Some(transition) = self.transition {
            if transition_partner(x) == y {
                return transition;
            }
        }
        self.mismatch_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_beats_mismatch() {
        let p = NucleotideParams::default();
        assert_eq!(p.score('A', 'A'), 4);
        assert_eq!(p.score('A', 'C'), -4);
    }

    #[test]
    fn test_gap_query_uses_gap_open() {
        let p = NucleotideParams::default();
        assert_eq!(p.score('A', GAP), -8);
        assert_eq!(p.score(GAP, 'A'), -8);
    }

    #[test]
    fn test_transition_overrides_mismatch_when_configured() {
        let mut p = NucleotideParams::default();
        p.transition = Some(-1);
        assert_eq!(p.score('A', 'G'), -1); // purine/purine transition
        assert_eq!(p.score('C', 'T'), -1); // pyrimidine/pyrimidine transition
        assert_eq!(p.score('A', 'C'), -4); // transversion still mismatch
    }

    #[test]
    fn test_transition_is_case_insensitive() {
        let mut p = NucleotideParams::default();
        p.transition = Some(-1);
        assert_eq!(p.score('a', 'g'), -1);
    }

    #[test]
    fn test_no_transition_configured_falls_back_to_mismatch() {
        let p = NucleotideParams::default();
        assert_eq!(p.score('A', 'G'), -4);
    }
}
