//! Public alignment API: global and local alignment over protein and
//! nucleotide alphabets, with linear and affine gap variants, plus the
//! result types they return.

use crate::dp::driver::{
    fill_global_affine, fill_global_linear, fill_local_affine, fill_local_linear,
};
use crate::dp::traceback::{traceback_global, traceback_local};
use crate::dp::types::{Direction, Matrices};
use crate::error::AlignError;
use crate::scoring::blosum62::blosum62;
use crate::scoring::{GapParams, NucleotideParams, ScoringProvider};
use crate::sequence::ResidueSource;

fn chars_upper(s: &str) -> Vec<char> {
    s.chars().flat_map(|c| c.to_uppercase()).collect()
}

/// Result of a global (Needleman-Wunsch) alignment.
#[derive(Debug)]
pub struct Alignment {
    score: i32,
    seq1_gapped: String,
    seq2_gapped: String,
    matrices: Matrices,
}

impl Alignment {
    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn seq1(&self) -> &str {
        &self.seq1_gapped
    }

    pub fn seq2(&self) -> &str {
        &self.seq2_gapped
    }

    /// The `M` score matrix, row-major, `(rows, cols)` given by
    /// [`Alignment::shape`].
    pub fn dp_matrix(&self) -> &[i32] {
        &self.matrices.m
    }

    pub fn dp_traceback(&self) -> &[Direction] {
        &self.matrices.n
    }

    /// `D` (gap-in-`a`) matrix; `None` for linear-gap alignments.
    pub fn dp_down_matrix(&self) -> Option<&[i32]> {
        self.matrices.d.as_deref()
    }

    /// `R` (gap-in-`b`) matrix; `None` for linear-gap alignments.
    pub fn dp_right_matrix(&self) -> Option<&[i32]> {
        self.matrices.r.as_deref()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.matrices.rows(), self.matrices.cols())
    }
}

/// Result of a local (Smith-Waterman) alignment.
#[derive(Debug)]
pub struct LocalAlignment {
    score: i32,
    seq1_gapped: String,
    seq2_gapped: String,
    ungapped_seq1: String,
    ungapped_seq2: String,
    matrices: Matrices,
}

impl LocalAlignment {
    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn seq1(&self) -> &str {
        &self.seq1_gapped
    }

    pub fn seq2(&self) -> &str {
        &self.seq2_gapped
    }

    pub fn ungapped_seq1(&self) -> &str {
        &self.ungapped_seq1
    }

    pub fn ungapped_seq2(&self) -> &str {
        &self.ungapped_seq2
    }

    pub fn dp_matrix(&self) -> &[i32] {
        &self.matrices.m
    }

    pub fn dp_traceback(&self) -> &[Direction] {
        &self.matrices.n
    }

    pub fn dp_down_matrix(&self) -> Option<&[i32]> {
        self.matrices.d.as_deref()
    }

    pub fn dp_right_matrix(&self) -> Option<&[i32]> {
        self.matrices.r.as_deref()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.matrices.rows(), self.matrices.cols())
    }
}

/// Minimal scoring bundle for [`local_align_na`]: just `{gap, match,
/// mismatch}`, no affine/transition/terminal fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalNaParams {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub gap: i32,
}

impl Default for LocalNaParams {
    fn default() -> Self {
        Self {
            match_score: 4,
            mismatch_score: -4,
            gap: -8,
        }
    }
}

fn check_alphabet(
    provider: &dyn ScoringProvider,
    a: &[char],
    b: &[char],
) -> Result<(), AlignError> {
    for &x in a.iter().chain(b.iter()) {
        provider.score_checked(x, x)?;
    }
    Ok(())
}

/// Global alignment of two amino-acid sequences under BLOSUM62, linear gap
/// penalty -8. A standard Needleman-Wunsch reference: end gaps are
/// penalized exactly like interior ones.
pub fn global_align_aa(
    a: impl ResidueSource,
    b: impl ResidueSource,
) -> Result<Alignment, AlignError> {
    let av = chars_upper(a.residues());
    let bv = chars_upper(b.residues());
    let matrix = blosum62();
    check_alphabet(matrix, &av, &bv)?;

    let gaps = GapParams::default();
    let matrices = fill_global_linear(&av, &bv, matrix, &gaps);
    let tb = traceback_global(&matrices, &av, &bv);
    let score = matrices.m[matrices.idx(av.len(), bv.len())];

    Ok(Alignment {
        score,
        seq1_gapped: tb.seq1_gapped,
        seq2_gapped: tb.seq2_gapped,
        matrices,
    })
}

/// Global alignment of two nucleic-acid sequences under a linear gap
/// penalty.
pub fn global_align_na(
    a: impl ResidueSource,
    b: impl ResidueSource,
    params: &NucleotideParams,
) -> Alignment {
    let av = chars_upper(a.residues());
    let bv = chars_upper(b.residues());

    let gaps = GapParams {
        gap_open: params.gap_open,
        gap_extend: params.gap_extend,
        terminal_gap: params.terminal_gap,
        terminal_gap_extend: params.terminal_gap_extend,
    };
    let matrices = fill_global_linear(&av, &bv, params, &gaps);
    let tb = traceback_global(&matrices, &av, &bv);
    let score = matrices.m[matrices.idx(av.len(), bv.len())];

    Alignment {
        score,
        seq1_gapped: tb.seq1_gapped,
        seq2_gapped: tb.seq2_gapped,
        matrices,
    }
}

/// Global affine (Gotoh) alignment of two amino-acid sequences under
/// BLOSUM62 with caller-supplied gap costs.
pub fn global_align_aa_affine(
    a: impl ResidueSource,
    b: impl ResidueSource,
    params: &GapParams,
) -> Result<Alignment, AlignError> {
    let av = chars_upper(a.residues());
    let bv = chars_upper(b.residues());
    let matrix = blosum62().clone().with_gap_open(params.gap_open);
    check_alphabet(&matrix, &av, &bv)?;

    let matrices = fill_global_affine(&av, &bv, &matrix, params);
    let tb = traceback_global(&matrices, &av, &bv);
    let score = matrices.m[matrices.idx(av.len(), bv.len())];

    Ok(Alignment {
        score,
        seq1_gapped: tb.seq1_gapped,
        seq2_gapped: tb.seq2_gapped,
        matrices,
    })
}

/// Global affine (Gotoh) alignment of two nucleic-acid sequences.
pub fn global_align_na_affine(
    a: impl ResidueSource,
    b: impl ResidueSource,
    params: &NucleotideParams,
) -> Alignment {
    let av = chars_upper(a.residues());
    let bv = chars_upper(b.residues());

    let gaps = GapParams {
        gap_open: params.gap_open,
        gap_extend: params.gap_extend,
        terminal_gap: params.terminal_gap,
        terminal_gap_extend: params.terminal_gap_extend,
    };
    let matrices = fill_global_affine(&av, &bv, params, &gaps);
    let tb = traceback_global(&matrices, &av, &bv);
    let score = matrices.m[matrices.idx(av.len(), bv.len())];

    Alignment {
        score,
        seq1_gapped: tb.seq1_gapped,
        seq2_gapped: tb.seq2_gapped,
        matrices,
    }
}

/// Local (Smith-Waterman) alignment of two amino-acid sequences under
/// BLOSUM62, linear gap penalty -8.
pub fn local_align_aa(
    a: impl ResidueSource,
    b: impl ResidueSource,
) -> Result<LocalAlignment, AlignError> {
    let av = chars_upper(a.residues());
    let bv = chars_upper(b.residues());
    let matrix = blosum62();
    check_alphabet(matrix, &av, &bv)?;

    let fill = fill_local_linear(&av, &bv, matrix);
    let tb = traceback_local(&fill.matrices, &av, &bv, fill.max_i, fill.max_j);

    Ok(LocalAlignment {
        score: fill.max_score,
        seq1_gapped: tb.seq1_gapped,
        seq2_gapped: tb.seq2_gapped,
        ungapped_seq1: tb.ungapped_seq1,
        ungapped_seq2: tb.ungapped_seq2,
        matrices: fill.matrices,
    })
}

/// Local (Smith-Waterman) alignment of two nucleic-acid sequences under a
/// minimal `{gap, match, mismatch}` scoring bundle.
pub fn local_align_na(
    a: impl ResidueSource,
    b: impl ResidueSource,
    params: &LocalNaParams,
) -> LocalAlignment {
    let av = chars_upper(a.residues());
    let bv = chars_upper(b.residues());

    let provider = NucleotideParams {
        match_score: params.match_score,
        mismatch_score: params.mismatch_score,
        gap_open: params.gap,
        gap_extend: params.gap,
        transition: None,
        terminal_gap: None,
        terminal_gap_extend: None,
    };

    let fill = fill_local_linear(&av, &bv, &provider);
    let tb = traceback_local(&fill.matrices, &av, &bv, fill.max_i, fill.max_j);

    LocalAlignment {
        score: fill.max_score,
        seq1_gapped: tb.seq1_gapped,
        seq2_gapped: tb.seq2_gapped,
        ungapped_seq1: tb.ungapped_seq1,
        ungapped_seq2: tb.ungapped_seq2,
        matrices: fill.matrices,
    }
}

/// Local affine alignment of two amino-acid sequences under BLOSUM62 with
/// default gap costs (no terminal-gap concept for local alignment).
pub fn local_align_aa_affine(
    a: impl ResidueSource,
    b: impl ResidueSource,
) -> Result<LocalAlignment, AlignError> {
    let av = chars_upper(a.residues());
    let bv = chars_upper(b.residues());
    let gaps = GapParams::default();
    let matrix = blosum62().clone().with_gap_open(gaps.gap_open);
    check_alphabet(&matrix, &av, &bv)?;

    let fill = fill_local_affine(&av, &bv, &matrix, &gaps);
    let tb = traceback_local(&fill.matrices, &av, &bv, fill.max_i, fill.max_j);

    Ok(LocalAlignment {
        score: fill.max_score,
        seq1_gapped: tb.seq1_gapped,
        seq2_gapped: tb.seq2_gapped,
        ungapped_seq1: tb.ungapped_seq1,
        ungapped_seq2: tb.ungapped_seq2,
        matrices: fill.matrices,
    })
}

/// Local affine alignment of two nucleic-acid sequences with default
/// match/mismatch/gap-open/gap-extend costs.
pub fn local_align_na_affine(a: impl ResidueSource, b: impl ResidueSource) -> LocalAlignment {
    let av = chars_upper(a.residues());
    let bv = chars_upper(b.residues());
    let params = NucleotideParams::default();
    let gaps = GapParams {
        gap_open: params.gap_open,
        gap_extend: params.gap_extend,
        terminal_gap: None,
        terminal_gap_extend: None,
    };

    let fill = fill_local_affine(&av, &bv, &params, &gaps);
    let tb = traceback_local(&fill.matrices, &av, &bv, fill.max_i, fill.max_j);

    LocalAlignment {
        score: fill.max_score,
        seq1_gapped: tb.seq1_gapped,
        seq2_gapped: tb.seq2_gapped,
        ungapped_seq1: tb.ungapped_seq1,
        ungapped_seq2: tb.ungapped_seq2,
        matrices: fill.matrices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_gaps(s: &str) -> String {
        s.chars().filter(|&c| c != '-').collect()
    }

    #[test]
    fn test_global_aa_roundtrips_to_inputs() {
        let aln = global_align_aa("HEAGAWGHEE", "PAWHEAE").unwrap();
        assert_eq!(strip_gaps(aln.seq1()), "HEAGAWGHEE");
        assert_eq!(strip_gaps(aln.seq2()), "PAWHEAE");
        assert_eq!(aln.seq1().len(), aln.seq2().len());
    }

    #[test]
    fn test_global_na_simple_scoring() {
        let params = NucleotideParams {
            match_score: 1,
            mismatch_score: -1,
            gap_open: -1,
            gap_extend: 0,
            transition: None,
            terminal_gap: None,
            terminal_gap_extend: None,
        };
        let aln = global_align_na("GATTACA", "GCATGCU", &params);
        assert_eq!(strip_gaps(aln.seq1()), "GATTACA");
        assert_eq!(strip_gaps(aln.seq2()), "GCATGCU");
        assert_eq!(aln.seq1().len(), aln.seq2().len());
    }

    #[test]
    fn test_local_na_finds_shared_motif() {
        let params = LocalNaParams {
            match_score: 2,
            mismatch_score: -1,
            gap: -2,
        };
        let aln = local_align_na("AAAATTTTGGGG", "CCCCTTTTCCCC", &params);
        assert_eq!(aln.ungapped_seq1(), "TTTT");
        assert_eq!(aln.ungapped_seq2(), "TTTT");
        assert_eq!(aln.score(), 8);
    }

    #[test]
    fn test_global_na_affine_prefers_single_mismatch_over_gap_pair() {
        let params = NucleotideParams {
            match_score: 4,
            mismatch_score: -4,
            gap_open: -8,
            gap_extend: -2,
            transition: None,
            terminal_gap: None,
            terminal_gap_extend: None,
        };
        let aln = global_align_na_affine("AAAAAA", "AAGAAA", &params);
        assert_eq!(aln.score(), 16);
    }

    #[test]
    fn test_global_na_no_terminal_override_matches_internal_gap() {
        let params = NucleotideParams::default();
        let aln = global_align_na("ACGT", "ACGT", &params);
        assert_eq!(aln.score(), 4 * params.match_score);
        assert!(!aln.seq1().contains('-'));
        assert!(!aln.seq2().contains('-'));
    }

    #[test]
    fn test_local_aa_affine_self_alignment_is_identity() {
        let x = "MKTAYIAKQRQISFVKSHFSRQ";
        let aln = local_align_aa_affine(x, x).unwrap();
        assert_eq!(aln.seq1(), x);
        assert_eq!(aln.seq2(), x);
        assert_eq!(aln.ungapped_seq1(), x);
    }

    #[test]
    fn test_unknown_aa_symbol_is_reported() {
        let err = global_align_aa("HEAGAWGHEE", "PAWHEAZ1").unwrap_err();
        assert!(matches!(err, AlignError::UnknownSymbol { .. }));
    }

    #[test]
    fn test_no_column_has_gaps_on_both_sides() {
        let aln = global_align_aa("HEAGAWGHEE", "PAWHEAE").unwrap();
        let s1: Vec<char> = aln.seq1().chars().collect();
        let s2: Vec<char> = aln.seq2().chars().collect();
        for (c1, c2) in s1.iter().zip(s2.iter()) {
            assert!(!(*c1 == '-' && *c2 == '-'));
        }
    }
}
