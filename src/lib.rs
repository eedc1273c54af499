pub mod alignment;
pub mod dp;
pub mod error;
pub mod scoring;
pub mod sequence;

pub use alignment::{
    global_align_aa, global_align_aa_affine, global_align_na, global_align_na_affine,
    local_align_aa, local_align_aa_affine, local_align_na, local_align_na_affine, Alignment,
    LocalAlignment, LocalNaParams,
};
pub use dp::{Direction, Matrices};
pub use error::AlignError;
pub use scoring::{GapParams, NucleotideParams, ScoringProvider, SubstitutionMatrix};
pub use sequence::{ResidueSource, GAP};
