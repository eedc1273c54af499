use thiserror::Error;

/// Failure modes surfaced by the scoring layer.
///
/// The DP driver and traceback never fail on well-formed matrices; anything
/// that happens during the fill or walk-back is a programmer error and
/// panics with a diagnostic rather than returning one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// A scoring lookup referenced a symbol absent from the substitution
    /// matrix's alphabet.
    #[error("unknown symbol '{symbol}' in substitution matrix '{matrix}'")]
    UnknownSymbol { symbol: char, matrix: String },

    /// A substitution-matrix text blob did not parse: wrong row length,
    /// non-integer entry, or a row count that didn't match the header.
    #[error("malformed substitution matrix: {0}")]
    MalformedMatrix(String),

    /// The header line of a substitution matrix named zero symbols.
    #[error("substitution matrix header has no symbols")]
    EmptyAlphabet,
}
