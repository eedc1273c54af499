use std::collections::HashMap;

use crate::error::AlignError;
use crate::sequence::GAP;

use super::ScoringProvider;

/// A substitution matrix backed by an ordered alphabet and a square score
/// table (e.g. BLOSUM62), plus the gap cost used when either argument to
/// [`score`](ScoringProvider::score) is the gap sentinel.
#[derive(Debug, Clone)]
pub struct SubstitutionMatrix {
    name: String,
    list: Vec<char>,
    index_of: HashMap<char, usize>,
    scores: Vec<Vec<i32>>,
    gap_open: i32,
}

impl SubstitutionMatrix {
    /// Parse a whitespace-tokenized matrix: a header line of ordered
    /// symbols, followed by one row of integers per symbol, square.
    ///
    /// Lines starting with `#` and blank lines are skipped. `name` is used
    /// only for error messages naming the offending matrix.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, AlignError> {
        let name = name.into();
        let mut lines = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'));

        let header = lines
            .next()
            .ok_or_else(|| AlignError::MalformedMatrix(format!("{name}: no header line")))?;
        let list: Vec<char> = header
            .split_whitespace()
            .map(|tok| {
                let mut chars = tok.chars();
                let c = chars.next().ok_or_else(|| {
                    AlignError::MalformedMatrix(format!("{name}: empty header token"))
                })?;
                if chars.next().is_some() {
                    return Err(AlignError::MalformedMatrix(format!(
                        "{name}: header token '{tok}' is not a single symbol"
                    )));
                }
                Ok(c)
            })
            .collect::<Result<_, AlignError>>()?;

        if list.is_empty() {
            return Err(AlignError::EmptyAlphabet);
        }

        let mut index_of = HashMap::with_capacity(list.len());
        for (i, &c) in list.iter().enumerate() {
            index_of.insert(c, i);
        }

        let mut scores = Vec::with_capacity(list.len());
        for (row_i, line) in lines.enumerate() {
            let values: Vec<i32> = line
                .split_whitespace()
                .map(|tok| {
                    tok.parse::<i32>().map_err(|_| {
                        AlignError::MalformedMatrix(format!(
                            "{name}: row {row_i} has non-integer entry '{tok}'"
                        ))
                    })
                })
                .collect::<Result<_, AlignError>>()?;

            if values.len() != list.len() {
                return Err(AlignError::MalformedMatrix(format!(
                    "{name}: row {row_i} has {} entries, expected {}",
                    values.len(),
                    list.len()
                )));
            }
            scores.push(values);
        }

        if scores.len() != list.len() {
            return Err(AlignError::MalformedMatrix(format!(
                "{name}: {} rows, expected {} (square matrix)",
                scores.len(),
                list.len()
            )));
        }

        Ok(Self {
            name,
            list,
            index_of,
            scores,
            gap_open: -8,
        })
    }

    /// Override the gap cost returned for gap-involved queries (default
    /// -8, matching the shared default in the nucleotide parameter bundle).
    pub fn with_gap_open(mut self, gap_open: i32) -> Self {
        self.gap_open = gap_open;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alphabet(&self) -> &[char] {
        &self.list
    }

    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.index_of.get(&symbol).copied()
    }
}

impl ScoringProvider for SubstitutionMatrix {
    fn score(&self, x: char, y: char) -> i32 {
        if x == GAP || y == GAP {
            return self.gap_open;
        }
        let i = self.index_of(x).unwrap_or_else(|| {
            panic!("unknown symbol '{x}' in substitution matrix '{}'", self.name)
        });
        let j = self.index_of(y).unwrap_or_else(|| {
            panic!("unknown symbol '{y}' in substitution matrix '{}'", self.name)
        });
        self.scores[i][j]
    }

    fn score_checked(&self, x: char, y: char) -> Result<i32, AlignError> {
        if x == GAP || y == GAP {
            return Ok(self.gap_open);
        }
        let i = self.index_of(x).ok_or_else(|| AlignError::UnknownSymbol {
            symbol: x,
            matrix: self.name.clone(),
        })?;
        let j = self.index_of(y).ok_or_else(|| AlignError::UnknownSymbol {
            symbol: y,
            matrix: self.name.clone(),
        })?;
        Ok(self.scores[i][j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY: &str = "A C G T\n1 -1 -1 -1\n-1 1 -1 -1\n-1 -1 1 -1\n-1 -1 -1 1\n";

    #[test]
    fn test_parses_square_matrix() {
        let m = SubstitutionMatrix::parse("tiny", TINY).unwrap();
        assert_eq!(m.alphabet(), &['A', 'C', 'G', 'T']);
        assert_eq!(m.score('A', 'A'), 1);
        assert_eq!(m.score('A', 'C'), -1);
    }

    #[test]
    fn test_gap_query_uses_gap_open() {
        let m = SubstitutionMatrix::parse("tiny", TINY).unwrap().with_gap_open(-5);
        assert_eq!(m.score('A', GAP), -5);
        assert_eq!(m.score(GAP, 'G'), -5);
    }

    #[test]
    fn test_unknown_symbol_is_checked_error() {
        let m = SubstitutionMatrix::parse("tiny", TINY).unwrap();
        let err = m.score_checked('Z', 'A').unwrap_err();
        assert_eq!(
            err,
            AlignError::UnknownSymbol {
                symbol: 'Z',
                matrix: "tiny".to_string()
            }
        );
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let bad = "A C G\n1 -1 -1\n-1 1\n-1 -1 1\n";
        let err = SubstitutionMatrix::parse("bad", bad).unwrap_err();
        assert!(matches!(err, AlignError::MalformedMatrix(_)));
    }

    #[test]
    fn test_non_integer_entry_is_malformed() {
        let bad = "A C\n1 x\n-1 1\n";
        let err = SubstitutionMatrix::parse("bad", bad).unwrap_err();
        assert!(matches!(err, AlignError::MalformedMatrix(_)));
    }

    #[test]
    fn test_empty_header_is_empty_alphabet() {
        let bad = "\n1 2\n";
        let err = SubstitutionMatrix::parse("bad", bad).unwrap_err();
        assert_eq!(err, AlignError::EmptyAlphabet);
    }

    #[test]
    fn test_non_square_row_count_is_malformed() {
        let bad = "A C\n1 -1\n";
        let err = SubstitutionMatrix::parse("bad", bad).unwrap_err();
        assert!(matches!(err, AlignError::MalformedMatrix(_)));
    }
}
