//! Strict positional comparison of two equal-length sequences.
//!
//! No gaps or scoring matrices: position `i` of the first sequence is
//! compared with position `i` of the second and nothing else. Tags carry
//! the first sequence's symbol, so `compare(a, b)` and `compare(b, a)`
//! agree on counts but not on tag symbols.

use bitvec::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::sequence::{Nucleotide, Sequence, SequenceError};

/// Errors surfaced by the comparator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignmentError {
    /// The two sequences have different lengths.
    #[error("sequences must be the same length (got {left} and {right})")]
    LengthMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },

    /// One of the inputs failed validation.
    #[error("invalid sequence: {0}")]
    Sequence(#[from] SequenceError),
}

/// Per-position outcome: the observed symbol and whether it matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PositionTag {
    /// Symbol taken from the first sequence.
    pub symbol: Nucleotide,
    /// Whether the second sequence holds the same symbol here.
    pub matched: bool,
}

/// Result of comparing two sequences.
///
/// Counts are derived from the match mask, so
/// `matches() + mismatches() == len()` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlignmentResult {
    observed: Sequence,
    mask: BitVec,
}

impl AlignmentResult {
    /// Number of compared positions.
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    /// Always `false`; an empty comparison is rejected before construction.
    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Number of matching positions.
    pub fn matches(&self) -> usize {
        self.mask.count_ones()
    }

    /// Number of differing positions.
    pub fn mismatches(&self) -> usize {
        self.mask.count_zeros()
    }

    /// Similarity as a percentage in `[0, 100]`, unrounded.
    pub fn similarity(&self) -> f64 {
        100.0 * self.matches() as f64 / self.len() as f64
    }

    /// Tag at `index`, if in range.
    pub fn tag(&self, index: usize) -> Option<PositionTag> {
        let symbol = self.observed.get(index)?;
        Some(PositionTag {
            symbol,
            matched: self.mask[index],
        })
    }

    /// Tags in input order.
    pub fn tags(&self) -> impl Iterator<Item = PositionTag> + '_ {
        self.observed
            .iter()
            .zip(self.mask.iter().by_vals())
            .map(|(symbol, matched)| PositionTag { symbol, matched })
    }

    /// The first sequence, whose symbols the tags report.
    pub fn observed(&self) -> &Sequence {
        &self.observed
    }
}

/// Compare two validated sequences position by position.
pub fn compare(seq1: &Sequence, seq2: &Sequence) -> Result<AlignmentResult, AlignmentError> {
    if seq1.len() != seq2.len() {
        return Err(AlignmentError::LengthMismatch {
            left: seq1.len(),
            right: seq2.len(),
        });
    }

    let mut mask = BitVec::with_capacity(seq1.len());
    for (a, b) in seq1.iter().zip(seq2.iter()) {
        mask.push(a == b);
    }

    let result = AlignmentResult {
        observed: seq1.clone(),
        mask,
    };
    debug!(
        length = result.len(),
        matches = result.matches(),
        similarity = result.similarity(),
        "compared sequences"
    );
    Ok(result)
}

/// Validate two raw inputs and compare them.
///
/// Checks run in order: emptiness and alphabet of `seq1`, then of `seq2`,
/// then equal length.
pub fn compare_str(seq1: &str, seq2: &str) -> Result<AlignmentResult, AlignmentError> {
    let left = Sequence::parse(seq1)?;
    let right = Sequence::parse(seq2)?;
    compare(&left, &right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_mismatch_at_tail() {
        let result = compare_str("ATCG", "ATCC").unwrap();
        assert_eq!(result.matches(), 3);
        assert_eq!(result.mismatches(), 1);
        assert_eq!(result.similarity(), 75.0);
        assert_eq!(
            result.tag(3),
            Some(PositionTag {
                symbol: Nucleotide::G,
                matched: false
            })
        );
        assert_eq!(result.tag(4), None);
    }

    #[test]
    fn tags_follow_first_sequence() {
        let result = compare_str("AAGT", "TAGA").unwrap();
        let rendered: String = result
            .tags()
            .map(|tag| {
                if tag.matched {
                    tag.symbol.as_char()
                } else {
                    tag.symbol.as_char().to_ascii_lowercase()
                }
            })
            .collect();
        assert_eq!(rendered, "aAGt");
    }

    #[test]
    fn lowercase_input_is_normalised() {
        let result = compare_str("acgt", "ACGT").unwrap();
        assert_eq!(result.similarity(), 100.0);
    }

    #[test]
    fn errors_are_reported_before_length() {
        assert_eq!(
            compare_str("", "A"),
            Err(AlignmentError::Sequence(SequenceError::EmptySequence))
        );
        assert!(matches!(
            compare_str("AX", "ATC"),
            Err(AlignmentError::Sequence(SequenceError::InvalidAlphabet { symbol: 'X', offset: 1 }))
        ));
        assert_eq!(
            compare_str("AT", "ATC"),
            Err(AlignmentError::LengthMismatch { left: 2, right: 3 })
        );
    }
}
