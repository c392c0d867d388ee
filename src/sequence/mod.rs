//! Nucleotide sequences over the fixed {A, T, C, G} alphabet.
//!
//! A [`Sequence`] is validated once at construction and is immutable
//! afterwards, so every downstream component can rely on:
//! - length > 0
//! - every symbol belongs to the alphabet

mod generator;

pub use generator::SequenceGenerator;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The four symbols a [`Sequence`] may contain, in generator order.
pub const ALPHABET: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::T, Nucleotide::C, Nucleotide::G];

/// Single nucleotide symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Nucleotide {
    /// Adenine.
    A,
    /// Thymine.
    T,
    /// Cytosine.
    C,
    /// Guanine.
    G,
}

impl Nucleotide {
    /// Parse a character, accepting either case.
    pub fn from_char(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'A' => Some(Nucleotide::A),
            'T' => Some(Nucleotide::T),
            'C' => Some(Nucleotide::C),
            'G' => Some(Nucleotide::G),
            _ => None,
        }
    }

    /// Uppercase character for this symbol.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::T => 'T',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Errors raised while building a [`Sequence`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Input text contained no symbols.
    #[error("sequence is empty")]
    EmptySequence,

    /// A symbol outside {A, T, C, G} was found after uppercasing.
    #[error("invalid symbol '{symbol}' at offset {offset} (expected one of A, T, C, G)")]
    InvalidAlphabet {
        /// Offending symbol as supplied by the caller.
        symbol: char,
        /// Character offset within the input.
        offset: usize,
    },

    /// Requested generator length was zero.
    #[error("invalid sequence length {0}: must be at least 1")]
    InvalidLength(usize),
}

/// Validated, immutable nucleotide sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sequence {
    symbols: Box<[Nucleotide]>,
}

impl Sequence {
    /// Parse free text, normalising to uppercase before validation.
    pub fn parse(text: &str) -> Result<Self, SequenceError> {
        if text.is_empty() {
            return Err(SequenceError::EmptySequence);
        }

        let symbols = text
            .chars()
            .enumerate()
            .map(|(offset, symbol)| {
                Nucleotide::from_char(symbol)
                    .ok_or(SequenceError::InvalidAlphabet { symbol, offset })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            symbols: symbols.into_boxed_slice(),
        })
    }

    /// Build from already-typed symbols.
    pub fn from_symbols(symbols: Vec<Nucleotide>) -> Result<Self, SequenceError> {
        if symbols.is_empty() {
            return Err(SequenceError::EmptySequence);
        }
        Ok(Self {
            symbols: symbols.into_boxed_slice(),
        })
    }

    /// Number of symbols (always > 0).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Borrow the symbols.
    pub fn symbols(&self) -> &[Nucleotide] {
        &self.symbols
    }

    /// Symbol at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<Nucleotide> {
        self.symbols.get(index).copied()
    }

    /// Iterate over the symbols in order.
    pub fn iter(&self) -> impl Iterator<Item = Nucleotide> + '_ {
        self.symbols.iter().copied()
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sequence::parse(s)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols.iter() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalises_case() {
        let seq = Sequence::parse("atCg").unwrap();
        assert_eq!(seq.to_string(), "ATCG");
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(Sequence::parse(""), Err(SequenceError::EmptySequence));
        assert_eq!(
            Sequence::from_symbols(Vec::new()),
            Err(SequenceError::EmptySequence)
        );
    }

    #[test]
    fn parse_reports_first_invalid_symbol() {
        let err = Sequence::parse("ACGU").unwrap_err();
        assert_eq!(
            err,
            SequenceError::InvalidAlphabet {
                symbol: 'U',
                offset: 3
            }
        );

        // N is a valid IUPAC code but outside this alphabet.
        assert!(matches!(
            Sequence::parse("an"),
            Err(SequenceError::InvalidAlphabet { symbol: 'n', offset: 1 })
        ));
    }

    #[test]
    fn whitespace_is_not_stripped() {
        assert!(matches!(
            Sequence::parse(" ACGT"),
            Err(SequenceError::InvalidAlphabet { symbol: ' ', offset: 0 })
        ));
    }
}
