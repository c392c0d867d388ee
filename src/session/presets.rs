use std::fmt;
use std::str::FromStr;

use crate::sequence::{Sequence, SequenceError};

/// Selection key that means "generate a random target".
pub const RANDOM_KEY: &str = "Random Sequence";

const DEFAULT_PRESETS: [(&str, &str); 4] = [
    ("Cat", "ATCGTACGTA"),
    ("Dog", "ATGGTACCTA"),
    ("Superhero", "TACCGGATAC"),
    ("Alien Creature", "CGTACGATCG"),
];

/// Named reference sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    /// Display name.
    pub name: String,
    /// Reference sequence.
    pub sequence: Sequence,
}

/// Ordered table of named reference sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetTable {
    presets: Vec<Preset>,
}

impl PresetTable {
    /// Empty table.
    pub fn empty() -> Self {
        Self {
            presets: Vec::new(),
        }
    }

    /// Add or replace a preset; replacement keeps the original position.
    pub fn insert(&mut self, name: &str, sequence: &str) -> Result<(), SequenceError> {
        let sequence = Sequence::parse(sequence)?;
        match self.position(name) {
            Some(idx) => self.presets[idx].sequence = sequence,
            None => self.presets.push(Preset {
                name: name.to_string(),
                sequence,
            }),
        }
        Ok(())
    }

    /// Case-insensitive lookup by name.
    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.position(name).map(|idx| &self.presets[idx])
    }

    /// Presets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the table has no presets.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.presets
            .iter()
            .position(|preset| preset.name.eq_ignore_ascii_case(name))
    }
}

impl Default for PresetTable {
    fn default() -> Self {
        let presets = DEFAULT_PRESETS
            .iter()
            .filter_map(|(name, seq)| {
                Sequence::parse(seq).ok().map(|sequence| Preset {
                    name: (*name).to_string(),
                    sequence,
                })
            })
            .collect();
        Self { presets }
    }
}

/// What to compare the submitted sequence against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetChoice {
    /// Fresh random sequence of the submitted length.
    Random,
    /// Named entry of the session's [`PresetTable`].
    Preset(String),
}

impl FromStr for TargetChoice {
    type Err = std::convert::Infallible;

    /// `"Random Sequence"` or `"random"` select [`TargetChoice::Random`];
    /// anything else names a preset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if key.eq_ignore_ascii_case(RANDOM_KEY) || key.eq_ignore_ascii_case("random") {
            Ok(TargetChoice::Random)
        } else {
            Ok(TargetChoice::Preset(key.to_string()))
        }
    }
}

impl fmt::Display for TargetChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetChoice::Random => f.write_str(RANDOM_KEY),
            TargetChoice::Preset(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_holds_four_ten_base_presets() {
        let table = PresetTable::default();
        assert_eq!(table.len(), 4);
        assert!(table.iter().all(|preset| preset.sequence.len() == 10));
        assert_eq!(
            table.get("alien creature").map(|p| p.sequence.to_string()),
            Some("CGTACGATCG".to_string())
        );
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut table = PresetTable::default();
        table.insert("dog", "AAAA").unwrap();
        assert_eq!(table.len(), 4);
        let names: Vec<_> = table.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Cat", "Dog", "Superhero", "Alien Creature"]);
        assert_eq!(table.get("Dog").unwrap().sequence.len(), 4);

        assert!(table.insert("Bad", "AXA").is_err());
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn choice_parsing() {
        assert_eq!("Random Sequence".parse::<TargetChoice>(), Ok(TargetChoice::Random));
        assert_eq!(" random ".parse::<TargetChoice>(), Ok(TargetChoice::Random));
        assert_eq!(
            "Cat".parse::<TargetChoice>(),
            Ok(TargetChoice::Preset("Cat".to_string()))
        );
    }
}
