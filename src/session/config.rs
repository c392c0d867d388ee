//! Session configuration
//!
//! Defaults mirror the interactive demo: ten-base sequences, the four
//! built-in presets, and random substitution for presets whose length
//! differs from the submitted sequence.

use super::PresetTable;

/// Length of the pre-filled random input sequence.
pub const DEFAULT_SEQUENCE_LENGTH: usize = 10;

/// Configuration shared by every session a registry opens.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Length of sequences produced by [`super::Session::random_sequence`].
    pub default_length: usize,

    /// Named reference sequences.
    pub presets: PresetTable,

    /// Replace a preset with a random sequence when lengths differ.
    /// When disabled the comparison fails with a length mismatch instead.
    pub substitute_mismatched_presets: bool,
}

impl SessionConfig {
    /// Defaults with OS-entropy randomness.
    pub fn new() -> Self {
        Self {
            seed: None,
            default_length: DEFAULT_SEQUENCE_LENGTH,
            presets: PresetTable::default(),
            substitute_mismatched_presets: true,
        }
    }

    /// Fix the RNG seed for reproducible sessions.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the default random sequence length (at least 1).
    pub fn with_default_length(mut self, length: usize) -> Self {
        self.default_length = length.max(1);
        self
    }

    /// Replace the preset table.
    pub fn with_presets(mut self, presets: PresetTable) -> Self {
        self.presets = presets;
        self
    }

    /// Enable or disable random substitution for mismatched presets.
    pub fn with_preset_substitution(mut self, enabled: bool) -> Self {
        self.substitute_mismatched_presets = enabled;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
