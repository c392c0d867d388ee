//! Per-session state and request handlers.
//!
//! A [`Session`] owns everything one user interacts with: the random
//! generator, the preset table, the leaderboard and the most recent
//! comparison. Requests run to completion one at a time and validate
//! before they mutate, so a failed request leaves the leaderboard as it was.

mod config;
mod presets;
mod registry;

pub use config::{SessionConfig, DEFAULT_SEQUENCE_LENGTH};
pub use presets::{Preset, PresetTable, TargetChoice, RANDOM_KEY};
pub use registry::{SessionId, SessionRegistry};

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::alignment::{self, AlignmentError, AlignmentResult};
use crate::leaderboard::{Leaderboard, LeaderboardError, RankedEntry};
use crate::sequence::{Sequence, SequenceError, SequenceGenerator};

/// Errors surfaced by session requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// Sequence generation failed.
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    /// Input validation or comparison failed.
    #[error(transparent)]
    Alignment(#[from] AlignmentError),

    /// Leaderboard submission was rejected.
    #[error(transparent)]
    Leaderboard(#[from] LeaderboardError),

    /// Target choice named a preset the session does not know.
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    /// `submit_latest` was called before any comparison succeeded.
    #[error("no comparison has been made in this session")]
    NoComparison,

    /// Registry lookup for a session that was never opened or was closed.
    #[error("unknown session '{0}'")]
    UnknownSession(SessionId),
}

/// Where the comparison target came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSource {
    /// Freshly generated random sequence.
    Random,
    /// Preset used as-is.
    Preset(String),
    /// Preset whose length differed; a random sequence was used instead.
    Substituted {
        /// Name of the preset that was requested.
        preset: String,
        /// Length of that preset.
        preset_length: usize,
    },
}

/// Outcome of a successful compare request.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Sequence the input was compared against.
    pub target: Sequence,
    /// Origin of `target`.
    pub source: TargetSource,
    /// Per-position result.
    pub result: AlignmentResult,
}

impl Comparison {
    /// Similarity of the comparison.
    pub fn similarity(&self) -> f64 {
        self.result.similarity()
    }
}

/// State for a single user session.
#[derive(Debug)]
pub struct Session<R = ChaCha8Rng> {
    id: SessionId,
    config: SessionConfig,
    generator: SequenceGenerator<R>,
    leaderboard: Leaderboard,
    last: Option<Comparison>,
}

impl Session<ChaCha8Rng> {
    /// Create a session seeded from `config.seed` (or OS entropy).
    pub fn new(id: SessionId, config: SessionConfig) -> Self {
        let generator = match config.seed {
            Some(seed) => SequenceGenerator::from_seed(seed),
            None => SequenceGenerator::from_entropy(),
        };
        Self::with_generator(id, config, generator)
    }
}

impl<R: Rng> Session<R> {
    /// Create a session around an explicit generator.
    pub fn with_generator(
        id: SessionId,
        config: SessionConfig,
        generator: SequenceGenerator<R>,
    ) -> Self {
        Self {
            id,
            config,
            generator,
            leaderboard: Leaderboard::new(),
            last: None,
        }
    }

    /// Compare `seq1` against the chosen target.
    ///
    /// `seq1` is uppercased and validated first. A preset whose length
    /// differs from `seq1` is replaced by a random sequence of the right
    /// length when substitution is enabled; otherwise the comparison fails
    /// with a length mismatch.
    pub fn compare_request(
        &mut self,
        seq1: &str,
        choice: &TargetChoice,
    ) -> Result<&Comparison, SessionError> {
        let query = Sequence::parse(seq1).map_err(AlignmentError::from)?;
        let (target, source) = self.resolve_target(&query, choice)?;
        let result = alignment::compare(&query, &target)?;

        debug!(
            session = %self.id,
            reference = %target,
            similarity = result.similarity(),
            "compare request"
        );
        Ok(&*self.last.insert(Comparison {
            target,
            source,
            result,
        }))
    }

    /// Add `(name, score)` to this session's leaderboard.
    pub fn submit_request(&mut self, name: &str, score: f64) -> Result<(), SessionError> {
        self.leaderboard.submit(name, score)?;
        Ok(())
    }

    /// Submit the similarity of the most recent comparison under `name`.
    pub fn submit_latest(&mut self, name: &str) -> Result<(), SessionError> {
        let score = self
            .last
            .as_ref()
            .map(Comparison::similarity)
            .ok_or(SessionError::NoComparison)?;
        self.submit_request(name, score)
    }

    /// Random sequence of the configured default length.
    pub fn random_sequence(&mut self) -> Result<Sequence, SessionError> {
        Ok(self.generator.generate(self.config.default_length)?)
    }

    /// Ranked leaderboard rows.
    pub fn snapshot(&self) -> Vec<RankedEntry> {
        self.leaderboard.snapshot()
    }

    /// Most recent successful comparison.
    pub fn last_comparison(&self) -> Option<&Comparison> {
        self.last.as_ref()
    }

    /// Session identifier.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Read-only leaderboard access.
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    fn resolve_target(
        &mut self,
        query: &Sequence,
        choice: &TargetChoice,
    ) -> Result<(Sequence, TargetSource), SessionError> {
        let name = match choice {
            TargetChoice::Random => {
                let target = self.generator.generate(query.len())?;
                return Ok((target, TargetSource::Random));
            }
            TargetChoice::Preset(name) => name,
        };

        let preset = self
            .config
            .presets
            .get(name)
            .ok_or_else(|| SessionError::UnknownPreset(name.clone()))?;

        if preset.sequence.len() == query.len() || !self.config.substitute_mismatched_presets {
            return Ok((preset.sequence.clone(), TargetSource::Preset(preset.name.clone())));
        }

        let source = TargetSource::Substituted {
            preset: preset.name.clone(),
            preset_length: preset.sequence.len(),
        };
        info!(
            session = %self.id,
            preset = %preset.name,
            preset_length = preset.sequence.len(),
            query_length = query.len(),
            "preset length differs; substituting random target"
        );
        let target = self.generator.generate(query.len())?;
        Ok((target, source))
    }
}
