//! Append-only ranked leaderboard
//!
//! Entries are kept sorted by score (descending). Equal scores keep their
//! submission order because the re-sort after each append is stable.
//! There is no update or delete path.

use std::cmp::Ordering;

use thiserror::Error;
use tracing::debug;

/// Lowest accepted score.
pub const MIN_SCORE: f64 = 0.0;
/// Highest accepted score.
pub const MAX_SCORE: f64 = 100.0;

/// Errors raised by [`Leaderboard::submit`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LeaderboardError {
    /// Name was empty or whitespace-only.
    #[error("name must not be empty")]
    EmptyName,

    /// Score was outside `[0, 100]` or not a number.
    #[error("score {0} is outside [0, 100]")]
    ScoreOutOfRange(f64),
}

/// Stored submission.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LeaderboardEntry {
    /// Submitter name, stored as given.
    pub name: String,
    /// Similarity score in `[0, 100]`.
    pub score: f64,
    /// 0-based submission sequence number.
    pub submitted: u64,
}

/// Snapshot row with its 1-based rank.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RankedEntry {
    /// 1-based position in the snapshot.
    pub rank: usize,
    /// Submitter name.
    pub name: String,
    /// Submitted score.
    pub score: f64,
}

/// Session-scoped leaderboard.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    next_submission: u64,
}

impl Leaderboard {
    /// Create an empty leaderboard.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_submission: 0,
        }
    }

    /// Append an entry and restore descending score order.
    ///
    /// Validation happens before anything is stored.
    pub fn submit(&mut self, name: &str, score: f64) -> Result<(), LeaderboardError> {
        if name.trim().is_empty() {
            return Err(LeaderboardError::EmptyName);
        }
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(LeaderboardError::ScoreOutOfRange(score));
        }

        let submitted = self.next_submission;
        self.next_submission += 1;
        self.entries.push(LeaderboardEntry {
            name: name.to_string(),
            score,
            submitted,
        });
        // `sort_by` is stable: ties stay in submission order. NaN was rejected above.
        self.entries
            .sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        debug!(name, score, submitted, total = self.entries.len(), "leaderboard submission");
        Ok(())
    }

    /// Ranked copy of the current entries.
    pub fn snapshot(&self) -> Vec<RankedEntry> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| RankedEntry {
                rank: idx + 1,
                name: entry.name.clone(),
                score: entry.score,
            })
            .collect()
    }

    /// Borrowed view of the sorted entries.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Highest-ranked entry.
    pub fn best(&self) -> Option<&LeaderboardEntry> {
        self.entries.first()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been submitted yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
