//! # Positional DNA comparison with a session leaderboard
//!
//! Compare a short nucleotide sequence against a reference, position by
//! position, and rank the resulting similarity scores.
//!
//! ## Components
//!
//! 1. **Sequences**: validated {A, T, C, G} sequences and a seedable random generator
//! 2. **Alignment**: strict equal-length comparison producing per-position tags
//! 3. **Leaderboard**: append-only ranking, score descending, ties in submission order
//! 4. **Sessions**: explicit per-user state with compare/submit request handlers
//!
//! ## Usage Example
//!
//! ```
//! use dnamatch::{Session, SessionConfig, SessionId, TargetChoice};
//!
//! let mut session = Session::new(SessionId::from("demo"), SessionConfig::new().with_seed(7));
//! let comparison = session
//!     .compare_request("ATCGTACGTA", &TargetChoice::Preset("Dog".into()))
//!     .unwrap();
//! assert_eq!(comparison.similarity(), 80.0);
//!
//! session.submit_latest("Alice").unwrap();
//! assert_eq!(session.snapshot()[0].rank, 1);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod sequence;    // Alphabet, sequences, random generation
pub mod alignment;   // Positional comparator
pub mod leaderboard; // Ranked append-only store
pub mod session;     // Session state and request handlers
/// Python bindings for exposing sessions to external runtimes.
#[cfg(feature = "python-bindings")]
pub mod python_bindings;

// Re-exports for convenience
pub use alignment::{compare, compare_str, AlignmentError, AlignmentResult, PositionTag};
pub use leaderboard::{Leaderboard, LeaderboardEntry, LeaderboardError, RankedEntry};
pub use sequence::{Nucleotide, Sequence, SequenceError, SequenceGenerator, ALPHABET};
pub use session::{
    Comparison, PresetTable, Session, SessionConfig, SessionError, SessionId, SessionRegistry,
    TargetChoice, TargetSource,
};
