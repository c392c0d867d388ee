//! Shared helpers for integration tests

#![allow(dead_code)]

use dnamatch::{Leaderboard, Session, SessionConfig, SessionId};

/// Session with a fixed seed and the default presets.
pub fn seeded_session(id: &str, seed: u64) -> Session {
    Session::new(SessionId::from(id), SessionConfig::new().with_seed(seed))
}

/// Leaderboard filled with the given submissions, in order.
pub fn board_with(entries: &[(&str, f64)]) -> Leaderboard {
    let mut board = Leaderboard::new();
    for &(name, score) in entries {
        board.submit(name, score).expect("valid submission");
    }
    board
}

/// Render a snapshot as `rank name score` rows for compact assertions.
pub fn render_board(board: &Leaderboard) -> Vec<String> {
    board
        .snapshot()
        .into_iter()
        .map(|row| format!("{} {} {:.2}", row.rank, row.name, row.score))
        .collect()
}
