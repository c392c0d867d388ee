//! Leaderboard ordering tests

mod common;

use common::{board_with, render_board};
use dnamatch::{Leaderboard, LeaderboardError};

#[test]
fn higher_score_is_ranked_first() {
    let board = board_with(&[("Alice", 75.0), ("Bob", 90.0)]);
    assert_eq!(render_board(&board), ["1 Bob 90.00", "2 Alice 75.00"]);
}

#[test]
fn ties_keep_submission_order() {
    let board = board_with(&[("Alice", 50.0), ("Bob", 50.0)]);
    assert_eq!(render_board(&board), ["1 Alice 50.00", "2 Bob 50.00"]);
}

#[test]
fn ties_stay_stable_across_later_submissions() {
    let board = board_with(&[
        ("a", 40.0),
        ("b", 60.0),
        ("c", 40.0),
        ("d", 100.0),
        ("e", 40.0),
        ("f", 0.0),
    ]);
    assert_eq!(
        render_board(&board),
        [
            "1 d 100.00",
            "2 b 60.00",
            "3 a 40.00",
            "4 c 40.00",
            "5 e 40.00",
            "6 f 0.00",
        ]
    );
}

#[test]
fn failed_submission_keeps_existing_entries() {
    let mut board = board_with(&[("Alice", 50.0)]);
    let before = board.snapshot();

    assert_eq!(board.submit("\t ", 60.0), Err(LeaderboardError::EmptyName));
    assert_eq!(
        board.submit("Bob", 101.0),
        Err(LeaderboardError::ScoreOutOfRange(101.0))
    );

    assert_eq!(board.snapshot(), before);
}

#[test]
fn new_board_is_empty() {
    let board = Leaderboard::new();
    assert!(board.is_empty());
    assert!(board.snapshot().is_empty());
    assert!(board.best().is_none());
}
