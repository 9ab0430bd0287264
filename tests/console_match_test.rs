//! Tests for the console match loop.

use noughts::{GameMode, LocalBackend, Match, Player, Seating, SessionManager, status_line};
use std::time::Duration;

async fn play(seating: Seating, script: &str) -> (noughts::GameView, String) {
    let backend = LocalBackend::new(SessionManager::with_seed(9));
    let game = Match::new(backend, seating, Duration::ZERO);
    let mut out = Vec::new();
    let view = game.run(script.as_bytes(), &mut out).await.unwrap();
    (view, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_pvp_round_to_a_win() {
    let seating = Seating::new(GameMode::Pvp, Player::X);
    let (view, out) = play(seating, "1\n4\n2\n5\n3\nq\n").await;

    assert_eq!(view.winner, Some(Player::X));
    assert_eq!(view.winning_line, Some([0, 1, 2]));
    assert_eq!(*view.scores.x(), 1);
    assert!(out.contains("Turn: O"));
    assert!(out.contains("Winner: X"));
    assert!(out.contains("Winning line: 1-2-3"));
}

#[tokio::test]
async fn test_errors_do_not_end_the_match() {
    let seating = Seating::new(GameMode::Pvp, Player::X);
    let (view, out) = play(seating, "5\n5\nbanana\n3 3\n1 1\n").await;

    assert!(out.contains("Cell already occupied"));
    assert!(out.contains("Unrecognised input: banana"));
    assert!(out.contains("Row/Col out of bounds"));
    // Input ends without `q`; the last snapshot still comes back.
    assert_eq!(view.move_count, 1);
}

#[tokio::test]
async fn test_cpu_opens_when_human_plays_o() {
    let seating = Seating::new(GameMode::Cpu, Player::O);
    let (view, out) = play(seating, "q\n").await;

    assert_eq!(view.board[4], Some(Player::X));
    assert_eq!(view.current_player, Player::O);
    assert!(out.contains("Your turn (O)"));
}

#[tokio::test]
async fn test_cpu_replies_after_human_move() {
    let seating = Seating::new(GameMode::Cpu, Player::X);
    let (view, _) = play(seating, "1\nq\n").await;

    assert_eq!(view.board[0], Some(Player::X));
    assert_eq!(view.board[4], Some(Player::O));
    assert_eq!(view.move_count, 2);
}

#[tokio::test]
async fn test_reset_round_keeps_scores() {
    let seating = Seating::new(GameMode::Pvp, Player::X);
    let (view, out) = play(seating, "1\n4\n2\n5\n3\n9\nr\ns\nq\n").await;

    assert!(out.contains("Round over. Press r to play again."));
    assert_eq!(view.move_count, 0);
    assert_eq!(*view.scores.x(), 0);
}

#[test]
fn test_status_lines() {
    let manager = SessionManager::with_seed(1);
    let mut view = manager.create();
    let cpu_as_x = Seating::new(GameMode::Cpu, Player::O);
    let pvp = Seating::new(GameMode::Pvp, Player::X);

    assert_eq!(status_line(&view, cpu_as_x), "CPU is thinking…");
    assert_eq!(status_line(&view, pvp), "Turn: X");

    view.draw = true;
    assert_eq!(status_line(&view, pvp), "Draw");
    view.draw = false;
    view.winner = Some(Player::O);
    assert_eq!(status_line(&view, cpu_as_x), "Winner: O");
}
