//! Tests for board evaluation and move application.

use noughts::{
    Board, Game, GameStatus, LINES, MoveError, Player, Position, Square, check_winner, evaluate,
    is_draw,
};
use strum::IntoEnumIterator;

/// Builds a board from a 9-character picture: `X`, `O`, anything else empty.
fn board(picture: &str) -> Board {
    let mut marks = [None; 9];
    for (i, c) in picture.chars().enumerate().take(9) {
        marks[i] = match c {
            'X' => Some(Player::X),
            'O' => Some(Player::O),
            _ => None,
        };
    }
    Board::from_marks(marks)
}

#[test]
fn test_empty_board_in_progress() {
    assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
}

#[test]
fn test_every_line_wins() {
    for line in LINES {
        let mut b = Board::new();
        for pos in line.positions() {
            b.set(pos, Square::Occupied(Player::O));
        }
        let status = evaluate(&b);
        assert_eq!(status.winner(), Some(Player::O));
        assert_eq!(status.line(), Some(line));
    }
}

#[test]
fn test_first_line_in_order_is_reported() {
    // Top row and left column both complete; rows come first.
    let b = board("XXXX__X__");
    let (winner, line) = check_winner(&b).unwrap();
    assert_eq!(winner, Player::X);
    assert_eq!(line.indices(), [0, 1, 2]);
}

#[test]
fn test_winning_line_cells_match_winner() {
    let b = board("OX_XO_X_O");
    let status = evaluate(&b);
    let winner = status.winner().unwrap();
    for pos in status.line().unwrap().positions() {
        assert_eq!(b.get(pos), Square::Occupied(winner));
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let b = board("XOXXOOOXX");
    assert_eq!(evaluate(&b), GameStatus::Draw);
    assert!(is_draw(&b));
}

#[test]
fn test_full_board_with_line_is_win_not_draw() {
    let b = board("XXXOOXOXO");
    assert_eq!(evaluate(&b).winner(), Some(Player::X));
    assert!(!is_draw(&b));
}

#[test]
fn test_alternating_moves_never_wrong_turn() {
    let mut game = Game::new();
    for (i, pos) in Position::iter().enumerate() {
        if game.is_over() {
            break;
        }
        let expected = if i % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(game.current_player(), expected);
        game.apply_move(pos.to_index(), Some(expected)).unwrap();
    }
}

#[test]
fn test_occupied_cell_leaves_board_unchanged() {
    let mut game = Game::new();
    game.apply_move(4, None).unwrap();
    let before = game.clone();

    assert_eq!(game.apply_move(4, None), Err(MoveError::CellOccupied));
    assert_eq!(game.apply_move(4, Some(Player::X)), Err(MoveError::CellOccupied));
    assert_eq!(game.board(), before.board());
    assert_eq!(game.current_player(), Player::O);
    assert_eq!(game.move_count(), 1);
}

#[test]
fn test_out_of_range_and_wrong_turn() {
    let mut game = Game::new();
    assert_eq!(game.apply_move(9, None), Err(MoveError::OutOfRange));
    assert_eq!(game.apply_move(0, Some(Player::O)), Err(MoveError::WrongTurn));
    assert_eq!(game.move_count(), 0);
}

#[test]
fn test_any_move_after_terminal_is_game_over() {
    let mut game = Game::new();
    for i in [0, 1, 3, 4, 6] {
        game.apply_move(i, None).unwrap();
    }
    assert!(game.is_over());
    for i in [0, 2, 8, 42] {
        assert_eq!(game.apply_move(i, None), Err(MoveError::GameOver));
    }
    assert_eq!(game.apply_move(2, Some(Player::O)), Err(MoveError::GameOver));
}

#[test]
fn test_mark_counts_stay_balanced() {
    let mut game = Game::new();
    for i in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
        if game.is_over() {
            break;
        }
        game.apply_move(i, None).unwrap();
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        assert!(x == o || x == o + 1);
    }
}
