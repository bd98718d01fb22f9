//! Check, checkmate and game-over detection.

use super::sq;
use crate::board::{Board, Color};

#[test]
fn test_starting_position_has_no_check() {
    let board = Board::new();
    assert!(!board.is_in_check(Color::White));
    assert!(!board.is_in_check(Color::Black));
    assert!(!board.is_game_over());
    assert_eq!(board.checkmated(), None);
}

#[test]
fn test_rook_checks_along_open_file() {
    let board = Board::from_placement("3r3k/8/8/8/8/8/8/3K4");
    assert!(board.is_in_check(Color::White));
    assert!(!board.is_in_check(Color::Black));
}

#[test]
fn test_blocked_file_is_not_check() {
    let board = Board::from_placement("3r3k/8/8/8/3P4/8/8/3K4");
    assert!(!board.is_in_check(Color::White));
}

#[test]
fn test_knight_check() {
    let board = Board::from_placement("4k3/8/3N4/8/8/8/8/4K3");
    assert!(board.is_in_check(Color::Black));
}

#[test]
fn test_pawn_checks_diagonally_only() {
    // black pawn on e2 attacks f1
    let board = Board::from_placement("7k/8/8/8/8/8/4p3/5K2");
    assert!(board.is_in_check(Color::White));

    // straight ahead is not an attack
    let board = Board::from_placement("7k/8/8/8/8/8/5p2/5K2");
    assert!(!board.is_in_check(Color::White));

    // white pawn on e7 attacks d8
    let board = Board::from_placement("3k4/4P3/8/8/8/8/8/K7");
    assert!(board.is_in_check(Color::Black));
}

#[test]
fn test_missing_king_is_never_in_check() {
    let board = Board::from_placement("3r4/8/8/8/8/8/8/8");
    assert!(!board.is_in_check(Color::White));
    assert!(!board.is_checkmate(Color::White));
}

#[test]
fn test_back_rank_mate() {
    let board = Board::from_placement("R6k/6pp/8/8/8/8/8/6K1");
    assert!(board.is_in_check(Color::Black));
    assert!(board.is_checkmate(Color::Black));
    assert!(!board.is_checkmate(Color::White));
    assert!(board.is_game_over());
    assert_eq!(board.checkmated(), Some(Color::Black));
}

#[test]
fn test_check_with_escape_square_is_not_mate() {
    let board = Board::from_placement("R6k/6p1/7p/8/8/8/8/6K1");
    assert!(board.is_in_check(Color::Black));
    assert!(!board.is_checkmate(Color::Black));
    assert_eq!(board.legal_moves_from(sq("h8")), vec![sq("h7")]);
}

#[test]
fn test_check_that_can_be_blocked_is_not_mate() {
    let board = Board::from_placement("R6k/6pp/8/8/8/8/8/4r1K1");
    assert!(board.is_in_check(Color::Black));
    assert!(!board.is_checkmate(Color::Black));
    assert_eq!(board.legal_moves_from(sq("e1")), vec![sq("e8")]);
}

#[test]
fn test_check_that_can_be_captured_is_not_mate() {
    let board = Board::from_placement("R6k/6pp/8/8/8/8/8/r5K1");
    assert!(!board.is_checkmate(Color::Black));
    assert_eq!(board.legal_moves_from(sq("a1")), vec![sq("a8")]);
}

#[test]
fn test_stalemate_is_not_checkmate() {
    let board = Board::from_placement("7k/5Q2/6K1/8/8/8/8/8");
    assert!(!board.is_in_check(Color::Black));
    assert!(!board.has_legal_move(Color::Black));
    assert!(!board.is_checkmate(Color::Black));
    assert!(!board.is_game_over());
}

#[test]
fn test_fools_mate() {
    let mut board = Board::new();
    let moves = [
        ("f2", "f3", Color::White),
        ("e7", "e5", Color::Black),
        ("g2", "g4", Color::White),
        ("d8", "h4", Color::Black),
    ];
    for (from, to, color) in moves {
        assert!(!board.is_game_over());
        board.validate_and_move(sq(from), sq(to), color).unwrap();
    }

    assert!(board.is_in_check(Color::White));
    assert!(board.is_checkmate(Color::White));
    assert_eq!(board.checkmated(), Some(Color::White));
}
