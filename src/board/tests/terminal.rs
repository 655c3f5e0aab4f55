//! Checkmate and stalemate detection.

use super::from_fen;
use crate::board::{Board, Color, GameStatus};
use crate::variant::VariantDescriptor;

#[test]
fn test_back_rank_mate() {
    let board = from_fen("6k1/5ppp/8/8/8/8/8/R5K1 b - - 0 1");
    assert_eq!(board.status(Color::Black), GameStatus::Ongoing);

    let board = from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    assert!(board.is_in_check(Color::Black));
    assert_eq!(board.status(Color::Black), GameStatus::Checkmate);
}

#[test]
fn test_smothered_mate() {
    let board = from_fen("6rk/5Npp/8/8/8/8/8/6K1 b - - 0 1");
    assert_eq!(board.status(Color::Black), GameStatus::Checkmate);
}

#[test]
fn test_stalemate_king_and_queen() {
    let board = from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!board.is_in_check(Color::Black));
    assert_eq!(board.status(Color::Black), GameStatus::Stalemate);
    assert!(board.all_legal_moves(Color::Black).is_empty());
}

#[test]
fn test_stalemate_with_blocked_pawn() {
    // The a-pawn is blocked, the king boxed in.
    let board = from_fen("k7/2Q5/8/8/8/p7/P7/7K b - - 0 1");
    assert_eq!(board.status(Color::Black), GameStatus::Stalemate);
}

#[test]
fn test_check_with_escape_is_ongoing() {
    let board = from_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1");
    assert!(board.is_in_check(Color::Black));
    assert_eq!(board.status(Color::Black), GameStatus::Ongoing);
}

#[test]
fn test_fools_mate() {
    let mut board = Board::from_variant(&VariantDescriptor::standard());
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        board.apply_move(from.parse().unwrap(), to.parse().unwrap()).unwrap();
    }
    assert!(board.is_checkmate());
    assert!(!board.is_stalemate());
}

#[test]
fn test_unicorn_delivers_mate_from_distance() {
    // d7 unicorn checks a1 through c5 and b3; the d2 knight covers b1 and
    // nothing White has can reach the line.
    let board = from_fen("8/3u4/8/8/8/8/PB1n4/K6k w - - 0 1");
    assert!(board.is_in_check(Color::White));
    assert_eq!(board.status(Color::White), GameStatus::Checkmate);
}
