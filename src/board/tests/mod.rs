//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move-count checks against well-known positions
//! - `castling.rs` - Castling eligibility and rook relocation
//! - `en_passant.rs` - En passant target lifetime and capture removal
//! - `pins.rs` - Self-check filtering
//! - `terminal.rs` - Checkmate and stalemate detection
//! - `promotion.rs` - Promotion hand-off
//! - `edge_cases.rs` - Variant boards and unusual positions
//! - `proptest.rs` - Property-based tests

mod terminal;

use crate::board::{Board, BoardBuilder, CastleSide, Color, PieceKind, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

/// Sorted destinations from algebraic names.
pub(super) fn squares(names: &[&str]) -> Vec<Square> {
    let mut list: Vec<Square> = names.iter().map(|n| sq(n)).collect();
    list.sort();
    list
}

/// Position from the first four FEN fields on an 8x8 board. Castling
/// letters grant rights for the a- and h-file rooks.
pub(super) fn from_fen(fen: &str) -> Board {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().expect("placement field");
    let side = fields.next().unwrap_or("w");
    let castling = fields.next().unwrap_or("-");
    let en_passant = fields.next().unwrap_or("-");

    let mut builder = BoardBuilder::new();
    for (row, rank_text) in placement.split('/').enumerate() {
        let rank = 7 - row as u8;
        let mut file = 0u8;
        for c in rank_text.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as u8;
                continue;
            }
            let kind = PieceKind::from_char(c).expect("piece letter");
            let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
            builder = builder.piece(Square::new(file, rank), color, kind);
            file += 1;
        }
    }

    builder = builder.side_to_move(if side == "b" { Color::Black } else { Color::White });
    for c in castling.chars() {
        builder = match c {
            'K' => builder.castling(Color::White, CastleSide::Kingside, 7),
            'Q' => builder.castling(Color::White, CastleSide::Queenside, 0),
            'k' => builder.castling(Color::Black, CastleSide::Kingside, 7),
            'q' => builder.castling(Color::Black, CastleSide::Queenside, 0),
            _ => builder,
        };
    }
    if en_passant != "-" {
        builder = builder.en_passant(sq(en_passant));
    }
    builder.build()
}

#[test]
fn test_from_fen_start_position() {
    let board = from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert_eq!(board, Board::new());
}
