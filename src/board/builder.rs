//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece, on any supported board size.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::new(4, 0), Color::White, PieceKind::King)
//!     .piece(Square::new(4, 7), Color::Black, PieceKind::King)
//!     .piece(Square::new(0, 1), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(board.pieces().count(), 3);
//! ```

use super::{Board, CastleSide, CastlingRights, Color, Piece, PieceKind, Square, MAX_BOARD_SIZE};
use crate::variant::MIN_BOARD_SIZE;

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    size: u8,
    pieces: Vec<(Square, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    castling_enabled: bool,
    en_passant_target: Option<Square>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty 8x8 board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            size: 8,
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            castling_enabled: true,
            en_passant_target: None,
        }
    }

    /// Set the board edge length, `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    #[must_use]
    pub const fn size(mut self, size: u8) -> Self {
        debug_assert!(
            size >= MIN_BOARD_SIZE && size <= MAX_BOARD_SIZE,
            "board size out of range"
        );
        self.size = size;
        self
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, Piece::new(color, kind)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Grant a castling right for the rook starting on `rook_file`.
    #[must_use]
    pub fn castling(mut self, color: Color, side: CastleSide, rook_file: u8) -> Self {
        self.castling_rights.set(color, side, rook_file);
        self
    }

    /// Disable castling for the whole game.
    #[must_use]
    pub const fn castling_disabled(mut self) -> Self {
        self.castling_enabled = false;
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty(self.size);

        for (square, piece) in self.pieces {
            board.set_piece(square, piece);
        }

        board.side_to_move = self.side_to_move;
        board.castling_enabled = self.castling_enabled;
        if self.castling_enabled {
            board.castling_rights = self.castling_rights;
        }
        board.en_passant_target = self.en_passant_target;
        board
    }
}
