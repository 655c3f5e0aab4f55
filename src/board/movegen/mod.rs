//! Move generation and the legality filter.
//!
//! Generation is split in two stages. `pseudo_legal_moves` follows the
//! piece catalog plus the en passant and castling rules, without regard to
//! the mover's own king. `legal_moves` plays each candidate on a scratch
//! copy of the board and keeps only those that leave the mover out of check.

mod attacks;
mod castling;
mod catalog;
mod pawns;

use super::{Board, Color, Move, Square};

impl Board {
    /// Pseudo-legal moves for the piece on `from`. Empty for an empty square.
    pub(crate) fn pseudo_legal_moves(&self, from: Square) -> Vec<Move> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };

        let mut moves = self.catalog_moves(from, piece);
        moves.extend(self.en_passant_move(from, piece));
        moves.extend(self.castling_moves(from, piece));
        moves
    }

    /// Destinations the piece on `from` could reach ignoring self-check.
    #[must_use]
    pub fn pseudo_destinations(&self, from: Square) -> Vec<Square> {
        sorted_destinations(&self.pseudo_legal_moves(from))
    }

    /// Fully legal moves for the piece on `from`.
    ///
    /// Each candidate is played on a clone of the board; it survives only if
    /// the mover's king is not attacked afterwards. The board itself is
    /// never touched.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Vec<Move> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };

        self.pseudo_legal_moves(from)
            .into_iter()
            .filter(|&mv| {
                let mut scratch = self.clone();
                scratch.make_move(mv);
                !scratch.is_in_check(piece.color)
            })
            .collect()
    }

    /// Sorted, de-duplicated legal destinations of the piece on `from`.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        sorted_destinations(&self.legal_moves(from))
    }

    /// Every legal move of `color`, in board order.
    #[must_use]
    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        self.pieces_of(color)
            .flat_map(|(from, _)| self.legal_moves(from))
            .collect()
    }

    /// True as soon as one legal move of `color` is found.
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.pieces_of(color)
            .any(|(from, _)| !self.legal_moves(from).is_empty())
    }
}

fn sorted_destinations(moves: &[Move]) -> Vec<Square> {
    let mut squares: Vec<Square> = moves.iter().map(|m| m.to).collect();
    squares.sort_unstable();
    squares.dedup();
    squares
}

#[cfg(test)]
mod tests {
    use super::super::{BoardBuilder, PieceKind};
    use super::*;

    #[test]
    fn test_starting_position_move_count() {
        let board = Board::new();
        assert_eq!(board.all_legal_moves(Color::White).len(), 20);
        assert_eq!(board.all_legal_moves(Color::Black).len(), 20);
    }

    #[test]
    fn test_empty_square_has_no_moves() {
        let board = Board::new();
        assert!(board.legal_destinations(Square::new(4, 4)).is_empty());
        assert!(board.pseudo_destinations(Square::new(4, 4)).is_empty());
    }

    #[test]
    fn test_pinned_piece_filtered() {
        let board = BoardBuilder::new()
            .piece(Square::new(4, 0), Color::White, PieceKind::King)
            .piece(Square::new(4, 1), Color::White, PieceKind::Knight)
            .piece(Square::new(4, 7), Color::Black, PieceKind::Rook)
            .build();
        assert!(!board.pseudo_destinations(Square::new(4, 1)).is_empty());
        assert!(board.legal_destinations(Square::new(4, 1)).is_empty());
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let board = BoardBuilder::new()
            .piece(Square::new(4, 0), Color::White, PieceKind::King)
            .piece(Square::new(3, 7), Color::Black, PieceKind::Rook)
            .build();
        let destinations = board.legal_destinations(Square::new(4, 0));
        assert!(!destinations.contains(&Square::new(3, 0)));
        assert!(!destinations.contains(&Square::new(3, 1)));
        assert!(destinations.contains(&Square::new(5, 1)));
    }

    #[test]
    fn test_legality_check_leaves_board_untouched() {
        let board = Board::new();
        let before = board.clone();
        let _ = board.all_legal_moves(Color::White);
        assert_eq!(board, before);
    }

    #[test]
    fn test_opponent_pieces_still_generate() {
        let board = Board::new();
        assert_eq!(
            board.legal_destinations(Square::new(6, 7)),
            vec![Square::new(5, 5), Square::new(7, 5)]
        );
    }
}
