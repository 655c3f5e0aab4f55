use super::super::{Board, CastleSide, Move, MoveKind, Piece, PieceKind, Square};

impl Board {
    /// Castling moves for the king on `from`.
    ///
    /// The king lands on file 2 or `size - 2` and the rook on file 3 or
    /// `size - 3`, whatever files they started on. A castle is offered when:
    /// castling is enabled and the right is still held; the rook stands on
    /// its origin file; every square from the leftmost to the rightmost of
    /// the king's and rook's origin and landing files is empty apart from the
    /// castling pair; the king is not in check and no square from its file to its landing
    /// file is attacked.
    pub(crate) fn castling_moves(&self, from: Square, piece: Piece) -> Vec<Move> {
        let mut moves = Vec::new();
        if !self.castling_enabled || piece.kind != PieceKind::King {
            return moves;
        }

        let color = piece.color;
        let back = color.back_rank(self.size);
        if from.rank != back || !self.castling_rights.any(color) {
            return moves;
        }
        if self.is_square_attacked(from, color.opponent()) {
            return moves;
        }

        for side in CastleSide::BOTH {
            let Some(rook_file) = self.castling_rights.rook_file(color, side) else {
                continue;
            };
            let on_correct_side = match side {
                CastleSide::Queenside => rook_file < from.file,
                CastleSide::Kingside => rook_file > from.file,
            };
            let rook_sq = Square::new(rook_file, back);
            if !on_correct_side || self.piece_at(rook_sq) != Some(Piece::new(color, PieceKind::Rook)) {
                continue;
            }

            let king_to = Square::new(side.king_target_file(self.size), back);
            let rook_to = Square::new(side.rook_target_file(self.size), back);

            let span_low = from.file.min(rook_file).min(king_to.file).min(rook_to.file);
            let span_high = from.file.max(rook_file).max(king_to.file).max(rook_to.file);
            let span_clear = (span_low..=span_high)
                .map(|file| Square::new(file, back))
                .all(|sq| sq == from || sq == rook_sq || self.is_empty(sq));
            if !span_clear {
                continue;
            }

            let (low, high) = if from.file <= king_to.file {
                (from.file, king_to.file)
            } else {
                (king_to.file, from.file)
            };
            let path_safe = (low..=high)
                .all(|file| !self.is_square_attacked(Square::new(file, back), color.opponent()));
            if path_safe {
                moves.push(Move::new(from, king_to, MoveKind::Castle(side)));
            }
        }

        moves
    }
}
