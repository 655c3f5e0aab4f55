use super::super::{Board, Color, Move, MoveKind, Piece, PieceKind, Square};

impl Board {
    /// Forward pushes (single, and double from the start rank) onto empty
    /// squares, and diagonal captures onto enemy pieces.
    pub(crate) fn pawn_moves(&self, from: Square, piece: Piece) -> Vec<Move> {
        let mut moves = Vec::new();
        let dir = piece.color.pawn_direction();

        if let Some(one) = from.offset(0, dir, self.size) {
            if self.is_empty(one) {
                moves.push(Move::normal(from, one));

                if from.rank == piece.color.pawn_start_rank(self.size) {
                    if let Some(two) = from.offset(0, 2 * dir, self.size) {
                        if self.is_empty(two) {
                            moves.push(Move::new(from, two, MoveKind::DoubleStep));
                        }
                    }
                }
            }
        }

        for to in self.pawn_attack_squares(from, piece.color) {
            if let Some(target) = self.piece_at(to) {
                if target.color != piece.color {
                    moves.push(Move::normal(from, to));
                }
            }
        }

        moves
    }

    /// The two forward diagonals, regardless of what stands on them.
    pub(crate) fn pawn_attack_squares(&self, from: Square, color: Color) -> Vec<Square> {
        let dir = color.pawn_direction();
        [-1, 1]
            .into_iter()
            .filter_map(|df| from.offset(df, dir, self.size))
            .collect()
    }

    /// En passant capture onto the target square, available only to a pawn
    /// of the side to move standing diagonally one rank behind the target,
    /// with the double-stepped enemy pawn in place beside it.
    pub(crate) fn en_passant_move(&self, from: Square, piece: Piece) -> Option<Move> {
        if piece.kind != PieceKind::Pawn || piece.color != self.side_to_move {
            return None;
        }
        let target = self.en_passant_target?;
        if !self.pawn_attack_squares(from, piece.color).contains(&target) || !self.is_empty(target) {
            return None;
        }

        let victim_sq = Square::new(target.file, from.rank);
        match self.piece_at(victim_sq) {
            Some(victim) if victim.kind == PieceKind::Pawn && victim.color != piece.color => {
                Some(Move::new(from, target, MoveKind::EnPassant))
            }
            _ => None,
        }
    }
}
