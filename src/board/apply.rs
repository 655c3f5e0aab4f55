//! Committing moves to the board.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, CastleSide, Move, MoveError, MoveKind, Piece, PieceKind, Square};

/// What a committed move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub mv: Move,
    /// The piece that moved (the king, for castling)
    pub piece: Piece,
    /// Piece removed from the board, including an en passant victim
    pub captured: Option<Piece>,
    /// The moved pawn reached its last rank and awaits a promotion choice
    pub promotion_pending: bool,
}

impl Board {
    /// Play a generated move without any legality check.
    ///
    /// Relocates the piece, removes captures (behind the destination for en
    /// passant), moves the castling rook, updates castling rights and the en
    /// passant target, and hands the turn over unless a pawn now awaits
    /// promotion. Returns `None` if `from` is empty.
    pub(crate) fn make_move(&mut self, mv: Move) -> Option<MoveRecord> {
        let piece = self.piece_at(mv.from)?;
        let color = piece.color;

        let captured = match mv.kind {
            MoveKind::Castle(side) => {
                self.relocate_castling_pair(mv, side)?;
                None
            }
            MoveKind::EnPassant => {
                self.remove_piece(mv.from);
                self.set_piece(mv.to, piece);
                self.remove_piece(Square::new(mv.to.file, mv.from.rank))
            }
            MoveKind::Normal | MoveKind::DoubleStep => {
                self.remove_piece(mv.from);
                self.set_piece(mv.to, piece)
            }
        };

        match piece.kind {
            PieceKind::King => self.castling_rights.remove_color(color),
            PieceKind::Rook if mv.from.rank == color.back_rank(self.size) => {
                self.castling_rights.revoke_rook_file(color, mv.from.file);
            }
            _ => {}
        }
        if let Some(victim) = captured {
            if victim.kind == PieceKind::Rook && mv.to.rank == victim.color.back_rank(self.size) {
                self.castling_rights.revoke_rook_file(victim.color, mv.to.file);
            }
        }

        self.en_passant_target = match mv.kind {
            MoveKind::DoubleStep => Some(Square::new(mv.from.file, (mv.from.rank + mv.to.rank) / 2)),
            _ => None,
        };

        let promotion_pending =
            piece.kind == PieceKind::Pawn && mv.to.rank == color.promotion_rank(self.size);
        if promotion_pending {
            self.pending_promotion = Some(mv.to);
        } else {
            self.side_to_move = color.opponent();
        }

        Some(MoveRecord {
            mv,
            piece,
            captured,
            promotion_pending,
        })
    }

    /// Lift king and rook first so that swaps and in-place kings work for
    /// shuffled back ranks.
    fn relocate_castling_pair(&mut self, mv: Move, side: CastleSide) -> Option<()> {
        let color = self.piece_at(mv.from)?.color;
        let rook_file = self.castling_rights.rook_file(color, side)?;
        let back = mv.from.rank;
        let rook_from = Square::new(rook_file, back);
        let rook_to = Square::new(side.rook_target_file(self.size), back);

        let king = self.remove_piece(mv.from)?;
        let Some(rook) = self.remove_piece(rook_from) else {
            self.set_piece(mv.from, king);
            return None;
        };
        self.set_piece(mv.to, king);
        self.set_piece(rook_to, rook);
        Some(())
    }

    /// Validate and commit a move of the side to move from `from` to `to`.
    ///
    /// When a destination is reachable both by an ordinary king step and by
    /// castling, the ordinary step is played; use [`Board::apply_castling`]
    /// to castle explicitly. On error the board is unchanged.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        let mv = self.validate_move(from, to)?;
        self.make_move(mv).ok_or(MoveError::EmptySquareSelected { square: from })
    }

    /// Castle on `side` with the side to move's king.
    pub fn apply_castling(&mut self, side: CastleSide) -> Result<MoveRecord, MoveError> {
        if let Some(square) = self.pending_promotion {
            return Err(MoveError::PromotionPending { square });
        }
        let unavailable = MoveError::CastlingUnavailable { side };
        let king_sq = self.find_king(self.side_to_move).ok_or(unavailable.clone())?;

        let mv = self
            .legal_moves(king_sq)
            .into_iter()
            .find(|m| m.castle_side() == Some(side))
            .ok_or(unavailable.clone())?;
        self.make_move(mv).ok_or(unavailable)
    }

    /// Replace the pawn awaiting promotion and hand the turn over.
    ///
    /// Only the piece kind is checked here; variant promotion lists are
    /// enforced by [`crate::game::Game`].
    pub fn promote(&mut self, kind: PieceKind) -> Result<Piece, MoveError> {
        let square = self.pending_promotion.ok_or(MoveError::NoPromotionPending)?;
        if kind.is_royal_or_pawn() {
            return Err(MoveError::InvalidPromotionChoice { kind });
        }
        let color = self
            .piece_at(square)
            .map(|pawn| pawn.color)
            .ok_or(MoveError::NoPromotionPending)?;

        let promoted = Piece::new(color, kind);
        self.set_piece(square, promoted);
        self.pending_promotion = None;
        self.side_to_move = color.opponent();
        Ok(promoted)
    }

    fn validate_move(&self, from: Square, to: Square) -> Result<Move, MoveError> {
        if let Some(square) = self.pending_promotion {
            return Err(MoveError::PromotionPending { square });
        }
        let piece = self
            .piece_at(from)
            .ok_or(MoveError::EmptySquareSelected { square: from })?;
        if piece.color != self.side_to_move {
            return Err(MoveError::WrongTurn {
                square: from,
                side_to_move: self.side_to_move,
            });
        }

        let candidates: Vec<Move> = self
            .legal_moves(from)
            .into_iter()
            .filter(|m| m.to == to)
            .collect();
        candidates
            .iter()
            .find(|m| !m.is_castling())
            .or_else(|| candidates.first())
            .copied()
            .ok_or(MoveError::IllegalMove { from, to })
    }
}
