//! Movement patterns per piece kind.
//!
//! Every kind maps to one entry of `MOVE_RULES`: a leap table, a ride table,
//! or the pawn rule. Generation and attack detection both read this table.

use super::super::{Board, Move, Piece, PieceKind, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// How a piece kind moves.
#[derive(Clone, Copy, Debug)]
pub(crate) enum MoveRule {
    /// Single jump by each offset
    Leap(&'static [(i8, i8)]),
    /// Repeated steps along each offset until blocked
    Ride(&'static [(i8, i8)]),
    /// Forward pushes and diagonal captures
    Pawn,
}

/// Dispatch table indexed by `PieceKind::index()`.
const MOVE_RULES: [MoveRule; 7] = [
    MoveRule::Pawn,
    MoveRule::Leap(&KNIGHT_OFFSETS),
    MoveRule::Ride(&DIAGONALS),
    MoveRule::Ride(&ORTHOGONALS),
    MoveRule::Ride(&ALL_DIRECTIONS),
    MoveRule::Leap(&KING_OFFSETS),
    // The unicorn rides the knight's offsets.
    MoveRule::Ride(&KNIGHT_OFFSETS),
];

#[inline]
pub(crate) const fn move_rule(kind: PieceKind) -> MoveRule {
    MOVE_RULES[kind.index()]
}

impl Board {
    /// Pseudo-legal moves from the piece catalog alone: no castling, no en
    /// passant, and no check for leaving the mover's king attacked.
    pub(crate) fn catalog_moves(&self, from: Square, piece: Piece) -> Vec<Move> {
        let targets = match move_rule(piece.kind) {
            MoveRule::Leap(offsets) => self.leaper_targets(from, piece, offsets),
            MoveRule::Ride(directions) => self.rider_targets(from, piece, directions),
            MoveRule::Pawn => return self.pawn_moves(from, piece),
        };
        targets.into_iter().map(|to| Move::normal(from, to)).collect()
    }

    /// Destination is on the board and not held by a friendly piece.
    #[inline]
    fn no_conflict(&self, to: Square, piece: Piece) -> bool {
        self.piece_at(to).map_or(true, |target| target.color != piece.color)
    }

    fn leaper_targets(&self, from: Square, piece: Piece, offsets: &[(i8, i8)]) -> Vec<Square> {
        offsets
            .iter()
            .filter_map(|&(df, dr)| from.offset(df, dr, self.size))
            .filter(|&to| self.no_conflict(to, piece))
            .collect()
    }

    fn rider_targets(&self, from: Square, piece: Piece, directions: &[(i8, i8)]) -> Vec<Square> {
        let mut targets = Vec::new();
        for &(df, dr) in directions {
            let mut current = from;
            while let Some(next) = current.offset(df, dr, self.size) {
                match self.piece_at(next) {
                    None => targets.push(next),
                    Some(occupant) => {
                        if occupant.color != piece.color {
                            targets.push(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
        targets
    }

    /// Whether the piece on `from` attacks `target`, whatever stands there.
    ///
    /// Uses the same tables as move generation; pawns attack only their two
    /// forward diagonals.
    pub(crate) fn piece_attacks(&self, from: Square, piece: Piece, target: Square) -> bool {
        match move_rule(piece.kind) {
            MoveRule::Leap(offsets) => offsets
                .iter()
                .any(|&(df, dr)| from.offset(df, dr, self.size) == Some(target)),
            MoveRule::Ride(directions) => directions.iter().any(|&(df, dr)| {
                let mut current = from;
                while let Some(next) = current.offset(df, dr, self.size) {
                    if next == target {
                        return true;
                    }
                    if !self.is_empty(next) {
                        return false;
                    }
                    current = next;
                }
                false
            }),
            MoveRule::Pawn => self.pawn_attack_squares(from, piece.color).contains(&target),
        }
    }
}
