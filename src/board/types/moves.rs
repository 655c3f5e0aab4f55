//! Move representation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::square::Square;

/// What a move does beyond relocating the moving piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    /// Plain relocation, capturing whatever stands on the destination
    Normal,
    /// Pawn advance of two ranks from its start rank; sets the en passant target
    DoubleStep,
    /// Pawn capture onto the en passant target; removes the pawn behind it
    EnPassant,
    /// King castles with the rook on the given side
    Castle(CastleSide),
}

/// A move from one square to another.
///
/// For castling, `to` is the king's landing square, which may equal `from`
/// when the king already stands on its landing file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Move { from, to, kind }
    }

    #[inline]
    #[must_use]
    pub const fn normal(from: Square, to: Square) -> Self {
        Move::new(from, to, MoveKind::Normal)
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    #[must_use]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self.kind {
            MoveKind::Castle(side) => Some(side),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::Castle(CastleSide::Kingside) => write!(f, "O-O"),
            MoveKind::Castle(CastleSide::Queenside) => write!(f, "O-O-O"),
            _ => write!(f, "{}{}", self.from, self.to),
        }
    }
}
