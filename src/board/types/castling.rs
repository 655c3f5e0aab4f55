//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

/// Which rook a castle uses, relative to the king.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    /// Rook on a lower file than the king; king lands on file 2.
    Queenside,
    /// Rook on a higher file than the king; king lands on file `size - 2`.
    Kingside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Queenside, CastleSide::Kingside];

    #[inline]
    const fn index(self) -> usize {
        match self {
            CastleSide::Queenside => 0,
            CastleSide::Kingside => 1,
        }
    }

    /// File the king lands on
    #[inline]
    #[must_use]
    pub const fn king_target_file(self, size: u8) -> u8 {
        match self {
            CastleSide::Queenside => 2,
            CastleSide::Kingside => size - 2,
        }
    }

    /// File the rook lands on
    #[inline]
    #[must_use]
    pub const fn rook_target_file(self, size: u8) -> u8 {
        match self {
            CastleSide::Queenside => 3,
            CastleSide::Kingside => size - 3,
        }
    }
}

/// Castling rights, tracked per color and per rook origin file.
///
/// A right holds the file its rook started on. Rights are only ever removed:
/// a king move drops both rights of its color, a rook move (or capture of
/// the rook on its origin square) drops the right for that file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights([[Option<u8>; 2]; 2]);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights([[None; 2]; 2])
    }

    /// Origin file of the rook for this right, if the right is still held
    #[inline]
    #[must_use]
    pub const fn rook_file(self, color: Color, side: CastleSide) -> Option<u8> {
        self.0[color.index()][side.index()]
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.rook_file(color, side).is_some()
    }

    /// True if the color holds any castling right
    #[inline]
    #[must_use]
    pub const fn any(self, color: Color) -> bool {
        self.has(color, CastleSide::Queenside) || self.has(color, CastleSide::Kingside)
    }

    /// Grant a right for the rook starting on `rook_file`
    #[inline]
    pub fn set(&mut self, color: Color, side: CastleSide, rook_file: u8) {
        self.0[color.index()][side.index()] = Some(rook_file);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0[color.index()][side.index()] = None;
    }

    /// Remove both rights of a color (the king moved or castled)
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.0[color.index()] = [None; 2];
    }

    /// Remove whichever right belongs to the rook that started on `file`
    pub fn revoke_rook_file(&mut self, color: Color, file: u8) {
        for side in CastleSide::BOTH {
            if self.rook_file(color, side) == Some(file) {
                self.remove(color, side);
            }
        }
    }
}
