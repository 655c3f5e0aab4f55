//! Terminal position detection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color};

/// Whether the side to move can continue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    /// No legal move, king attacked
    Checkmate,
    /// No legal move, king safe
    Stalemate,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Board {
    /// Status of the game from `color`'s point of view.
    #[must_use]
    pub fn status(&self, color: Color) -> GameStatus {
        if self.has_legal_move(color) {
            GameStatus::Ongoing
        } else if self.is_in_check(color) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.status(self.side_to_move) == GameStatus::Checkmate
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.status(self.side_to_move) == GameStatus::Stalemate
    }
}
