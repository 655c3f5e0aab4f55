//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Largest supported board edge. Boards are stored in a fixed
/// `MAX_BOARD_SIZE * MAX_BOARD_SIZE` arena regardless of the variant's size.
pub const MAX_BOARD_SIZE: u8 = 16;

/// A square on the board, represented as (file, rank), both 0-indexed.
///
/// Rank 0 is White's back rank; file 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    // Field order gives rank-major ordering (a1, b1, ..., a2, ...).
    pub rank: u8,
    pub file: u8,
}

impl Square {
    /// Create a square without a board-size check
    #[inline]
    #[must_use]
    pub const fn new(file: u8, rank: u8) -> Self {
        Square { rank, file }
    }

    /// Create a square, checking it lies on a board of the given size
    pub fn on_board(file: u8, rank: u8, size: u8) -> Result<Self, SquareError> {
        if file >= size {
            return Err(SquareError::FileOutOfBounds { file, size });
        }
        if rank >= size {
            return Err(SquareError::RankOutOfBounds { rank, size });
        }
        Ok(Square { rank, file })
    }

    /// Arena slot for this square
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.rank as usize * MAX_BOARD_SIZE as usize + self.file as usize
    }

    /// Step by (file delta, rank delta), returning `None` when the result
    /// leaves a board of the given size.
    #[inline]
    #[must_use]
    pub fn offset(self, df: i8, dr: i8, size: u8) -> Option<Square> {
        let file = self.file as i16 + df as i16;
        let rank = self.rank as i16 + dr as i16;
        if file < 0 || rank < 0 || file >= size as i16 || rank >= size as i16 {
            return None;
        }
        Some(Square::new(file as u8, rank as u8))
    }

    /// True for dark squares (a1 is dark)
    #[inline]
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.file + self.rank) % 2 == 0
    }

    /// Every square of a board of the given size, rank by rank
    pub fn all(size: u8) -> impl Iterator<Item = Square> {
        (0..size).flat_map(move |rank| (0..size).map(move |file| Square::new(file, rank)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file + b'a') as char, self.rank as u16 + 1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parse algebraic notation (`e4`, `p16`) for boards up to 16 files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let file_char = chars.next().ok_or_else(invalid)?;
        if !file_char.is_ascii_lowercase() {
            return Err(invalid());
        }
        let file = file_char as u8 - b'a';

        let rank_str = chars.as_str();
        if rank_str.is_empty() || rank_str.len() > 2 || !rank_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let rank: u8 = rank_str.parse().map_err(|_| invalid())?;
        if rank == 0 {
            return Err(invalid());
        }

        Square::on_board(file, rank - 1, MAX_BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let sq: Square = "e4".parse().unwrap();
        assert_eq!(sq, Square::new(4, 3));
        assert_eq!(sq.to_string(), "e4");

        let wide: Square = "j10".parse().unwrap();
        assert_eq!(wide, Square::new(9, 9));
        assert_eq!(wide.to_string(), "j10");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Square>().is_err());
        assert!("e0".parse::<Square>().is_err());
        assert!("E4".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
        assert!("q1".parse::<Square>().is_err());
        assert!("a17".parse::<Square>().is_err());
    }

    #[test]
    fn test_offset_respects_board_size() {
        let sq = Square::new(6, 6);
        assert_eq!(sq.offset(1, 1, 8), Some(Square::new(7, 7)));
        assert_eq!(sq.offset(2, 0, 8), None);
        assert_eq!(sq.offset(2, 0, 10), Some(Square::new(8, 6)));
        assert_eq!(Square::new(0, 0).offset(-1, 0, 8), None);
    }

    #[test]
    fn test_on_board_bounds() {
        assert!(Square::on_board(7, 7, 8).is_ok());
        assert_eq!(
            Square::on_board(8, 0, 8),
            Err(SquareError::FileOutOfBounds { file: 8, size: 8 })
        );
        assert_eq!(
            Square::on_board(0, 9, 8),
            Err(SquareError::RankOutOfBounds { rank: 9, size: 8 })
        );
    }

    #[test]
    fn test_ordering_is_rank_major() {
        assert!(Square::new(7, 0) < Square::new(0, 1));
        assert!(Square::new(0, 0) < Square::new(1, 0));
    }

    #[test]
    fn test_square_colors() {
        assert!(Square::new(0, 0).is_dark());
        assert!(!Square::new(1, 0).is_dark());
        assert!(!Square::new(7, 0).is_dark());
        assert!(Square::new(7, 7).is_dark());
    }
}
