//! Error types for board, variant and move operations.

use std::fmt;

use super::{CastleSide, Color, PieceKind, Square};

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// File outside the board
    FileOutOfBounds { file: u8, size: u8 },
    /// Rank outside the board
    RankOutOfBounds { rank: u8, size: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::FileOutOfBounds { file, size } => {
                write!(f, "File {file} out of bounds (must be below {size})")
            }
            SquareError::RankOutOfBounds { rank, size } => {
                write!(f, "Rank {rank} out of bounds (must be below {size})")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for malformed variant layouts.
///
/// Built-in layouts never produce these; they surface only for
/// hand-written descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    /// Board edge outside the supported range
    BoardSizeOutOfRange { size: u8 },
    /// A placement rank does not list exactly `size` files
    RankWidthMismatch { rank: usize, files: usize, size: u8 },
    /// A side has no king
    MissingKing,
    /// A side has more than one king
    MultipleKings { count: usize },
    /// White's and Black's mirrored placements overlap
    OverlappingPlacement { rank: usize },
    /// No promotion target kinds
    EmptyPromotionList,
    /// Promotion list contains a king or pawn
    InvalidPromotionKind { kind: PieceKind },
    /// Randomized back-rank index outside 0..960
    InvalidChess960Index { index: u16 },
}

impl fmt::Display for VariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantError::BoardSizeOutOfRange { size } => {
                write!(f, "Board size {size} out of range (must be 5-16)")
            }
            VariantError::RankWidthMismatch { rank, files, size } => {
                write!(f, "Placement rank {rank} has {files} files, expected {size}")
            }
            VariantError::MissingKing => write!(f, "Layout has no king"),
            VariantError::MultipleKings { count } => {
                write!(f, "Layout has {count} kings per side, expected 1")
            }
            VariantError::OverlappingPlacement { rank } => {
                write!(f, "Placement rank {rank} overlaps the opponent's mirrored rank")
            }
            VariantError::EmptyPromotionList => write!(f, "Promotion list is empty"),
            VariantError::InvalidPromotionKind { kind } => {
                write!(f, "Cannot promote to {kind}")
            }
            VariantError::InvalidChess960Index { index } => {
                write!(f, "Chess960 index {index} out of range (must be 0-959)")
            }
        }
    }
}

impl std::error::Error for VariantError {}

/// Reasons a move proposal or promotion choice is rejected.
///
/// A rejected proposal never changes the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece on the start square
    EmptySquareSelected { square: Square },
    /// The piece belongs to the side not on move
    WrongTurn { square: Square, side_to_move: Color },
    /// Destination is not among the piece's legal destinations
    IllegalMove { from: Square, to: Square },
    /// No legal castle on that side for the side to move
    CastlingUnavailable { side: CastleSide },
    /// A promotion choice is outstanding
    PromotionPending { square: Square },
    /// `resolve_promotion` called with nothing to resolve
    NoPromotionPending,
    /// Chosen kind is not in the variant's promotion list
    InvalidPromotionChoice { kind: PieceKind },
    /// The game already ended in checkmate or stalemate
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquareSelected { square } => {
                write!(f, "There is no piece on {square}")
            }
            MoveError::WrongTurn {
                square,
                side_to_move,
            } => {
                write!(f, "Piece on {square} cannot move: it is {side_to_move}'s turn")
            }
            MoveError::IllegalMove { from, to } => write!(f, "Illegal move {from}{to}"),
            MoveError::CastlingUnavailable { side } => write!(f, "Cannot castle {side:?}"),
            MoveError::PromotionPending { square } => {
                write!(f, "Choose a promotion piece for the pawn on {square} first")
            }
            MoveError::NoPromotionPending => write!(f, "No promotion is pending"),
            MoveError::InvalidPromotionChoice { kind } => {
                write!(f, "Promotion to {kind} is not allowed in this variant")
            }
            MoveError::GameOver => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_error_bounds() {
        let err = SquareError::FileOutOfBounds { file: 10, size: 8 };
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains('8'));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_variant_error_messages() {
        let err = VariantError::InvalidChess960Index { index: 1000 };
        assert!(err.to_string().contains("1000"));
        let err = VariantError::InvalidPromotionKind {
            kind: PieceKind::King,
        };
        assert!(err.to_string().contains("King"));
    }

    #[test]
    fn test_move_error_messages() {
        let err = MoveError::IllegalMove {
            from: Square::new(4, 1),
            to: Square::new(4, 4),
        };
        assert!(err.to_string().contains("e2e5"));

        let err = MoveError::WrongTurn {
            square: Square::new(4, 6),
            side_to_move: Color::White,
        };
        assert!(err.to_string().contains("e7"));
        assert!(err.to_string().contains("White"));
    }

    #[test]
    fn test_error_clone() {
        let err = MoveError::NoPromotionPending;
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
