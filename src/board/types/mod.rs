//! Core chess types.
//!
//! - `PieceKind`, `Color` and `Piece` - piece kinds, sides and colored pieces
//! - `Square` - (file, rank) coordinate on boards up to 16x16
//! - `Move` and `MoveKind` - move representation
//! - `CastlingRights` and `CastleSide` - castling state per rook file

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveKind};
pub use piece::{Color, Piece, PieceKind};
pub use square::{Square, MAX_BOARD_SIZE};
