//! Chess board representation and the rules that act on it.
//!
//! A `Board` holds the position of one game on an N x N board (5 to 16
//! files) and knows how pieces move, which moves are legal, whether a king
//! is attacked and whether the game has ended.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, Square};
//!
//! let board = Board::new();
//! let knight = Square::new(6, 0);
//! assert_eq!(board.legal_destinations(knight).len(), 2);
//! assert_eq!(board.all_legal_moves(Color::White).len(), 20);
//! ```

mod apply;
mod builder;
mod display;
mod error;
mod movegen;
pub mod prelude;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use apply::MoveRecord;
pub use builder::BoardBuilder;
pub use error::{MoveError, SquareError, VariantError};
pub use state::Board;
pub use status::GameStatus;
pub use types::{
    CastleSide, CastlingRights, Color, Move, MoveKind, Piece, PieceKind, Square, MAX_BOARD_SIZE,
};
