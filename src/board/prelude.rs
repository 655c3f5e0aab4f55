//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let mut game = Game::new(VariantDescriptor::with_unicorn()).unwrap();
//! assert_eq!(game.side_to_move(), Color::White);
//! assert!(game.propose_move(Square::new(6, 0), Square::new(5, 2)).is_ok());
//! ```

pub use super::{
    Board, BoardBuilder, CastleSide, Color, GameStatus, Move, MoveError, Piece, PieceKind, Square,
};
pub use crate::game::{Game, MoveOutcome};
pub use crate::variant::VariantDescriptor;
