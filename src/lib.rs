//! Chess rules engine: move generation, legality, check detection and game
//! termination for normal chess and its variants (Chess 960, Unicorn, and
//! custom layouts on boards from 5x5 to 16x16).
//!
//! The [`game::Game`] facade is the entry point for a UI; [`board::Board`]
//! exposes the underlying rules directly.

pub mod board;
pub mod game;
pub mod variant;

pub use board::{Board, Color, GameStatus, Move, MoveError, Piece, PieceKind, Square};
pub use game::{Game, MoveOutcome};
pub use variant::VariantDescriptor;
