//! Game facade: one board, one variant, one caller.
//!
//! `Game` is what a UI talks to. It answers snapshot and move-hint queries,
//! accepts or rejects proposed moves, and holds the game open while a
//! promotion choice is outstanding.
//!
//! # Example
//! ```
//! use chess_rules::game::Game;
//! use chess_rules::variant::VariantDescriptor;
//! use chess_rules::board::{GameStatus, Square};
//!
//! let mut game = Game::new(VariantDescriptor::standard()).unwrap();
//! let outcome = game
//!     .propose_move(Square::new(4, 1), Square::new(4, 3))
//!     .unwrap();
//! assert_eq!(outcome.status, GameStatus::Ongoing);
//! assert!(!outcome.in_check);
//! ```

use std::collections::BTreeMap;

use log::{debug, info, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    Board, CastleSide, Color, GameStatus, Move, MoveError, MoveRecord, Piece, PieceKind, Square,
    VariantError,
};
use crate::variant::VariantDescriptor;

/// Result of an accepted proposal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveOutcome {
    pub mv: Move,
    pub captured: Option<Piece>,
    /// Status of the side now to move
    pub status: GameStatus,
    /// The side now to move is in check
    pub in_check: bool,
    /// A pawn awaits `resolve_promotion`; the turn has not passed yet
    pub promotion_pending: bool,
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    variant: VariantDescriptor,
    board: Board,
    status: GameStatus,
    last_move: Option<MoveRecord>,
}

impl Game {
    /// Start a game from a variant's initial layout.
    pub fn new(variant: VariantDescriptor) -> Result<Self, VariantError> {
        variant.validate()?;
        let board = Board::from_variant(&variant);
        let status = board.status(board.side_to_move());
        info!("new game: {} ({}x{})", variant.name(), variant.size(), variant.size());

        Ok(Game {
            variant,
            board,
            status,
            last_move: None,
        })
    }

    #[must_use]
    pub fn variant(&self) -> &VariantDescriptor {
        &self.variant
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The side to move is in check
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.board.is_in_check(self.board.side_to_move())
    }

    /// Most recently committed move, for highlighting
    #[must_use]
    pub fn last_move(&self) -> Option<MoveRecord> {
        self.last_move
    }

    /// Square of the pawn waiting for a promotion choice
    #[must_use]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.board.pending_promotion()
    }

    /// Read-only occupancy map for rendering.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<Square, Piece> {
        self.board.snapshot()
    }

    /// Legal destinations of the piece on `square`, for move hints.
    ///
    /// Empty unless the piece belongs to the side to move and the game
    /// accepts moves (not over, no promotion outstanding).
    #[must_use]
    pub fn legal_destinations(&self, square: Square) -> Vec<Square> {
        if self.status.is_terminal() || self.board.pending_promotion().is_some() {
            return Vec::new();
        }
        match self.board.piece_at(square) {
            Some(piece) if piece.color == self.board.side_to_move() => {
                self.board.legal_destinations(square)
            }
            _ => Vec::new(),
        }
    }

    /// Propose moving the piece on `from` to `to`.
    ///
    /// On rejection nothing changes and the caller may retry.
    pub fn propose_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        self.ensure_open()?;
        let record = self.board.apply_move(from, to).map_err(|err| {
            trace!("rejected {from}{to}: {err}");
            err
        })?;
        Ok(self.commit(record))
    }

    /// Castle on `side`, including when the king already stands on its
    /// landing file or a landing square is also an ordinary king step.
    pub fn propose_castling(&mut self, side: CastleSide) -> Result<MoveOutcome, MoveError> {
        self.ensure_open()?;
        let record = self.board.apply_castling(side).map_err(|err| {
            trace!("rejected castling {side:?}: {err}");
            err
        })?;
        Ok(self.commit(record))
    }

    /// Replace the pawn on `square` with `kind` and pass the turn.
    ///
    /// `square` must hold the pawn awaiting promotion and `kind` must be in
    /// the variant's promotion list.
    pub fn resolve_promotion(
        &mut self,
        square: Square,
        kind: PieceKind,
    ) -> Result<MoveOutcome, MoveError> {
        let pending = self
            .board
            .pending_promotion()
            .ok_or(MoveError::NoPromotionPending)?;
        if square != pending {
            return Err(MoveError::PromotionPending { square: pending });
        }
        if !self.variant.promotions().contains(&kind) {
            trace!("rejected promotion to {kind}");
            return Err(MoveError::InvalidPromotionChoice { kind });
        }

        let Some(mut record) = self.last_move else {
            return Err(MoveError::NoPromotionPending);
        };

        let promoted = self.board.promote(kind)?;
        info!("pawn on {square} promoted to {promoted}");
        record.promotion_pending = false;
        Ok(self.commit(record))
    }

    fn ensure_open(&self) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            trace!("rejected proposal: game is over ({})", self.status);
            return Err(MoveError::GameOver);
        }
        Ok(())
    }

    fn commit(&mut self, record: MoveRecord) -> MoveOutcome {
        self.last_move = Some(record);

        if record.promotion_pending {
            debug!("{} {} awaits promotion", record.piece, record.mv);
            return MoveOutcome {
                mv: record.mv,
                captured: record.captured,
                status: self.status,
                in_check: false,
                promotion_pending: true,
            };
        }

        match record.captured {
            _ if record.mv.is_castling() => debug!("{} castles {}", record.piece.color, record.mv),
            Some(victim) if record.mv.is_en_passant() => {
                debug!("{} {} takes {victim} en passant", record.piece, record.mv);
            }
            Some(victim) => debug!("{} {} takes {victim}", record.piece, record.mv),
            None => debug!("{} {}", record.piece, record.mv),
        }

        let to_move = self.board.side_to_move();
        self.status = self.board.status(to_move);
        let in_check = self.board.is_in_check(to_move);
        match self.status {
            GameStatus::Checkmate => info!("checkmate, {} wins", to_move.opponent()),
            GameStatus::Stalemate => info!("stalemate"),
            GameStatus::Ongoing if in_check => debug!("{to_move} is in check"),
            GameStatus::Ongoing => {}
        }

        MoveOutcome {
            mv: record.mv,
            captured: record.captured,
            status: self.status,
            in_check,
            promotion_pending: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn play(game: &mut Game, moves: &[(&str, &str)]) {
        for (from, to) in moves {
            game.propose_move(sq(from), sq(to)).unwrap();
        }
    }

    #[test]
    fn test_new_game_snapshot() {
        let game = Game::new(VariantDescriptor::standard()).unwrap();
        assert_eq!(game.snapshot().len(), 32);
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.last_move().is_none());
    }

    #[test]
    fn test_chess960_game_starts() {
        let game = Game::new(VariantDescriptor::chess960(959).unwrap()).unwrap();
        assert_eq!(game.variant().name(), "Chess 960 #959");
        assert_eq!(
            game.snapshot().get(&sq("b1")),
            Some(&Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(game.board().all_legal_moves(Color::White).len(), 20);
    }

    #[test]
    fn test_hints_only_for_side_to_move() {
        let game = Game::new(VariantDescriptor::standard()).unwrap();
        assert_eq!(game.legal_destinations(sq("e2")), vec![sq("e3"), sq("e4")]);
        assert!(game.legal_destinations(sq("e7")).is_empty());
        assert!(game.legal_destinations(sq("e4")).is_empty());
    }

    #[test]
    fn test_fools_mate_ends_game() {
        let mut game = Game::new(VariantDescriptor::standard()).unwrap();
        play(&mut game, &[("f2", "f3"), ("e7", "e5"), ("g2", "g4")]);
        let outcome = game.propose_move(sq("d8"), sq("h4")).unwrap();
        assert_eq!(outcome.status, GameStatus::Checkmate);
        assert!(outcome.in_check);
        assert_eq!(game.status(), GameStatus::Checkmate);

        assert_eq!(game.propose_move(sq("a2"), sq("a3")), Err(MoveError::GameOver));
        assert!(game.legal_destinations(sq("a2")).is_empty());
    }

    #[test]
    fn test_check_reported() {
        let mut game = Game::new(VariantDescriptor::standard()).unwrap();
        play(&mut game, &[("e2", "e4"), ("f7", "f6")]);
        let outcome = game.propose_move(sq("d1"), sq("h5")).unwrap();
        assert!(outcome.in_check);
        assert_eq!(outcome.status, GameStatus::Ongoing);
        assert!(game.in_check());
    }

    #[test]
    fn test_last_move_tracks_commits() {
        let mut game = Game::new(VariantDescriptor::standard()).unwrap();
        play(&mut game, &[("g1", "f3")]);
        let last = game.last_move().unwrap();
        assert_eq!(last.mv.from, sq("g1"));
        assert_eq!(last.mv.to, sq("f3"));
        assert_eq!(last.piece, Piece::new(Color::White, PieceKind::Knight));
    }

    #[test]
    fn test_unicorn_promotion_only_in_unicorn_variant() {
        let mut game = Game::new(VariantDescriptor::with_unicorn()).unwrap();
        play(
            &mut game,
            &[
                ("b2", "b4"),
                ("a7", "a5"),
                ("b4", "a5"),
                ("a8", "a6"),
                ("h2", "h3"),
                ("a6", "b6"),
                ("a5", "a6"),
                ("b6", "c6"),
                ("a6", "a7"),
                ("c6", "d6"),
            ],
        );
        let outcome = game.propose_move(sq("a7"), sq("b8")).unwrap();
        assert!(outcome.promotion_pending);
        assert_eq!(outcome.captured, Some(Piece::new(Color::Black, PieceKind::Knight)));
        assert_eq!(game.side_to_move(), Color::White);

        assert_eq!(
            game.resolve_promotion(sq("a8"), PieceKind::Unicorn),
            Err(MoveError::PromotionPending { square: sq("b8") })
        );
        let outcome = game.resolve_promotion(sq("b8"), PieceKind::Unicorn).unwrap();
        assert!(!outcome.promotion_pending);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(
            game.snapshot().get(&sq("b8")),
            Some(&Piece::new(Color::White, PieceKind::Unicorn))
        );
    }

    #[test]
    fn test_standard_rejects_unicorn_promotion() {
        let mut game = Game::new(VariantDescriptor::standard()).unwrap();
        play(
            &mut game,
            &[
                ("b2", "b4"),
                ("a7", "a5"),
                ("b4", "a5"),
                ("a8", "a6"),
                ("h2", "h3"),
                ("a6", "b6"),
                ("a5", "a6"),
                ("b6", "c6"),
                ("a6", "a7"),
                ("c6", "d6"),
                ("a7", "b8"),
            ],
        );
        assert_eq!(
            game.resolve_promotion(sq("b8"), PieceKind::Unicorn),
            Err(MoveError::InvalidPromotionChoice { kind: PieceKind::Unicorn })
        );
        assert!(game.legal_destinations(sq("e2")).is_empty());
        assert!(game.resolve_promotion(sq("b8"), PieceKind::Knight).is_ok());
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn test_rejection_leaves_game_unchanged() {
        let mut game = Game::new(VariantDescriptor::standard()).unwrap();
        let before = game.board().clone();
        assert!(game.propose_move(sq("e2"), sq("e5")).is_err());
        assert!(game.propose_move(sq("d7"), sq("d5")).is_err());
        assert!(game.propose_move(sq("d4"), sq("d5")).is_err());
        assert_eq!(game.board(), &before);
        assert!(game.last_move().is_none());
    }
}
