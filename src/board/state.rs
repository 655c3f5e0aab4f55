use std::collections::BTreeMap;

use super::{CastleSide, CastlingRights, Color, Piece, PieceKind, Square, MAX_BOARD_SIZE};
use crate::variant::{VariantDescriptor, MIN_BOARD_SIZE};

const ARENA_SQUARES: usize = MAX_BOARD_SIZE as usize * MAX_BOARD_SIZE as usize;

/// Board state: a fixed arena of squares plus side to move, en passant
/// target, castling rights and any outstanding promotion.
///
/// Only the `size * size` corner of the arena is used. Cloning is a flat copy,
/// which keeps the scratch boards used for legality checks cheap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Option<Piece>; ARENA_SQUARES],
    pub(crate) size: u8,
    pub(crate) side_to_move: Color,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) castling_enabled: bool,
    pub(crate) pending_promotion: Option<Square>,
}

impl Board {
    /// Normal chess starting position.
    #[must_use]
    pub fn new() -> Self {
        Board::from_variant(&VariantDescriptor::standard())
    }

    /// Starting position of a variant. White's placement is mirrored onto
    /// Black's side; castling rights are granted for the outermost rook on
    /// each side of the king on the back rank.
    #[must_use]
    pub fn from_variant(variant: &VariantDescriptor) -> Self {
        let size = variant.size();
        let mut board = Board::empty(size);

        for (rank, files) in variant.placement().iter().enumerate() {
            for (file, kind) in files.iter().enumerate() {
                let Some(kind) = *kind else { continue };
                let (file, rank) = (file as u8, rank as u8);
                board.set_piece(Square::new(file, rank), Piece::new(Color::White, kind));
                board.set_piece(
                    Square::new(file, size - 1 - rank),
                    Piece::new(Color::Black, kind),
                );
            }
        }

        board.castling_enabled = variant.castling_enabled();
        if board.castling_enabled {
            for color in Color::BOTH {
                board.grant_initial_castling_rights(color);
            }
        }
        board
    }

    /// An empty board of the given size with White to move and no rights.
    ///
    /// `size` must lie in `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    #[must_use]
    pub fn empty(size: u8) -> Self {
        debug_assert!(
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
            "board size {size} outside {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
        );
        Board {
            squares: [None; ARENA_SQUARES],
            size: size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE),
            side_to_move: Color::White,
            en_passant_target: None,
            castling_rights: CastlingRights::none(),
            castling_enabled: true,
            pending_promotion: None,
        }
    }

    fn grant_initial_castling_rights(&mut self, color: Color) {
        let back = color.back_rank(self.size);
        let king = Piece::new(color, PieceKind::King);
        let rook = Piece::new(color, PieceKind::Rook);

        let Some(king_file) = (0..self.size).find(|&f| self.piece_at(Square::new(f, back)) == Some(king))
        else {
            return;
        };

        let rook_files: Vec<u8> = (0..self.size)
            .filter(|&f| self.piece_at(Square::new(f, back)) == Some(rook))
            .collect();

        if let Some(&file) = rook_files.iter().find(|&&f| f < king_file) {
            self.castling_rights.set(color, CastleSide::Queenside, file);
        }
        if let Some(&file) = rook_files.iter().rev().find(|&&f| f > king_file) {
            self.castling_rights.set(color, CastleSide::Kingside, file);
        }
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Square a pawn may capture into en passant on this half-move
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn castling_enabled(&self) -> bool {
        self.castling_enabled
    }

    /// Square of a pawn waiting to be replaced by a promotion choice
    #[inline]
    #[must_use]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    /// True if the square lies on this board
    #[inline]
    #[must_use]
    pub fn contains(&self, sq: Square) -> bool {
        sq.file < self.size && sq.rank < self.size
    }

    /// Piece on a square; `None` for empty or off-board squares
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if self.contains(sq) {
            self.squares[sq.index()]
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Place a piece, replacing whatever stood there. Off-board squares are ignored.
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        if !self.contains(sq) {
            return None;
        }
        self.squares[sq.index()].replace(piece)
    }

    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        if !self.contains(sq) {
            return None;
        }
        self.squares[sq.index()].take()
    }

    /// All occupied squares, rank by rank
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all(self.size).filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Occupied squares of one color
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.pieces()
            .find(|&(_, piece)| piece == king)
            .map(|(sq, _)| sq)
    }

    /// Read-only copy of the occupancy for rendering
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<Square, Piece> {
        self.pieces().collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
