//! Variant descriptors: board size, starting layout, castling availability
//! and promotion targets.
//!
//! Descriptors are plain values built by factory functions and handed to
//! [`Game::new`](crate::game::Game::new); nothing here is global state.
//!
//! # Example
//! ```
//! use chess_rules::variant::VariantDescriptor;
//!
//! let standard = VariantDescriptor::standard();
//! assert_eq!(standard.size(), 8);
//!
//! let shuffled = VariantDescriptor::chess960(518).unwrap();
//! assert_eq!(shuffled.back_rank(), standard.back_rank());
//! ```

mod chess960;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rand::Rng;

use crate::board::{PieceKind, VariantError, MAX_BOARD_SIZE};

pub use chess960::{chess960_back_rank, is_valid_chess960_back_rank, CHESS960_POSITIONS};

/// Smallest board on which both castling landing files (2 and `size - 2`) exist
/// and differ.
pub const MIN_BOARD_SIZE: u8 = 5;

const STANDARD_BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

const STANDARD_PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

/// A named rules configuration.
///
/// `placement[r][f]` is the kind White starts with on rank `r`, file `f`;
/// Black mirrors it onto rank `size - 1 - r` on the same file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariantDescriptor {
    name: String,
    size: u8,
    placement: Vec<Vec<Option<PieceKind>>>,
    castling: bool,
    promotions: Vec<PieceKind>,
}

impl VariantDescriptor {
    /// Build and validate a custom variant.
    pub fn new(
        name: impl Into<String>,
        size: u8,
        placement: Vec<Vec<Option<PieceKind>>>,
        castling: bool,
        promotions: Vec<PieceKind>,
    ) -> Result<Self, VariantError> {
        let variant = VariantDescriptor {
            name: name.into(),
            size,
            placement,
            castling,
            promotions,
        };
        variant.validate()?;
        Ok(variant)
    }

    /// Normal chess.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_back_rank("Normal Chess", &STANDARD_BACK_RANK, STANDARD_PROMOTIONS.to_vec())
    }

    /// Normal chess with the g-file knight replaced by a unicorn, which is
    /// also a promotion choice.
    #[must_use]
    pub fn with_unicorn() -> Self {
        let mut back_rank = STANDARD_BACK_RANK;
        back_rank[6] = PieceKind::Unicorn;
        let mut promotions = STANDARD_PROMOTIONS.to_vec();
        promotions.push(PieceKind::Unicorn);
        Self::from_back_rank("Unicorn", &back_rank, promotions)
    }

    /// Randomized back rank number `index` (0..960) in the standard numbering.
    pub fn chess960(index: u16) -> Result<Self, VariantError> {
        let back_rank = chess960_back_rank(index)?;
        debug_assert!(
            is_valid_chess960_back_rank(&back_rank),
            "chess960 index {index} decoded to an invalid back rank"
        );
        Ok(Self::from_back_rank(
            &format!("Chess 960 #{index}"),
            &back_rank,
            STANDARD_PROMOTIONS.to_vec(),
        ))
    }

    /// Randomized back rank drawn from `rng`. Returns the descriptor and the
    /// index it was decoded from, so the layout can be reproduced.
    pub fn chess960_random<R: Rng + ?Sized>(rng: &mut R) -> (Self, u16) {
        let index = rng.gen_range(0..CHESS960_POSITIONS);
        let back_rank = chess960::decode_back_rank(index);
        let variant = Self::from_back_rank(
            &format!("Chess 960 #{index}"),
            &back_rank,
            STANDARD_PROMOTIONS.to_vec(),
        );
        (variant, index)
    }

    /// Back rank plus a full pawn rank on an eight-file board.
    fn from_back_rank(name: &str, back_rank: &[PieceKind; 8], promotions: Vec<PieceKind>) -> Self {
        let variant = VariantDescriptor {
            name: name.to_string(),
            size: 8,
            placement: vec![
                back_rank.iter().copied().map(Some).collect(),
                vec![Some(PieceKind::Pawn); 8],
            ],
            castling: true,
            promotions,
        };
        debug_assert_eq!(variant.validate(), Ok(()));
        variant
    }

    /// Check the layout is playable: board size in range, every rank as wide
    /// as the board, one king per side, mirrored halves disjoint, and a
    /// non-empty promotion list without kings or pawns.
    pub fn validate(&self) -> Result<(), VariantError> {
        let size = self.size;
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(VariantError::BoardSizeOutOfRange { size });
        }

        for (rank, files) in self.placement.iter().enumerate() {
            if 2 * rank + 1 >= size as usize {
                return Err(VariantError::OverlappingPlacement { rank });
            }
            if files.len() != size as usize {
                return Err(VariantError::RankWidthMismatch {
                    rank,
                    files: files.len(),
                    size,
                });
            }
        }

        let kings = self
            .placement
            .iter()
            .flatten()
            .filter(|kind| **kind == Some(PieceKind::King))
            .count();
        match kings {
            0 => return Err(VariantError::MissingKing),
            1 => {}
            count => return Err(VariantError::MultipleKings { count }),
        }

        if self.promotions.is_empty() {
            return Err(VariantError::EmptyPromotionList);
        }
        if let Some(&kind) = self.promotions.iter().find(|k| k.is_royal_or_pawn()) {
            return Err(VariantError::InvalidPromotionKind { kind });
        }

        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[must_use]
    pub fn castling_enabled(&self) -> bool {
        self.castling
    }

    /// Kinds a pawn may promote to
    #[must_use]
    pub fn promotions(&self) -> &[PieceKind] {
        &self.promotions
    }

    /// White's starting ranks, back rank first
    #[must_use]
    pub fn placement(&self) -> &[Vec<Option<PieceKind>>] {
        &self.placement
    }

    /// White's back rank (empty slice if the layout has no ranks)
    #[must_use]
    pub fn back_rank(&self) -> &[Option<PieceKind>] {
        self.placement.first().map_or(&[], Vec::as_slice)
    }

    /// Disable castling for this variant.
    #[must_use]
    pub fn without_castling(mut self) -> Self {
        self.castling = false;
        self
    }
}

impl Default for VariantDescriptor {
    fn default() -> Self {
        Self::standard()
    }
}
