//! Randomized back-rank layouts.
//!
//! Index `n` in `0..960` decodes as:
//! - light-square bishop on file `2 * (n % 4) + 1`
//! - dark-square bishop on file `2 * ((n / 4) % 4)`
//! - queen on the `(n / 16) % 6`-th free file
//! - knights on pair `n / 96` of the ten ordered pairs of the five free files
//! - rook, king, rook on the three files left, left to right
//!
//! Index 518 is the normal starting position.

use crate::board::{PieceKind, Square, VariantError};

/// Number of distinct randomized back ranks
pub const CHESS960_POSITIONS: u16 = 960;

/// Decode a randomized back rank index.
pub fn chess960_back_rank(index: u16) -> Result<[PieceKind; 8], VariantError> {
    if index >= CHESS960_POSITIONS {
        return Err(VariantError::InvalidChess960Index { index });
    }
    Ok(decode_back_rank(index))
}

pub(super) fn decode_back_rank(index: u16) -> [PieceKind; 8] {
    let mut slots: [Option<PieceKind>; 8] = [None; 8];

    let n = index as usize;
    slots[2 * (n % 4) + 1] = Some(PieceKind::Bishop);
    slots[2 * ((n / 4) % 4)] = Some(PieceKind::Bishop);

    place_in_free_slot(&mut slots, (n / 16) % 6, PieceKind::Queen);

    // Knight pairs in lexicographic order over the five free files.
    let (first, second) = knight_pair(n / 96);
    // Placing the later knight first keeps the earlier free index stable.
    place_in_free_slot(&mut slots, second, PieceKind::Knight);
    place_in_free_slot(&mut slots, first, PieceKind::Knight);

    for kind in [PieceKind::Rook, PieceKind::King, PieceKind::Rook] {
        place_in_free_slot(&mut slots, 0, kind);
    }

    slots.map(|slot| slot.unwrap_or(PieceKind::Rook))
}

fn knight_pair(pair: usize) -> (usize, usize) {
    let mut idx = 0;
    for i in 0..5 {
        for j in (i + 1)..5 {
            if idx == pair {
                return (i, j);
            }
            idx += 1;
        }
    }
    (3, 4)
}

fn place_in_free_slot(slots: &mut [Option<PieceKind>; 8], nth_free: usize, kind: PieceKind) {
    if let Some(slot) = slots.iter_mut().filter(|slot| slot.is_none()).nth(nth_free) {
        *slot = Some(kind);
    }
}

/// Check the randomized-layout constraints: the usual eight pieces, bishops
/// on opposite-colored squares, and the king strictly between the rooks.
#[must_use]
pub fn is_valid_chess960_back_rank(back_rank: &[PieceKind; 8]) -> bool {
    let files_of = |kind: PieceKind| -> Vec<usize> {
        (0..8).filter(|&f| back_rank[f] == kind).collect()
    };

    let bishops = files_of(PieceKind::Bishop);
    let rooks = files_of(PieceKind::Rook);
    let kings = files_of(PieceKind::King);

    if bishops.len() != 2
        || rooks.len() != 2
        || kings.len() != 1
        || files_of(PieceKind::Knight).len() != 2
        || files_of(PieceKind::Queen).len() != 1
    {
        return false;
    }

    let bishop_square = |i: usize| Square::new(bishops[i] as u8, 0);
    let opposite_bishops = bishop_square(0).is_dark() != bishop_square(1).is_dark();
    let king_between = rooks[0] < kings[0] && kings[0] < rooks[1];
    opposite_bishops && king_between
}

#[cfg(test)]
mod tests {
    use super::*;
    use PieceKind::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(
            chess960_back_rank(0).unwrap(),
            [Bishop, Bishop, Queen, Knight, Knight, Rook, King, Rook]
        );
        assert_eq!(
            chess960_back_rank(518).unwrap(),
            [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook]
        );
        assert_eq!(
            chess960_back_rank(959).unwrap(),
            [Rook, King, Rook, Knight, Knight, Queen, Bishop, Bishop]
        );
    }

    #[test]
    fn test_every_index_is_valid_and_distinct() {
        let mut seen = std::collections::HashSet::new();
        for index in 0..CHESS960_POSITIONS {
            let back_rank = chess960_back_rank(index).unwrap();
            assert!(
                is_valid_chess960_back_rank(&back_rank),
                "index {index} gave {back_rank:?}"
            );
            assert!(seen.insert(back_rank), "index {index} repeats a layout");
        }
        assert_eq!(seen.len(), 960);
    }

    #[test]
    fn test_rejects_bad_layouts() {
        assert!(!is_valid_chess960_back_rank(&[
            Rook, Bishop, Queen, Bishop, King, Knight, Knight, Rook
        ]));
        assert!(!is_valid_chess960_back_rank(&[
            King, Rook, Bishop, Queen, Rook, Bishop, Knight, Knight
        ]));
    }

    #[test]
    fn test_index_out_of_range() {
        assert_eq!(
            chess960_back_rank(960),
            Err(VariantError::InvalidChess960Index { index: 960 })
        );
    }
}
