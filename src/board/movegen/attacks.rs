use super::super::{Board, Color, Square};

impl Board {
    /// True if any piece of `attacker_color` attacks `square`.
    ///
    /// This is the only attack test in the crate: check detection, castling
    /// paths and the legality filter all go through it.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker_color: Color) -> bool {
        self.pieces_of(attacker_color)
            .any(|(from, piece)| self.piece_attacks(from, piece, square))
    }

    /// True if `color`'s king is attacked. A board without that king is
    /// never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, color.opponent()),
            None => false,
        }
    }
}
