//! Raw move geometry.
//!
//! Raw moves respect board edges, blockers and own-color occupancy but ignore
//! whether the mover's king would be left in check; see `legality` for that.

mod pawns;
mod sliders;
mod steppers;

use super::{Board, Color, Movement, Piece, Square};

impl Board {
    /// Squares `piece` can reach by its movement rules from its current square.
    #[must_use]
    pub fn raw_moves(&self, piece: &Piece) -> Vec<Square> {
        let from = piece.square();
        let color = piece.color();
        match piece.kind().movement() {
            Movement::Stepping(deltas) => self.generate_stepping_moves(from, color, deltas),
            Movement::Sliding(directions) => self.generate_sliding_moves(from, color, directions),
            Movement::Pawn => self.generate_pawn_moves(from, color),
        }
    }

    /// True if any raw move of a `by` piece lands on `square`.
    pub(crate) fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.pieces_of(by)
            .any(|attacker| self.raw_moves(attacker).contains(&square))
    }

    #[inline]
    pub(crate) fn is_occupied_by(&self, square: Square, color: Color) -> bool {
        self.cell(square).is_some_and(|p| p.color() == color)
    }
}
