//! Captured-piece ledger.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece};

/// Captured pieces in the order they were taken.
///
/// Append-only. Pieces keep the square they were captured on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Graveyard {
    pieces: Vec<Piece>,
}

impl Graveyard {
    #[must_use]
    pub fn new() -> Self {
        Graveyard { pieces: Vec::new() }
    }

    pub(crate) fn push(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Captured pieces, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter()
    }

    /// Captured pawns of `color`, in capture order.
    #[must_use]
    pub fn pawns(&self, color: Color) -> Vec<&Piece> {
        self.iter()
            .filter(|p| p.color() == color && p.is_pawn())
            .collect()
    }

    /// Captured non-pawns of `color`, most valuable first.
    ///
    /// Equal values keep capture order.
    #[must_use]
    pub fn others(&self, color: Color) -> Vec<&Piece> {
        let mut others: Vec<&Piece> = self
            .iter()
            .filter(|p| p.color() == color && !p.is_pawn())
            .collect();
        others.sort_by_key(|p| std::cmp::Reverse(p.value()));
        others
    }

    #[must_use]
    pub fn pawn_glyphs(&self, color: Color) -> String {
        self.pawns(color).into_iter().map(Piece::glyph).collect()
    }

    #[must_use]
    pub fn other_glyphs(&self, color: Color) -> String {
        self.others(color).into_iter().map(Piece::glyph).collect()
    }
}
