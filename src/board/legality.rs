//! Legal move filtering, check and checkmate detection.
//!
//! Legality is decided by simulation: every candidate is played on a
//! [`Board::duplicate`] and rejected if the mover's king is attacked afterwards.
//! The live board is never touched.

use super::{Board, Color, Piece, Square};

impl Board {
    /// Raw moves of `piece` that do not leave its own king in check.
    #[must_use]
    pub fn legal_moves(&self, piece: &Piece) -> Vec<Square> {
        let from = piece.square();
        let color = piece.color();
        self.raw_moves(piece)
            .into_iter()
            .filter(|&to| !self.move_leaves_king_in_check(from, to, color))
            .collect()
    }

    /// Legal moves of whatever stands on `square`; empty if the square is empty.
    #[must_use]
    pub fn legal_moves_from(&self, square: Square) -> Vec<Square> {
        self.cell(square)
            .map(|piece| self.legal_moves(piece))
            .unwrap_or_default()
    }

    /// Play `from -> to` on a scratch copy and report whether `color` is in check after it.
    fn move_leaves_king_in_check(&self, from: Square, to: Square, color: Color) -> bool {
        let mut scratch = self.duplicate();
        scratch.commit_move(from, to);
        scratch.king_attacked(color)
    }

    fn king_attacked(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    /// True if any opposing piece can reach `color`'s king.
    ///
    /// The king is the first one found scanning rows 0-7 then columns 0-7. A color
    /// without a king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        if self.king_square(color).is_none() {
            #[cfg(feature = "logging")]
            log::warn!("check query for {color} but no {color} king is on the board");
            return false;
        }
        self.king_attacked(color)
    }

    /// True if at least one piece of `color` has a legal move.
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.pieces_of(color)
            .any(|piece| !self.legal_moves(piece).is_empty())
    }

    /// In check with no legal move for any piece of `color`.
    ///
    /// A position with no legal moves and no check (stalemate) is not checkmate.
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        if !self.is_in_check(color) {
            return false;
        }
        let mated = !self.has_legal_move(color);
        if mated {
            #[cfg(feature = "logging")]
            log::info!("{color} is checkmated");
        }
        mated
    }

    /// The checkmated color, if any. White is examined first.
    #[must_use]
    pub fn checkmated(&self) -> Option<Color> {
        Color::BOTH.into_iter().find(|&color| self.is_checkmate(color))
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.checkmated().is_some()
    }
}
