use super::error::MoveError;
use super::{Board, Color, Piece, Square};

impl Board {
    /// Move whatever stands on `from` to `to` without any legality check.
    ///
    /// A piece already on `to` is captured: it leaves the grid, is appended to the
    /// graveyard and is returned. An empty `from` changes nothing.
    pub fn commit_move(&mut self, from: Square, to: Square) -> Option<Piece> {
        let Some(piece) = self.set_cell(from, None) else {
            #[cfg(feature = "logging")]
            log::debug!("commit_move from empty square {from} ignored");
            return None;
        };

        let captured = self.set_cell(to, Some(piece));
        if let Some(taken) = captured {
            #[cfg(feature = "logging")]
            log::debug!("{piece} captures {taken}");
            self.graveyard.push(taken);
        }

        #[cfg(feature = "logging")]
        log::debug!("{} {:?} {from}-{to}", piece.color(), piece.kind());
        captured
    }

    /// Check a player's move request and apply it.
    ///
    /// Errors, in the order they are checked:
    /// - `EmptyStart` if `from` is empty
    /// - `WrongColor` if the piece on `from` is not `mover`'s
    /// - `GeometricallyIllegal` if the piece cannot reach `to`
    /// - `LeavesKingInCheck` if the move would leave `mover`'s king attacked
    ///
    /// On success returns the captured piece, if any.
    pub fn validate_and_move(
        &mut self,
        from: Square,
        to: Square,
        mover: Color,
    ) -> Result<Option<Piece>, MoveError> {
        if let Err(err) = self.validate_move(from, to, mover) {
            #[cfg(feature = "logging")]
            log::debug!("rejected {mover} move {from}-{to}: {err}");
            return Err(err);
        }
        Ok(self.commit_move(from, to))
    }

    /// Same as [`Board::validate_and_move`] for raw (row, col) coordinates.
    ///
    /// Off-board coordinates fail with `MoveError::OutOfBounds`.
    pub fn validate_and_move_at(
        &mut self,
        from: (usize, usize),
        to: (usize, usize),
        mover: Color,
    ) -> Result<Option<Piece>, MoveError> {
        let from = Square::try_from(from)?;
        let to = Square::try_from(to)?;
        self.validate_and_move(from, to, mover)
    }

    fn validate_move(&self, from: Square, to: Square, mover: Color) -> Result<(), MoveError> {
        let piece = self
            .cell(from)
            .ok_or(MoveError::EmptyStart { square: from })?;

        if piece.color() != mover {
            return Err(MoveError::WrongColor {
                square: from,
                expected: mover,
                found: piece.color(),
            });
        }
        if !self.raw_moves(piece).contains(&to) {
            return Err(MoveError::GeometricallyIllegal { from, to });
        }
        if !self.legal_moves(piece).contains(&to) {
            return Err(MoveError::LeavesKingInCheck { from, to });
        }
        Ok(())
    }
}
