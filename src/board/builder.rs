//! Fluent builder for constructing positions.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind};
//!
//! let board = BoardBuilder::new()
//!     .piece("e1".parse().unwrap(), Color::White, PieceKind::King)
//!     .piece("e8".parse().unwrap(), Color::Black, PieceKind::King)
//!     .piece("a8".parse().unwrap(), Color::White, PieceKind::Rook)
//!     .build();
//! assert!(board.is_in_check(Color::Black));
//! ```

use super::{Board, Color, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, PieceKind)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let pieces = Board::new()
            .pieces()
            .map(|p| (p.square(), p.color(), p.kind()))
            .collect();
        BoardBuilder { pieces }
    }

    /// Place a piece, replacing any piece already given for that square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, color, kind) in self.pieces {
            board.place(square, color, kind);
        }
        board
    }
}
