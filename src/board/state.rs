use super::error::SquareError;
use super::{Color, Graveyard, Piece, PieceKind, Square, BOARD_SIZE};

/// Initial contents of a new board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Setup {
    /// No pieces at all
    Empty,
    /// The 32-piece starting position
    #[default]
    Standard,
}

/// 8x8 grid of optional pieces plus the record of captured pieces.
///
/// The board owns every live piece. Each piece's stored square always matches the
/// cell it occupies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) grid: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    pub(crate) graveyard: Graveyard,
}

impl Board {
    /// Standard starting position.
    pub fn new() -> Self {
        Board::with_setup(Setup::Standard)
    }

    pub fn empty() -> Self {
        Board {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            graveyard: Graveyard::new(),
        }
    }

    pub fn with_setup(setup: Setup) -> Self {
        let mut board = Board::empty();
        if setup == Setup::Standard {
            board.fill_new_game();
        }
        board
    }

    fn fill_new_game(&mut self) {
        for (col, kind) in PieceKind::BACK_ROW.into_iter().enumerate() {
            for color in Color::BOTH {
                self.place(Square::at(color.back_row(), col), color, kind);
                self.place(
                    Square::at(color.pawn_start_row(), col),
                    color,
                    PieceKind::Pawn,
                );
            }
        }
    }

    /// Put a new piece on `square`, replacing whatever stood there.
    pub(crate) fn place(&mut self, square: Square, color: Color, kind: PieceKind) {
        self.set_cell(square, Some(Piece::new(kind, color, square)));
    }

    /// Piece on a square, if any.
    #[inline]
    #[must_use]
    pub fn cell(&self, square: Square) -> Option<&Piece> {
        self.grid[square.row()][square.col()].as_ref()
    }

    /// Piece at raw coordinates.
    ///
    /// Returns `SquareError::OutOfBounds` when either coordinate is outside 0-7.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Option<&Piece>, SquareError> {
        let square = Square::try_from((row, col))?;
        Ok(self.cell(square))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cell(square).is_none()
    }

    /// Raw grid write with no legality check; returns the previous occupant.
    ///
    /// A stored piece has its square rewritten to `square`.
    pub fn set_cell(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        let piece = piece.map(|mut p| {
            p.set_square(square);
            p
        });
        std::mem::replace(&mut self.grid[square.row()][square.col()], piece)
    }

    /// Independent copy of the grid for simulating hypothetical moves.
    ///
    /// Every piece is re-placed on a fresh board; the copy starts with an empty
    /// graveyard and shares nothing with `self`.
    #[must_use]
    pub fn duplicate(&self) -> Board {
        let mut copy = Board::empty();
        for piece in self.pieces() {
            copy.place(piece.square(), piece.color(), piece.kind());
        }
        copy
    }

    /// All pieces in row-major order (rows 0-7, columns 0-7).
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.grid.iter().flatten().flatten()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.color() == color)
    }

    /// Square of the first king of `color` found in row-major order.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|p| p.kind() == PieceKind::King)
            .map(Piece::square)
    }

    #[must_use]
    pub fn graveyard(&self) -> &Graveyard {
        &self.graveyard
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
