//! Piece placement strings.
//!
//! The placement field of FEN: eight rows separated by `/`, row 0 (rank 8) first,
//! digits for runs of empty squares, uppercase letters for White. Anything after the
//! first whitespace is ignored, so a full FEN string is accepted too.

use std::str::FromStr;

use super::error::PlacementError;
use super::{Board, Color, PieceKind, Square, BOARD_SIZE};

impl Board {
    /// Parse a board from a placement string.
    pub fn try_from_placement(placement: &str) -> Result<Self, PlacementError> {
        let mut board = Board::empty();
        let field = placement.split_whitespace().next().unwrap_or("");
        let rows: Vec<&str> = field.split('/').collect();

        if rows.len() != BOARD_SIZE {
            return Err(PlacementError::WrongRowCount { found: rows.len() });
        }

        for (row, row_str) in rows.into_iter().enumerate() {
            let mut col = 0;
            for c in row_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    col += run as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(PlacementError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let square = Square::new(row, col)
                    .ok_or(PlacementError::RowTooLong { row, cols: col + 1 })?;
                board.place(square, color, kind);
                col += 1;
            }
            if col > BOARD_SIZE {
                return Err(PlacementError::RowTooLong { row, cols: col });
            }
            if col < BOARD_SIZE {
                return Err(PlacementError::RowTooShort { row, cols: col });
            }
        }

        Ok(board)
    }

    /// Parse a board from a placement string.
    ///
    /// # Panics
    /// Panics if the string is invalid. Use `try_from_placement` for fallible parsing.
    #[must_use]
    pub fn from_placement(placement: &str) -> Self {
        Self::try_from_placement(placement).expect("Invalid placement string")
    }

    /// Placement string of the current grid.
    #[must_use]
    pub fn to_placement(&self) -> String {
        let rows: Vec<String> = self
            .grid
            .iter()
            .map(|cells| {
                let mut row = String::new();
                let mut empty = 0;
                for cell in cells {
                    match cell {
                        Some(piece) => {
                            if empty > 0 {
                                row.push_str(&empty.to_string());
                                empty = 0;
                            }
                            row.push(piece.to_placement_char());
                        }
                        None => empty += 1,
                    }
                }
                if empty > 0 {
                    row.push_str(&empty.to_string());
                }
                row
            })
            .collect();
        rows.join("/")
    }
}

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_placement(s)
    }
}
