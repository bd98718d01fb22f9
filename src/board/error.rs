//! Error types for board operations.

use std::fmt;

use super::{Color, Square};

/// Error type for raw coordinates and square notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row or column outside 0-7
    OutOfBounds { row: usize, col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { row, col } => {
                write!(f, "Square ({row}, {col}) does not exist (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for rejected move requests.
///
/// Every variant is a recoverable input error; callers report it and ask again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece on the start square
    EmptyStart { square: Square },
    /// The piece on the start square belongs to the other player
    WrongColor {
        square: Square,
        expected: Color,
        found: Color,
    },
    /// The piece cannot reach the destination at all
    GeometricallyIllegal { from: Square, to: Square },
    /// The destination is reachable but would leave the mover's king in check
    LeavesKingInCheck { from: Square, to: Square },
    /// A raw coordinate was off the board
    OutOfBounds(SquareError),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptyStart { square } => {
                write!(f, "You cannot move from an empty square ({square})")
            }
            MoveError::WrongColor {
                square,
                expected,
                found,
            } => write!(
                f,
                "The piece on {square} is {found}, but it is {expected}'s move"
            ),
            MoveError::GeometricallyIllegal { from, to } => {
                write!(f, "The piece on {from} is unable to move to {to}")
            }
            MoveError::LeavesKingInCheck { from, to } => write!(
                f,
                "Illegal move {from}-{to}: you cannot leave or put your king in check"
            ),
            MoveError::OutOfBounds(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::OutOfBounds(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SquareError> for MoveError {
    fn from(err: SquareError) -> Self {
        MoveError::OutOfBounds(err)
    }
}

/// Error type for placement string parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Invalid piece character
    InvalidPiece { char: char },
    /// Placement must describe exactly 8 rows
    WrongRowCount { found: usize },
    /// Too many columns in a row
    RowTooLong { row: usize, cols: usize },
    /// Too few columns in a row
    RowTooShort { row: usize, cols: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            PlacementError::WrongRowCount { found } => {
                write!(f, "Placement must have 8 rows, found {found}")
            }
            PlacementError::RowTooLong { row, cols } => {
                write!(f, "Too many columns ({cols}) in row {row}")
            }
            PlacementError::RowTooShort { row, cols } => {
                write!(f, "Too few columns ({cols}) in row {row}")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_square_error_out_of_bounds() {
        let err = SquareError::OutOfBounds { row: 9, col: 3 };
        assert!(err.to_string().contains('9'));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_move_error_names_squares() {
        let from = Square::at(6, 4);
        let to = Square::at(3, 4);
        let err = MoveError::GeometricallyIllegal { from, to };
        assert!(err.to_string().contains("e2"));
        assert!(err.to_string().contains("e5"));
    }

    #[test]
    fn test_move_error_wrong_color() {
        let err = MoveError::WrongColor {
            square: Square::at(1, 0),
            expected: Color::White,
            found: Color::Black,
        };
        let msg = err.to_string();
        assert!(msg.contains("a7"));
        assert!(msg.contains("Black"));
        assert!(msg.contains("White"));
    }

    #[test]
    fn test_move_error_from_square_error() {
        let err: MoveError = SquareError::OutOfBounds { row: 8, col: 8 }.into();
        assert_eq!(
            err,
            MoveError::OutOfBounds(SquareError::OutOfBounds { row: 8, col: 8 })
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_placement_error_messages() {
        let err = PlacementError::WrongRowCount { found: 7 };
        assert!(err.to_string().contains('7'));
        let err = PlacementError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_error_clone() {
        let err = MoveError::EmptyStart {
            square: Square::at(4, 4),
        };
        assert_eq!(err.clone(), err);
    }
}
