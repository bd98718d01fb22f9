//! Core chess types.
//!
//! - `PieceKind`, `Color` and `Piece` - piece kinds, colors and placed pieces
//! - `Movement` - stepping / sliding / pawn geometry classes
//! - `Square` - (row, col) board coordinate

mod piece;
mod square;

pub use piece::{Color, Movement, Piece, PieceKind};
pub use square::{Square, BOARD_SIZE};
