pub mod board;

pub use board::{Board, Color, MoveError, Piece, PieceKind, Square};
