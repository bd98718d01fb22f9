//! Board representation and move rules.
//!
//! An 8x8 grid of optional pieces. Moves are generated per piece from its movement
//! class (stepping, sliding or pawn), filtered for legality by simulating each
//! candidate on a duplicate board, and committed with captures recorded in the
//! graveyard. Castling, en passant, promotion and draw detection are not modelled.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color};
//!
//! let mut board = Board::new();
//! board
//!     .validate_and_move("e2".parse().unwrap(), "e4".parse().unwrap(), Color::White)
//!     .unwrap();
//! assert!(!board.is_game_over());
//! ```

mod builder;
mod error;
mod graveyard;
mod legality;
mod make_move;
mod movegen;
mod placement;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, PlacementError, SquareError};
pub use graveyard::Graveyard;
pub use state::{Board, Setup};
pub use types::{Color, Movement, Piece, PieceKind, Square, BOARD_SIZE};
