//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, Color, Graveyard, MoveError, Piece, PieceKind, PlacementError, Setup,
    Square, SquareError,
};
