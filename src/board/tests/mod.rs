//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `check.rs` - Check, checkmate and game-over detection
//! - `moves.rs` - Move commands, captures and board duplication
//! - `edge_cases.rs` - Pins, own-color blocking and unusual setups
//! - `proptest.rs` - Property-based tests over random playouts

mod check;

use crate::board::Square;

/// Square from algebraic notation.
pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}
