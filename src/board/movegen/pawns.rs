use super::super::{Board, Color, Square};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves = Vec::new();
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                moves.push(forward);
                if from.row() == color.pawn_start_row() {
                    if let Some(double) = forward.offset(dir, 0) {
                        if self.is_empty(double) {
                            moves.push(double);
                        }
                    }
                }
            }
        }

        for d_col in [-1, 1] {
            if let Some(target) = from.offset(dir, d_col) {
                if self.is_occupied_by(target, color.opponent()) {
                    moves.push(target);
                }
            }
        }

        moves
    }
}
