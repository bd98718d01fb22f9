use super::super::{Board, Color, Square};

impl Board {
    /// Targets of a king or knight: every on-board offset not held by `color`.
    pub(crate) fn generate_stepping_moves(
        &self,
        from: Square,
        color: Color,
        deltas: &[(isize, isize)],
    ) -> Vec<Square> {
        deltas
            .iter()
            .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
            .filter(|&to| !self.is_occupied_by(to, color))
            .collect()
    }
}
