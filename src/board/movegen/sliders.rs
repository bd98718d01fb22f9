use super::super::{Board, Color, Square};

impl Board {
    /// Walk each ray until the edge or a blocker; an opposing blocker is a capture target.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
    ) -> Vec<Square> {
        let mut moves = Vec::new();

        for &(d_row, d_col) in directions {
            let mut current = from;
            while let Some(to) = current.offset(d_row, d_col) {
                match self.cell(to) {
                    None => moves.push(to),
                    Some(blocker) => {
                        if blocker.color() != color {
                            moves.push(to);
                        }
                        break;
                    }
                }
                current = to;
            }
        }
        moves
    }
}
