//! Knight geometry: an L-shaped jump, no path requirement.

use crate::game_state::chess_types::Square;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
pub fn knight_can_reach(from: Square, to: Square) -> bool {
    let d_row = from.row().abs_diff(to.row());
    let d_col = from.col().abs_diff(to.col());
    (d_row == 1 && d_col == 2) || (d_row == 2 && d_col == 1)
}
