//! Rook geometry: along a row or a column through empty squares.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

#[inline]
pub fn is_orthogonal(from: Square, to: Square) -> bool {
    from != to && (from.row() == to.row() || from.col() == to.col())
}

pub fn rook_can_reach(board: &Board, from: Square, to: Square) -> bool {
    is_orthogonal(from, to) && board.is_path_clear(from, to)
}
