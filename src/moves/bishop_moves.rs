//! Bishop geometry: along a diagonal through empty squares.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    let d_row = from.row().abs_diff(to.row());
    d_row != 0 && d_row == from.col().abs_diff(to.col())
}

pub fn bishop_can_reach(board: &Board, from: Square, to: Square) -> bool {
    is_diagonal(from, to) && board.is_path_clear(from, to)
}

#[cfg(test)]
mod tests {
    use super::bishop_can_reach;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).expect("in bounds")
    }

    #[test]
    fn bishop_on_open_board_covers_both_diagonals() {
        let board = Board::empty();
        let from = sq(3, 3);
        assert_eq!(
            Square::all()
                .filter(|to| bishop_can_reach(&board, from, *to))
                .count(),
            13
        );
    }

    #[test]
    fn bishop_stops_at_blocker() {
        let mut board = Board::empty();
        board.set(sq(5, 5), Some(Piece::new(PieceKind::Knight, Color::Light)));
        assert!(bishop_can_reach(&board, sq(7, 7), sq(6, 6)));
        assert!(bishop_can_reach(&board, sq(7, 7), sq(5, 5)));
        assert!(!bishop_can_reach(&board, sq(7, 7), sq(4, 4)));
        assert!(!bishop_can_reach(&board, sq(7, 7), sq(7, 5)));
    }
}
