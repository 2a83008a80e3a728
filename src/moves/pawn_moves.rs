//! Pawn geometry.
//!
//! Light advances toward row 0 and Dark toward row 7. A pawn pushes one step
//! onto an empty square, two steps from its start row through two empty
//! squares, or captures one step diagonally forward onto an opposing piece.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::{Color, Square};

pub fn pawn_can_reach(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let forward = color.forward();
    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;

    if d_col == 0 {
        if d_row == forward {
            return board.is_empty_at(to);
        }
        if d_row == 2 * forward && from.row() == pawn_start_row(color) {
            let Some(middle) = from.offset(forward, 0) else {
                return false;
            };
            return board.is_empty_at(middle) && board.is_empty_at(to);
        }
        return false;
    }

    if d_col.abs() == 1 && d_row == forward {
        return board
            .get(to)
            .is_some_and(|target| target.color == color.opposite());
    }

    false
}

#[cfg(test)]
mod tests {
    use super::pawn_can_reach;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).expect("in bounds")
    }

    #[test]
    fn light_pawn_pushes_toward_row_zero() {
        let board = Board::initial();
        assert!(pawn_can_reach(&board, Color::Light, sq(6, 4), sq(5, 4)));
        assert!(pawn_can_reach(&board, Color::Light, sq(6, 4), sq(4, 4)));
        assert!(!pawn_can_reach(&board, Color::Light, sq(6, 4), sq(7, 4)));
        assert!(!pawn_can_reach(&board, Color::Light, sq(6, 4), sq(3, 4)));
    }

    #[test]
    fn dark_pawn_pushes_toward_row_seven() {
        let board = Board::initial();
        assert!(pawn_can_reach(&board, Color::Dark, sq(1, 2), sq(2, 2)));
        assert!(pawn_can_reach(&board, Color::Dark, sq(1, 2), sq(3, 2)));
        assert!(!pawn_can_reach(&board, Color::Dark, sq(1, 2), sq(0, 2)));
    }

    #[test]
    fn double_step_only_from_start_row_and_through_empty_squares() {
        let mut board = Board::empty();
        board.set(sq(5, 0), Some(Piece::new(PieceKind::Pawn, Color::Light)));
        assert!(!pawn_can_reach(&board, Color::Light, sq(5, 0), sq(3, 0)));

        board.set(sq(6, 1), Some(Piece::new(PieceKind::Pawn, Color::Light)));
        board.set(sq(5, 1), Some(Piece::new(PieceKind::Knight, Color::Dark)));
        assert!(!pawn_can_reach(&board, Color::Light, sq(6, 1), sq(4, 1)));
        assert!(!pawn_can_reach(&board, Color::Light, sq(6, 1), sq(5, 1)));
    }

    #[test]
    fn diagonal_step_requires_opposing_piece() {
        let mut board = Board::empty();
        board.set(sq(4, 4), Some(Piece::new(PieceKind::Pawn, Color::Light)));
        board.set(sq(3, 5), Some(Piece::new(PieceKind::Pawn, Color::Dark)));
        board.set(sq(3, 3), Some(Piece::new(PieceKind::Pawn, Color::Light)));

        assert!(pawn_can_reach(&board, Color::Light, sq(4, 4), sq(3, 5)));
        assert!(!pawn_can_reach(&board, Color::Light, sq(4, 4), sq(3, 3)));
        assert!(!pawn_can_reach(&board, Color::Light, sq(4, 4), sq(5, 5)));
    }
}
