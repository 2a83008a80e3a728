//! Mailbox board: an 8x8 grid of optional pieces.
//!
//! The board is plain value data (`Clone + Eq + Hash`). It is mutated only by
//! [`crate::move_generation::legal_move_apply`] and by direct setup through
//! [`Board::set`].

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{home_row, pawn_start_row, BACK_RANK, BOARD_SIZE};
use crate::game_state::chess_types::*;
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard starting layout.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for color in [Color::Light, Color::Dark] {
            let back = home_row(color);
            let pawns = pawn_start_row(color);
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.squares[back][col] = Some(Piece::new(*kind, color));
                board.squares[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()]
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Replace the content of `square`, returning what was there.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[square.row()][square.col()], piece)
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Occupied squares of one color in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// First king of `color` in row-major order.
    pub fn find_king(&self, color: Color) -> ChessResult<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
            .ok_or(ChessError::MissingKing(color))
    }

    /// True if every square strictly between `from` and `to` is empty.
    /// Callers guarantee the two squares share a row, column or diagonal.
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        let d_row = (to.row() as i8 - from.row() as i8).signum();
        let d_col = (to.col() as i8 - from.col() as i8).signum();
        let mut current = from;
        loop {
            current = match current.offset(d_row, d_col) {
                Some(next) => next,
                None => return true,
            };
            if current == to {
                return true;
            }
            if !self.is_empty_at(current) {
                return false;
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
