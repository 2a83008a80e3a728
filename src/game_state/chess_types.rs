//! Core value types shared by the rules engine and the search.
//!
//! Coordinates are canonical: row 0 is Dark's home rank and row 7 is Light's.
//! A `Square` can only be built in bounds, so board indexing never fails.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::BOARD_SIZE;

pub use crate::game_state::game_state::{GameState, GameStatus};
pub use crate::game_state::undo_state::MoveRecord;

/// Side to move. `Light` is white, `Dark` is black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a single pawn advance.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "white"),
            Color::Dark => write!(f, "black"),
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// A board coordinate, always inside the 8x8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: usize, col: usize) -> ChessResult<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(ChessError::InvalidCoordinate { row, col });
        }
        Ok(Self::at(row as u8, col as u8))
    }

    /// In-bounds constructor for constants and already validated indices.
    #[inline]
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Shift by a row/column delta, `None` if the result leaves the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        let range = 0..BOARD_SIZE as i8;
        if range.contains(&row) && range.contains(&col) {
            Some(Self::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square::at(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A pure coordinate transition. Capture and promotion are derived from the
/// board when the move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    pub fn from_coords(
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    ) -> ChessResult<Self> {
        Ok(Self::new(
            Square::new(from_row, from_col)?,
            Square::new(to_row, to_col)?,
        ))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_rejects_out_of_range_coordinates() {
        assert_eq!(
            Square::new(8, 0),
            Err(ChessError::InvalidCoordinate { row: 8, col: 0 })
        );
        assert!(Square::new(3, 9).is_err());
        assert!(Move::from_coords(0, 0, 0, 8).is_err());
    }

    #[test]
    fn square_offset_stays_on_board() {
        let corner = Square::new(0, 0).expect("in bounds");
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(2, 1), Some(Square::at(2, 1)));
    }

    #[test]
    fn all_squares_are_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::at(0, 0));
        assert_eq!(squares[1], Square::at(0, 1));
        assert_eq!(squares[8], Square::at(1, 0));
        assert_eq!(squares[63], Square::at(7, 7));
    }
}
