//! Canonical chess-rule constants.
//!
//! Board geometry, the starting layout, pawn start/promotion rows and piece
//! values shared by the rules engine and the scorer.

use crate::game_state::chess_types::{Color, PieceKind};

pub const BOARD_SIZE: usize = 8;

/// Standard starting position, piece placement field of a FEN string.
/// The first FEN rank maps to row 0.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

/// Back-rank order from column 0 to column 7, identical for both sides.
pub const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[inline]
pub const fn home_row(color: Color) -> usize {
    match color {
        Color::Light => 7,
        Color::Dark => 0,
    }
}

/// Row a pawn starts on and may double-step from.
#[inline]
pub const fn pawn_start_row(color: Color) -> usize {
    match color {
        Color::Light => 6,
        Color::Dark => 1,
    }
}

/// A pawn landing on row 0 or row 7 promotes. Promotion is always to a
/// queen; there is no under-promotion.
#[inline]
pub const fn is_promotion_row(row: usize) -> bool {
    row == 0 || row == BOARD_SIZE - 1
}

pub const PROMOTION_PIECE: PieceKind = PieceKind::Queen;

/// Material value in pawns.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 100,
    }
}
