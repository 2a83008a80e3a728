//! Full legal move generation pipeline.
//!
//! Enumerates pseudo-legal moves, tries each one on the board and drops those
//! that leave the mover's own king in check. Enumeration order is row-major
//! over origins, then row-major over destinations; move selection relies on
//! it to break ties deterministically.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::TrialMove;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_legal_move};

/// Every pseudo-legal move of `color`, in enumeration order.
pub fn pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (from, _) in board.pieces_of(color) {
        for to in Square::all() {
            if is_legal_move(board, from, to) {
                out.push(Move::new(from, to));
            }
        }
    }
    out
}

/// True if playing `mv` keeps `color`'s king out of check.
pub fn leaves_king_safe(board: &mut Board, color: Color, mv: Move) -> ChessResult<bool> {
    let trial = TrialMove::apply(board, mv)?;
    Ok(!is_king_in_check(&trial, color)?)
}

/// Legal moves of `color`. The board is restored before returning.
pub fn legal_moves(board: &mut Board, color: Color) -> ChessResult<Vec<Move>> {
    let pseudo = pseudo_legal_moves(board, color);
    let mut legal = Vec::with_capacity(pseudo.len());
    for mv in pseudo {
        if leaves_king_safe(board, color, mv)? {
            legal.push(mv);
        }
    }
    Ok(legal)
}

/// Short-circuiting form of `!legal_moves(..).is_empty()`.
pub fn has_any_legal_move(board: &mut Board, color: Color) -> ChessResult<bool> {
    for mv in pseudo_legal_moves(board, color) {
        if leaves_king_safe(board, color, mv)? {
            return Ok(true);
        }
    }
    Ok(false)
}
