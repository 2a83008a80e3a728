//! In-place move application and its exact inverse.
//!
//! `apply_move` does not check legality; callers filter through
//! `is_legal_move` / `legal_moves` first. Tentative moves made during
//! legality filtering and search go through [`TrialMove`], which reverts the
//! board when it is dropped.

use std::ops::{Deref, DerefMut};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{is_promotion_row, PROMOTION_PIECE};
use crate::game_state::chess_types::*;

/// Move the piece on `mv.from` to `mv.to`, capturing whatever stood there and
/// promoting a pawn that reaches the far row to a queen.
pub fn apply_move(board: &mut Board, mv: Move) -> ChessResult<MoveRecord> {
    let piece = board.get(mv.from).ok_or(ChessError::EmptySquare(mv.from))?;

    let promoted_from = (piece.kind == PieceKind::Pawn && is_promotion_row(mv.to.row()))
        .then_some(PieceKind::Pawn);
    let moved_piece = match promoted_from {
        Some(_) => Piece::new(PROMOTION_PIECE, piece.color),
        None => piece,
    };

    board.set(mv.from, None);
    let captured_piece = board.set(mv.to, Some(moved_piece));

    Ok(MoveRecord {
        mv,
        moved_piece,
        captured_piece,
        promoted_from,
    })
}

/// Reverse exactly one `apply_move`.
pub fn undo_move(board: &mut Board, record: &MoveRecord) {
    debug_assert_eq!(board.get(record.mv.to), Some(record.moved_piece));
    debug_assert!(board.is_empty_at(record.mv.from));

    board.set(record.mv.to, record.captured_piece);
    board.set(record.mv.from, Some(record.piece_before_move()));
}

/// Pure variant: the board after `mv`, leaving `board` untouched.
pub fn apply_to_copy(board: &Board, mv: Move) -> ChessResult<Board> {
    let mut next = board.clone();
    apply_move(&mut next, mv)?;
    Ok(next)
}

/// A move applied for inspection only.
///
/// Derefs to the board in its post-move state and undoes the move when
/// dropped, so the board is restored on every exit path.
pub struct TrialMove<'a> {
    board: &'a mut Board,
    record: MoveRecord,
}

impl<'a> TrialMove<'a> {
    pub fn apply(board: &'a mut Board, mv: Move) -> ChessResult<Self> {
        let record = apply_move(board, mv)?;
        Ok(Self { board, record })
    }

    #[inline]
    pub fn record(&self) -> &MoveRecord {
        &self.record
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        undo_move(&mut *self.board, &self.record);
    }
}
