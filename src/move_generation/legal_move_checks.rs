//! Pseudo-legality, check and checkmate queries.
//!
//! `is_legal_move` answers the geometric question only; it does not look at
//! the safety of the mover's own king. King safety is layered on top by
//! trying the move on the board (see `legal_move_generator`).

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::has_any_legal_move;
use crate::moves::bishop_moves::bishop_can_reach;
use crate::moves::king_moves::king_can_reach;
use crate::moves::knight_moves::knight_can_reach;
use crate::moves::pawn_moves::pawn_can_reach;
use crate::moves::queen_moves::queen_can_reach;
use crate::moves::rook_moves::rook_can_reach;

/// True iff a piece stands on `from`, `to` does not hold a piece of the same
/// color, and the piece's movement rule allows the step.
pub fn is_legal_move(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };
    if board.get(to).is_some_and(|target| target.color == piece.color) {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => pawn_can_reach(board, piece.color, from, to),
        PieceKind::Knight => knight_can_reach(from, to),
        PieceKind::Bishop => bishop_can_reach(board, from, to),
        PieceKind::Rook => rook_can_reach(board, from, to),
        PieceKind::Queen => queen_can_reach(board, from, to),
        PieceKind::King => king_can_reach(from, to),
    }
}

#[inline]
pub fn is_pseudo_legal(board: &Board, mv: Move) -> bool {
    is_legal_move(board, mv.from, mv.to)
}

/// True if any piece of `attacker` has a pseudo-legal move onto `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    board
        .pieces_of(attacker)
        .any(|(from, _)| is_legal_move(board, from, square))
}

pub fn is_king_in_check(board: &Board, color: Color) -> ChessResult<bool> {
    let king = board.find_king(color)?;
    Ok(is_square_attacked(board, king, color.opposite()))
}

/// In check with no move that gets out of it.
///
/// Returns `false` for stalemate; callers that need to tell the two apart
/// query [`is_king_in_check`] as well.
pub fn is_checkmate(board: &mut Board, color: Color) -> ChessResult<bool> {
    if !is_king_in_check(board, color)? {
        return Ok(false);
    }
    Ok(!has_any_legal_move(board, color)?)
}
