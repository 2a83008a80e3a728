//! Perft: counts leaf nodes of the legal move tree.
//!
//! Used by tests and the criterion bench as a correctness guard for the move
//! generator. Castling and en passant are not part of these rules, so counts
//! match standard perft only while neither could occur (startpos depth <= 4).

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::TrialMove;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
    }
}

pub fn perft(board: &Board, side_to_move: Color, depth: u8) -> ChessResult<PerftCounts> {
    let mut scratch = board.clone();
    perft_recurse(&mut scratch, side_to_move, depth)
}

fn perft_recurse(board: &mut Board, side_to_move: Color, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in legal_moves(board, side_to_move)? {
        let mut trial = TrialMove::apply(board, mv)?;
        if depth == 1 {
            total.nodes += 1;
            total.captures += u64::from(trial.record().is_capture());
            total.promotions += u64::from(trial.record().is_promotion());
        } else {
            total.merge(perft_recurse(&mut trial, side_to_move.opposite(), depth - 1)?);
        }
    }

    Ok(total)
}
