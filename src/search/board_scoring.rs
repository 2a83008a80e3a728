//! Pluggable board evaluation interfaces and the baseline material scorer.
//!
//! Search stays independent of the heuristic by delegating leaf scoring to
//! the `BoardScorer` trait.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::piece_value;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_checkmate, is_king_in_check};

pub const CHECK_BONUS: i32 = 50;
pub const MATE_SCORE: i32 = 1000;

pub trait BoardScorer {
    /// Score from the perspective of `perspective`: positive favours that side.
    ///
    /// Takes the board mutably because mate detection tries moves on it; the
    /// board is restored before returning.
    fn score(&self, board: &mut Board, perspective: Color) -> ChessResult<i32>;
}

/// Signed material plus check and mate terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    pub fn material_balance(board: &Board, perspective: Color) -> i32 {
        board
            .pieces()
            .map(|(_, piece)| {
                let value = piece_value(piece.kind);
                if piece.color == perspective {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }

    fn check_term(board: &mut Board, color: Color) -> ChessResult<i32> {
        if !is_king_in_check(board, color)? {
            return Ok(0);
        }
        if is_checkmate(board, color)? {
            Ok(CHECK_BONUS + MATE_SCORE)
        } else {
            Ok(CHECK_BONUS)
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &mut Board, perspective: Color) -> ChessResult<i32> {
        let material = Self::material_balance(board, perspective);
        let opponent_term = Self::check_term(board, perspective.opposite())?;
        let own_term = Self::check_term(board, perspective)?;
        Ok(material + opponent_term - own_term)
    }
}
