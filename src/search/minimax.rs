//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Scores are always from the searching side's perspective: that side
//! maximizes, its opponent minimizes. A node with no legal moves scores
//! `-MATE_SCORE` / `+MATE_SCORE` when the side to move is mated (maximizing /
//! minimizing node) and 0 for stalemate. A side to move whose king was just
//! captured scores like a mated one. Mate distance is not scored.
//!
//! All trial moves are made on one scratch board owned by the search.

use tracing::{debug, trace};

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::TrialMove;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::search::board_scoring::{BoardScorer, MATE_SCORE};

const SCORE_INFINITY: i32 = i32::MAX;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Depth searched below each root move.
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 3 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub root_moves: usize,
    pub nodes: u64,
}

/// Pick the root move of `side` whose resulting position scores highest.
///
/// Root moves are not themselves part of the minimax tree: each one is
/// applied and the position after it is searched to `config.max_depth` with
/// the opponent to move. Ties keep the first move in enumeration order.
pub fn search_best_move<S: BoardScorer>(
    board: &Board,
    side: Color,
    scorer: &S,
    config: SearchConfig,
) -> ChessResult<SearchResult> {
    let mut scratch = board.clone();
    let moves = legal_moves(&mut scratch, side)?;

    let mut result = SearchResult {
        root_moves: moves.len(),
        best_score: -SCORE_INFINITY,
        ..SearchResult::default()
    };
    if moves.is_empty() {
        result.best_score = 0;
        return Ok(result);
    }

    for mv in moves {
        let mut trial = TrialMove::apply(&mut scratch, mv)?;
        let score = minimax(
            &mut trial,
            scorer,
            config.max_depth,
            -SCORE_INFINITY,
            SCORE_INFINITY,
            false,
            side,
            &mut result.nodes,
        )?;
        trace!(%mv, score, "root move scored");

        if score > result.best_score {
            result.best_score = score;
            result.best_move = Some(mv);
        }
    }

    debug!(
        best_move = ?result.best_move,
        best_score = result.best_score,
        nodes = result.nodes,
        "minimax search finished"
    );
    Ok(result)
}

/// Minimax value of `board` for `perspective`.
///
/// `maximizing` is true when `perspective` is the side to move.
#[allow(clippy::too_many_arguments)]
pub fn minimax<S: BoardScorer>(
    board: &mut Board,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    perspective: Color,
    nodes: &mut u64,
) -> ChessResult<i32> {
    *nodes += 1;

    let to_move = if maximizing {
        perspective
    } else {
        perspective.opposite()
    };

    // King taken on the previous ply: scored like a mate.
    if board.find_king(to_move).is_err() {
        return Ok(if maximizing { -MATE_SCORE } else { MATE_SCORE });
    }

    if depth == 0 {
        return scorer.score(board, perspective);
    }

    let moves = legal_moves(board, to_move)?;
    if moves.is_empty() {
        if !is_king_in_check(board, to_move)? {
            return Ok(0);
        }
        return Ok(if maximizing { -MATE_SCORE } else { MATE_SCORE });
    }

    if maximizing {
        let mut best = -SCORE_INFINITY;
        for mv in moves {
            let mut trial = TrialMove::apply(board, mv)?;
            let score = minimax(
                &mut trial,
                scorer,
                depth - 1,
                alpha,
                beta,
                false,
                perspective,
                nodes,
            )?;
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        Ok(best)
    } else {
        let mut best = SCORE_INFINITY;
        for mv in moves {
            let mut trial = TrialMove::apply(board, mv)?;
            let score = minimax(
                &mut trial,
                scorer,
                depth - 1,
                alpha,
                beta,
                true,
                perspective,
                nodes,
            )?;
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        Ok(best)
    }
}
