//! Difficulty-tier dispatch.
//!
//! `select_move` is the entry point for callers that hold a bare board and a
//! color; `engine_for` builds the matching `Engine` for callers that drive a
//! `GameState`.

use rand::Rng;
use tracing::debug;

use crate::chess_errors::ChessResult;
use crate::engines::engine_greedy::{choose_greedy_move, GreedyConfig, GreedyEngine};
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::{choose_random_move, RandomEngine};
use crate::engines::engine_trait::{Difficulty, Engine};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::search::board_scoring::MaterialScorer;
use crate::search::minimax::{search_best_move, SearchConfig};

/// Choose a move for `side` at `difficulty` using the thread-local RNG.
///
/// `Ok(None)` means `side` has no legal move: checkmate or stalemate, which
/// the caller tells apart with `is_king_in_check`.
pub fn select_move(
    board: &Board,
    side: Color,
    difficulty: Difficulty,
) -> ChessResult<Option<Move>> {
    select_move_with_rng(board, side, difficulty, &mut rand::rng())
}

pub fn select_move_with_rng<R: Rng + ?Sized>(
    board: &Board,
    side: Color,
    difficulty: Difficulty,
    rng: &mut R,
) -> ChessResult<Option<Move>> {
    let chosen = match difficulty {
        Difficulty::Easy => choose_random_move(board, side, rng)?.0,
        Difficulty::Medium => {
            choose_greedy_move(board, side, &GreedyConfig::default(), rng)?.best_move
        }
        Difficulty::Hard => {
            search_best_move(board, side, &MaterialScorer, SearchConfig::default())?.best_move
        }
    };
    debug!(%difficulty, %side, ?chosen, "move selected");
    Ok(chosen)
}

/// Boxed engine for `difficulty`, drawing randomness from `rng`.
pub fn engine_for<R: Rng + 'static>(difficulty: Difficulty, rng: R) -> Box<dyn Engine> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomEngine::with_rng(rng)),
        Difficulty::Medium => Box::new(GreedyEngine::with_rng(rng)),
        Difficulty::Hard => Box::new(MinimaxEngine::new()),
    }
}
