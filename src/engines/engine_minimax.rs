//! Hard tier: depth-limited minimax with alpha-beta pruning.
//!
//! Deterministic: the same position always yields the same move.

use tracing::debug;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::minimax::{search_best_move, SearchConfig};

pub struct MinimaxEngine<S: BoardScorer = MaterialScorer> {
    scorer: S,
    config: SearchConfig,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::with_scorer(MaterialScorer, SearchConfig::default())
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(scorer: S, config: SearchConfig) -> Self {
        Self { scorer, config }
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "PlumSparring Minimax"
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        if game_state.game_over {
            return Ok(EngineOutput::default());
        }

        let result = search_best_move(
            &game_state.board,
            game_state.side_to_move,
            &self.scorer,
            self.config,
        )?;
        debug!(
            depth = self.config.max_depth,
            root_moves = result.root_moves,
            best_move = ?result.best_move,
            "minimax engine picked"
        );

        Ok(EngineOutput {
            best_move: result.best_move,
            best_score: result.best_move.map(|_| result.best_score),
            legal_move_count: result.root_moves,
            nodes: result.nodes,
        })
    }
}
