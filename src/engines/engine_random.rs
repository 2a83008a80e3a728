//! Easy tier: uniform choice among legal moves.

use rand::prelude::IndexedRandom;
use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::debug;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves;

/// Uniformly random legal move of `side`, `None` if there is none.
pub fn choose_random_move<R: Rng + ?Sized>(
    board: &Board,
    side: Color,
    rng: &mut R,
) -> ChessResult<(Option<Move>, usize)> {
    let mut scratch = board.clone();
    let moves = legal_moves(&mut scratch, side)?;
    Ok((moves.as_slice().choose(rng).copied(), moves.len()))
}

pub struct RandomEngine<R = ThreadRng> {
    rng: R,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Engine for RandomEngine<R> {
    fn name(&self) -> &str {
        "PlumSparring Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        if game_state.game_over {
            return Ok(EngineOutput::default());
        }

        let (best_move, legal_move_count) =
            choose_random_move(&game_state.board, game_state.side_to_move, &mut self.rng)?;
        debug!(legal_moves = legal_move_count, ?best_move, "random engine picked");

        Ok(EngineOutput {
            best_move,
            best_score: None,
            legal_move_count,
            nodes: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::move_generation::legal_move_generator::legal_moves;

    #[test]
    fn random_engine_returns_a_legal_move() {
        let game = GameState::new_game();
        let mut engine = RandomEngine::with_rng(StdRng::seed_from_u64(7));
        let legal = legal_moves(&mut game.board.clone(), Color::Light).expect("movegen");

        for _ in 0..50 {
            let out = engine.choose_move(&game).expect("engine should run");
            let mv = out.best_move.expect("startpos has moves");
            assert!(legal.contains(&mv));
            assert_eq!(out.legal_move_count, 20);
        }
    }

    #[test]
    fn thread_rng_engine_picks_a_legal_move() {
        let game = GameState::new_game();
        let out = RandomEngine::new().choose_move(&game).expect("engine should run");
        let legal = legal_moves(&mut game.board.clone(), Color::Light).expect("movegen");
        assert!(legal.contains(&out.best_move.expect("startpos has moves")));
    }

    #[test]
    fn random_choice_covers_many_moves() {
        let board = Board::initial();
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..400 {
            let (mv, _) =
                choose_random_move(&board, Color::Light, &mut rng).expect("engine should run");
            seen.insert(mv.expect("startpos has moves"));
        }
        assert_eq!(seen.len(), 20);
    }
}
