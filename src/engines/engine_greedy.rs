use rand::prelude::IndexedRandom;
use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::debug;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::piece_value;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::TrialMove;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy)]
pub struct GreedyConfig {
    /// Probability of playing the top-scored move instead of a random one.
    pub best_move_probability: f64,
    pub check_bonus: i32,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            best_move_probability: 0.8,
            check_bonus: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedyChoice {
    pub best_move: Option<Move>,
    pub best_score: Option<i32>,
    pub legal_move_count: usize,
}

/// Captured value plus a bonus when the move gives check.
///
/// Taking the king scores its full value and no check bonus.
pub fn score_move(
    board: &mut Board,
    side: Color,
    mv: Move,
    config: &GreedyConfig,
) -> ChessResult<i32> {
    let capture_value = board.get(mv.to).map_or(0, |piece| piece_value(piece.kind));
    let trial = TrialMove::apply(board, mv)?;
    let check_bonus = match trial.find_king(side.opposite()) {
        Ok(king) if is_square_attacked(&trial, king, side) => config.check_bonus,
        _ => 0,
    };
    Ok(capture_value + check_bonus)
}

/// Highest-scoring legal move with probability `best_move_probability`,
/// otherwise any legal move. Ties go to the first move in enumeration order.
pub fn choose_greedy_move<R: Rng + ?Sized>(
    board: &Board,
    side: Color,
    config: &GreedyConfig,
    rng: &mut R,
) -> ChessResult<GreedyChoice> {
    let mut scratch = board.clone();
    let moves = legal_moves(&mut scratch, side)?;
    let legal_move_count = moves.len();

    let mut best: Option<(Move, i32)> = None;
    for mv in &moves {
        let score = score_move(&mut scratch, side, *mv, config)?;
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((*mv, score));
        }
    }

    let Some((top_move, top_score)) = best else {
        return Ok(GreedyChoice {
            best_move: None,
            best_score: None,
            legal_move_count,
        });
    };

    if rng.random_bool(config.best_move_probability) {
        return Ok(GreedyChoice {
            best_move: Some(top_move),
            best_score: Some(top_score),
            legal_move_count,
        });
    }

    Ok(GreedyChoice {
        best_move: moves.as_slice().choose(rng).copied(),
        best_score: None,
        legal_move_count,
    })
}

pub struct GreedyEngine<R = ThreadRng> {
    rng: R,
    config: GreedyConfig,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GreedyEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            config: GreedyConfig::default(),
        }
    }
}

impl<R: Rng> Engine for GreedyEngine<R> {
    fn name(&self) -> &str {
        "PlumSparring Greedy"
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        if game_state.game_over {
            return Ok(EngineOutput::default());
        }

        let choice = choose_greedy_move(
            &game_state.board,
            game_state.side_to_move,
            &self.config,
            &mut self.rng,
        )?;
        debug!(
            legal_moves = choice.legal_move_count,
            best_move = ?choice.best_move,
            score = ?choice.best_score,
            "greedy engine picked"
        );

        Ok(EngineOutput {
            best_move: choice.best_move,
            best_score: choice.best_score,
            legal_move_count: choice.legal_move_count,
            nodes: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::utils::fen_parser::parse_placement;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).expect("test square should be in bounds")
    }

    // Light: king (7, 0), pawn (4, 4). Dark: king (0, 7), pawn (3, 5).
    // Five legal Light moves, exactly one of them a capture.
    const ONE_CAPTURE: &str = "7k/8/8/5p2/4P3/8/8/K7";

    #[test]
    fn scores_capture_value_and_check_bonus() {
        let mut board = parse_placement("4k3/8/8/8/8/8/3q4/R3K3").expect("FEN should parse");
        let config = GreedyConfig::default();
        // Rook lift to (0, 0) checks along row 0.
        assert_eq!(
            score_move(&mut board, Color::Light, Move::new(sq(7, 0), sq(0, 0)), &config),
            Ok(10)
        );
        // King takes the queen on (6, 3).
        assert_eq!(
            score_move(&mut board, Color::Light, Move::new(sq(7, 4), sq(6, 3)), &config),
            Ok(9)
        );
        assert_eq!(
            score_move(&mut board, Color::Light, Move::new(sq(7, 0), sq(6, 0)), &config),
            Ok(0)
        );
    }

    #[test]
    fn always_greedy_picks_the_capture() {
        let board = parse_placement(ONE_CAPTURE).expect("FEN should parse");
        let config = GreedyConfig {
            best_move_probability: 1.0,
            ..GreedyConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let choice = choose_greedy_move(&board, Color::Light, &config, &mut rng)
            .expect("engine should run");
        assert_eq!(choice.best_move, Some(Move::new(sq(4, 4), sq(3, 5))));
        assert_eq!(choice.best_score, Some(1));
        assert_eq!(choice.legal_move_count, 5);
    }

    #[test]
    fn ties_go_to_first_enumerated_move() {
        let board = Board::initial();
        let config = GreedyConfig {
            best_move_probability: 1.0,
            ..GreedyConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let choice = choose_greedy_move(&board, Color::Light, &config, &mut rng)
            .expect("engine should run");
        assert_eq!(choice.best_move, Some(Move::new(sq(6, 0), sq(4, 0))));
        assert_eq!(choice.best_score, Some(0));
    }

    #[test]
    fn capture_frequency_converges_toward_eighty_percent() {
        let board = parse_placement(ONE_CAPTURE).expect("FEN should parse");
        let capture = Move::new(sq(4, 4), sq(3, 5));
        let mut engine = GreedyEngine::with_rng(StdRng::seed_from_u64(2024));
        let game = GameState::new(board, Color::Light);

        let trials = 4000;
        let mut captures = 0;
        for _ in 0..trials {
            let out = engine.choose_move(&game).expect("engine should run");
            if out.best_move == Some(capture) {
                captures += 1;
            }
        }

        // 0.8 greedy + 0.2 * 1/5 random hits = 0.84 expected.
        let rate = f64::from(captures) / f64::from(trials);
        assert!(rate > 0.78 && rate < 0.90, "capture rate {rate}");
    }

    #[test]
    fn exposed_king_is_taken_without_check_bonus() {
        let mut board = parse_placement("4k3/8/8/8/8/8/8/4RK2").expect("FEN should parse");
        let take_king = Move::new(sq(7, 4), sq(0, 4));
        assert_eq!(
            score_move(&mut board, Color::Light, take_king, &GreedyConfig::default()),
            Ok(100)
        );

        let config = GreedyConfig {
            best_move_probability: 1.0,
            ..GreedyConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(4);
        let choice = choose_greedy_move(&board, Color::Light, &config, &mut rng)
            .expect("engine should run");
        assert_eq!(choice.best_move, Some(take_king));
        assert_eq!(choice.best_score, Some(100));
        assert_eq!(
            board,
            parse_placement("4k3/8/8/8/8/8/8/4RK2").expect("FEN should parse")
        );
    }

    #[test]
    fn thread_rng_engine_sees_every_opening_move() {
        let out = GreedyEngine::new()
            .choose_move(&GameState::new_game())
            .expect("engine should run");
        assert_eq!(out.legal_move_count, 20);
        assert!(out.best_move.is_some());
    }

    #[test]
    fn no_moves_yields_none() {
        let board = parse_placement("7k/8/6Q1/8/8/8/8/K7").expect("FEN should parse");
        let mut rng = StdRng::seed_from_u64(3);
        let choice = choose_greedy_move(&board, Color::Dark, &GreedyConfig::default(), &mut rng)
            .expect("engine should run");
        assert_eq!(choice.best_move, None);
        assert_eq!(choice.legal_move_count, 0);
    }
}
