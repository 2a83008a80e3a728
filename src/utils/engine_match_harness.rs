//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other from a given
//! `GameState` until one side is mated, the side to move is stalemated, or the
//! ply cap is reached. Every move goes through `GameState::make_move`, so an
//! engine that returns an illegal move aborts the match with an error. So does
//! an engine that returns no move while the side to move still has one.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

impl MatchOutcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            MatchOutcome::WhiteWinCheckmate => Some(Color::Light),
            MatchOutcome::BlackWinCheckmate => Some(Color::Dark),
            MatchOutcome::DrawStalemate | MatchOutcome::DrawMaxPlies => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub max_plies: u16,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 300 }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    /// Per game: the outcome and the color player 1 had.
    pub outcomes: Vec<(MatchOutcome, Color)>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
}

impl MatchSeriesStats {
    pub fn player1_avg_move_time_ms(&self) -> f64 {
        avg_ns_per_move_ms(self.player1_total_time_ns, self.player1_moves)
    }

    pub fn player2_avg_move_time_ms(&self) -> f64 {
        avg_ns_per_move_ms(self.player2_total_time_ns, self.player2_moves)
    }

    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms(),
            self.player2_avg_move_time_ms(),
        )
    }

    fn record(&mut self, result: &MatchResult, player1_color: Color) {
        let (p1_moves, p2_moves, p1_ns, p2_ns) = match player1_color {
            Color::Light => (
                result.white_move_count,
                result.black_move_count,
                result.white_total_time_ns,
                result.black_total_time_ns,
            ),
            Color::Dark => (
                result.black_move_count,
                result.white_move_count,
                result.black_total_time_ns,
                result.white_total_time_ns,
            ),
        };
        self.player1_moves = self.player1_moves.saturating_add(p1_moves);
        self.player2_moves = self.player2_moves.saturating_add(p2_moves);
        self.player1_total_time_ns = self.player1_total_time_ns.saturating_add(p1_ns);
        self.player2_total_time_ns = self.player2_total_time_ns.saturating_add(p2_ns);

        match result.outcome.winner() {
            Some(color) if color == player1_color => self.player1_wins += 1,
            Some(_) => self.player2_wins += 1,
            None => self.draws += 1,
        }
        self.outcomes.push((result.outcome, player1_color));
    }
}

/// Play one match. `white` moves for Light, `black` for Dark.
pub fn play_engine_match(
    white: &mut dyn Engine,
    black: &mut dyn Engine,
    start_state: GameState,
    config: MatchConfig,
) -> ChessResult<MatchResult> {
    white.new_game();
    black.new_game();

    let mut state = start_state;
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    let mut outcome = MatchOutcome::DrawMaxPlies;
    for _ in 0..config.max_plies {
        if let Some(terminal) = terminal_outcome(&state)? {
            outcome = terminal;
            break;
        }

        let mover = state.side_to_move;
        let started = Instant::now();
        let out = match mover {
            Color::Light => white.choose_move(&state)?,
            Color::Dark => black.choose_move(&state)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::Light => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Dark => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        // The position is live here, so an empty answer is an engine fault.
        let chosen = out.best_move.ok_or(ChessError::EngineDeclined(mover))?;
        state.make_move(chosen)?;
    }

    if outcome == MatchOutcome::DrawMaxPlies {
        if let Some(terminal) = terminal_outcome(&state)? {
            outcome = terminal;
        }
    }
    debug!(?outcome, plies = state.history.len(), "match finished");

    Ok(MatchResult {
        outcome,
        final_state: state,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Play a series of games from the initial position and aggregate results.
///
/// Factories receive a per-game seed. Player 1's color is drawn each game
/// from an RNG seeded by `base_seed`, so a series is reproducible.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> ChessResult<MatchSeriesStats>
where
    F1: Fn(u64) -> Box<dyn Engine>,
    F2: Fn(u64) -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_color = if color_rng.random_bool(0.5) {
            Color::Light
        } else {
            Color::Dark
        };
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut player1 = player1_factory(seed);
        let mut player2 = player2_factory(seed.wrapping_add(0x9E37_79B9));

        let (white, black) = match player1_color {
            Color::Light => (&mut player1, &mut player2),
            Color::Dark => (&mut player2, &mut player1),
        };
        if config.verbose {
            info!(
                game = i + 1,
                of = config.games,
                seed,
                white = white.name(),
                black = black.name(),
                "starting game"
            );
        }

        let result = play_engine_match(
            &mut **white,
            &mut **black,
            GameState::new_game(),
            config.per_game,
        )?;
        stats.record(&result, player1_color);

        if config.verbose {
            info!(
                game = i + 1,
                outcome = ?result.outcome,
                plies = result.final_state.history.len(),
                p1_wins = stats.player1_wins,
                p2_wins = stats.player2_wins,
                draws = stats.draws,
                "game finished"
            );
        }
    }

    Ok(stats)
}

fn terminal_outcome(state: &GameState) -> ChessResult<Option<MatchOutcome>> {
    Ok(match state.status()? {
        GameStatus::Checkmate { winner: Color::Light } => Some(MatchOutcome::WhiteWinCheckmate),
        GameStatus::Checkmate { winner: Color::Dark } => Some(MatchOutcome::BlackWinCheckmate),
        GameStatus::Stalemate => Some(MatchOutcome::DrawStalemate),
        GameStatus::InProgress | GameStatus::Check => None,
    })
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_select::engine_for;
    use crate::engines::engine_trait::{Difficulty, EngineOutput};

    struct SilentEngine;

    impl Engine for SilentEngine {
        fn name(&self) -> &str {
            "silent"
        }

        fn choose_move(&mut self, _game_state: &GameState) -> ChessResult<EngineOutput> {
            Ok(EngineOutput::default())
        }
    }

    #[test]
    fn two_easy_engines_finish_with_a_valid_outcome() {
        let mut white = RandomEngine::with_rng(StdRng::seed_from_u64(1));
        let mut black = RandomEngine::with_rng(StdRng::seed_from_u64(2));
        let result = play_engine_match(
            &mut white,
            &mut black,
            GameState::new_game(),
            MatchConfig { max_plies: 60 },
        )
        .expect("match should run");

        let plies = result.final_state.history.len();
        assert!(plies > 0 && plies <= 60);
        assert_eq!(
            u32::try_from(plies).expect("small"),
            result.white_move_count + result.black_move_count
        );
        if result.outcome == MatchOutcome::DrawMaxPlies {
            assert_eq!(plies, 60);
        } else {
            assert!(result.final_state.game_over);
        }
    }

    #[test]
    fn match_from_a_mated_position_ends_immediately() {
        let start = GameState::from_fen("rnbqkbnr/ppppp2p/5p2/6pQ/3PP3/8/PPP2PPP/RNB1KBNR b")
            .expect("FEN should parse");
        let mut white = RandomEngine::with_rng(StdRng::seed_from_u64(3));
        let mut black = RandomEngine::with_rng(StdRng::seed_from_u64(4));
        let result = play_engine_match(&mut white, &mut black, start, MatchConfig::default())
            .expect("match should run");

        assert_eq!(result.outcome, MatchOutcome::WhiteWinCheckmate);
        assert_eq!(result.white_move_count + result.black_move_count, 0);
    }

    #[test]
    fn hard_engine_converts_mate_in_one() {
        let start = GameState::from_fen("r6k/8/8/8/8/8/5PPP/6K1 b").expect("FEN should parse");
        let mut white = RandomEngine::with_rng(StdRng::seed_from_u64(5));
        let mut black = MinimaxEngine::new();
        let result = play_engine_match(&mut white, &mut black, start, MatchConfig { max_plies: 4 })
            .expect("match should run");

        assert_eq!(result.outcome, MatchOutcome::BlackWinCheckmate);
        assert_eq!(result.black_move_count, 1);
    }

    #[test]
    fn engine_without_a_move_in_a_live_position_aborts_the_match() {
        let mut white = SilentEngine;
        let mut black = RandomEngine::with_rng(StdRng::seed_from_u64(6));
        let result = play_engine_match(
            &mut white,
            &mut black,
            GameState::new_game(),
            MatchConfig::default(),
        );

        assert_eq!(result.err(), Some(ChessError::EngineDeclined(Color::Light)));
    }

    #[test]
    fn series_accounts_for_every_game() {
        let stats = play_engine_match_series(
            |seed| engine_for(Difficulty::Easy, StdRng::seed_from_u64(seed)),
            |seed| engine_for(Difficulty::Medium, StdRng::seed_from_u64(seed)),
            MatchSeriesConfig {
                games: 3,
                base_seed: 777,
                per_game: MatchConfig { max_plies: 24 },
                verbose: false,
            },
        )
        .expect("series should run");

        assert_eq!(stats.games, 3);
        assert_eq!(stats.outcomes.len(), 3);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 3);
        assert!(stats.player1_avg_move_time_ms() >= 0.0);
        assert!(stats.report().starts_with("games=3"));
    }
}
