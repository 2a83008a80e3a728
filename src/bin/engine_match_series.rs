//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series -- --player1 hard --player2 medium`
//! `cargo run --release --bin engine_match_series -- --games 20 --seed 7 --verbose`

use std::error::Error;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use plum_sparring::engines::engine_select::engine_for;
use plum_sparring::engines::engine_trait::Difficulty;
use plum_sparring::game_state::chess_types::Color;
use plum_sparring::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

#[derive(Debug, Parser)]
#[command(about = "Play a seeded series of games between two difficulty tiers")]
struct Args {
    /// Tier for player 1 (easy, medium, hard). Colors are drawn per game.
    #[arg(long, default_value_t = Difficulty::Hard)]
    player1: Difficulty,

    /// Tier for player 2.
    #[arg(long, default_value_t = Difficulty::Medium)]
    player2: Difficulty,

    #[arg(long, default_value_t = 10)]
    games: u16,

    #[arg(long, default_value_t = 1234)]
    seed: u64,

    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    /// Log each game start and result.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let player1 = args.player1;
    let player2 = args.player2;

    let stats = play_engine_match_series(
        move |seed| engine_for(player1, StdRng::seed_from_u64(seed)),
        move |seed| engine_for(player2, StdRng::seed_from_u64(seed)),
        MatchSeriesConfig {
            games: args.games,
            base_seed: args.seed,
            per_game: MatchConfig {
                max_plies: args.max_plies,
            },
            verbose: args.verbose,
        },
    )?;

    println!("player1={player1} player2={player2}");
    println!("{}", stats.report());
    for (i, (outcome, player1_color)) in stats.outcomes.iter().enumerate() {
        let side = match player1_color {
            Color::Light => "white",
            Color::Dark => "black",
        };
        println!("game {:>3}: player1 as {side:<5} {outcome:?}", i + 1);
    }
    Ok(())
}
