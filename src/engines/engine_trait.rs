//! Engine abstraction layer.
//!
//! Each difficulty tier is an `Engine`; callers pick one at runtime behind a
//! single trait object and receive the chosen move plus a little search
//! metadata.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ChessError::UnknownDifficulty(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal move (or the game is over).
    pub best_move: Option<Move>,
    pub best_score: Option<i32>,
    pub legal_move_count: usize,
    pub nodes: u64,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Choose a move for `game_state.side_to_move`. The game state is not
    /// modified.
    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("easy".parse(), Ok(Difficulty::Easy));
        assert_eq!(" Medium ".parse(), Ok(Difficulty::Medium));
        assert_eq!("HARD".parse(), Ok(Difficulty::Hard));
        assert_eq!(
            "brutal".parse::<Difficulty>(),
            Err(ChessError::UnknownDifficulty("brutal".to_owned()))
        );
    }

    #[test]
    fn difficulty_display_round_trips() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse(), Ok(difficulty));
        }
    }
}
