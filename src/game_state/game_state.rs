//! Position aggregate.
//!
//! `GameState` owns the board, the side to move, the terminal flag and the
//! move history. Moves committed through it are checked against the legal
//! move list, so the side-to-move flip and the history can never drift out
//! of sync with the board.

use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_any_legal_move, legal_moves};
use crate::utils::fen_generator::generate_placement;
use crate::utils::fen_parser::parse_position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The side to move is in check but has a way out.
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub game_over: bool,
    pub history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    pub fn new(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            game_over: false,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn new_game() -> Self {
        Self::new(Board::initial(), Color::Light)
    }

    /// Piece placement plus optional side field, e.g. `"8/8/8/8/8/8/8/K6k w"`.
    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_position(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        let side = match self.side_to_move {
            Color::Light => 'w',
            Color::Dark => 'b',
        };
        format!("{} {side}", generate_placement(&self.board))
    }

    pub fn is_starting_position(&self) -> bool {
        self.history.is_empty() && self.get_fen() == STARTING_POSITION_FEN
    }

    pub fn legal_moves(&self) -> ChessResult<Vec<Move>> {
        legal_moves(&mut self.board.clone(), self.side_to_move)
    }

    pub fn is_in_check(&self) -> ChessResult<bool> {
        is_king_in_check(&self.board, self.side_to_move)
    }

    /// Two-part terminal check: "no legal move" alone does not say whether
    /// the side to move is mated or stalemated.
    ///
    /// A side whose king has been captured has lost.
    pub fn status(&self) -> ChessResult<GameStatus> {
        if self.board.find_king(self.side_to_move).is_err() {
            return Ok(GameStatus::Checkmate {
                winner: self.side_to_move.opposite(),
            });
        }
        let in_check = self.is_in_check()?;
        let can_move = has_any_legal_move(&mut self.board.clone(), self.side_to_move)?;
        Ok(match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate {
                winner: self.side_to_move.opposite(),
            },
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::InProgress,
        })
    }

    /// Validate and commit `mv` for the side to move.
    pub fn make_move(&mut self, mv: Move) -> ChessResult<GameStatus> {
        if self.game_over {
            return Err(ChessError::GameOver);
        }
        let piece = self.board.get(mv.from).ok_or(ChessError::EmptySquare(mv.from))?;
        if piece.color != self.side_to_move {
            return Err(ChessError::WrongSideToMove {
                square: mv.from,
                expected: self.side_to_move,
            });
        }
        if !self.legal_moves()?.contains(&mv) {
            return Err(ChessError::IllegalMove(mv));
        }

        let record = apply_move(&mut self.board, mv)?;
        self.history.push(record);
        self.side_to_move = self.side_to_move.opposite();

        let status = self.status()?;
        self.game_over = status.is_terminal();
        debug!(%mv, ?status, ply = self.history.len(), "move committed");
        Ok(status)
    }

    /// Revert the last committed move.
    pub fn undo_move(&mut self) -> ChessResult<MoveRecord> {
        let record = self.history.pop().ok_or(ChessError::NothingToUndo)?;
        undo_move(&mut self.board, &record);
        self.side_to_move = self.side_to_move.opposite();
        self.game_over = false;
        Ok(record)
    }

    pub fn reset(&mut self) {
        *self = Self::new_game();
    }
}
