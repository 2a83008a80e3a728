//! Errors used throughout the rules engine and the search opponent.
//!
//! `ChessError` is the single error type returned by board construction,
//! move application, check inspection, position parsing and move selection.
//! Every variant describes a failure of one call; none of them leave the
//! board in a speculative state, because tentative moves are always reverted
//! by [`crate::move_generation::legal_move_apply::TrialMove`].
//!
//! Usage guidelines:
//! - Functions return `ChessResult<T>` and propagate with `?`.
//! - "No legal moves" is not an error. Move selection returns `Ok(None)` and
//!   callers distinguish checkmate from stalemate with a separate check query.
//! - `MissingKing` indicates a malformed board handed to a check query; it is
//!   not expected on boards built from the initial layout.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Move, Square};

/// Unified error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A row or column outside `0..8` was supplied.
    #[error("invalid coordinate ({row}, {col}): rows and columns must be in 0..8")]
    InvalidCoordinate { row: usize, col: usize },

    /// A check query was issued for a side that has no king on the board.
    #[error("no {0} king on the board")]
    MissingKing(Color),

    /// Tried to move a piece from a square that holds nothing.
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// Tried to move a piece that belongs to the side not on move.
    #[error("piece on {square} does not belong to {expected}")]
    WrongSideToMove { square: Square, expected: Color },

    /// The move failed the legality filter for the side to move.
    #[error("illegal move {0}")]
    IllegalMove(Move),

    /// A move was attempted after checkmate or stalemate.
    #[error("the game is over")]
    GameOver,

    /// Undo was requested with an empty move history.
    #[error("no move to undo")]
    NothingToUndo,

    /// A FEN placement string could not be parsed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A difficulty name other than easy, medium or hard.
    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),

    /// An engine returned no move although the side to move has one.
    #[error("engine for {0} returned no move in a live position")]
    EngineDeclined(Color),
}

pub type ChessResult<T> = Result<T, ChessError>;
