//! FEN-to-board parser.
//!
//! Reads the piece-placement field (first FEN rank = row 0) and an optional
//! side-to-move field. Castling, en-passant and clock fields are accepted
//! for compatibility with full FEN strings and ignored, since those rules are
//! not part of this engine.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Parse `"<placement> [w|b] [ignored fields...]"`. Side defaults to Light.
pub fn parse_position(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();
    let board_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing board layout".to_owned()))?;
    let side_to_move = match parts.next() {
        None => Color::Light,
        Some(side_part) => parse_side_to_move(side_part)?,
    };

    Ok(GameState::new(parse_placement(board_part)?, side_to_move))
}

pub fn parse_placement(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(ChessError::InvalidFen(format!(
            "board layout must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| {
                ChessError::InvalidFen(format!("invalid piece character '{ch}'"))
            })?;
            let square = Square::new(row, col).map_err(|_| {
                ChessError::InvalidFen(format!("rank {} has too many files", row + 1))
            })?;
            board.set(square, Some(piece));
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err(ChessError::InvalidFen(format!(
                "rank {} does not sum to 8 files",
                row + 1
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessError::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

pub fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else {
        Color::Dark
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Piece::new(kind, color))
}
