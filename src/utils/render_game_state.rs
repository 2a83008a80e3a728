//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests and the match
//! binary. Row 0 is drawn at the top; row and column indices label the edges.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");

    for row in 0..BOARD_SIZE {
        let label = char::from(b'0' + row as u8);
        out.push(label);
        out.push(' ');

        for col in 0..BOARD_SIZE {
            match board.get(Square::at(row as u8, col as u8)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str("  0 1 2 3 4 5 6 7");

    out
}

pub fn render_game_state(game_state: &GameState) -> String {
    format!(
        "{}\n{} to move",
        render_board(&game_state.board),
        game_state.side_to_move
    )
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
