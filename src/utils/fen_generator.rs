//! Board-to-FEN placement generator.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;

pub fn generate_placement(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..BOARD_SIZE {
        let mut empty_count = 0u8;

        for col in 0..BOARD_SIZE {
            let square = Square::at(row as u8, col as u8);
            match board.get(square) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if row + 1 < BOARD_SIZE {
            out.push('/');
        }
    }

    out
}

pub fn piece_to_fen_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::Light => ch.to_ascii_uppercase(),
        Color::Dark => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::generate_placement;
    use crate::game_state::board::Board;
    use crate::utils::fen_parser::parse_placement;

    #[test]
    fn initial_board_generates_standard_placement() {
        assert_eq!(
            generate_placement(&Board::initial()),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
    }

    #[test]
    fn sparse_placement_survives_parse_and_generate() {
        let placement = "r6k/8/3q4/8/2N5/8/5PPP/6K1";
        let board = parse_placement(placement).expect("FEN should parse");
        assert_eq!(generate_placement(&board), placement);
    }
}
