use crate::game_state::chess_types::*;

/// Single undo record for `apply_move` / `undo_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    /// Piece standing on `mv.to` after the move (a queen after promotion).
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    /// `Some(PieceKind::Pawn)` when the move promoted.
    pub promoted_from: Option<PieceKind>,
}

impl MoveRecord {
    /// The piece as it stood on `mv.from` before the move.
    #[inline]
    pub fn piece_before_move(&self) -> Piece {
        Piece::new(
            self.promoted_from.unwrap_or(self.moved_piece.kind),
            self.moved_piece.color,
        )
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promoted_from.is_some()
    }
}
