//! King geometry: one square in any direction.

use crate::game_state::chess_types::Square;

#[inline]
pub fn king_can_reach(from: Square, to: Square) -> bool {
    from != to && from.row().abs_diff(to.row()) <= 1 && from.col().abs_diff(to.col()) <= 1
}

#[cfg(test)]
mod tests {
    use super::king_can_reach;
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_reaches_its_eight_neighbours() {
        let from = Square::new(3, 3).expect("in bounds");
        assert_eq!(Square::all().filter(|to| king_can_reach(from, *to)).count(), 8);
        assert!(!king_can_reach(from, from));
        assert!(!king_can_reach(from, Square::new(5, 3).expect("in bounds")));
    }
}
