use std::collections::BTreeSet;

use crate::game_state::chess_rules::DIAGONAL_DIRECTIONS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::ray_destinations;

pub fn bishop_destinations(board: &Board, from: Square, colour: Colour, out: &mut BTreeSet<Square>) {
    ray_destinations(board, from, colour, &DIAGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::bishop_destinations;
    use crate::game_state::chess_types::{Board, Colour, Square};
    use crate::game_state::piece::Piece;

    #[test]
    fn bishop_from_d4_sees_thirteen_squares_on_an_empty_board() {
        let board = Board::empty();
        let mut out = BTreeSet::new();
        bishop_destinations(&board, Square::at(3, 3), Colour::Black, &mut out);
        assert_eq!(out.len(), 13);
    }

    #[test]
    fn bishop_captures_but_does_not_pass_an_enemy() {
        let mut board = Board::empty();
        board.place_piece(Square::at(5, 5), Some(Piece::knight(Colour::Black)));
        let mut out = BTreeSet::new();
        bishop_destinations(&board, Square::at(3, 3), Colour::White, &mut out);
        assert!(out.contains(&Square::at(5, 5)));
        assert!(!out.contains(&Square::at(6, 6)));
    }
}
