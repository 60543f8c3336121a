use std::collections::BTreeSet;

use crate::game_state::chess_rules::ORTHOGONAL_DIRECTIONS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::ray_destinations;

pub fn rook_destinations(board: &Board, from: Square, colour: Colour, out: &mut BTreeSet<Square>) {
    ray_destinations(board, from, colour, &ORTHOGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::rook_destinations;
    use crate::game_state::chess_types::{Board, Colour, Square};
    use crate::game_state::piece::Piece;

    #[test]
    fn rook_from_d4_has_fourteen_squares_on_an_empty_board() {
        let board = Board::empty();
        let mut out = BTreeSet::new();
        rook_destinations(&board, Square::at(3, 3), Colour::White, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let mut board = Board::empty();
        board.place_piece(Square::at(0, 3), Some(Piece::pawn(Colour::White)));
        let mut out = BTreeSet::new();
        rook_destinations(&board, Square::at(0, 0), Colour::White, &mut out);
        assert!(out.contains(&Square::at(0, 2)));
        assert!(!out.contains(&Square::at(0, 3)));
        assert!(!out.contains(&Square::at(0, 4)));
    }

    #[test]
    fn cornered_rook_on_the_start_board_has_no_moves() {
        let board = Board::new_standard();
        let mut out = BTreeSet::new();
        rook_destinations(&board, Square::at(7, 7), Colour::Black, &mut out);
        assert!(out.is_empty());
    }
}
