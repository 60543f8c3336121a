use std::collections::BTreeSet;

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_destinations;
use crate::moves::rook_moves::rook_destinations;

pub fn queen_destinations(board: &Board, from: Square, colour: Colour, out: &mut BTreeSet<Square>) {
    bishop_destinations(board, from, colour, out);
    rook_destinations(board, from, colour, out);
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::queen_destinations;
    use crate::game_state::chess_types::{Board, Colour, Square};

    #[test]
    fn queen_from_d4_has_twenty_seven_squares_on_an_empty_board() {
        let board = Board::empty();
        let mut out = BTreeSet::new();
        queen_destinations(&board, Square::at(3, 3), Colour::White, &mut out);
        assert_eq!(out.len(), 27);
    }
}
