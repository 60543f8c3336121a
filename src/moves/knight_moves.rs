use std::collections::BTreeSet;

use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::step_destinations;

pub fn knight_destinations(board: &Board, from: Square, colour: Colour, out: &mut BTreeSet<Square>) {
    step_destinations(board, from, colour, &KNIGHT_OFFSETS, out);
}
