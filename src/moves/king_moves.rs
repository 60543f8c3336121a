use std::collections::BTreeSet;

use crate::game_state::chess_rules::{ALL_DIRECTIONS, CASTLE_FILE_OFFSETS};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::step_destinations;

/// One step in any direction, plus castling targets while the king is unmoved.
pub fn king_destinations(
    board: &Board,
    from: Square,
    colour: Colour,
    has_moved: bool,
    out: &mut BTreeSet<Square>,
) {
    step_destinations(board, from, colour, &ALL_DIRECTIONS, out);

    if !has_moved {
        castle_destinations(board, from, colour, out);
    }
}

/// For each side, the first piece along the rank must be an unmoved rook of
/// the king's colour; the king's target is two files towards it.
fn castle_destinations(board: &Board, from: Square, colour: Colour, out: &mut BTreeSet<Square>) {
    for file_offset in CASTLE_FILE_OFFSETS {
        let step = file_offset.signum();

        let mut cursor = from.offset(step, 0);
        while let Some(square) = cursor {
            if let Some(piece) = board.piece_at(square) {
                let unmoved_rook = matches!(
                    piece,
                    Piece::Rook { colour: rook_colour, has_moved: false } if *rook_colour == colour
                );
                if unmoved_rook {
                    if let Some(target) = from.offset(file_offset, 0) {
                        out.insert(target);
                    }
                }
                break;
            }
            cursor = square.offset(step, 0);
        }
    }
}
