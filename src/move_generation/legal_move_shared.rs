use std::collections::BTreeSet;

use crate::game_state::chess_types::*;

/// Occupancy of a square as seen by a piece of colour `own`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    Empty,
    Friendly,
    Enemy,
}

#[inline]
pub fn occupancy(board: &Board, square: Square, own: Colour) -> Occupancy {
    match board.piece_at(square) {
        None => Occupancy::Empty,
        Some(piece) if piece.colour() == own => Occupancy::Friendly,
        Some(_) => Occupancy::Enemy,
    }
}

/// Single-step targets: each on-board offset that is empty or holds an enemy.
pub fn step_destinations(
    board: &Board,
    from: Square,
    own: Colour,
    offsets: &[(i8, i8)],
    out: &mut BTreeSet<Square>,
) {
    for &(dx, dy) in offsets {
        let Some(to) = from.offset(dx, dy) else {
            continue;
        };
        if occupancy(board, to, own) != Occupancy::Friendly {
            out.insert(to);
        }
    }
}

/// Sliding targets: walk each ray until the first occupied square, which is
/// included only when it holds an enemy.
pub fn ray_destinations(
    board: &Board,
    from: Square,
    own: Colour,
    directions: &[(i8, i8)],
    out: &mut BTreeSet<Square>,
) {
    for &(dx, dy) in directions {
        let mut cursor = from.offset(dx, dy);
        while let Some(to) = cursor {
            match occupancy(board, to, own) {
                Occupancy::Empty => {
                    out.insert(to);
                }
                Occupancy::Enemy => {
                    out.insert(to);
                    break;
                }
                Occupancy::Friendly => break,
            }
            cursor = to.offset(dx, dy);
        }
    }
}
