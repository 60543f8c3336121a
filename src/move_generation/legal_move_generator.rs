//! Destination generation.
//!
//! Dispatches each piece variant to its generator and builds the per-colour
//! views used for legality checks, visibility filtering and move lists.
//! Destinations ignore king safety: a king may move onto an attacked square.

use std::collections::BTreeSet;

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_destinations;
use crate::moves::king_moves::king_destinations;
use crate::moves::knight_moves::knight_destinations;
use crate::moves::move_descriptions::ProposedMove;
use crate::moves::pawn_moves::pawn_destinations;
use crate::moves::queen_moves::queen_destinations;
use crate::moves::rook_moves::rook_destinations;

/// Squares `piece`, standing on `from`, may move to.
pub fn valid_destinations(piece: &Piece, board: &Board, from: Square) -> BTreeSet<Square> {
    let mut out = BTreeSet::new();
    push_destinations(piece, board, from, &mut out);
    out
}

fn push_destinations(piece: &Piece, board: &Board, from: Square, out: &mut BTreeSet<Square>) {
    match *piece {
        Piece::Pawn {
            colour, has_moved, ..
        } => pawn_destinations(board, from, colour, has_moved, out),
        Piece::Knight { colour } => knight_destinations(board, from, colour, out),
        Piece::Bishop { colour } => bishop_destinations(board, from, colour, out),
        Piece::Rook { colour, .. } => rook_destinations(board, from, colour, out),
        Piece::Queen { colour } => queen_destinations(board, from, colour, out),
        Piece::King { colour, has_moved } => king_destinations(board, from, colour, has_moved, out),
    }
}

/// Union of the destinations of every piece of `colour`.
pub fn legal_destinations(board: &Board, colour: Colour) -> BTreeSet<Square> {
    let mut out = BTreeSet::new();
    for (square, piece) in board.pieces(colour) {
        push_destinations(piece, board, square, &mut out);
    }
    out
}

/// Squares holding `colour`'s pieces plus every square they can reach.
pub fn visible_squares(board: &Board, colour: Colour) -> BTreeSet<Square> {
    let mut out = legal_destinations(board, colour);
    out.extend(board.pieces(colour).map(|(square, _)| square));
    out
}

/// Every (start, end) pair available to `colour`, in square order.
pub fn legal_moves(board: &Board, colour: Colour) -> Vec<ProposedMove> {
    let mut moves = Vec::with_capacity(64);
    for (start, piece) in board.pieces(colour) {
        moves.extend(
            valid_destinations(piece, board, start)
                .into_iter()
                .map(|end| ProposedMove::new(start, end)),
        );
    }
    moves
}
