use std::collections::BTreeSet;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{occupancy, Occupancy};

const CAPTURE_FILE_OFFSETS: [i8; 2] = [1, -1];

/// Forward pushes onto empty squares (two on the first move, through an
/// empty square) and diagonal captures, including en passant.
pub fn pawn_destinations(
    board: &Board,
    from: Square,
    colour: Colour,
    has_moved: bool,
    out: &mut BTreeSet<Square>,
) {
    let forward = colour.direction();

    if let Some(one_step) = from.offset(0, forward) {
        if !board.has_piece(one_step) {
            out.insert(one_step);

            if !has_moved {
                if let Some(two_step) = one_step.offset(0, forward) {
                    if !board.has_piece(two_step) {
                        out.insert(two_step);
                    }
                }
            }
        }
    }

    for file_offset in CAPTURE_FILE_OFFSETS {
        let Some(diagonal) = from.offset(file_offset, forward) else {
            continue;
        };

        match occupancy(board, diagonal, colour) {
            Occupancy::Enemy => {
                out.insert(diagonal);
            }
            Occupancy::Empty if can_capture_en_passant(board, from, file_offset, colour) => {
                out.insert(diagonal);
            }
            _ => {}
        }
    }
}

/// The square beside the pawn holds an enemy pawn that just double-pushed.
fn can_capture_en_passant(board: &Board, from: Square, file_offset: i8, colour: Colour) -> bool {
    from.offset(file_offset, 0)
        .and_then(|adjacent| board.piece_at(adjacent))
        .is_some_and(|piece| piece.colour() != colour && piece.is_en_passant_eligible())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::pawn_destinations;
    use crate::game_state::chess_types::{Board, Colour, Square};
    use crate::game_state::piece::Piece;

    fn pawn_targets(board: &Board, from: Square, colour: Colour, has_moved: bool) -> BTreeSet<Square> {
        let mut out = BTreeSet::new();
        pawn_destinations(board, from, colour, has_moved, &mut out);
        out
    }

    #[test]
    fn unmoved_pawn_pushes_one_or_two() {
        let board = Board::new_standard();
        let white = pawn_targets(&board, Square::at(4, 1), Colour::White, false);
        assert_eq!(white.into_iter().collect::<Vec<_>>(), vec![Square::at(4, 2), Square::at(4, 3)]);

        let black = pawn_targets(&board, Square::at(2, 6), Colour::Black, false);
        assert_eq!(black.into_iter().collect::<Vec<_>>(), vec![Square::at(2, 4), Square::at(2, 5)]);
    }

    #[test]
    fn moved_pawn_only_pushes_one() {
        let board = Board::empty();
        let targets = pawn_targets(&board, Square::at(4, 2), Colour::White, true);
        assert_eq!(targets.into_iter().collect::<Vec<_>>(), vec![Square::at(4, 3)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let mut board = Board::new_standard();
        board.place_piece(Square::at(4, 2), Some(Piece::knight(Colour::Black)));
        assert!(pawn_targets(&board, Square::at(4, 1), Colour::White, false).is_empty());

        board.place_piece(Square::at(4, 2), None);
        board.place_piece(Square::at(4, 3), Some(Piece::knight(Colour::White)));
        let targets = pawn_targets(&board, Square::at(4, 1), Colour::White, false);
        assert_eq!(targets.into_iter().collect::<Vec<_>>(), vec![Square::at(4, 2)]);
    }

    #[test]
    fn pawn_captures_enemies_diagonally_only() {
        let mut board = Board::empty();
        board.place_piece(Square::at(3, 4), Some(Piece::rook(Colour::Black)));
        board.place_piece(Square::at(5, 4), Some(Piece::rook(Colour::White)));
        board.place_piece(Square::at(4, 4), Some(Piece::rook(Colour::Black)));

        let targets = pawn_targets(&board, Square::at(4, 3), Colour::White, true);
        assert_eq!(targets.into_iter().collect::<Vec<_>>(), vec![Square::at(3, 4)]);
    }

    #[test]
    fn en_passant_targets_the_diagonal_behind_an_eligible_pawn() {
        let mut board = Board::empty();
        let mut pushed = Piece::pawn(Colour::White);
        pushed.mark_moved();
        pushed.set_en_passant_eligible(true);
        board.place_piece(Square::at(4, 3), Some(pushed));

        let targets = pawn_targets(&board, Square::at(3, 3), Colour::Black, true);
        assert!(targets.contains(&Square::at(4, 2)));
        assert!(!targets.contains(&Square::at(4, 3)));

        pushed.set_en_passant_eligible(false);
        board.place_piece(Square::at(4, 3), Some(pushed));
        let targets = pawn_targets(&board, Square::at(3, 3), Colour::Black, true);
        assert!(!targets.contains(&Square::at(4, 2)));
    }
}
