//! Move commit.
//!
//! Plays a pre-validated move on the board and resolves its side effects in
//! a fixed order: en passant (pawns) or castling (kings), first-move flags,
//! relocation, promotion, then the history append.

use tracing::debug;

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{CommittedMove, MoveFlags, ProposedMove};

/// Commit `mv` and return `true` iff the destination held a king.
///
/// `mv` must already have passed [`ProposedMove::is_valid`] for the side to move.
pub fn apply_move(board: &mut Board, mv: ProposedMove) -> bool {
    let ProposedMove { start, end } = mv;

    let Some(moved_piece) = board.piece_at(start).copied() else {
        debug_assert!(false, "commit from empty square {start}");
        return false;
    };

    let target = board.piece_at(end).copied();
    let is_game_over = target.is_some_and(|piece| piece.is_kind(PieceKind::King));

    let mut flags = MoveFlags::NONE;
    let mut captured = target.map(|piece| piece.kind());

    // Eligibility lasts exactly one ply, whatever moves next.
    let previous_target = expire_en_passant(board);

    match moved_piece.kind() {
        PieceKind::Pawn => {
            if let Some(kind) = resolve_en_passant(board, mv, moved_piece.colour(), previous_target) {
                captured = Some(kind);
                flags.insert(MoveFlags::CAPTURE);
            }
        }
        PieceKind::King => {
            if resolve_castling(board, mv) {
                flags.insert(MoveFlags::CASTLE);
            }
        }
        _ => {}
    }

    if target.is_some() {
        flags.insert(MoveFlags::CAPTURE);
    }

    if let Some(mut arriving) = board.take_piece(start) {
        arriving.mark_moved();
        board.place_piece(end, Some(arriving));
    }

    if resolve_promotion(board, end) {
        flags.insert(MoveFlags::PROMOTE);
    }

    board.history.push(CommittedMove {
        start,
        end,
        moved_piece,
        captured,
        flags,
    });

    if is_game_over {
        debug!(winner = %moved_piece.colour(), square = %end, "king captured");
    }

    is_game_over
}

/// Clear the eligibility of the last double-pushed pawn and forget it.
/// Returns where that pawn stood.
fn expire_en_passant(board: &mut Board) -> Option<Square> {
    let previous = board.last_en_passant_target.take()?;
    if let Some(pawn) = board.piece_at_mut(previous) {
        pawn.set_en_passant_eligible(false);
    }
    Some(previous)
}

/// Record a double push as the new en passant target, or remove the pawn
/// captured en passant. Returns the kind removed, if any.
fn resolve_en_passant(
    board: &mut Board,
    mv: ProposedMove,
    colour: Colour,
    previous_target: Option<Square>,
) -> Option<PieceKind> {
    let ProposedMove { start, end } = mv;

    if start.x() == end.x() {
        if start.y().abs_diff(end.y()) == 2 {
            if let Some(pawn) = board.piece_at_mut(start) {
                pawn.set_en_passant_eligible(true);
            }
            // The pawn is about to move to `end`.
            board.last_en_passant_target = Some(end);
        }
        return None;
    }

    let behind = end.offset(0, -colour.direction())?;
    if previous_target != Some(behind) {
        return None;
    }

    let victim = board.piece_at(behind).copied()?;
    if victim.colour() == colour || !victim.is_kind(PieceKind::Pawn) {
        return None;
    }

    board.take_piece(behind);
    debug!(capturer = %start, captured = %behind, "en passant");
    Some(PieceKind::Pawn)
}

/// Move the rook alongside a king that travelled two files. Returns whether
/// the move was a castle. Rook eligibility was checked at generation time.
fn resolve_castling(board: &mut Board, mv: ProposedMove) -> bool {
    let ProposedMove { start, end } = mv;
    let file_delta = end.x() as i8 - start.x() as i8;
    if file_delta.abs() != 2 {
        return false;
    }

    let (rook_file, landing_offset) = if file_delta < 0 {
        (0, 1)
    } else {
        (BOARD_SIZE - 1, -1)
    };
    let rook_from = Square::at(rook_file, end.y());
    let Some(rook_to) = end.offset(landing_offset, 0) else {
        return false;
    };

    let rook = board.take_piece(rook_from).map(|mut rook| {
        rook.mark_moved();
        rook
    });
    board.place_piece(rook_to, rook);
    debug!(king = %end, rook_from = %rook_from, rook_to = %rook_to, "castle");
    true
}

/// Replace a pawn standing on its last rank with a queen.
fn resolve_promotion(board: &mut Board, square: Square) -> bool {
    let Some(Piece::Pawn { colour, .. }) = board.piece_at(square).copied() else {
        return false;
    };
    if square.y() != colour.last_rank() {
        return false;
    }

    board.place_piece(square, Some(Piece::queen(colour)));
    debug!(%square, %colour, "promotion");
    true
}
