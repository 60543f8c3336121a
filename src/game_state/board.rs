//! The board aggregate.
//!
//! `Board` owns the 8x8 grid, the append-only move history and the single
//! piece of cross-move state: the square of the pawn that may be captured
//! en passant on the next ply. The side to move is derived from the history
//! length rather than stored.

use std::collections::BTreeSet;

use tracing::trace;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator;
use crate::moves::move_descriptions::{CommittedMove, ProposedMove};

const GRID_LEN: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Derived lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    GameOver { winner: Colour },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Option<Piece>; GRID_LEN],
    pub(crate) history: Vec<CommittedMove>,
    pub(crate) last_en_passant_target: Option<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Board with no pieces and no history.
    pub fn empty() -> Self {
        Self {
            squares: [None; GRID_LEN],
            history: Vec::new(),
            last_en_passant_target: None,
        }
    }

    /// Both sides in their standard starting layout.
    pub fn new_standard() -> Self {
        let mut board = Self::empty();
        for colour in Colour::ALL {
            board.setup_pieces(colour);
        }
        board
    }

    /// Remove every piece of `colour`, then place its back rank and pawns.
    pub fn setup_pieces(&mut self, colour: Colour) {
        self.clear_pieces(colour);

        let back_rank = colour.back_rank();
        let pawn_rank = colour.pawn_rank();
        for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
            self.squares[Square::at(file as u8, back_rank).index()] = Some(Piece::new(*kind, colour));
            self.squares[Square::at(file as u8, pawn_rank).index()] = Some(Piece::pawn(colour));
        }
    }

    fn clear_pieces(&mut self, colour: Colour) {
        for slot in self.squares.iter_mut() {
            if slot.is_some_and(|piece| piece.colour() == colour) {
                *slot = None;
            }
        }
    }

    /// True iff either coordinate falls outside the board.
    #[inline]
    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        is_out_of_bounds(x, y)
    }

    /// The square at `(x, y)`. Callers must check [`Board::is_out_of_bounds`] first.
    #[inline]
    pub fn get_square(&self, x: u8, y: u8) -> Square {
        Square::at(x, y)
    }

    /// Bounds-checked variant of [`Board::get_square`].
    pub fn checked_square(&self, x: i32, y: i32) -> ChessResult<Square> {
        Square::try_new(x, y).ok_or(ChessError::OutOfBounds { x, y })
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.squares[square.index()].as_ref()
    }

    #[inline]
    pub(crate) fn piece_at_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.squares[square.index()].as_mut()
    }

    #[inline]
    pub fn has_piece(&self, square: Square) -> bool {
        self.squares[square.index()].is_some()
    }

    /// Overwrite the occupant of `square`, returning the previous one.
    ///
    /// Intended for scenario setup; it does not touch history or en passant state.
    pub fn place_piece(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[square.index()], piece)
    }

    /// Detach and return the occupant of `square`.
    #[inline]
    pub(crate) fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    /// Every occupied square holding a piece of `colour`, in square order.
    pub fn pieces(&self, colour: Colour) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(move |(index, slot)| match slot {
                Some(piece) if piece.colour() == colour => Some((Square::from_index(index), piece)),
                _ => None,
            })
    }

    #[inline]
    pub fn history(&self) -> &[CommittedMove] {
        &self.history
    }

    /// The pawn currently capturable en passant, if any.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.last_en_passant_target
    }

    /// Side to move: `history.len() % 2`.
    #[inline]
    pub fn current_player(&self) -> Colour {
        Colour::ALL[self.history.len() % Colour::ALL.len()]
    }

    pub fn status(&self) -> GameStatus {
        if let Some(ending) = self.history.iter().find(|mv| mv.captured_king()) {
            return GameStatus::GameOver {
                winner: ending.moved_piece.colour(),
            };
        }
        if self.history.is_empty() {
            GameStatus::NotStarted
        } else {
            GameStatus::InProgress
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        matches!(self.status(), GameStatus::GameOver { .. })
    }

    /// Union of the destinations of every piece of `colour`.
    pub fn legal_destinations(&self, colour: Colour) -> BTreeSet<Square> {
        legal_move_generator::legal_destinations(self, colour)
    }

    /// Squares `colour` can see: its own pieces plus their destinations.
    pub fn visible_squares(&self, colour: Colour) -> BTreeSet<Square> {
        legal_move_generator::visible_squares(self, colour)
    }

    /// Play a move that the caller has already validated with
    /// [`ProposedMove::is_valid`]. Returns `true` iff a king was captured.
    ///
    /// Unvalidated moves are a contract violation and are not re-checked.
    pub fn commit(&mut self, mv: ProposedMove) -> bool {
        debug_assert!(self.has_piece(mv.start), "commit from empty square {}", mv.start);
        trace!(ply = self.history.len(), %mv, "commit");
        apply_move(self, mv)
    }

    /// Validate then play `mv`, leaving the board untouched on rejection.
    pub fn try_commit(&mut self, mv: ProposedMove) -> ChessResult<bool> {
        self.check_move(mv)?;
        Ok(self.commit(mv))
    }

    /// Every precondition of [`Board::commit`], as an error.
    pub fn check_move(&self, mv: ProposedMove) -> ChessResult<()> {
        if self.is_game_over() {
            return Err(ChessError::GameOver);
        }

        let piece = self
            .piece_at(mv.start)
            .ok_or(ChessError::EmptySquare { square: mv.start })?;
        let colour = self.current_player();
        if piece.colour() != colour {
            return Err(ChessError::NotYourPiece {
                square: mv.start,
                colour,
            });
        }

        if !mv.is_valid(self) {
            return Err(ChessError::IllegalMove {
                start: mv.start,
                end: mv.end,
            });
        }

        Ok(())
    }

    /// Rebuild a game from a fresh standard board, validating every ply.
    pub fn replay<I>(moves: I) -> ChessResult<Board>
    where
        I: IntoIterator<Item = ProposedMove>,
    {
        let mut board = Board::new_standard();
        for (ply, mv) in moves.into_iter().enumerate() {
            board.try_commit(mv).map_err(|source| ChessError::Replay {
                ply,
                source: Box::new(source),
            })?;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, GameStatus};
    use crate::errors::ChessError;
    use crate::game_state::chess_types::{Colour, PieceKind, Square};
    use crate::game_state::piece::Piece;
    use crate::moves::move_descriptions::ProposedMove;

    fn mv(sx: u8, sy: u8, ex: u8, ey: u8) -> ProposedMove {
        ProposedMove::new(Square::at(sx, sy), Square::at(ex, ey))
    }

    #[test]
    fn standard_board_has_sixteen_pieces_per_side_on_home_ranks() {
        let board = Board::new_standard();
        for colour in Colour::ALL {
            let pieces: Vec<_> = board.pieces(colour).collect();
            assert_eq!(pieces.len(), 16);
            for (square, _) in pieces {
                assert!(square.y() == colour.back_rank() || square.y() == colour.pawn_rank());
            }
        }
        assert!(board.history().is_empty());
        assert_eq!(board.status(), GameStatus::NotStarted);
    }

    #[test]
    fn setup_pieces_replaces_only_that_colour() {
        let mut board = Board::empty();
        board.place_piece(Square::at(4, 4), Some(Piece::queen(Colour::White)));
        board.place_piece(Square::at(3, 3), Some(Piece::rook(Colour::Black)));
        board.setup_pieces(Colour::White);

        assert!(board.piece_at(Square::at(4, 4)).is_none());
        assert_eq!(board.piece_at(Square::at(3, 3)), Some(&Piece::rook(Colour::Black)));
        assert_eq!(
            board.piece_at(Square::at(4, 0)).map(|piece| piece.kind()),
            Some(PieceKind::King)
        );
        assert_eq!(board.pieces(Colour::White).count(), 16);
    }

    #[test]
    fn current_player_alternates_with_history() {
        let mut board = Board::new_standard();
        assert_eq!(board.current_player(), Colour::White);
        board.try_commit(mv(4, 1, 4, 3)).expect("e2e4 should be legal");
        assert_eq!(board.current_player(), Colour::Black);
        assert_eq!(board.status(), GameStatus::InProgress);
        board.try_commit(mv(4, 6, 4, 4)).expect("e7e5 should be legal");
        assert_eq!(board.current_player(), Colour::White);
    }

    #[test]
    fn try_commit_rejects_without_mutating() {
        let mut board = Board::new_standard();
        let before = board.clone();

        assert!(matches!(
            board.try_commit(mv(4, 6, 4, 4)),
            Err(ChessError::NotYourPiece { .. })
        ));
        assert!(matches!(
            board.try_commit(mv(4, 3, 4, 4)),
            Err(ChessError::EmptySquare { .. })
        ));
        assert!(matches!(
            board.try_commit(mv(4, 1, 4, 4)),
            Err(ChessError::IllegalMove { .. })
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn try_commit_refuses_moves_after_the_game_ends() {
        let mut board = Board::new_standard();
        board.place_piece(Square::at(4, 2), Some(Piece::king(Colour::Black)));
        assert!(board.try_commit(mv(3, 1, 4, 2)).expect("pawn takes king"));
        assert_eq!(board.status(), GameStatus::GameOver { winner: Colour::White });
        assert!(matches!(board.try_commit(mv(4, 6, 4, 5)), Err(ChessError::GameOver)));
    }

    #[test]
    fn checked_square_reports_out_of_bounds() {
        let board = Board::new_standard();
        assert!(board.is_out_of_bounds(8, 0));
        assert!(matches!(
            board.checked_square(-1, 2),
            Err(ChessError::OutOfBounds { x: -1, y: 2 })
        ));
        assert_eq!(board.checked_square(6, 0).expect("g1 is on the board"), board.get_square(6, 0));
    }

    #[test]
    fn replay_reports_the_failing_ply() {
        let moves = [mv(4, 1, 4, 3), mv(4, 3, 4, 4)];
        match Board::replay(moves) {
            Err(ChessError::Replay { ply, source }) => {
                assert_eq!(ply, 1);
                assert!(matches!(*source, ChessError::NotYourPiece { .. }));
            }
            other => panic!("expected replay failure, got {other:?}"),
        }
    }
}
