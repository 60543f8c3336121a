//! Move values.
//!
//! A [`ProposedMove`] is only an intent: a start and an end square. The
//! board turns it into a [`CommittedMove`] when it is played, annotating the
//! piece that moved, what (if anything) was removed, and the special-move
//! flags. Committed moves are never built anywhere else.

use std::fmt;

use crate::game_state::chess_types::{Board, PieceKind, Square};
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_generator::valid_destinations;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProposedMove {
    pub start: Square,
    pub end: Square,
}

impl ProposedMove {
    #[inline]
    pub const fn new(start: Square, end: Square) -> Self {
        Self { start, end }
    }

    /// `end` is one of the destinations of the piece currently on `start`.
    ///
    /// Pure query: an empty `start` is simply not valid. Turn order is not
    /// considered here; see [`Board::try_commit`].
    pub fn is_valid(&self, board: &Board) -> bool {
        board
            .piece_at(self.start)
            .is_some_and(|piece| valid_destinations(piece, board, self.start).contains(&self.end))
    }
}

impl fmt::Display for ProposedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.start, self.end)
    }
}

/// Bit set of special-move annotations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MoveFlags(u8);

impl MoveFlags {
    pub const NONE: MoveFlags = MoveFlags(0);
    pub const CAPTURE: MoveFlags = MoveFlags(1 << 0);
    pub const CASTLE: MoveFlags = MoveFlags(1 << 1);
    pub const PROMOTE: MoveFlags = MoveFlags(1 << 2);

    #[inline]
    pub const fn contains(self, other: MoveFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn insert(&mut self, other: MoveFlags) {
        self.0 |= other.0;
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for MoveFlags {
    type Output = MoveFlags;

    fn bitor(self, rhs: MoveFlags) -> MoveFlags {
        MoveFlags(self.0 | rhs.0)
    }
}

/// A move after the board has played it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommittedMove {
    pub start: Square,
    pub end: Square,
    /// The piece as it stood on `start` before the move.
    pub moved_piece: Piece,
    /// Kind of the piece removed from the board, including en passant victims.
    pub captured: Option<PieceKind>,
    pub flags: MoveFlags,
}

impl CommittedMove {
    #[inline]
    pub const fn proposed(&self) -> ProposedMove {
        ProposedMove::new(self.start, self.end)
    }

    #[inline]
    pub fn captured_king(&self) -> bool {
        self.captured == Some(PieceKind::King)
    }
}

impl fmt::Display for CommittedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.flags.contains(MoveFlags::CASTLE) {
            return f.write_str(if self.end.x() > self.start.x() {
                "O-O"
            } else {
                "O-O-O"
            });
        }

        let separator = if self.flags.contains(MoveFlags::CAPTURE) {
            'x'
        } else {
            '-'
        };
        write!(
            f,
            "{}{}{}{}",
            self.moved_piece.kind().prefix(),
            self.start,
            separator,
            self.end
        )?;
        if self.flags.contains(MoveFlags::PROMOTE) {
            f.write_str("=Q")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CommittedMove, MoveFlags, ProposedMove};
    use crate::game_state::chess_types::{Board, Colour, PieceKind, Square};
    use crate::game_state::piece::Piece;

    #[test]
    fn flags_combine_and_query() {
        let mut flags = MoveFlags::NONE;
        assert!(flags.is_empty());
        flags.insert(MoveFlags::CAPTURE);
        assert!(flags.contains(MoveFlags::CAPTURE));
        assert!(!flags.contains(MoveFlags::PROMOTE));
        assert!((flags | MoveFlags::PROMOTE).contains(MoveFlags::CAPTURE | MoveFlags::PROMOTE));
    }

    #[test]
    fn is_valid_is_false_for_an_empty_start_square() {
        let board = Board::new_standard();
        let mv = ProposedMove::new(Square::at(4, 3), Square::at(4, 4));
        assert!(!mv.is_valid(&board));
    }

    #[test]
    fn display_uses_minimal_notation() {
        let capture = CommittedMove {
            start: Square::at(4, 6),
            end: Square::at(3, 7),
            moved_piece: Piece::pawn(Colour::White),
            captured: Some(PieceKind::Rook),
            flags: MoveFlags::CAPTURE | MoveFlags::PROMOTE,
        };
        assert_eq!(capture.to_string(), "Pe7xd8=Q");

        let castle = CommittedMove {
            start: Square::at(4, 0),
            end: Square::at(2, 0),
            moved_piece: Piece::king(Colour::White),
            captured: None,
            flags: MoveFlags::CASTLE,
        };
        assert_eq!(castle.to_string(), "O-O-O");
    }
}
