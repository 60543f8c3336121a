//! Core value types shared by the board, the piece generators and the
//! persistence layer: player colour, piece kind, and board coordinates.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::piece::Piece;

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: u8 = 8;

/// Player side. White moves towards increasing `y`, Black towards decreasing `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Colour {
    White,
    Black,
}

impl Colour {
    /// Turn order: `history.len() % ALL.len()` indexes the side to move.
    pub const ALL: [Colour; 2] = [Colour::White, Colour::Black];

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }

    /// Unit step along the rank axis in which this side's pawns advance.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            Colour::White => 1,
            Colour::Black => -1,
        }
    }

    /// Rank holding this side's rooks, knights, bishops, queen and king at setup.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Colour::White => 0,
            Colour::Black => BOARD_SIZE - 1,
        }
    }

    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Colour::White => 1,
            Colour::Black => BOARD_SIZE - 2,
        }
    }

    /// Rank on which this side's pawns promote.
    #[inline]
    pub const fn last_rank(self) -> u8 {
        self.opposite().back_rank()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Colour::White => "White",
            Colour::Black => "Black",
        })
    }
}

/// Piece kind, independent of colour and per-piece flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Upper-case display letter.
    #[inline]
    pub const fn prefix(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A board coordinate. `x` is the file (0 == a), `y` the rank (0 == rank 1).
///
/// Squares are plain values; occupancy lives in the [`Board`] grid.
/// Ordering is rank-major so sets of squares iterate a1, b1, ..., h8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    y: u8,
    x: u8,
}

impl Square {
    /// Build a square from in-range coordinates.
    ///
    /// Coordinates outside `0..8` are a contract violation.
    #[inline]
    pub const fn at(x: u8, y: u8) -> Self {
        debug_assert!(x < BOARD_SIZE && y < BOARD_SIZE);
        Self { y, x }
    }

    /// Build a square from possibly out-of-range coordinates.
    #[inline]
    pub fn try_new(x: i32, y: i32) -> Option<Self> {
        if is_out_of_bounds(x, y) {
            None
        } else {
            Some(Self::at(x as u8, y as u8))
        }
    }

    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Row-major index into a 64-entry grid (`0 == a1`, `63 == h8`).
    #[inline]
    pub const fn index(self) -> usize {
        self.y as usize * BOARD_SIZE as usize + self.x as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::at(
            (index % BOARD_SIZE as usize) as u8,
            (index / BOARD_SIZE as usize) as u8,
        )
    }

    /// Step by `(dx, dy)`, returning `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        Self::try_new(self.x as i32 + dx as i32, self.y as i32 + dy as i32)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.x),
            char::from(b'1' + self.y)
        )
    }
}

/// True iff either coordinate falls outside `0..8`.
#[inline]
pub fn is_out_of_bounds(x: i32, y: i32) -> bool {
    x < 0 || y < 0 || x >= BOARD_SIZE as i32 || y >= BOARD_SIZE as i32
}
