//! Piece representation.
//!
//! `Piece` is a closed set of variants. Each variant carries only the mutable
//! flags its own rules need: pawns track their first move and en passant
//! eligibility, rooks and kings track whether they have moved (castling).

use crate::game_state::chess_types::{Colour, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    Pawn {
        colour: Colour,
        has_moved: bool,
        en_passant_eligible: bool,
    },
    Knight {
        colour: Colour,
    },
    Bishop {
        colour: Colour,
    },
    Rook {
        colour: Colour,
        has_moved: bool,
    },
    Queen {
        colour: Colour,
    },
    King {
        colour: Colour,
        has_moved: bool,
    },
}

impl Piece {
    /// Fresh, never-moved piece of the given kind.
    pub const fn new(kind: PieceKind, colour: Colour) -> Self {
        match kind {
            PieceKind::Pawn => Piece::Pawn {
                colour,
                has_moved: false,
                en_passant_eligible: false,
            },
            PieceKind::Knight => Piece::Knight { colour },
            PieceKind::Bishop => Piece::Bishop { colour },
            PieceKind::Rook => Piece::Rook {
                colour,
                has_moved: false,
            },
            PieceKind::Queen => Piece::Queen { colour },
            PieceKind::King => Piece::King {
                colour,
                has_moved: false,
            },
        }
    }

    pub const fn pawn(colour: Colour) -> Self {
        Self::new(PieceKind::Pawn, colour)
    }

    pub const fn knight(colour: Colour) -> Self {
        Self::new(PieceKind::Knight, colour)
    }

    pub const fn bishop(colour: Colour) -> Self {
        Self::new(PieceKind::Bishop, colour)
    }

    pub const fn rook(colour: Colour) -> Self {
        Self::new(PieceKind::Rook, colour)
    }

    pub const fn queen(colour: Colour) -> Self {
        Self::new(PieceKind::Queen, colour)
    }

    pub const fn king(colour: Colour) -> Self {
        Self::new(PieceKind::King, colour)
    }

    #[inline]
    pub const fn colour(&self) -> Colour {
        match *self {
            Piece::Pawn { colour, .. }
            | Piece::Knight { colour }
            | Piece::Bishop { colour }
            | Piece::Rook { colour, .. }
            | Piece::Queen { colour }
            | Piece::King { colour, .. } => colour,
        }
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        match self {
            Piece::Pawn { .. } => PieceKind::Pawn,
            Piece::Knight { .. } => PieceKind::Knight,
            Piece::Bishop { .. } => PieceKind::Bishop,
            Piece::Rook { .. } => PieceKind::Rook,
            Piece::Queen { .. } => PieceKind::Queen,
            Piece::King { .. } => PieceKind::King,
        }
    }

    #[inline]
    pub fn is_kind(&self, kind: PieceKind) -> bool {
        self.kind() == kind
    }

    /// `Some(flag)` for the kinds that remember their first move, `None` otherwise.
    pub const fn has_moved(&self) -> Option<bool> {
        match *self {
            Piece::Pawn { has_moved, .. }
            | Piece::Rook { has_moved, .. }
            | Piece::King { has_moved, .. } => Some(has_moved),
            _ => None,
        }
    }

    /// Set the first-move flag. No-op for kinds that do not track it.
    pub fn mark_moved(&mut self) {
        match self {
            Piece::Pawn { has_moved, .. }
            | Piece::Rook { has_moved, .. }
            | Piece::King { has_moved, .. } => *has_moved = true,
            _ => {}
        }
    }

    /// True only for a pawn that just advanced two squares.
    #[inline]
    pub const fn is_en_passant_eligible(&self) -> bool {
        matches!(
            self,
            Piece::Pawn {
                en_passant_eligible: true,
                ..
            }
        )
    }

    /// Set the en passant flag. No-op for non-pawns.
    pub fn set_en_passant_eligible(&mut self, eligible: bool) {
        if let Piece::Pawn {
            en_passant_eligible,
            ..
        } = self
        {
            *en_passant_eligible = eligible;
        }
    }

    /// Display letter: upper-case for White, lower-case for Black.
    pub fn symbol(&self) -> char {
        let prefix = self.kind().prefix();
        match self.colour() {
            Colour::White => prefix,
            Colour::Black => prefix.to_ascii_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::game_state::chess_types::{Colour, PieceKind};

    #[test]
    fn first_move_flag_only_exists_on_pawn_rook_and_king() {
        assert_eq!(Piece::pawn(Colour::White).has_moved(), Some(false));
        assert_eq!(Piece::rook(Colour::White).has_moved(), Some(false));
        assert_eq!(Piece::king(Colour::Black).has_moved(), Some(false));
        assert_eq!(Piece::knight(Colour::White).has_moved(), None);
        assert_eq!(Piece::queen(Colour::Black).has_moved(), None);

        let mut bishop = Piece::bishop(Colour::White);
        bishop.mark_moved();
        assert_eq!(bishop, Piece::bishop(Colour::White));

        let mut rook = Piece::rook(Colour::Black);
        rook.mark_moved();
        assert_eq!(rook.has_moved(), Some(true));
    }

    #[test]
    fn en_passant_flag_is_pawn_only() {
        let mut pawn = Piece::pawn(Colour::Black);
        assert!(!pawn.is_en_passant_eligible());
        pawn.set_en_passant_eligible(true);
        assert!(pawn.is_en_passant_eligible());

        let mut knight = Piece::knight(Colour::Black);
        knight.set_en_passant_eligible(true);
        assert!(!knight.is_en_passant_eligible());
    }

    #[test]
    fn symbols_follow_colour_case() {
        assert_eq!(Piece::king(Colour::White).symbol(), 'K');
        assert_eq!(Piece::knight(Colour::Black).symbol(), 'n');
        assert!(Piece::queen(Colour::White).is_kind(PieceKind::Queen));
    }
}
