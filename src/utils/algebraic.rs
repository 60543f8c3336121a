//! Parsing of coordinates like `e4` into board squares. `Square`'s
//! `Display` goes the other way.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Parse a two-character square name (`"a1"` ..= `"h8"`, case-insensitive).
pub fn algebraic_to_square(text: &str) -> ChessResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }

    Ok(Square::at(file - b'a', rank - b'1'))
}
