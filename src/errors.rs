//! Error taxonomy for the rules engine and its collaborators.
//!
//! Contract violations inside the engine (`get_square` out of range,
//! `commit` of an unvalidated move) are not represented here; they are
//! programmer errors. Everything a user or a save file can get wrong is.

use crate::game_state::chess_types::{Colour, Square};

#[derive(Debug, thiserror::Error)]
pub enum ChessError {
    /// Coordinates outside the 8x8 board.
    #[error("({x}, {y}) is not on the board")]
    OutOfBounds { x: i32, y: i32 },

    #[error("no piece on {square}")]
    EmptySquare { square: Square },

    #[error("{square} does not hold a {colour} piece")]
    NotYourPiece { square: Square, colour: Colour },

    #[error("illegal move: {start} {end}")]
    IllegalMove { start: Square, end: Square },

    #[error("the game has ended")]
    GameOver,

    /// Text that does not name a square, e.g. `"z9"`.
    #[error("not a square: {0}")]
    InvalidSquare(String),

    #[error("malformed move list: {0}")]
    MalformedMoveList(String),

    /// A saved move list that does not replay from the starting position.
    #[error("replay failed at ply {ply}: {source}")]
    Replay {
        ply: usize,
        #[source]
        source: Box<ChessError>,
    },

    #[error("engine error: {0}")]
    Engine(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type ChessResult<T> = Result<T, ChessError>;

#[cfg(test)]
mod tests {
    use super::ChessError;
    use crate::game_state::chess_types::{Colour, Square};

    #[test]
    fn messages_name_the_offending_squares() {
        let err = ChessError::NotYourPiece {
            square: Square::at(4, 6),
            colour: Colour::White,
        };
        assert_eq!(err.to_string(), "e7 does not hold a White piece");

        let replay = ChessError::Replay {
            ply: 3,
            source: Box::new(ChessError::IllegalMove {
                start: Square::at(0, 0),
                end: Square::at(0, 7),
            }),
        };
        assert_eq!(replay.to_string(), "replay failed at ply 3: illegal move: a1 a8");
    }
}
