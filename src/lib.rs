//! Crate root for the hot-seat chess rules engine.
//!
//! The engine itself lives in `game_state`, `moves` and `move_generation`:
//! board state, per-piece destination generation and the move commit.
//! `engines`, `utils`, `console` and `config` are the collaborators layered
//! on top (opponent, display, persistence, interactive play).

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod event_log;
    pub mod move_list_json;
    pub mod render_game_state;
}

pub mod console {
    pub mod console_top;
}

pub use errors::{ChessError, ChessResult};
pub use game_state::board::{Board, GameStatus};
pub use game_state::chess_types::{Colour, PieceKind, Square};
pub use game_state::piece::Piece;
pub use moves::move_descriptions::{CommittedMove, MoveFlags, ProposedMove};
