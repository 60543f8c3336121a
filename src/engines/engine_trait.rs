//! Opponent abstraction used by the console.
//!
//! An engine looks at the board and proposes a move for the side to move;
//! the caller validates and commits it like any human move.

use crate::errors::ChessResult;
use crate::game_state::chess_types::Board;
use crate::moves::move_descriptions::ProposedMove;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ProposedMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, board: &Board) -> ChessResult<EngineOutput>;
}
