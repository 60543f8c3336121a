//! Random-move opponent.
//!
//! Picks uniformly among every (start, destination) pair available to the
//! side to move. Useful for solo play, smoke tests and benchmark playouts.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::chess_types::Board;
use crate::move_generation::legal_move_generator::legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic sequence of choices for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, board: &Board) -> ChessResult<EngineOutput> {
        let mut out = EngineOutput::default();
        if board.is_game_over() {
            return Ok(out);
        }

        let moves = legal_moves(board, board.current_player());
        out.info_lines
            .push(format!("random_engine legal_moves {}", moves.len()));

        out.best_move = moves.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}
