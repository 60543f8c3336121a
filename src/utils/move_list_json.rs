//! JSON move-list persistence.
//!
//! A saved game is `{"moves": [[startX, startY, endX, endY], ...]}`, one
//! entry per committed ply in play order. Loading replays the list from the
//! standard starting position, validating every ply.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Board, Square, BOARD_SIZE};
use crate::moves::move_descriptions::ProposedMove;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveList {
    pub moves: Vec<[u8; 4]>,
}

impl MoveList {
    pub fn from_moves<I>(moves: I) -> Self
    where
        I: IntoIterator<Item = ProposedMove>,
    {
        Self {
            moves: moves
                .into_iter()
                .map(|mv| [mv.start.x(), mv.start.y(), mv.end.x(), mv.end.y()])
                .collect(),
        }
    }

    pub fn from_history(board: &Board) -> Self {
        Self::from_moves(board.history().iter().map(|mv| mv.proposed()))
    }

    pub fn to_json(&self) -> ChessResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and range-check a move list. Legality is checked on replay.
    pub fn from_json(json: &str) -> ChessResult<Self> {
        let list: MoveList = serde_json::from_str(json)?;
        if let Some((index, entry)) = list
            .moves
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.iter().any(|&coord| coord >= BOARD_SIZE))
        {
            return Err(ChessError::MalformedMoveList(format!(
                "entry {index} {entry:?} has a coordinate outside 0..={}",
                BOARD_SIZE - 1
            )));
        }
        Ok(list)
    }

    pub fn into_moves(self) -> Vec<ProposedMove> {
        self.moves
            .into_iter()
            .map(|[sx, sy, ex, ey]| ProposedMove::new(Square::at(sx, sy), Square::at(ex, ey)))
            .collect()
    }

    /// Replay onto a fresh standard board.
    pub fn replay(self) -> ChessResult<Board> {
        Board::replay(self.into_moves())
    }
}

/// Write `board`'s history to `path`, creating parent directories as needed.
pub fn save_game(path: &Path, board: &Board) -> ChessResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = MoveList::from_history(board).to_json()?;
    fs::write(path, json)?;
    info!(path = %path.display(), plies = board.history().len(), "game saved");
    Ok(())
}

/// Read and replay a saved game. Any failure leaves no partial board behind.
pub fn load_game(path: &Path) -> ChessResult<Board> {
    let json = fs::read_to_string(path)?;
    let board = MoveList::from_json(&json)?.replay()?;
    info!(path = %path.display(), plies = board.history().len(), "game loaded");
    Ok(board)
}
