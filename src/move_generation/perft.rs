//! Move-tree enumeration for validating and benchmarking the generators.
//!
//! A position whose game has ended (a king was captured) has no children.

use std::thread;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Board;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::{CommittedMove, MoveFlags};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub castles: usize,
    pub promotions: usize,
    pub king_captures: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.king_captures += rhs.king_captures;
    }

    fn record_leaf(&mut self, mv: &CommittedMove) {
        self.nodes += 1;
        if mv.flags.contains(MoveFlags::CAPTURE) {
            self.captures += 1;
        }
        if mv.flags.contains(MoveFlags::CASTLE) {
            self.castles += 1;
        }
        if mv.flags.contains(MoveFlags::PROMOTE) {
            self.promotions += 1;
        }
        if mv.captured_king() {
            self.king_captures += 1;
        }
    }
}

pub fn perft(board: &Board, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return total;
    }
    perft_recurse(board, depth, &mut total);
    total
}

/// Same totals as [`perft`], with one worker thread per root move.
pub fn perft_multi_threaded(board: &Board, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 || board.is_game_over() {
        return Ok(perft(board, depth));
    }

    let mut handles = Vec::new();
    for mv in legal_moves(board, board.current_player()) {
        let mut child = board.clone();
        handles.push(thread::spawn(move || {
            child.commit(mv);
            let mut local = PerftCounts::default();
            if depth == 1 {
                if let Some(last) = child.history().last() {
                    local.record_leaf(last);
                }
            } else {
                perft_recurse(&child, depth - 1, &mut local);
            }
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle
            .join()
            .map_err(|_| ChessError::Engine("perft worker thread panicked".to_owned()))?;
        total.merge(local);
    }
    Ok(total)
}

fn perft_recurse(board: &Board, depth: u8, counts: &mut PerftCounts) {
    if board.is_game_over() {
        return;
    }

    for mv in legal_moves(board, board.current_player()) {
        let mut child = board.clone();
        child.commit(mv);

        if depth == 1 {
            if let Some(last) = child.history().last() {
                counts.record_leaf(last);
            }
        } else {
            perft_recurse(&child, depth - 1, counts);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_multi_threaded, PerftCounts};
    use crate::game_state::chess_types::{Board, Colour, Square};
    use crate::game_state::piece::Piece;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&Board::new_standard(), 0);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_perft_matches_known_node_counts() {
        let board = Board::new_standard();
        assert_eq!(perft(&board, 1).nodes, 20);
        assert_eq!(perft(&board, 2).nodes, 400);
        assert_eq!(perft(&board, 2).captures, 0);
    }

    #[test]
    fn threaded_perft_agrees_with_single_threaded() {
        let board = Board::new_standard();
        let single = perft(&board, 3);
        let threaded = perft_multi_threaded(&board, 3).expect("perft workers should finish");
        assert_eq!(single, threaded);
    }

    #[test]
    fn king_captures_end_the_branch() {
        let mut board = Board::empty();
        board.place_piece(Square::at(0, 0), Some(Piece::rook(Colour::White)));
        board.place_piece(Square::at(0, 7), Some(Piece::king(Colour::Black)));

        let depth_one = perft(&board, 1);
        assert_eq!(depth_one.nodes, 14);
        assert_eq!(depth_one.king_captures, 1);
        assert_eq!(depth_one.captures, 1);

        // Thirteen quiet rook moves, each answered by three king steps; the
        // king capture has no replies.
        assert_eq!(perft(&board, 2).nodes, 39);
    }
}
