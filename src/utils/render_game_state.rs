//! Terminal board renderer.
//!
//! Draws the board from one player's side: that player's home rank at the
//! bottom, their pieces in upper case and the opponent's in lower case. With
//! fog enabled, squares the player cannot see are left blank and visible
//! empty squares are drawn as `.`.

use std::collections::BTreeSet;

use crate::game_state::chess_types::*;

/// Render `board` as seen by `perspective`.
pub fn render_game_state(board: &Board, perspective: Colour, fog: bool) -> String {
    let visible: Option<BTreeSet<Square>> = fog.then(|| board.visible_squares(perspective));
    let size = BOARD_SIZE as usize;

    let mut ranks: Vec<u8> = (0..BOARD_SIZE).collect();
    let mut files: Vec<u8> = (0..BOARD_SIZE).collect();
    match perspective {
        Colour::White => ranks.reverse(),
        Colour::Black => files.reverse(),
    }

    let mut out = String::with_capacity((size + 1) * (size * 3 + 4));
    for &y in &ranks {
        out.push(char::from(b'1' + y));
        out.push_str("  ");
        for &x in &files {
            let square = Square::at(x, y);
            let is_visible = visible.as_ref().map_or(true, |set| set.contains(&square));
            out.push(square_symbol(board, square, perspective, is_visible));
            out.push_str("  ");
        }
        truncate_trailing_spaces(&mut out);
        out.push('\n');
    }

    out.push_str("   ");
    for &x in &files {
        out.push(char::from(b'a' + x));
        out.push_str("  ");
    }
    truncate_trailing_spaces(&mut out);

    out
}

fn square_symbol(board: &Board, square: Square, perspective: Colour, visible: bool) -> char {
    if !visible {
        return ' ';
    }
    match board.piece_at(square) {
        None => '.',
        Some(piece) if piece.colour() == perspective => piece.kind().prefix(),
        Some(piece) => piece.kind().prefix().to_ascii_lowercase(),
    }
}

fn truncate_trailing_spaces(out: &mut String) {
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::chess_types::{Board, Colour};

    #[test]
    fn white_view_without_fog_shows_the_whole_board() {
        let board = Board::new_standard();
        let rendered = render_game_state(&board, Colour::White, false);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  r  n  b  q  k  b  n  r");
        assert_eq!(lines[4], "4  .  .  .  .  .  .  .  .");
        assert_eq!(lines[7], "1  R  N  B  Q  K  B  N  R");
        assert_eq!(lines[8], "   a  b  c  d  e  f  g  h");
    }

    #[test]
    fn black_view_is_flipped_and_uses_its_own_case() {
        let board = Board::new_standard();
        let rendered = render_game_state(&board, Colour::Black, false);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "1  r  n  b  k  q  b  n  r");
        assert_eq!(lines[7], "8  R  N  B  K  Q  B  N  R");
        assert_eq!(lines[8], "   h  g  f  e  d  c  b  a");
    }

    #[test]
    fn fog_hides_squares_the_player_cannot_reach() {
        let board = Board::new_standard();
        let rendered = render_game_state(&board, Colour::White, true);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "8");
        assert_eq!(lines[3], "5");
        assert_eq!(lines[4], "4  .  .  .  .  .  .  .  .");
        assert_eq!(lines[7], "1  R  N  B  Q  K  B  N  R");
    }
}
