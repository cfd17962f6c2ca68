//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::*;

    fn board_from(marks: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.iter().zip(marks.chars()) {
            let square = match c {
                'X' => Square::Occupied(Player::One),
                'O' => Square::Occupied(Player::Two),
                _ => Square::Empty,
            };
            board.set(*pos, square);
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = board_from("....X....");
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = board_from("XOXOXXOXO");
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X wins the top row on a full board
        let board = board_from("XXXOOXXOO");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
