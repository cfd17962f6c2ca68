//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(player: Player, cells: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in cells {
            board.set(*pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_its_owner() {
        for line in LINES {
            assert_eq!(check_winner(&owned(Player::One, &line)), Some(Player::One));
            assert_eq!(check_winner(&owned(Player::Two, &line)), Some(Player::Two));
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = owned(Player::One, &[Position::TopLeft, Position::TopCenter]);
        board.set(Position::TopRight, Square::Occupied(Player::Two));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = owned(Player::One, &[Position::TopLeft, Position::Center]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_matches_brute_force_over_all_boards() {
        // 3^9 boards; a player wins iff some line is uniformly theirs.
        for code in 0..19_683usize {
            let mut board = Board::new();
            let mut rest = code;
            for pos in Position::ALL {
                let square = match rest % 3 {
                    0 => Square::Empty,
                    1 => Square::Occupied(Player::One),
                    _ => Square::Occupied(Player::Two),
                };
                board.set(pos, square);
                rest /= 3;
            }

            let owners: Vec<Player> = LINES
                .iter()
                .filter_map(|line| {
                    let first = board.get(line[0]).player()?;
                    line.iter()
                        .all(|p| board.get(*p) == Square::Occupied(first))
                        .then_some(first)
                })
                .collect();

            match check_winner(&board) {
                Some(player) => assert!(owners.contains(&player), "board {code}"),
                None => assert!(owners.is_empty(), "board {code}"),
            }
        }
    }
}
