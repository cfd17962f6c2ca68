//! Compact text encoding of a board and the player to move.
//!
//! The encoding is ten ASCII tokens: nine cells in row-major order
//! (`0` empty, `1` player one, `2` player two) followed by the number
//! of the player whose turn it is.

use super::rules::LINES;
use super::{Board, Player, Square};
use tracing::instrument;

/// Number of tokens in an encoded state.
pub const STATE_STRING_LEN: usize = 10;

/// Reasons an encoded state is rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StateStringError {
    /// Input does not have exactly [`STATE_STRING_LEN`] tokens.
    #[display("expected {} tokens, found {}", expected, found)]
    WrongLength {
        /// Required token count.
        expected: usize,
        /// Token count actually present.
        found: usize,
    },

    /// A cell token is not `0`, `1` or `2`.
    #[display("invalid cell symbol {:?} at index {}", symbol, index)]
    InvalidCell {
        /// Row-major cell index.
        index: usize,
        /// Offending character.
        symbol: char,
    },

    /// The turn token is not `1` or `2`.
    #[display("invalid turn symbol {:?}", symbol)]
    InvalidTurn {
        /// Offending character.
        symbol: char,
    },

    /// The mark counts do not match the player to move.
    #[display(
        "{} to move does not match {} X and {} O marks",
        to_move,
        ones,
        twos
    )]
    InconsistentTurn {
        /// Player named by the turn token.
        to_move: Player,
        /// Squares held by player one.
        ones: usize,
        /// Squares held by player two.
        twos: usize,
    },

    /// Both players own a complete line.
    #[display("both players have three in a row")]
    TwoWinners,

    /// The loser moved after the winning line was completed.
    #[display("a move was made after {} won", winner)]
    MoveAfterWin {
        /// Player owning the winning line.
        winner: Player,
    },
}

impl std::error::Error for StateStringError {}

/// Encodes a board and the player to move.
#[instrument(skip(board))]
pub fn encode(board: &Board, to_move: Player) -> String {
    let mut out = String::with_capacity(STATE_STRING_LEN);
    for square in board.squares() {
        out.push(match square {
            Square::Empty => '0',
            Square::Occupied(player) => char::from(b'0' + player.number()),
        });
    }
    out.push(char::from(b'0' + to_move.number()));
    out
}

/// Decodes a state string, trimming surrounding whitespace.
///
/// The result is only returned when every token is valid and the mark
/// counts agree with the player to move, so callers can apply it
/// without partial updates.
#[instrument]
pub fn decode(input: &str) -> Result<(Board, Player), StateStringError> {
    let tokens: Vec<char> = input.trim().chars().collect();
    if tokens.len() != STATE_STRING_LEN {
        return Err(StateStringError::WrongLength {
            expected: STATE_STRING_LEN,
            found: tokens.len(),
        });
    }

    let mut squares = [Square::Empty; 9];
    for (index, (slot, symbol)) in squares.iter_mut().zip(tokens.iter().copied()).enumerate() {
        *slot = match symbol {
            '0' => Square::Empty,
            '1' => Square::Occupied(Player::One),
            '2' => Square::Occupied(Player::Two),
            symbol => return Err(StateStringError::InvalidCell { index, symbol }),
        };
    }

    let turn = tokens[STATE_STRING_LEN - 1];
    let to_move = turn
        .to_digit(10)
        .and_then(|d| u8::try_from(d).ok())
        .and_then(Player::from_number)
        .ok_or(StateStringError::InvalidTurn { symbol: turn })?;

    let board = Board::from_squares(squares);
    let ones = board.count(Player::One);
    let twos = board.count(Player::Two);
    let consistent = match to_move {
        Player::One => ones == twos,
        Player::Two => ones == twos + 1,
    };
    if !consistent {
        return Err(StateStringError::InconsistentTurn {
            to_move,
            ones,
            twos,
        });
    }

    check_outcome(&board, to_move)?;
    Ok((board, to_move))
}

/// Rejects boards that play could not stop at: a game ends on the move
/// completing the first line, so only the last mover may own a line.
fn check_outcome(board: &Board, to_move: Player) -> Result<(), StateStringError> {
    let owns_line = |player: Player| {
        LINES
            .iter()
            .any(|line| line.iter().all(|p| board.get(*p) == Square::Occupied(player)))
    };
    match (owns_line(Player::One), owns_line(Player::Two)) {
        (true, true) => Err(StateStringError::TwoWinners),
        (true, false) if to_move != Player::Two => Err(StateStringError::MoveAfterWin {
            winner: Player::One,
        }),
        (false, true) if to_move != Player::One => Err(StateStringError::MoveAfterWin {
            winner: Player::Two,
        }),
        _ => Ok(()),
    }
}
