//! Keyboard helpers for the board.

use crossterm::event::KeyCode;
use noughts_board::Position;

/// Moves the board cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps the digits `1`-`9` to board positions, numbered like a phone keypad.
pub fn digit_position(c: char) -> Option<Position> {
    let digit = c.to_digit(10)?;
    let index = usize::try_from(digit).ok()?.checked_sub(1)?;
    Position::from_index(index)
}
