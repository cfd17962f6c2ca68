//! Tic-tac-toe game state.
//!
//! Owns a 3x3 board, the active player and the outcome, and converts the
//! board and turn to and from a compact string for save files.
//!
//! # Example
//!
//! ```
//! use noughts_board::{GameStatus, Player, Position, TicTacToe};
//!
//! let mut game = TicTacToe::new();
//! game.play(Position::Center).unwrap();
//! assert_eq!(game.current_player(), Player::Two);
//! assert_eq!(game.state_string(), "0000100002");
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
pub mod rules;
pub mod state_string;
mod types;

pub use action::{Move, MoveError};
pub use game::{GameStatus, TicTacToe};
pub use position::Position;
pub use state_string::{STATE_STRING_LEN, StateStringError};
pub use types::{Board, Player, Square};
