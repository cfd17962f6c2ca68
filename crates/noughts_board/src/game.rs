//! Game logic and turn sequencing for tic-tac-toe.

use super::action::{Move, MoveError};
use super::state_string::{self, StateStringError};
use super::types::{Board, Player, Square};
use super::{Position, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
    /// Game was stopped and is waiting for a fresh board.
    Stopped,
}

impl GameStatus {
    /// Returns true once the game no longer accepts moves.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::Stopped => write!(f, "Stopped"),
        }
    }
}

/// Tic-tac-toe game engine.
///
/// Owns the board, the turn cursor and the outcome. The turn cursor
/// toggles after every accepted move, so after `n` moves from a fresh
/// board player `1 + n % 2` is to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToe {
    board: Board,
    current_player: Player,
    status: GameStatus,
    history: Vec<Position>,
}

impl TicTacToe {
    /// Creates a new game with an empty board and player one to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::One,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Clears the board and starts a fresh game with player one to move.
    #[instrument(skip(self))]
    pub fn set_up_board(&mut self) {
        debug!("Setting up board");
        *self = Self::new();
    }

    /// Stops the game without clearing the board.
    ///
    /// Moves are rejected until [`TicTacToe::set_up_board`] is called.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn stop_game(&mut self) {
        debug!("Stopping game");
        self.status = GameStatus::Stopped;
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns positions played since the board was set up or loaded.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns the empty positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Returns the player owning a complete line, if any.
    pub fn check_for_winner(&self) -> Option<Player> {
        rules::check_winner(&self.board)
    }

    /// Returns true when the board is full and nobody has won.
    pub fn check_for_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// Places a mark for the current player.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn play(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        self.make_move(Move::new(self.current_player, position))
    }

    /// Applies a move and evaluates the outcome.
    ///
    /// Nothing is mutated when the move is rejected.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, action: Move) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if action.player != self.current_player {
            return Err(MoveError::WrongPlayer(action.player));
        }
        if !self.board.is_empty(action.position) {
            return Err(MoveError::SquareOccupied(action.position));
        }

        self.board
            .set(action.position, Square::Occupied(action.player));
        self.history.push(action.position);
        self.current_player = action.player.opponent();
        self.end_turn();

        debug!(%action, status = %self.status, "Move applied");
        Ok(self.status)
    }

    /// Re-evaluates the outcome from the board.
    ///
    /// Leaves a stopped game stopped.
    #[instrument(skip(self))]
    pub fn end_turn(&mut self) -> GameStatus {
        if self.status == GameStatus::InProgress {
            if let Some(winner) = self.check_for_winner() {
                info!(%winner, "Game won");
                self.status = GameStatus::Won(winner);
            } else if self.check_for_draw() {
                info!("Game drawn");
                self.status = GameStatus::Draw;
            }
        }
        self.status
    }

    /// Encodes the board and the player to move.
    pub fn state_string(&self) -> String {
        state_string::encode(&self.board, self.current_player)
    }

    /// Replaces the board and turn from an encoded state.
    ///
    /// On error the game is left unchanged.
    #[instrument(skip(self))]
    pub fn set_state_string(&mut self, input: &str) -> Result<(), StateStringError> {
        let (board, to_move) = state_string::decode(input)?;
        self.board = board;
        self.current_player = to_move;
        self.status = GameStatus::InProgress;
        self.history.clear();
        self.end_turn();
        debug!(status = %self.status, "State loaded");
        Ok(())
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}
