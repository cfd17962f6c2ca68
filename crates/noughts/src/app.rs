//! Application state and the callbacks driven by the render loop.

use crate::config::AppConfig;
use crate::console::ConsoleInput;
use crate::input::{digit_position, move_cursor};
use crate::save::{SaveErrorKind, SaveFile};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use derive_getters::Getters;
use noughts_board::{GameStatus, Position, TicTacToe};
use noughts_log::{Category, CategoryFilter, EventLog};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Moves and game actions.
    #[default]
    Board,
    /// Typing into the log console.
    Console,
    /// The log category options popup.
    Options,
}

/// What the render loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the loop.
    Quit,
}

/// Main application state.
///
/// Owns the game and the event log; the log is lent to each action
/// that records into it.
#[derive(Debug, Getters)]
pub struct App {
    game: TicTacToe,
    log: EventLog,
    save_file: SaveFile,
    cursor: Position,
    focus: Focus,
    filter: CategoryFilter,
    console: ConsoleInput,
}

impl App {
    /// Creates the application from configuration, opening the log file.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        Self::with_log(
            EventLog::open(config.log_file(), *config.max_log_entries()),
            SaveFile::new(config.save_file().clone()),
        )
    }

    /// Creates the application around an existing log and save file.
    pub fn with_log(log: EventLog, save_file: SaveFile) -> Self {
        Self {
            game: TicTacToe::new(),
            log,
            save_file,
            cursor: Position::Center,
            focus: Focus::Board,
            filter: CategoryFilter::all(),
            console: ConsoleInput::new(),
        }
    }

    /// Called once before the first frame.
    #[instrument(skip(self))]
    pub fn start_up(&mut self) {
        self.game.set_up_board();
        self.log.info(format!(
            "Game started. {} to move.",
            self.game.current_player()
        ));
    }

    /// Dispatches a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        // crossterm reports releases on some platforms.
        if key.kind == KeyEventKind::Release {
            return Control::Continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Control::Quit;
        }

        match self.focus {
            Focus::Board => return self.handle_board_key(key.code),
            Focus::Console => self.handle_console_key(key.code),
            Focus::Options => self.handle_options_key(key.code),
        }
        Control::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) -> Control {
        match code {
            KeyCode::Char('q') => return Control::Quit,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play(self.cursor);
            }
            KeyCode::Char(c) if digit_position(c).is_some() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Char('s') => self.save(),
            KeyCode::Char('l') => self.load(),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('o') => self.focus = Focus::Options,
            KeyCode::Char('c') => self.clear_log(),
            KeyCode::Tab => self.focus = Focus::Console,
            KeyCode::F(n) => self.record_test_entry(n),
            _ => {}
        }
        Control::Continue
    }

    fn handle_console_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.console.insert(c),
            KeyCode::Backspace => self.console.backspace(),
            KeyCode::Enter => self.submit_console(),
            KeyCode::Esc | KeyCode::Tab => self.focus = Focus::Board,
            _ => {}
        }
    }

    fn handle_options_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => {
                if let Some(category) = c
                    .to_digit(10)
                    .and_then(|d| usize::try_from(d).ok())
                    .and_then(|d| d.checked_sub(1))
                    .and_then(|i| Category::iter().nth(i))
                {
                    self.toggle_category(category);
                } else if c == 'o' {
                    self.focus = Focus::Board;
                }
            }
            KeyCode::Esc | KeyCode::Enter => self.focus = Focus::Board,
            _ => {}
        }
    }

    /// Plays at `position` for the current player.
    ///
    /// Rejected moves change nothing and record nothing. Returns whether
    /// the move was accepted.
    #[instrument(skip(self))]
    pub fn play(&mut self, position: Position) -> bool {
        let player = self.game.current_player();
        match self.game.play(position) {
            Ok(_) => {
                self.log
                    .game_event(format!("{} played {}", player, position.label()));
                self.on_turn_end();
                true
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                false
            }
        }
    }

    /// Called after each accepted move to evaluate the outcome.
    #[instrument(skip(self))]
    pub fn on_turn_end(&mut self) {
        let status = self.game.end_turn();
        self.announce(status);
    }

    fn announce(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(winner) => {
                info!(%winner, "Game over");
                self.log
                    .game_event(format!("Player {} wins!", winner.number()));
            }
            GameStatus::Draw => {
                info!("Game over, draw");
                self.log.game_event("Game ended in a draw.");
            }
            GameStatus::InProgress | GameStatus::Stopped => {}
        }
    }

    /// Writes the current state to the save file.
    ///
    /// Only available while the game is in progress.
    #[instrument(skip(self))]
    pub fn save(&mut self) {
        if self.game.status().is_over() {
            return;
        }
        let state = self.game.state_string();
        match self.save_file.save(&state) {
            Ok(()) => self
                .log
                .info(format!("Game state saved. Game state: {}", state)),
            Err(e) => self
                .log
                .error(format!("Could not save game state: {}.", e.kind)),
        }
    }

    /// Replaces the game with the saved state.
    ///
    /// Only available while the game is in progress. A missing file or
    /// malformed contents leave the game untouched and record one error.
    #[instrument(skip(self))]
    pub fn load(&mut self) {
        if self.game.status().is_over() {
            return;
        }
        let text = match self.save_file.load() {
            Ok(text) => text,
            Err(e) => {
                let message = match e.kind {
                    SaveErrorKind::NotFound { .. } => "Save file not found.".to_string(),
                    kind => format!("Could not load game state: {}.", kind),
                };
                self.log.error(message);
                return;
            }
        };

        match self.game.set_state_string(&text) {
            Ok(()) => {
                self.log.info(format!(
                    "Saved game state loaded. Game state: {}",
                    self.game.state_string()
                ));
                self.announce(self.game.status());
            }
            Err(e) => self
                .log
                .error(format!("Could not load game state: {}.", e)),
        }
    }

    /// Abandons the current game and starts a fresh board.
    ///
    /// Only available while the game is in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        if self.game.status().is_over() {
            return;
        }
        self.game.stop_game();
        self.game.set_up_board();
        self.cursor = Position::Center;
        self.log.info("Game was reset.");
    }

    /// Starts a fresh board once the game has ended.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        if !self.game.status().is_over() {
            return;
        }
        self.game.stop_game();
        self.game.set_up_board();
        self.cursor = Position::Center;
        self.log.game_event("New game started.");
    }

    /// Shows or hides a log category in the panel.
    pub fn toggle_category(&mut self, category: Category) {
        let shown = self.filter.toggle(category);
        debug!(%category, shown, "Log filter changed");
    }

    /// Empties the log panel.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Records a sample entry: F1 info, F2 warning, F3 error, F4 game event.
    pub fn record_test_entry(&mut self, key: u8) {
        match key {
            1 => self.log.info("This is an info message!"),
            2 => self.log.warning("This is a warning message!"),
            3 => self.log.error("This is an error message!"),
            4 => self.log.game_event("This is a game event message!"),
            _ => {}
        }
    }

    /// Records the console text as a user entry and clears the console.
    pub fn submit_console(&mut self) {
        if let Some(text) = self.console.submit() {
            self.log.user(text);
        }
    }
}
