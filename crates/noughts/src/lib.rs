//! Noughts - two-player terminal tic-tac-toe with an event log.
//!
//! # Architecture
//!
//! - **Game**: board, turns and outcomes live in [`noughts_board`]
//! - **Log**: the bounded, file-backed event log lives in [`noughts_log`]
//! - **App**: owns one game and one log and reacts to key presses
//! - **UI**: stateless ratatui rendering of the app each frame
//!
//! # Example
//!
//! ```
//! use noughts::{App, SaveFile};
//! use noughts_board::Position;
//! use noughts_log::EventLog;
//!
//! let mut app = App::with_log(EventLog::default(), SaveFile::new("save.txt"));
//! app.start_up();
//! assert!(app.play(Position::Center));
//! assert!(!app.play(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod console;
mod input;
mod save;
pub mod ui;

// Crate-level exports - Application
pub use app::{App, Control, Focus};

// Crate-level exports - Configuration
pub use cli::Cli;
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Input
pub use console::ConsoleInput;
pub use input::{digit_position, move_cursor};

// Crate-level exports - Save file
pub use save::{SaveError, SaveErrorKind, SaveFile};
