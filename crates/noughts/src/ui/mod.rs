//! Stateless UI rendering using ratatui.

mod board;
mod log_panel;

use crate::app::{App, Focus};
use noughts_board::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

pub use board::render_board;
pub use log_panel::{render_log_panel, render_options, to_color};

/// Draws one frame from the application state.
pub fn draw(f: &mut Frame, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(f.area());

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(11),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(columns[0]);

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, left[0]);

    let game = app.game();
    let cursor = (!game.status().is_over()).then_some(*app.cursor());
    render_board(f, left[1], game.board(), cursor);

    let status = status_line(game.status());
    let settings = Paragraph::new(vec![
        Line::from(format!(
            "Current player number: {}",
            game.current_player().number()
        )),
        Line::from(format!("Current board state: {}", game.state_string())),
        Line::from(status),
    ])
    .style(Style::default().fg(Color::Yellow))
    .block(Block::default().borders(Borders::ALL).title("Settings"));
    f.render_widget(settings, left[2]);

    let help_text = if game.status().is_over() {
        "N: New game | Tab: Console | O: Options | Q: Quit"
    } else {
        "1-9/Enter: Move | S: Save | L: Load | R: Reset | O: Options | C: Clear | Q: Quit"
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, left[3]);

    render_log_panel(f, columns[1], app);

    if *app.focus() == Focus::Options {
        render_options(f, f.area(), app.filter());
    }
}

fn status_line(status: GameStatus) -> String {
    match status {
        GameStatus::InProgress => "Game in progress".to_string(),
        GameStatus::Won(winner) => format!("Game over! Winner: {}", winner.number()),
        GameStatus::Draw => "Game over! Draw".to_string(),
        GameStatus::Stopped => "Game stopped".to_string(),
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
