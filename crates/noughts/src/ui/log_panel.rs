//! Event log panel, console line and category options popup.

use noughts_log::{Category, CategoryFilter, DisplayColor, EventLog};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};
use strum::IntoEnumIterator;

use crate::app::{App, Focus};

/// Converts a log color to a terminal color.
pub fn to_color(color: DisplayColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Renders the log entries above the console input.
pub fn render_log_panel(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    render_entries(f, chunks[0], app.log(), app.filter());
    render_console(f, chunks[1], app);
}

fn render_entries(f: &mut Frame, area: Rect, log: &EventLog, filter: &CategoryFilter) {
    let visible = usize::from(area.height.saturating_sub(2));
    let shown: Vec<_> = log.query(filter).collect();
    // Keep the newest entries in view.
    let skip = shown.len().saturating_sub(visible);
    let items: Vec<ListItem> = shown[skip..]
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(Span::styled(
                entry.to_string(),
                Style::default().fg(to_color(entry.color())),
            )))
        })
        .collect();

    let hidden = Category::iter().filter(|c| !filter.contains(*c)).count();
    let title = if hidden == 0 {
        format!("Game Log ({})", log.len())
    } else {
        format!("Game Log ({}, {} hidden categories)", log.len(), hidden)
    };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn render_console(f: &mut Frame, area: Rect, app: &App) {
    let focused = *app.focus() == Focus::Console;
    let (title, style) = if focused {
        (
            "Console (Enter: submit | Esc: back)",
            Style::default().fg(Color::White),
        )
    } else {
        ("Console (Tab to type)", Style::default().fg(Color::DarkGray))
    };
    let text = format!("> {}", app.console().text());
    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(u16::try_from(text.chars().count()).unwrap_or(u16::MAX));
    let input = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(input, area);

    if focused {
        let max_x = area.x + area.width.saturating_sub(2);
        f.set_cursor_position((cursor_x.min(max_x), area.y + 1));
    }
}

/// Renders the category options popup over `area`.
pub fn render_options(f: &mut Frame, area: Rect, filter: &CategoryFilter) {
    let popup = super::center_rect(area, 36, 9);
    let mut lines = vec![Line::from(Span::styled(
        "Show log types:",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for (i, category) in Category::iter().enumerate() {
        let mark = if filter.contains(category) { "x" } else { " " };
        lines.push(Line::from(vec![
            Span::raw(format!("{}. [{}] ", i + 1, mark)),
            Span::styled(
                category.label(),
                Style::default().fg(to_color(category.color())),
            ),
        ]));
    }
    lines.push(Line::from(Span::styled(
        "1-5: toggle | Esc: close",
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Options")),
        popup,
    );
}
