//! Immutable log entries.

use crate::category::{Category, DisplayColor};
use chrono::{DateTime, Local, Timelike};
use derive_getters::Getters;

/// One recorded event.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct LogEntry {
    /// Local wall-clock time, truncated to the second.
    timestamp: DateTime<Local>,
    /// Category the entry was recorded under.
    category: Category,
    /// Free-text message.
    message: String,
}

impl LogEntry {
    /// Creates an entry stamped with `timestamp`, dropping sub-second precision.
    pub fn new(timestamp: DateTime<Local>, category: Category, message: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.with_nanosecond(0).unwrap_or(timestamp),
            category,
            message: message.into(),
        }
    }

    /// Creates an entry stamped with the current time.
    pub fn now(category: Category, message: impl Into<String>) -> Self {
        Self::new(Local::now(), category, message)
    }

    /// Display color, derived from the category.
    pub fn color(&self) -> DisplayColor {
        self.category.color()
    }

    /// Timestamp as `HH:MM:SS`.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] [{}]: {}",
            self.time_label(),
            self.category,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_line_format() {
        let at = Local.with_ymd_and_hms(2026, 10, 16, 9, 5, 7).unwrap();
        let entry = LogEntry::new(at, Category::GameEvent, "Player 1 wins!");
        assert_eq!(entry.to_string(), "[09:05:07] [game event]: Player 1 wins!");
        assert_eq!(entry.color(), Category::GameEvent.color());
    }
}
