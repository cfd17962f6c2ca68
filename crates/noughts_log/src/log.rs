//! The bounded event log and its file sink.

use crate::category::{Category, CategoryFilter};
use crate::entry::LogEntry;
use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::io::{LineWriter, Write};
use std::path::Path;
use tracing::{error, info, instrument, warn};

/// Default number of entries kept in memory.
pub const MAX_ENTRIES: usize = 1000;

/// Append-only, bounded event log.
///
/// Every record is kept in memory (oldest evicted first once `capacity`
/// is exceeded), written as one line to the sink, and mirrored to
/// `tracing`. The log owns its sink, so there is exactly one writer per
/// file; it is not `Clone`.
pub struct EventLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    sink: Option<Box<dyn Write + Send>>,
}

impl EventLog {
    /// Opens `path` in append mode and logs into it.
    ///
    /// If the file cannot be opened the failure goes to the diagnostic
    /// stream and the log keeps working in memory.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>, capacity: usize) -> Self {
        match OpenOptions::new().create(true).append(true).open(path.as_ref()) {
            Ok(file) => {
                info!("Log file opened");
                Self::with_sink(capacity, LineWriter::new(file))
            }
            Err(e) => {
                error!(error = %e, "Failed to open log file");
                Self::in_memory(capacity)
            }
        }
    }

    /// Creates a log that keeps entries only in memory.
    pub fn in_memory(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(MAX_ENTRIES)),
            capacity,
            sink: None,
        }
    }

    /// Creates a log writing one line per entry to `sink`.
    pub fn with_sink(capacity: usize, sink: impl Write + Send + 'static) -> Self {
        let mut log = Self::in_memory(capacity);
        log.sink = Some(Box::new(sink));
        log
    }

    /// Records a new entry.
    ///
    /// Never fails; sink errors are only reported to the diagnostic stream.
    pub fn record(&mut self, category: Category, message: impl Into<String>) {
        let entry = LogEntry::now(category, message);

        match category {
            Category::Error => error!(target: "event_log", category = %category, "{}", entry.message()),
            Category::Warning => warn!(target: "event_log", category = %category, "{}", entry.message()),
            _ => info!(target: "event_log", category = %category, "{}", entry.message()),
        }

        if let Some(sink) = self.sink.as_mut()
            && let Err(e) = writeln!(sink, "{}", file_line(&entry))
        {
            warn!(error = %e, "Failed to write log entry to file");
        }

        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Records an [`Category::Info`] entry.
    pub fn info(&mut self, message: impl Into<String>) {
        self.record(Category::Info, message);
    }

    /// Records a [`Category::Warning`] entry.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.record(Category::Warning, message);
    }

    /// Records an [`Category::Error`] entry.
    pub fn error(&mut self, message: impl Into<String>) {
        self.record(Category::Error, message);
    }

    /// Records a [`Category::GameEvent`] entry.
    pub fn game_event(&mut self, message: impl Into<String>) {
        self.record(Category::GameEvent, message);
    }

    /// Records a [`Category::User`] entry.
    pub fn user(&mut self, message: impl Into<String>) {
        self.record(Category::User, message);
    }

    /// Empties the in-memory entries. The file is left as is.
    #[instrument(skip(self), fields(cleared = self.entries.len()))]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries whose category is enabled in `filter`, oldest first.
    pub fn query(&self, filter: &CategoryFilter) -> impl Iterator<Item = &LogEntry> + '_ {
        let filter = *filter;
        self.entries
            .iter()
            .filter(move |entry| filter.contains(*entry.category()))
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Number of entries in memory.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no entries are held in memory.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

}

/// Formats `entry` for the file, escaping line breaks so each entry
/// stays on one line.
fn file_line(entry: &LogEntry) -> String {
    entry
        .to_string()
        .replace('\\', "\\\\")
        .replace('\r', "\\r")
        .replace('\n', "\\n")
}

impl Default for EventLog {
    fn default() -> Self {
        Self::in_memory(MAX_ENTRIES)
    }
}

impl std::fmt::Debug for EventLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLog")
            .field("entries", &self.entries.len())
            .field("capacity", &self.capacity)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}

impl Drop for EventLog {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.as_mut()
            && let Err(e) = sink.flush()
        {
            warn!(error = %e, "Failed to flush log file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Sink that rejects every write.
    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("disk full"))
        }
    }

    /// Sink sharing its bytes with the test.
    #[derive(Clone, Default)]
    struct SharedSink(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_eviction_keeps_newest_in_order() {
        let mut log = EventLog::in_memory(MAX_ENTRIES);
        for i in 0..=MAX_ENTRIES {
            log.info(format!("entry {i}"));
        }

        assert_eq!(log.len(), MAX_ENTRIES);
        let messages: Vec<&str> = log.entries().map(|e| e.message().as_str()).collect();
        assert_eq!(messages.first(), Some(&"entry 1"));
        assert_eq!(messages.last(), Some(&"entry 1000"));
        assert!(!messages.contains(&"entry 0"));
        for (i, message) in messages.iter().enumerate() {
            assert_eq!(*message, format!("entry {}", i + 1));
        }
    }

    #[test]
    fn test_query_filters_and_preserves_order() {
        let mut log = EventLog::default();
        log.info("a");
        log.error("b");
        log.user("c");
        log.error("d");

        let mut filter = CategoryFilter::none();
        filter.enable(Category::Error);
        filter.enable(Category::User);
        let got: Vec<&str> = log.query(&filter).map(|e| e.message().as_str()).collect();
        assert_eq!(got, ["b", "c", "d"]);
        assert_eq!(log.len(), 4);
        assert_eq!(log.query(&CategoryFilter::none()).count(), 0);
    }

    #[test]
    fn test_sink_failure_is_swallowed() {
        let mut log = EventLog::with_sink(MAX_ENTRIES, BrokenSink);
        log.warning("still recorded");
        assert_eq!(log.len(), 1);
        assert_eq!(*log.entries().next().unwrap().category(), Category::Warning);
    }

    #[test]
    fn test_each_record_writes_one_line() {
        let sink = SharedSink::default();
        let mut log = EventLog::with_sink(MAX_ENTRIES, sink.clone());
        log.game_event("Player 1 wins!");
        log.user("gg");

        let text = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("] [game event]: Player 1 wins!"));
        assert!(lines[1].ends_with("] [user]: gg"));
    }

    #[test]
    fn test_line_breaks_are_escaped_in_file() {
        let sink = SharedSink::default();
        let mut log = EventLog::with_sink(MAX_ENTRIES, sink.clone());
        log.user("line one\nline two\r\nline three");

        let text = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("[user]: line one\\nline two\\r\\nline three"));
        assert_eq!(
            log.entries().next().unwrap().message(),
            "line one\nline two\r\nline three"
        );
    }

    #[test]
    fn test_clear_empties_memory_only() {
        let sink = SharedSink::default();
        let mut log = EventLog::with_sink(MAX_ENTRIES, sink.clone());
        log.info("kept on disk");
        log.clear();

        assert!(log.is_empty());
        assert!(!sink.0.lock().unwrap().is_empty());
    }
}
