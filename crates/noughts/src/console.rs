//! Single-line console input for free-text log entries.

/// Growable single-line text buffer.
///
/// Enter submits the trimmed text and clears the buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleInput {
    buffer: String,
}

impl ConsoleInput {
    /// Creates an empty console.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Appends a character. Control characters (newlines included) are ignored.
    pub fn insert(&mut self, c: char) {
        if !c.is_control() {
            self.buffer.push(c);
        }
    }

    /// Removes the last character.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Takes the text out of the buffer, leaving it empty.
    ///
    /// Returns `None` when there is nothing but whitespace to submit.
    pub fn submit(&mut self) -> Option<String> {
        let text = std::mem::take(&mut self.buffer);
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_clears() {
        let mut console = ConsoleInput::new();
        for c in "  hello there ".chars() {
            console.insert(c);
        }
        assert_eq!(console.submit().as_deref(), Some("hello there"));
        assert_eq!(console.text(), "");
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut console = ConsoleInput::new();
        console.insert(' ');
        assert_eq!(console.submit(), None);
        assert_eq!(console.text(), "");
    }

    #[test]
    fn test_backspace_and_control_chars() {
        let mut console = ConsoleInput::new();
        console.insert('a');
        console.insert('\n');
        console.insert('é');
        console.backspace();
        assert_eq!(console.text(), "a");
    }

    #[test]
    fn test_long_input_is_not_truncated() {
        let mut console = ConsoleInput::new();
        for _ in 0..1000 {
            console.insert('x');
        }
        assert_eq!(console.submit().map(|s| s.len()), Some(1000));
    }
}
