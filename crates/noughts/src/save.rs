//! Save file holding a single game state string.

use derive_more::{Display, Error};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// What went wrong with the save file.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SaveErrorKind {
    /// Nothing has been saved yet.
    #[display("Save file {} not found", path)]
    NotFound {
        /// Path that was read.
        path: String,
    },

    /// The file exists but could not be read.
    #[display("Could not read {}: {}", path, message)]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        message: String,
    },

    /// The file could not be written.
    #[display("Could not write {}: {}", path, message)]
    Write {
        /// Path that was written.
        path: String,
        /// Underlying I/O error.
        message: String,
    },
}

/// Save file error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Save error: {} at {}:{}", kind, file, line)]
pub struct SaveError {
    /// What went wrong.
    pub kind: SaveErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SaveError {
    /// Creates a new save error with caller location tracking.
    #[track_caller]
    pub fn new(kind: SaveErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A single-slot save file.
///
/// Saving overwrites the whole file; loading reads the whole file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    /// Creates a handle for `path`. Nothing is touched until save or load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Overwrites the file with `state`.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn save(&self, state: &str) -> Result<(), SaveError> {
        std::fs::write(&self.path, state).map_err(|e| {
            SaveError::new(SaveErrorKind::Write {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        debug!("State written");
        Ok(())
    }

    /// Reads the whole file.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<String, SaveError> {
        let path = self.path.display().to_string();
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            SaveError::new(match e.kind() {
                ErrorKind::NotFound => SaveErrorKind::NotFound { path },
                _ => SaveErrorKind::Read {
                    path,
                    message: e.to_string(),
                },
            })
        })?;
        debug!(bytes = text.len(), "State read");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let save = SaveFile::new(dir.path().join("save.txt"));
        save.save("0000000001").unwrap();
        save.save("0000100002").unwrap();
        assert_eq!(save.load().unwrap(), "0000100002");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let save = SaveFile::new(dir.path().join("absent.txt"));
        let err = save.load().unwrap_err();
        assert!(matches!(err.kind, SaveErrorKind::NotFound { .. }));
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let save = SaveFile::new(dir.path().join("missing_dir").join("save.txt"));
        let err = save.save("0000000001").unwrap_err();
        assert!(matches!(err.kind, SaveErrorKind::Write { .. }));
    }
}
