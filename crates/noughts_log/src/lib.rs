//! In-process event log.
//!
//! [`EventLog`] keeps the most recent entries in a bounded buffer for
//! display, appends every entry to a text file, and mirrors it to
//! `tracing`. It is owned by the application and handed out by
//! reference; it is never global.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod category;
mod entry;
mod log;

pub use category::{Category, CategoryFilter, DisplayColor};
pub use entry::LogEntry;
pub use log::{EventLog, MAX_ENTRIES};
