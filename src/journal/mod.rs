//! Event log: an append-only file mirrored to the console.
//!
//! Every event of a publish run is written twice, once as a timestamped line
//! in the log file and once through the [`UserInterface`] with the same
//! severity.
//!
//! # Example
//!
//! ```
//! use blogship::journal::{EventLog, Journal};
//! use blogship::ui::MockUI;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("logs/publish.log");
//! let mut ui = MockUI::new();
//!
//! let mut log = EventLog::new(Journal::open(&path), &mut ui);
//! log.success("Site built");
//! drop(log);
//!
//! let text = std::fs::read_to_string(&path).unwrap();
//! assert!(text.contains(" - SUCCESS: Site built"));
//! assert!(ui.has_success("Site built"));
//! ```

pub mod file;

pub use file::{format_line, Journal, Level};

use crate::ui::UserInterface;

/// Pairs a [`Journal`] with the console.
pub struct EventLog<'a> {
    journal: Journal,
    ui: &'a mut dyn UserInterface,
}

impl<'a> EventLog<'a> {
    pub fn new(journal: Journal, ui: &'a mut dyn UserInterface) -> Self {
        Self { journal, ui }
    }

    pub fn info(&mut self, msg: &str) {
        self.journal.record(Level::Info, msg);
        self.ui.message(msg);
    }

    pub fn success(&mut self, msg: &str) {
        self.journal.record(Level::Success, msg);
        self.ui.success(msg);
    }

    pub fn warning(&mut self, msg: &str) {
        self.journal.record(Level::Warning, msg);
        self.ui.warning(msg);
    }

    pub fn error(&mut self, msg: &str) {
        self.journal.record(Level::Error, msg);
        self.ui.error(msg);
    }

    /// Console access for prompts, spinners, and the summary.
    pub fn ui(&mut self) -> &mut dyn UserInterface {
        &mut *self.ui
    }
}
