//! Append-only log file.

use chrono::{Local, NaiveDateTime};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Severity of a logged event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    /// Label written in the log line. Info lines carry none.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Info => None,
            Self::Success => Some("SUCCESS"),
            Self::Warning => Some("WARNING"),
            Self::Error => Some("ERROR"),
        }
    }
}

/// Format one log line: `YYYY-MM-DD HH:MM:SS - <LEVEL>: <message>`.
pub fn format_line(at: NaiveDateTime, level: Level, msg: &str) -> String {
    let ts = at.format("%Y-%m-%d %H:%M:%S");
    match level.label() {
        Some(label) => format!("{} - {}: {}", ts, label, msg),
        None => format!("{} - {}", ts, msg),
    }
}

/// Append-only event log on disk.
///
/// A journal that cannot be opened stays usable and drops writes, so a
/// read-only blog checkout still publishes.
#[derive(Debug)]
pub struct Journal {
    path: PathBuf,
    file: Option<File>,
}

impl Journal {
    /// Open `path` for appending, creating parent directories.
    pub fn open(path: &Path) -> Self {
        let file = Self::open_file(path)
            .map_err(|e| tracing::warn!("Cannot open log file {}: {}", path.display(), e))
            .ok();

        Self {
            path: path.to_path_buf(),
            file,
        }
    }

    /// A journal that writes nowhere.
    pub fn disabled() -> Self {
        Self {
            path: PathBuf::new(),
            file: None,
        }
    }

    fn open_file(path: &Path) -> std::io::Result<File> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(path)
    }

    /// Location of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether writes reach disk.
    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Append one event stamped with the current local time.
    pub fn record(&mut self, level: Level, msg: &str) {
        let line = format_line(Local::now().naive_local(), level, msg);
        if let Some(file) = &mut self.file {
            if let Err(e) = writeln!(file, "{}", line) {
                tracing::warn!("Failed to write {}: {}", self.path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 14)
            .unwrap()
            .and_hms_opt(7, 3, 9)
            .unwrap()
    }

    #[test]
    fn info_lines_omit_level() {
        assert_eq!(
            format_line(at(), Level::Info, "Pushing to origin"),
            "2026-10-14 07:03:09 - Pushing to origin"
        );
    }

    #[test]
    fn other_levels_are_labelled() {
        assert_eq!(
            format_line(at(), Level::Error, "Site build failed"),
            "2026-10-14 07:03:09 - ERROR: Site build failed"
        );
        assert_eq!(
            format_line(at(), Level::Success, "Committed"),
            "2026-10-14 07:03:09 - SUCCESS: Committed"
        );
        assert_eq!(
            format_line(at(), Level::Warning, "Nothing to commit"),
            "2026-10-14 07:03:09 - WARNING: Nothing to commit"
        );
    }

    #[test]
    fn open_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("logs/nested/publish.log");

        let journal = Journal::open(&path);

        assert!(journal.is_enabled());
        assert!(path.exists());
        assert_eq!(journal.path(), path);
    }

    #[test]
    fn record_appends_across_opens() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("publish.log");

        Journal::open(&path).record(Level::Info, "first run");
        Journal::open(&path).record(Level::Info, "second run");

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("first run"));
        assert!(lines[1].ends_with("second run"));
    }

    #[test]
    fn unopenable_path_disables_journal() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("logs");
        fs::write(&blocker, "a file, not a directory").unwrap();

        let mut journal = Journal::open(&blocker.join("publish.log"));
        journal.record(Level::Error, "dropped");

        assert!(!journal.is_enabled());
    }

    #[test]
    fn timestamp_shape() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("publish.log");
        Journal::open(&path).record(Level::Warning, "Reload failed");

        let text = fs::read_to_string(&path).unwrap();
        let re = regex::Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} - WARNING: Reload failed\n$")
            .unwrap();
        assert!(re.is_match(&text), "unexpected line: {:?}", text);
    }
}
