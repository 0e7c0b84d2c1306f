//! Error types for blogship operations.
//!
//! This module defines [`PublishError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `DirectoryNotFound` and `BuildFailed` are the only errors that abort a
//!   publish run once it has started
//! - Collaborator failures (`CommandFailed`, `Probe`) are reported as warnings
//!   by the pipeline and never reach `main`

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for blogship operations.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The blog root does not exist or is not a directory.
    #[error("Blog directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// The static site build failed.
    #[error("Site build failed with exit code {code:?}: {command}")]
    BuildFailed { command: String, code: Option<i32> },

    /// An explicitly requested configuration file is missing.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A collaborator command could not be spawned or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The HTTP probe could not reach the server.
    #[error("Probe of {url} failed: {message}")]
    Probe { url: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PublishError {
    /// Whether this error ends a publish run with a non-zero exit code.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::DirectoryNotFound { .. }
                | Self::BuildFailed { .. }
                | Self::ConfigNotFound { .. }
                | Self::ConfigParseError { .. }
        )
    }
}

/// Result type alias for blogship operations.
pub type Result<T> = std::result::Result<T, PublishError>;
