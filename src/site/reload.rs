//! Web server reload.

use std::path::{Path, PathBuf};

use crate::config::ReloadConfig;
use crate::error::Result;
use crate::shell::{execute_shell, CommandOptions, CommandResult};

use super::ServiceReloader;

/// Runs the configured reload command (e.g. `sudo systemctl reload nginx`).
#[derive(Debug, Clone)]
pub struct ShellReloader {
    root: PathBuf,
    command: String,
}

impl ShellReloader {
    pub fn new(root: &Path, config: &ReloadConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            command: config.command.clone(),
        }
    }
}

impl ServiceReloader for ShellReloader {
    fn describe(&self) -> String {
        self.command.clone()
    }

    fn reload(&self) -> Result<CommandResult> {
        execute_shell(&self.command, &CommandOptions::captured(&self.root))
    }
}
