//! Static site generator invocation.

use std::path::{Path, PathBuf};

use crate::config::BuildConfig;
use crate::error::Result;
use crate::shell::{execute_shell, execute_shell_streaming, CommandOptions, CommandResult, OutputCallback};

use super::SiteBuilder;

/// Runs the configured build command through the shell in the blog root.
#[derive(Debug, Clone)]
pub struct ShellSiteBuilder {
    root: PathBuf,
    config: BuildConfig,
}

impl ShellSiteBuilder {
    pub fn new(root: &Path, config: &BuildConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            config: config.clone(),
        }
    }

    fn options(&self) -> CommandOptions {
        CommandOptions {
            env: self.config.env.clone(),
            ..CommandOptions::captured(&self.root)
        }
    }
}

impl SiteBuilder for ShellSiteBuilder {
    fn describe(&self) -> String {
        self.config.command.clone()
    }

    fn build(&self, output: Option<OutputCallback>) -> Result<CommandResult> {
        match output {
            Some(callback) => execute_shell_streaming(&self.config.command, &self.options(), callback),
            None => execute_shell(&self.config.command, &self.options()),
        }
    }
}
