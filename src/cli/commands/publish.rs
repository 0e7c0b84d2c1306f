//! Publish command implementation.
//!
//! Resolves the blog root, loads configuration, wires the real
//! collaborators, and hands off to the [`Publisher`].

use std::path::PathBuf;

use crate::config::{load_config, resolve_blog_root};
use crate::error::{PublishError, Result};
use crate::journal::{EventLog, Journal};
use crate::publish::{Collaborators, PublishOutcome, Publisher};
use crate::site::{HttpProbe, ShellReloader, ShellSiteBuilder};
use crate::ui::UserInterface;
use crate::vcs::GitCli;

use super::dispatcher::{Command, CommandResult};

/// The publish command.
pub struct PublishCommand {
    project: Option<PathBuf>,
    config: Option<PathBuf>,
    message: Option<String>,
}

impl PublishCommand {
    pub fn new(project: Option<PathBuf>, config: Option<PathBuf>, message: Option<String>) -> Self {
        Self {
            project,
            config,
            message,
        }
    }
}

impl Command for PublishCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = resolve_blog_root(self.project.as_deref())?;
        let config = load_config(&root, self.config.as_deref())?;
        tracing::debug!("Resolved config: {:?}", config);

        let vcs = GitCli::new(&root).excluding(&config.log_file);
        let builder = ShellSiteBuilder::new(&root, &config.build);
        let reloader = ShellReloader::new(&root, &config.reload);
        let probe = HttpProbe::new(&config.probe);
        let parts = Collaborators {
            vcs: &vcs,
            builder: &builder,
            reloader: &reloader,
            probe: &probe,
        };

        ui.show_header("Publishing blog");

        let journal = Journal::open(&config.log_path(&root));
        let mut log = EventLog::new(journal, ui);
        let publisher = Publisher::new(&root, &config, parts);

        match publisher.run(self.message.as_deref(), &mut log) {
            Ok(PublishOutcome::Published(_)) | Ok(PublishOutcome::Cancelled) => {
                Ok(CommandResult::success())
            }
            // Already reported with its output.
            Err(PublishError::BuildFailed { .. }) => Ok(CommandResult::failure(1)),
            Err(e) => Err(e),
        }
    }
}
