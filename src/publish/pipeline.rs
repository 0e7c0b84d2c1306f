//! Publish pipeline orchestration.

use chrono::Local;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::debug;

use crate::config::PublishConfig;
use crate::error::{PublishError, Result};
use crate::journal::EventLog;
use crate::shell::{OutputCallback, OutputLine};
use crate::site::{ReachabilityProbe, ServiceReloader, SiteBuilder};
use crate::ui::{
    format_duration, OutputMode, Prompt, PublishSummary, StepOutcome, StepReport,
};
use crate::vcs::{derive_commit_message, maintenance_message, ChangeCounts, VersionControl};

/// Key of the "no changes" confirmation prompt.
pub const CONTINUE_PROMPT_KEY: &str = "continue";

/// Message shown while the site generator runs.
const BUILD_SPINNER: &str = "Building site...";

/// External systems the pipeline drives.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub vcs: &'a dyn VersionControl,
    pub builder: &'a dyn SiteBuilder,
    pub reloader: &'a dyn ServiceReloader,
    pub probe: &'a dyn ReachabilityProbe,
}

/// How a run ended, short of a fatal error.
#[derive(Debug, Clone)]
pub enum PublishOutcome {
    /// All steps ran; warnings are recorded in the summary.
    Published(PublishSummary),
    /// The operator declined to continue without changes.
    Cancelled,
}

/// Runs the fixed publish sequence against one blog checkout.
///
/// Steps run strictly in order: message, change check, stage, commit, push,
/// build, reload, probe. Only a failed build stops the sequence; every other
/// failure becomes a warning and the run carries on.
pub struct Publisher<'a> {
    root: PathBuf,
    config: &'a PublishConfig,
    parts: Collaborators<'a>,
}

impl<'a> Publisher<'a> {
    pub fn new(root: &Path, config: &'a PublishConfig, parts: Collaborators<'a>) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
            parts,
        }
    }

    /// Execute the pipeline.
    ///
    /// A blank `message` counts as absent and a message is derived instead.
    /// The summary is shown through the log's UI before returning
    /// [`PublishOutcome::Published`].
    pub fn run(&self, message: Option<&str>, log: &mut EventLog<'_>) -> Result<PublishOutcome> {
        let started = Instant::now();
        log.info(&format!("Publishing {}", self.root.display()));

        let message = self.commit_message(message, log);
        log.info(&format!("Commit message: {}", message));

        if !self.has_changes(log) {
            log.warning("No changes detected");
            let prompt = Prompt::new(CONTINUE_PROMPT_KEY, "No changes detected. Continue anyway?");
            let proceed = match log.ui().confirm(&prompt) {
                Ok(answer) => answer,
                Err(e) => {
                    debug!("Confirmation failed: {}", e);
                    false
                }
            };
            if !proceed {
                log.info("Publish cancelled");
                return Ok(PublishOutcome::Cancelled);
            }
        }

        self.stage(log);
        let steps = vec![
            self.commit(&message, log),
            self.push(log),
            self.build(log)?,
            self.reload(log),
            self.probe(log),
        ];

        let summary = PublishSummary {
            commit_message: message,
            finished_at: Local::now().naive_local(),
            log_path: self.config.log_path(&self.root),
            total_duration: started.elapsed(),
            steps,
        };

        match summary.warning_count() {
            0 => log.success("Publish complete"),
            n => log.success(&format!("Publish complete with {} warning(s)", n)),
        }
        log.ui().show_summary(&summary);

        Ok(PublishOutcome::Published(summary))
    }

    fn commit_message(&self, explicit: Option<&str>, log: &mut EventLog<'_>) -> String {
        if let Some(message) = explicit.filter(|m| !m.trim().is_empty()) {
            return message.to_string();
        }

        let now = Local::now().naive_local();
        match self.parts.vcs.status() {
            Ok(entries) => {
                let counts = ChangeCounts::from_status(&entries, &self.config.posts_dir);
                debug!(
                    "Derived from {} new post(s) and {} other change(s)",
                    counts.new_posts.len(),
                    counts.modified
                );
                derive_commit_message(&counts, now)
            }
            Err(e) => {
                log.warning(&format!("Could not read repository status: {}", e));
                maintenance_message(now)
            }
        }
    }

    /// True when anything differs from HEAD. Undeterminable counts as changed.
    fn has_changes(&self, log: &mut EventLog<'_>) -> bool {
        let vcs = self.parts.vcs;
        match (vcs.worktree_differs(), vcs.index_differs()) {
            (Ok(worktree), Ok(index)) => worktree || index,
            (Err(e), _) | (_, Err(e)) => {
                log.warning(&format!("Could not check for changes: {}", e));
                true
            }
        }
    }

    fn stage(&self, log: &mut EventLog<'_>) {
        log.info("Staging changes");
        if let Err(e) = self.parts.vcs.stage_all() {
            log.warning(&format!("Staging failed: {}", e));
        }
    }

    fn commit(&self, message: &str, log: &mut EventLog<'_>) -> StepReport {
        match self.parts.vcs.index_differs() {
            Ok(true) => match self.parts.vcs.commit(message) {
                Ok(()) => {
                    log.success(&format!("Committed: {}", message));
                    StepReport::new("commit", StepOutcome::Succeeded, message)
                }
                Err(e) => {
                    log.warning(&format!("Commit failed: {}", e));
                    StepReport::new("commit", StepOutcome::Warned, "commit failed")
                }
            },
            Ok(false) => {
                log.warning("Nothing to commit");
                StepReport::new("commit", StepOutcome::Skipped, "nothing staged")
            }
            Err(e) => {
                log.warning(&format!("Could not inspect index: {}", e));
                StepReport::new("commit", StepOutcome::Warned, "index unreadable")
            }
        }
    }

    fn push(&self, log: &mut EventLog<'_>) -> StepReport {
        let remote = self.config.remote.as_str();

        let url = match self.parts.vcs.remote_url(remote) {
            Ok(Some(url)) => url,
            Ok(None) => {
                log.warning(&format!("No remote '{}' configured; skipping push", remote));
                return StepReport::new("push", StepOutcome::Skipped, "no remote");
            }
            Err(e) => {
                log.warning(&format!("Could not read remote '{}': {}", remote, e));
                return StepReport::new("push", StepOutcome::Warned, "remote unreadable");
            }
        };

        log.info(&format!("Pushing to {} ({})", remote, url));
        for branch in &self.config.branches {
            match self.parts.vcs.push(remote, branch) {
                Ok(()) => {
                    log.success(&format!("Pushed to {}/{}", remote, branch));
                    return StepReport::new(
                        "push",
                        StepOutcome::Succeeded,
                        format!("{}/{}", remote, branch),
                    );
                }
                Err(e) => debug!("Push to {}/{} failed: {}", remote, branch, e),
            }
        }

        log.warning(&format!(
            "Push to {} failed (tried {})",
            remote,
            self.config.branches.join(", ")
        ));
        StepReport::new("push", StepOutcome::Warned, "push failed")
    }

    fn build(&self, log: &mut EventLog<'_>) -> Result<StepReport> {
        let command = self.parts.builder.describe();
        log.info(&format!("Building site: {}", command));

        let verbose = log.ui().output_mode() == OutputMode::Verbose;
        let mut spinner = (!verbose).then(|| log.ui().start_spinner(BUILD_SPINNER));
        let callback: Option<OutputCallback> = if verbose {
            Some(Box::new(|line: OutputLine| {
                let text = match &line {
                    OutputLine::Stdout(s) | OutputLine::Stderr(s) => s.trim_end(),
                };
                if !text.is_empty() {
                    println!("    {text}");
                }
            }))
        } else {
            spinner.as_ref().and_then(|s| s.output_callback())
        };

        let result = self.parts.builder.build(callback);
        if let Some(spinner) = spinner.as_mut() {
            spinner.finish_clear();
        }

        match result {
            Ok(result) if result.success => {
                let took = format_duration(result.duration);
                log.success(&format!("Site built in {}", took));
                Ok(StepReport::new("build", StepOutcome::Succeeded, took))
            }
            Ok(result) => {
                let code = result
                    .exit_code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string());
                log.error(&format!("Site build failed (exit code {})", code));
                log.ui().show_error_block(&command, &result.combined_output());
                Err(PublishError::BuildFailed {
                    command,
                    code: result.exit_code,
                })
            }
            Err(e) => {
                log.error(&format!("Site build failed: {}", e));
                Err(PublishError::BuildFailed {
                    command,
                    code: None,
                })
            }
        }
    }

    fn reload(&self, log: &mut EventLog<'_>) -> StepReport {
        let command = self.parts.reloader.describe();
        log.info(&format!("Reloading web server: {}", command));

        match self.parts.reloader.reload() {
            Ok(result) if result.success => {
                log.success("Web server reloaded");
                StepReport::new("reload", StepOutcome::Succeeded, "")
            }
            Ok(result) => {
                let reason = result
                    .stderr
                    .lines()
                    .next()
                    .unwrap_or("no output")
                    .to_string();
                log.warning(&format!("Web server reload failed: {}", reason));
                StepReport::new("reload", StepOutcome::Warned, "reload failed")
            }
            Err(e) => {
                log.warning(&format!("Web server reload failed: {}", e));
                StepReport::new("reload", StepOutcome::Warned, "reload failed")
            }
        }
    }

    fn probe(&self, log: &mut EventLog<'_>) -> StepReport {
        log.info(&format!("Checking {}", self.parts.probe.describe()));

        match self.parts.probe.probe() {
            Ok(response) if response.is_reachable() => {
                log.success(&format!("Site reachable (HTTP {})", response.status));
                StepReport::new("probe", StepOutcome::Succeeded, format!("HTTP {}", response.status))
            }
            Ok(response) => {
                log.warning(&format!("Site answered HTTP {}", response.status));
                StepReport::new("probe", StepOutcome::Warned, format!("HTTP {}", response.status))
            }
            Err(e) => {
                log.warning(&format!("Site unreachable: {}", e));
                StepReport::new("probe", StepOutcome::Warned, "unreachable")
            }
        }
    }
}
