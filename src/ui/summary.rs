//! End-of-run summary.

use chrono::NaiveDateTime;
use std::path::PathBuf;
use std::time::Duration;

use super::theme::BlogshipTheme;

/// How a pipeline step ended, short of a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepOutcome {
    /// Step did its work.
    Succeeded,
    /// Step failed in a recoverable way.
    Warned,
    /// Step had nothing to do or its precondition was missing.
    Skipped,
}

impl StepOutcome {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Succeeded => "✓",
            Self::Warned => "⚠",
            Self::Skipped => "○",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &BlogshipTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Succeeded => theme.success.apply_to(icon).to_string(),
            Self::Warned => theme.warning.apply_to(icon).to_string(),
            Self::Skipped => theme.dim.apply_to(icon).to_string(),
        }
    }
}

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub name: String,
    pub outcome: StepOutcome,
    pub detail: Option<String>,
}

impl StepReport {
    pub fn new(name: &str, outcome: StepOutcome, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self {
            name: name.to_string(),
            outcome,
            detail: (!detail.is_empty()).then_some(detail),
        }
    }
}

/// Everything printed once a run completes without a fatal error.
#[derive(Debug, Clone)]
pub struct PublishSummary {
    /// Effective commit message (given or derived).
    pub commit_message: String,
    /// Local time the run finished.
    pub finished_at: NaiveDateTime,
    /// Where the event log was written.
    pub log_path: PathBuf,
    /// Wall-clock duration of the run.
    pub total_duration: Duration,
    /// Per-step outcomes, in pipeline order.
    pub steps: Vec<StepReport>,
}

impl PublishSummary {
    /// Completion timestamp as `YYYY-MM-DD HH:MM:SS`.
    pub fn finished_at_display(&self) -> String {
        self.finished_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// Number of steps that ended with a warning.
    pub fn warning_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.outcome == StepOutcome::Warned)
            .count()
    }

    /// Outcome of the named step, if it ran.
    pub fn outcome_of(&self, name: &str) -> Option<StepOutcome> {
        self.steps.iter().find(|s| s.name == name).map(|s| s.outcome)
    }

    /// Plain-text rendering, shared by the terminal and non-interactive UIs.
    pub fn render(&self, theme: &BlogshipTheme) -> Vec<String> {
        let b = &theme.border;
        let mut lines = vec![
            String::new(),
            format!(
                "  {} {}",
                b.apply_to("┌─"),
                b.apply_to("Summary ──────────────────────────")
            ),
        ];

        for step in &self.steps {
            lines.push(format!(
                "  {} {} {:<10} {}",
                b.apply_to("│"),
                step.outcome.styled(theme),
                step.name,
                theme.dim.apply_to(step.detail.as_deref().unwrap_or("")),
            ));
        }

        lines.push(format!(
            "  {}",
            b.apply_to("├────────────────────────────────────")
        ));
        lines.push(format!(
            "  {} {} {}",
            b.apply_to("│"),
            theme.key.apply_to("Commit:"),
            self.commit_message
        ));
        lines.push(format!(
            "  {} {} {} {}",
            b.apply_to("│"),
            theme.key.apply_to("Finished:"),
            self.finished_at_display(),
            theme
                .dim
                .apply_to(format!("({})", format_duration(self.total_duration))),
        ));
        lines.push(format!(
            "  {} {} {}",
            b.apply_to("│"),
            theme.key.apply_to("Log:"),
            self.log_path.display()
        ));
        lines.push(format!(
            "  {}",
            b.apply_to("└────────────────────────────────────")
        ));

        lines
    }
}

/// Format a duration compactly (`500ms`, `5.3s`, `1.5m`).
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = secs / 60.0;
        format!("{:.1}m", mins)
    }
}
