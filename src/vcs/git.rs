//! git command-line backend.

use std::path::{Component, Path, PathBuf};

use crate::error::{PublishError, Result};
use crate::shell::{display_command, execute_quiet, CommandResult};

use super::status::{parse_porcelain, StatusEntry};
use super::VersionControl;

/// [`VersionControl`] implemented by invoking the `git` binary.
///
/// Paths registered with [`GitCli::excluding`] are invisible to change
/// detection, status, and staging.
#[derive(Debug, Clone)]
pub struct GitCli {
    root: PathBuf,
    program: String,
    excluded: Vec<String>,
}

impl GitCli {
    /// Operate on the repository at `root`.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            program: "git".to_string(),
            excluded: Vec::new(),
        }
    }

    /// Hide `path` (relative to the root, or absolute inside it) from every
    /// operation. Paths outside the root are ignored.
    pub fn excluding(mut self, path: &Path) -> Self {
        let relative = if path.is_absolute() {
            match path.strip_prefix(&self.root) {
                Ok(rel) => rel,
                Err(_) => {
                    tracing::debug!("{} is outside {}, not excluded", path.display(), self.root.display());
                    return self;
                }
            }
        } else {
            path
        };

        let inside = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if inside && relative.components().next().is_some() {
            self.excluded
                .push(format!(":(exclude){}", relative.to_string_lossy()));
        } else {
            tracing::debug!("{} is outside {}, not excluded", path.display(), self.root.display());
        }
        self
    }

    /// `args` followed by the pathspec covering the whole tree minus exclusions.
    fn scoped<'a>(&'a self, args: &[&'a str]) -> Vec<&'a str> {
        let mut full = args.to_vec();
        if !self.excluded.is_empty() {
            full.push("--");
            full.push(":/");
            full.extend(self.excluded.iter().map(String::as_str));
        }
        full
    }

    fn run(&self, args: &[&str]) -> Result<CommandResult> {
        execute_quiet(&self.program, args, &self.root)
    }

    /// Run and require exit status 0.
    fn run_ok(&self, args: &[&str]) -> Result<CommandResult> {
        let result = self.run(args)?;
        if result.success {
            Ok(result)
        } else {
            tracing::debug!("git stderr: {}", result.stderr.trim_end());
            Err(PublishError::CommandFailed {
                command: display_command(&self.program, args),
                code: result.exit_code,
            })
        }
    }

    /// `git diff --quiet` convention: 0 = same, 1 = differs, anything else = error.
    fn run_diff(&self, args: &[&str]) -> Result<bool> {
        let result = self.run(args)?;
        match result.exit_code {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            code => Err(PublishError::CommandFailed {
                command: display_command(&self.program, args),
                code,
            }),
        }
    }
}

impl VersionControl for GitCli {
    fn status(&self) -> Result<Vec<StatusEntry>> {
        let result = self.run_ok(&self.scoped(&["status", "--porcelain", "--untracked-files=all"]))?;
        Ok(parse_porcelain(&result.stdout))
    }

    fn worktree_differs(&self) -> Result<bool> {
        if self.run_diff(&self.scoped(&["diff", "--quiet"]))? {
            return Ok(true);
        }
        let untracked = self.run_ok(&self.scoped(&["ls-files", "--others", "--exclude-standard"]))?;
        Ok(!untracked.stdout.trim().is_empty())
    }

    fn index_differs(&self) -> Result<bool> {
        self.run_diff(&self.scoped(&["diff", "--cached", "--quiet"]))
    }

    fn stage_all(&self) -> Result<()> {
        self.run_ok(&self.scoped(&["add", "-A"])).map(|_| ())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run_ok(&["commit", "-m", message]).map(|_| ())
    }

    fn remote_url(&self, remote: &str) -> Result<Option<String>> {
        let result = self.run(&["remote", "get-url", remote])?;
        if !result.success {
            return Ok(None);
        }
        let url = result.stdout.trim();
        Ok((!url.is_empty()).then(|| url.to_string()))
    }

    fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.run_ok(&["push", remote, branch]).map(|_| ())
    }
}
