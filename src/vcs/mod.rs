//! Version control access.
//!
//! The pipeline talks to git through the [`VersionControl`] trait so tests
//! can substitute an in-memory repository. [`GitCli`] is the real
//! implementation, shelling out to `git`.

pub mod git;
pub mod message;
pub mod status;

pub use git::GitCli;
pub use message::{derive_commit_message, maintenance_message, ChangeCounts};
pub use status::{parse_porcelain, StatusEntry};

use crate::error::Result;

/// Operations the publish pipeline needs from version control.
pub trait VersionControl {
    /// Every path differing from HEAD, including untracked files.
    fn status(&self) -> Result<Vec<StatusEntry>>;

    /// Whether the working tree differs from the index, or untracked files exist.
    fn worktree_differs(&self) -> Result<bool>;

    /// Whether the index differs from HEAD.
    fn index_differs(&self) -> Result<bool>;

    /// Stage every change in the working tree.
    fn stage_all(&self) -> Result<()>;

    /// Commit the index with `message`.
    fn commit(&self, message: &str) -> Result<()>;

    /// URL of `remote`, or `None` when no such remote is configured.
    fn remote_url(&self, remote: &str) -> Result<Option<String>>;

    /// Push `branch` to `remote`.
    fn push(&self, remote: &str, branch: &str) -> Result<()>;
}
