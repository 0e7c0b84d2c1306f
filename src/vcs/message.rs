//! Commit message derivation.
//!
//! When no message is given on the command line, one is derived from the
//! repository status:
//!
//! 1. new markdown posts under the posts directory → "New post..."
//! 2. otherwise any other changed path → "Update..."
//! 3. otherwise → "Site maintenance <date> <time>"

use chrono::NaiveDateTime;
use std::path::Path;

use super::status::StatusEntry;

const POST_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Counts feeding the commit message heuristic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeCounts {
    /// File stems of new posts, in status order.
    pub new_posts: Vec<String>,
    /// Number of other paths differing from HEAD.
    pub modified: usize,
}

impl ChangeCounts {
    /// Classify status entries against the posts directory.
    pub fn from_status(entries: &[StatusEntry], posts_dir: &Path) -> Self {
        let mut counts = Self::default();
        for entry in entries {
            if entry.is_new() && entry.is_under(posts_dir) && is_post(&entry.path) {
                let stem = entry
                    .path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                counts.new_posts.push(stem);
            } else {
                counts.modified += 1;
            }
        }
        counts
    }
}

fn is_post(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| POST_EXTENSIONS.iter().any(|p| e.eq_ignore_ascii_case(p)))
        .unwrap_or(false)
}

/// Build the commit message for `counts` at time `now`.
pub fn derive_commit_message(counts: &ChangeCounts, now: NaiveDateTime) -> String {
    let date = now.format("%Y-%m-%d");

    match counts.new_posts.as_slice() {
        [single] => format!("New post: {} ({})", single, date),
        [] if counts.modified > 0 => {
            let noun = if counts.modified == 1 { "file" } else { "files" };
            format!("Update: {} {} changed ({})", counts.modified, noun, date)
        }
        [] => maintenance_message(now),
        many => format!("New posts: {} added ({})", many.len(), date),
    }
}

/// Fallback message carrying date and time.
pub fn maintenance_message(now: NaiveDateTime) -> String {
    format!("Site maintenance {}", now.format("%Y-%m-%d %H:%M:%S"))
}
