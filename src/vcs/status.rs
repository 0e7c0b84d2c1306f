//! Parsing of `git status --porcelain` output.

use std::path::{Path, PathBuf};

/// One record of `git status --porcelain` (v1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// Index column (`X`).
    pub index: char,
    /// Working tree column (`Y`).
    pub worktree: char,
    /// Path relative to the repository root. For renames, the destination.
    pub path: PathBuf,
}

impl StatusEntry {
    /// Parse a single porcelain line such as `?? content/posts/hello.md`.
    ///
    /// Returns `None` for lines too short to carry a path.
    pub fn parse(line: &str) -> Option<Self> {
        let mut chars = line.chars();
        let index = chars.next()?;
        let worktree = chars.next()?;
        let rest = line.get(3..)?;
        if rest.is_empty() {
            return None;
        }

        let target = match rest.rsplit_once(" -> ") {
            Some((_, to)) => to,
            None => rest,
        };

        Some(Self {
            index,
            worktree,
            path: PathBuf::from(unquote(target)),
        })
    }

    /// File not yet known to git.
    pub fn is_untracked(&self) -> bool {
        self.index == '?' && self.worktree == '?'
    }

    /// File added in the index.
    pub fn is_added(&self) -> bool {
        self.index == 'A'
    }

    /// New since the last commit: untracked or freshly added.
    pub fn is_new(&self) -> bool {
        self.is_untracked() || self.is_added()
    }

    /// Whether the path lives under `dir` (repository-relative).
    pub fn is_under(&self, dir: &Path) -> bool {
        self.path.starts_with(dir)
    }
}

/// Parse full porcelain output, skipping blank or malformed lines.
pub fn parse_porcelain(output: &str) -> Vec<StatusEntry> {
    output.lines().filter_map(StatusEntry::parse).collect()
}

// git quotes paths with special characters using C-style escapes.
fn unquote(path: &str) -> String {
    let Some(inner) = path
        .strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
    else {
        return path.to_string();
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
