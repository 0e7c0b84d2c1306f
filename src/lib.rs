//! Blogship - publish a static blog in one command.
//!
//! A publish run commits and pushes the blog's git repository, rebuilds the
//! site, reloads the web server, and checks that the site answers, recording
//! every event in an append-only log.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Blog root resolution and `.blogship.yml` loading
//! - [`error`] - Error types and result aliases
//! - [`journal`] - Append-only event log mirrored to the console
//! - [`publish`] - The publish pipeline
//! - [`shell`] - Process execution
//! - [`site`] - Site build, server reload, and reachability probe
//! - [`ui`] - Prompts, spinners, and terminal output
//! - [`vcs`] - Git access and commit message derivation
//!
//! # Example
//!
//! ```
//! use blogship::vcs::{derive_commit_message, parse_porcelain, ChangeCounts};
//! use chrono::NaiveDate;
//! use std::path::Path;
//!
//! let entries = parse_porcelain("?? content/posts/hello-world.md\n");
//! let counts = ChangeCounts::from_status(&entries, Path::new("content/posts"));
//! let now = NaiveDate::from_ymd_opt(2026, 10, 14)
//!     .unwrap()
//!     .and_hms_opt(9, 30, 0)
//!     .unwrap();
//!
//! assert_eq!(
//!     derive_commit_message(&counts, now),
//!     "New post: hello-world (2026-10-14)"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod journal;
pub mod publish;
pub mod shell;
pub mod site;
pub mod ui;
pub mod vcs;

pub use error::{PublishError, Result};
