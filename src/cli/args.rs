//! CLI argument definitions.
//!
//! This module defines the CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::ui::OutputMode;

/// Blogship - commit, push, build, and serve a static blog in one step.
#[derive(Debug, Parser)]
#[command(name = "blogship")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Commit message (derived from the changes when omitted)
    pub message: Option<String>,

    /// Path to the blog root (defaults to the parent of the binary's directory)
    #[arg(short, long, env = "BLOGSHIP_ROOT")]
    pub project: Option<PathBuf>,

    /// Path to config file (overrides <root>/.blogship.yml)
    #[arg(short, long, env = "BLOGSHIP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show verbose output, including build output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show warnings, errors, and the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Output mode selected by `--verbose` / `--quiet`.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }
}
