//! Site collaborators: build, server reload, reachability probe.
//!
//! Each collaborator is a trait so the pipeline can be exercised without a
//! site generator, a service manager, or a listening web server.

pub mod build;
pub mod probe;
pub mod reload;

pub use build::ShellSiteBuilder;
pub use probe::{HttpProbe, ProbeResponse};
pub use reload::ShellReloader;

use crate::error::Result;
use crate::shell::{CommandResult, OutputCallback};

/// Builds the static site.
pub trait SiteBuilder {
    /// Human-readable command, for logs and error messages.
    fn describe(&self) -> String;

    /// Run the build. A failed build is `Ok` with `success == false`.
    ///
    /// When `output` is given, output lines are forwarded as they arrive.
    fn build(&self, output: Option<OutputCallback>) -> Result<CommandResult>;
}

/// Asks the web server to reload its configuration.
pub trait ServiceReloader {
    fn describe(&self) -> String;

    fn reload(&self) -> Result<CommandResult>;
}

/// Checks that the site answers over HTTP.
pub trait ReachabilityProbe {
    /// Target URL and virtual host, for logs.
    fn describe(&self) -> String;

    fn probe(&self) -> Result<ProbeResponse>;
}
