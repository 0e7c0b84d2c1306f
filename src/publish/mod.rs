//! The publish pipeline.
//!
//! [`Publisher`] drives version control, the site generator, the web server
//! and the reachability probe through their traits, reporting every event to
//! an [`EventLog`](crate::journal::EventLog).

pub mod pipeline;

pub use pipeline::{Collaborators, PublishOutcome, Publisher, CONTINUE_PROMPT_KEY};
