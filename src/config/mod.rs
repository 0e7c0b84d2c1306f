//! Configuration for a publish run.
//!
//! - Schema definitions and defaults in [`schema`]
//! - Blog root resolution and file loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use blogship::config::{load_config, PublishConfig};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config, PublishConfig::default());
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    load_config, load_config_file, parse_config, resolve_blog_root, root_from_executable,
    CONFIG_FILE_NAME,
};
pub use schema::{BuildConfig, ProbeConfig, PublishConfig, ReloadConfig};
