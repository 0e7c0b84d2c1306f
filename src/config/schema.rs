//! Configuration schema for `.blogship.yml`.
//!
//! Every field has a default, so an empty (or absent) file yields a working
//! configuration for a Hugo blog served by nginx.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublishConfig {
    /// Append-only event log (relative to the blog root)
    pub log_file: PathBuf,

    /// Directory holding markdown posts (relative to the blog root)
    pub posts_dir: PathBuf,

    /// Remote to push to
    pub remote: String,

    /// Branch names tried in order until one push succeeds
    pub branches: Vec<String>,

    /// Static site build
    pub build: BuildConfig,

    /// Web server reload
    pub reload: ReloadConfig,

    /// Reachability probe
    pub probe: ProbeConfig,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("logs/publish.log"),
            posts_dir: PathBuf::from("content/posts"),
            remote: "origin".to_string(),
            branches: vec!["main".to_string(), "master".to_string()],
            build: BuildConfig::default(),
            reload: ReloadConfig::default(),
            probe: ProbeConfig::default(),
        }
    }
}

impl PublishConfig {
    /// Absolute log file path for the given blog root.
    pub fn log_path(&self, root: &Path) -> PathBuf {
        root.join(&self.log_file)
    }
}

/// Site generator invocation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Shell command run in the blog root
    pub command: String,

    /// Extra environment for the build
    pub env: HashMap<String, String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            command: "hugo --environment production --minify".to_string(),
            env: HashMap::from([("HUGO_ENV".to_string(), "production".to_string())]),
        }
    }
}

/// Service manager invocation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReloadConfig {
    pub command: String,
}

impl Default for ReloadConfig {
    fn default() -> Self {
        Self {
            command: "sudo systemctl reload nginx".to_string(),
        }
    }
}

/// HTTP reachability check against the local server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProbeConfig {
    /// URL requested
    pub url: String,

    /// Value of the `Host` header (selects the virtual host)
    pub host: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1/".to_string(),
            host: "localhost".to_string(),
            timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_hugo_and_nginx() {
        let config = PublishConfig::default();
        assert_eq!(config.remote, "origin");
        assert_eq!(config.branches, vec!["main", "master"]);
        assert!(config.build.command.starts_with("hugo"));
        assert_eq!(
            config.build.env.get("HUGO_ENV").map(String::as_str),
            Some("production")
        );
        assert!(config.reload.command.contains("nginx"));
        assert_eq!(config.probe.timeout_secs, 10);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config: PublishConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, PublishConfig::default());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let yaml = r#"
probe:
  host: blog.example.com
branches: [trunk]
"#;
        let config: PublishConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.probe.host, "blog.example.com");
        assert_eq!(config.probe.url, "http://127.0.0.1/");
        assert_eq!(config.branches, vec!["trunk"]);
        assert_eq!(config.remote, "origin");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<PublishConfig, _> = serde_yaml::from_str("colour: red");
        assert!(result.is_err());
    }

    #[test]
    fn log_path_is_relative_to_root() {
        let config = PublishConfig::default();
        assert_eq!(
            config.log_path(Path::new("/srv/blog")),
            PathBuf::from("/srv/blog/logs/publish.log")
        );
    }
}
