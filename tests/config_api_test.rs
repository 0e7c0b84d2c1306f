//! Integration tests for config module public API.

use blogship::config::{load_config, resolve_blog_root, PublishConfig, CONFIG_FILE_NAME};
use blogship::PublishError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn defaults_match_a_hugo_blog_behind_nginx() {
    let config = PublishConfig::default();
    assert_eq!(config.log_file, PathBuf::from("logs/publish.log"));
    assert_eq!(config.remote, "origin");
    assert_eq!(config.branches, ["main", "master"]);
    assert_eq!(config.build.command, "hugo --environment production --minify");
    assert_eq!(
        config.build.env.get("HUGO_ENV").map(String::as_str),
        Some("production")
    );
    assert_eq!(config.reload.command, "sudo systemctl reload nginx");
    assert_eq!(config.probe.url, "http://127.0.0.1/");
    assert_eq!(config.probe.host, "localhost");
    assert_eq!(config.probe.timeout_secs, 10);
}

#[test]
fn blog_config_file_is_picked_up() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(CONFIG_FILE_NAME),
        r#"
remote: deploy
branches: [pages]
probe:
  host: blog.example.com
"#,
    )
    .unwrap();

    let root = resolve_blog_root(Some(temp.path())).unwrap();
    let config = load_config(&root, None).unwrap();

    assert_eq!(config.remote, "deploy");
    assert_eq!(config.branches, ["pages"]);
    assert_eq!(config.probe.host, "blog.example.com");
    assert_eq!(config.probe.url, "http://127.0.0.1/");
    assert_eq!(config.log_path(&root), root.join("logs/publish.log"));
}

#[test]
fn explicit_config_wins_over_blog_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILE_NAME), "remote: deploy\n").unwrap();
    let alt = temp.path().join("staging.yml");
    fs::write(&alt, "remote: staging\n").unwrap();

    let config = load_config(temp.path(), Some(&alt)).unwrap();

    assert_eq!(config.remote, "staging");
}

#[test]
fn unknown_keys_are_rejected() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILE_NAME), "remtoe: origin\n").unwrap();

    let err = load_config(temp.path(), None).unwrap_err();

    assert!(matches!(err, PublishError::ConfigParseError { .. }));
    assert!(err.is_fatal());
}

#[test]
fn file_is_not_a_blog_root() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("README.md");
    fs::write(&file, "# Blog\n").unwrap();

    let err = resolve_blog_root(Some(&file)).unwrap_err();

    assert!(matches!(err, PublishError::DirectoryNotFound { .. }));
}
