//! Library integration tests: the pipeline wired to real collaborators.

use blogship::config::{BuildConfig, ProbeConfig, PublishConfig, ReloadConfig};
use blogship::journal::{EventLog, Journal};
use blogship::publish::{Collaborators, PublishOutcome, Publisher, CONTINUE_PROMPT_KEY};
use blogship::site::{HttpProbe, ShellReloader, ShellSiteBuilder};
use blogship::ui::{MockUI, StepOutcome};
use blogship::vcs::{GitCli, VersionControl};
use blogship::PublishError;
use httpmock::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::process;
use tempfile::TempDir;

fn git_available() -> bool {
    process::Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn git(dir: &Path, args: &[&str]) -> String {
    let output = process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(output.status.success(), "git {:?} failed", args);
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn init_blog() -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    git(dir, &["init", "-q"]);
    git(dir, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(dir, &["config", "user.email", "author@example.com"]);
    git(dir, &["config", "user.name", "Blog Author"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
    fs::write(dir.join("hugo.toml"), "title = 'blog'\n").unwrap();
    git(dir, &["add", "-A"]);
    git(dir, &["commit", "-q", "-m", "initial"]);
    temp
}

fn config_for(build: &str, probe_url: String) -> PublishConfig {
    PublishConfig {
        build: BuildConfig {
            command: build.to_string(),
            env: HashMap::from([("HUGO_ENV".to_string(), "production".to_string())]),
        },
        reload: ReloadConfig {
            command: "true".to_string(),
        },
        probe: ProbeConfig {
            url: probe_url,
            host: "blog.test".to_string(),
            timeout_secs: 2,
        },
        ..PublishConfig::default()
    }
}

fn publish(
    root: &Path,
    config: &PublishConfig,
    message: Option<&str>,
    ui: &mut MockUI,
) -> blogship::Result<PublishOutcome> {
    let vcs = GitCli::new(root).excluding(&config.log_file);
    let builder = ShellSiteBuilder::new(root, &config.build);
    let reloader = ShellReloader::new(root, &config.reload);
    let probe = HttpProbe::new(&config.probe);
    let parts = Collaborators {
        vcs: &vcs,
        builder: &builder,
        reloader: &reloader,
        probe: &probe,
    };

    let mut log = EventLog::new(Journal::open(&config.log_path(root)), ui);
    Publisher::new(root, config, parts).run(message, &mut log)
}

#[test]
fn publishes_a_new_post_end_to_end() {
    if !git_available() {
        return;
    }
    let server = MockServer::start();
    let site = server.mock(|when, then| {
        when.method(GET).path("/").header("host", "blog.test");
        then.status(200);
    });
    let blog = init_blog();
    fs::create_dir_all(blog.path().join("content/posts")).unwrap();
    fs::write(blog.path().join("content/posts/hello.md"), "# Hello\n").unwrap();
    let config = config_for("echo $HUGO_ENV > built.txt", server.url("/"));
    let mut ui = MockUI::new();

    let outcome = publish(blog.path(), &config, None, &mut ui).unwrap();

    let PublishOutcome::Published(summary) = outcome else {
        panic!("expected a published run");
    };
    assert!(summary.commit_message.starts_with("New post: hello ("));
    assert_eq!(git(blog.path(), &["log", "-1", "--format=%s"]), summary.commit_message);
    assert_eq!(summary.outcome_of("push"), Some(StepOutcome::Skipped));
    assert_eq!(summary.outcome_of("probe"), Some(StepOutcome::Succeeded));
    assert_eq!(
        fs::read_to_string(blog.path().join("built.txt")).unwrap().trim(),
        "production"
    );
    site.assert_calls(1);
}

#[test]
fn clean_repository_declined_leaves_history_alone() {
    if !git_available() {
        return;
    }
    let blog = init_blog();
    let config = config_for("touch built.txt", "http://127.0.0.1:9/".to_string());
    let mut ui = MockUI::new();
    ui.set_prompt_response(CONTINUE_PROMPT_KEY, "no");

    let outcome = publish(blog.path(), &config, Some("Nothing new"), &mut ui).unwrap();

    assert!(matches!(outcome, PublishOutcome::Cancelled));
    assert_eq!(git(blog.path(), &["rev-list", "--count", "HEAD"]), "1");
    assert!(!blog.path().join("built.txt").exists());
}

#[test]
fn failed_build_keeps_the_commit() {
    if !git_available() {
        return;
    }
    let blog = init_blog();
    fs::write(blog.path().join("about.md"), "# About\n").unwrap();
    let config = config_for("exit 2", "http://127.0.0.1:9/".to_string());
    let mut ui = MockUI::new();

    let err = publish(blog.path(), &config, Some("About page"), &mut ui).unwrap_err();

    assert!(matches!(err, PublishError::BuildFailed { code: Some(2), .. }));
    assert_eq!(git(blog.path(), &["log", "-1", "--format=%s"]), "About page");
    assert!(!GitCli::new(blog.path()).index_differs().unwrap());
    assert!(ui.summaries().is_empty());
}

#[test]
fn confirmed_clean_run_uses_maintenance_message_and_commits_nothing() {
    if !git_available() {
        return;
    }
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200);
    });
    let blog = init_blog();
    let config = config_for("true", server.url("/"));
    let mut ui = MockUI::new();
    ui.set_prompt_response(CONTINUE_PROMPT_KEY, "y");

    let outcome = publish(blog.path(), &config, None, &mut ui).unwrap();

    let PublishOutcome::Published(summary) = outcome else {
        panic!("expected a published run");
    };
    assert!(summary.commit_message.starts_with("Site maintenance "));
    assert_eq!(summary.outcome_of("commit"), Some(StepOutcome::Skipped));
    assert_eq!(ui.prompts_shown(), [CONTINUE_PROMPT_KEY]);
    assert_eq!(git(blog.path(), &["rev-list", "--count", "HEAD"]), "1");
    assert!(blog.path().join("logs/publish.log").exists());
    assert_eq!(git(blog.path(), &["ls-files", "logs"]), "");
}
