//! Blog root resolution and configuration loading.

use crate::config::schema::PublishConfig;
use crate::error::{PublishError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the per-blog configuration, looked up in the blog root.
pub const CONFIG_FILE_NAME: &str = ".blogship.yml";

/// Resolve the blog root.
///
/// An explicit `--project` path wins. Otherwise the root is the parent of the
/// directory holding the running executable, so a binary installed at
/// `<blog>/bin/blogship` publishes `<blog>`.
///
/// # Errors
///
/// Returns `DirectoryNotFound` if the resolved path is not an existing directory.
pub fn resolve_blog_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let candidate = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let exe = std::env::current_exe()?;
            root_from_executable(&exe)
        }
    };

    if !candidate.is_dir() {
        return Err(PublishError::DirectoryNotFound { path: candidate });
    }

    Ok(candidate)
}

/// Grandparent of the executable path (`<root>/bin/blogship` -> `<root>`).
pub fn root_from_executable(exe: &Path) -> PathBuf {
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load a single config file and parse it.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<PublishConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PublishError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PublishError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content. Blank content yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<PublishConfig> {
    if content.trim().is_empty() {
        return Ok(PublishConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| PublishError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit path must exist. Without one, `<root>/.blogship.yml` is used
/// when present and built-in defaults otherwise.
pub fn load_config(blog_root: &Path, config_override: Option<&Path>) -> Result<PublishConfig> {
    if let Some(path) = config_override {
        tracing::debug!("Loading config from {}", path.display());
        return load_config_file(path);
    }

    let path = blog_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        tracing::debug!("Loading config from {}", path.display());
        load_config_file(&path)
    } else {
        tracing::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, blog_root.display());
        Ok(PublishConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("no-such-blog");

        let err = resolve_blog_root(Some(&missing)).unwrap_err();
        assert!(matches!(err, PublishError::DirectoryNotFound { path } if path == missing));
    }

    #[test]
    fn explicit_root_must_be_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("blog.txt");
        fs::write(&file, "not a dir").unwrap();

        assert!(resolve_blog_root(Some(&file)).is_err());
    }

    #[test]
    fn explicit_root_is_returned() {
        let temp = TempDir::new().unwrap();
        let root = resolve_blog_root(Some(temp.path())).unwrap();
        assert_eq!(root, temp.path());
    }

    #[test]
    fn root_is_grandparent_of_executable() {
        assert_eq!(
            root_from_executable(Path::new("/srv/blog/bin/blogship")),
            PathBuf::from("/srv/blog")
        );
    }

    #[test]
    fn missing_default_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, PublishConfig::default());
    }

    #[test]
    fn default_file_is_loaded() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "remote: upstream\nreload:\n  command: systemctl --user reload caddy\n",
        )
        .unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.remote, "upstream");
        assert_eq!(config.reload.command, "systemctl --user reload caddy");
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.yml");

        let err = load_config(temp.path(), Some(&path)).unwrap_err();
        assert!(matches!(err, PublishError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "branches: [main\n").unwrap();

        let err = load_config(temp.path(), None).unwrap_err();
        assert!(matches!(err, PublishError::ConfigParseError { .. }));
    }

    #[test]
    fn blank_file_yields_defaults() {
        let config = parse_config("  \n", Path::new(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, PublishConfig::default());
    }
}
