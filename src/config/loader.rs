//! Configuration file discovery and loading.
//!
//! A project may carry a `layerstage.yml` in its root. The file is optional;
//! without it every setting falls back to its default. An explicit
//! `--config` path, on the other hand, must exist.

use crate::config::schema::StageConfig;
use crate::error::{Result, StageError};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "layerstage.yml";

/// Find the project config at `<project_root>/layerstage.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into [`StageConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<StageConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StageError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StageError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`StageConfig`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<StageConfig> {
    // An empty document (or one holding only comments) means "all defaults".
    if content.lines().all(|l| {
        let l = l.trim();
        l.is_empty() || l.starts_with('#')
    }) {
        return Ok(StageConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| StageError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file. Otherwise uses
/// the project's `layerstage.yml` when present, and defaults when not.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<StageConfig> {
    if let Some(override_path) = config_override {
        return load_config_file(override_path);
    }

    match find_project_config(project_root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            Ok(StageConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_project_config_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, StageConfig::default());
    }

    #[test]
    fn project_config_is_discovered() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "layer_dir: build/layer").unwrap();

        assert!(find_project_config(temp.path()).is_some());
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.layer_dir, PathBuf::from("build/layer"));
    }

    #[test]
    fn explicit_config_overrides_discovery() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "runtime: python3.9").unwrap();
        let other = temp.path().join("other.yml");
        fs::write(&other, "runtime: python3.12").unwrap();

        let config = load_config(temp.path(), Some(&other)).unwrap();
        assert_eq!(config.runtime, "python3.12");
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");

        let err = load_config(temp.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, StageError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_yaml_reports_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "runtime: [unclosed").unwrap();

        let err = load_config_file(&path).unwrap_err();
        match err {
            StageError::ConfigParseError { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn comment_only_file_yields_defaults() {
        let config = parse_config("# nothing here\n\n", Path::new("x.yml")).unwrap();
        assert_eq!(config, StageConfig::default());
    }

    #[test]
    fn installer_command_list_keeps_spaces_in_arguments() {
        let content = "installer:\n  command: [\"/opt/my tools/python3.11\", -m, pip]\n";
        let config = parse_config(content, Path::new("x.yml")).unwrap();
        assert_eq!(
            config.installer.command,
            vec!["/opt/my tools/python3.11", "-m", "pip"]
        );
    }
}
