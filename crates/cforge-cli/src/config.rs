//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it and never reads the
//! environment.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config <FILE>`, or the platform config dir)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Author name used when `--author` is omitted.
    pub author: Option<String>,
    /// Language used when `--lang` is omitted.
    pub language: Option<String>,
    /// License used when `--license` is omitted.
    pub license: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicitly passed file that is missing or malformed is an error;
    /// a missing file at the default location silently falls back to the
    /// built-in defaults.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::config_path();
                if path.is_file() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> CliResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| CliError::Config {
            message: format!("cannot read {}", path.display()),
            source: Some(Box::new(e)),
        })?;
        toml::from_str(&raw).map_err(|e| CliError::Config {
            message: format!("cannot parse {}", path.display()),
            source: Some(Box::new(e)),
        })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.cforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "cforge", "cforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".cforge.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.author.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn parses_a_partial_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\nauthor = \"Ada\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.author.as_deref(), Some("Ada"));
        assert!(cfg.defaults.language.is_none());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = PathBuf::from("/nonexistent/cforge.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not [valid toml").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
