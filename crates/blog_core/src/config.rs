//! Runtime configuration for core wiring.
//!
//! # Responsibility
//! - Describe logging setup in a serializable shape hosts can embed in their
//!   own config files.
//! - Normalize and validate user-provided values before use.
//!
//! # Invariants
//! - `normalized_level` only returns `trace|debug|info|warn|error`.
//! - `normalized_log_dir` only returns non-empty absolute paths.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_LOG_FILE_BASENAME: &str = "blog_core";
const DEFAULT_MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const DEFAULT_MAX_LOG_FILES: usize = 5;

/// Rolling file logger settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`, case-insensitive.
    pub level: String,
    /// Absolute directory receiving log files.
    pub log_dir: String,
    pub file_basename: String,
    /// Size threshold that triggers rotation.
    pub max_file_size_bytes: u64,
    /// Rotated files kept on disk.
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: String::new(),
            file_basename: DEFAULT_LOG_FILE_BASENAME.to_string(),
            max_file_size_bytes: DEFAULT_MAX_LOG_FILE_SIZE_BYTES,
            max_files: DEFAULT_MAX_LOG_FILES,
        }
    }
}

impl LoggingConfig {
    /// Default settings writing to `log_dir` at `level`.
    pub fn new(level: impl Into<String>, log_dir: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            log_dir: log_dir.into(),
            ..Self::default()
        }
    }

    pub fn normalized_level(&self) -> Result<&'static str, String> {
        normalize_level(&self.level)
    }

    pub fn normalized_log_dir(&self) -> Result<PathBuf, String> {
        normalize_log_dir(&self.log_dir)
    }
}

/// Returns the default log level for current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::LoggingConfig;

    #[test]
    fn level_normalization_accepts_aliases() {
        assert_eq!(
            LoggingConfig::new(" WARNING ", "/tmp").normalized_level(),
            Ok("warn")
        );
        assert!(LoggingConfig::new("loud", "/tmp")
            .normalized_level()
            .is_err());
    }

    #[test]
    fn relative_log_dir_is_rejected() {
        let error = LoggingConfig::new("info", "logs/dev")
            .normalized_log_dir()
            .expect_err("relative paths must be rejected");
        assert!(error.contains("absolute"));
    }

    #[test]
    fn default_config_has_no_directory() {
        let config = LoggingConfig::default();
        assert!(config.normalized_log_dir().is_err());
        assert_eq!(config.file_basename, "blog_core");
    }
}
