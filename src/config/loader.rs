//! Configuration file loading with precedence handling.

use crate::model::PageSize;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Log service used when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Per-request timeout used when nothing else is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// Page size of zero lines.
    #[error("page_size must be at least 1, got {0}")]
    InvalidPageSize(u64),

    /// Server URL cannot be used as a base for `/logs` requests.
    #[error("Invalid server URL {url:?}: {reason}")]
    InvalidServerUrl {
        /// URL as configured.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/rlv/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Base URL of the log service.
    #[serde(default)]
    pub server_url: Option<String>,

    /// Browse this directory instead of a log service.
    #[serde(default)]
    pub logs_dir: Option<PathBuf>,

    /// Lines per fetch.
    #[serde(default)]
    pub page_size: Option<u64>,

    /// HTTP timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Base URL of the log service.
    pub server_url: String,
    /// Local logs directory. Takes priority over `server_url` when set.
    pub logs_dir: Option<PathBuf>,
    /// Lines per fetch, fixed for the whole session.
    pub page_size: PageSize,
    /// HTTP request timeout.
    pub request_timeout: Duration,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            logs_dir: None,
            page_size: PageSize::DEFAULT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            log_file_path: default_log_path(),
        }
    }
}

/// Overrides taken from command-line flags. `None` means the flag was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub server_url: Option<String>,
    pub logs_dir: Option<PathBuf>,
    pub page_size: Option<u64>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/rlv/rlv.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("rlv").join("rlv.log")
    } else {
        PathBuf::from("rlv.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/rlv/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rlv").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `RLV_CONFIG` environment variable
/// 3. Default path `~/.config/rlv/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("RLV_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns `InvalidPageSize` if the file sets `page_size = 0`.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let page_size = match config.page_size {
        Some(lines) => page_size(lines)?,
        None => defaults.page_size,
    };

    Ok(ResolvedConfig {
        server_url: config.server_url.unwrap_or(defaults.server_url),
        logs_dir: config.logs_dir.or(defaults.logs_dir),
        page_size,
        request_timeout: config
            .request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `RLV_SERVER_URL`: Override the log service URL
/// - `RLV_LOGS_DIR`: Browse a local directory instead
///
/// `RLV_SERVER_URL` on its own clears a logs directory from the config file,
/// the same way `--server` does.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var("RLV_SERVER_URL") {
        config.server_url = url;
        config.logs_dir = None;
    }

    if let Ok(dir) = std::env::var("RLV_LOGS_DIR") {
        config.logs_dir = Some(PathBuf::from(dir));
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// `--server` clears any configured logs directory so the flag always wins.
///
/// # Errors
///
/// Returns `InvalidPageSize` for `--page-size 0`.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    overrides: CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    if let Some(url) = overrides.server_url {
        config.server_url = url;
        config.logs_dir = None;
    }

    if let Some(dir) = overrides.logs_dir {
        config.logs_dir = Some(dir);
    }

    if let Some(lines) = overrides.page_size {
        config.page_size = page_size(lines)?;
    }

    Ok(config)
}

fn page_size(lines: u64) -> Result<PageSize, ConfigError> {
    PageSize::new(lines).map_err(|_| ConfigError::InvalidPageSize(lines))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
