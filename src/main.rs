//! Remote Log Viewer - Entry Point

use clap::Parser;
use rlv::config::{CliOverrides, ConfigError};
use rlv::model::{LineNumber, LogId};
use rlv::view::{ColorConfig, StartupOptions};
use std::path::PathBuf;
use tracing::info;

/// Remote Log Viewer - page through large logs from a log service or directory
#[derive(Parser, Debug)]
#[command(name = "rlv")]
#[command(version)]
#[command(about = "TUI application for paging through large remote log files")]
pub struct Args {
    /// Base URL of the log service
    #[arg(long, conflicts_with = "dir")]
    pub server: Option<String>,

    /// Browse a local directory of log files instead of a log service
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Open this log (file name as listed by the service) on startup
    #[arg(long, value_parser = parse_log_id)]
    pub log: Option<LogId>,

    /// Jump to this line in the opened log (must be positive)
    #[arg(short, long, requires = "log", value_parser = clap::value_parser!(u64).range(1..))]
    pub line: Option<u64>,

    /// Lines per fetch
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_log_id(raw: &str) -> Result<LogId, String> {
    LogId::new(raw).map_err(|e| e.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = rlv::config::load_config_with_precedence(args.config.clone())?;
        let merged = rlv::config::merge_config(config_file)?;
        let with_env = rlv::config::apply_env_overrides(merged);
        rlv::config::apply_cli_overrides(
            with_env,
            CliOverrides {
                server_url: args.server.clone(),
                logs_dir: args.dir.clone(),
                page_size: args.page_size,
            },
        )?
    };

    // Guard flushes buffered log lines on exit
    let _log_guard = rlv::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let backend = rlv::source::detect_backend(
        &config.server_url,
        config.logs_dir.clone(),
        config.request_timeout,
    )
    .map_err(|e| ConfigError::InvalidServerUrl {
        url: config.server_url.clone(),
        reason: e.to_string(),
    })?;

    let options = StartupOptions {
        log: args.log,
        line: args.line.map(LineNumber::new).transpose()?,
        colors: ColorConfig::from_env_and_args(args.no_color),
    };

    rlv::view::run_with_backend(&backend, config.page_size, options)?;

    Ok(())
}
