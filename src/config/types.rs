//! Configuration types and CLI options.
//!
//! This module defines the CLI surface (`Cli` with `harvest`/`serve`
//! subcommands) and the library-level configuration structs it parses into.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DB_PATH, DEFAULT_API_PORT, DEFAULT_MAX_CONCURRENCY, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "article_harvester",
    about = "Scrapes news articles and serves them from a SQLite database",
    version
)]
pub struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch articles from a URL list and store them
    Harvest(HarvestConfig),
    /// Serve stored articles over HTTP
    Serve(ServeConfig),
}

/// Harvest configuration (usable without the CLI).
#[derive(Debug, Clone, Args)]
pub struct HarvestConfig {
    /// File to read URLs from, one per line ("-" for stdin)
    pub file: PathBuf,

    /// Database path (SQLite file)
    #[arg(long, default_value = DB_PATH)]
    pub db_path: PathBuf,

    /// Maximum concurrent requests
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("urls.txt"),
            db_path: PathBuf::from(DB_PATH),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Read-API configuration (usable without the CLI).
#[derive(Debug, Clone, Args)]
pub struct ServeConfig {
    /// Database path (SQLite file)
    #[arg(long, default_value = DB_PATH)]
    pub db_path: PathBuf,

    /// Port to bind the API server to (localhost only)
    #[arg(long, default_value_t = DEFAULT_API_PORT)]
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DB_PATH),
            port: DEFAULT_API_PORT,
        }
    }
}
