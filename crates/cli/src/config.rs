//! # CLI Configuration Module
//!
//! Loads settings for the `coursedesk` command from environment variables
//! (after `.env` has been read by the binary).
//!
//! ## Environment Variables
//!
//! - `COURSEDESK_SNAPSHOT`: Path of the JSON snapshot to evaluate. The first
//!   command-line argument takes precedence over it.
//! - `COURSEDESK_TODAY`: Evaluate as of this `YYYY-MM-DD` date instead of the
//!   local date
//! - `LOG_LEVEL`: Logging level (default: "info")

use chrono::{Local, NaiveDate};
use eyre::{Result, WrapErr, eyre};
use std::{env, path::PathBuf};
use tracing::Level;

/// Configuration for a single `coursedesk` run
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Snapshot file to evaluate
    pub snapshot_path: PathBuf,

    /// Date override; `None` means "use the local date"
    pub today: Option<NaiveDate>,

    /// Log level for the application
    pub log_level: Level,
}

impl CliConfig {
    /// Creates a new CliConfig from the process environment and arguments
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - Neither an argument nor `COURSEDESK_SNAPSHOT` names a snapshot
    /// - `COURSEDESK_TODAY` is not a `YYYY-MM-DD` date
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(env::args().nth(1), |key| env::var(key).ok())
    }

    /// Builds the configuration from an explicit path argument and a variable
    /// lookup, so callers other than `main` can supply their own environment.
    pub fn from_lookup<F>(path_arg: Option<String>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let snapshot_path = path_arg
            .or_else(|| lookup("COURSEDESK_SNAPSHOT"))
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| {
                eyre!("A snapshot path must be given as an argument or via COURSEDESK_SNAPSHOT")
            })?;

        let today = lookup("COURSEDESK_TODAY")
            .map(|value| {
                NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                    .wrap_err_with(|| format!("Invalid COURSEDESK_TODAY value: {}", value))
            })
            .transpose()?;

        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            snapshot_path,
            today,
            log_level,
        })
    }

    /// The date to evaluate against: the override, or the local calendar date
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}
