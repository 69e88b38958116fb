//! # CourseDesk CLI
//!
//! Evaluates the course portal's eligibility rules against a JSON snapshot
//! of API data, printing the verdict and any conflicting time slots.

/// Environment-driven configuration
pub mod config;
/// Verdict evaluation and rendering
pub mod report;
/// Snapshot file format and loading
pub mod snapshot;

use eyre::{Result, WrapErr};
use tracing::info;

use crate::{config::CliConfig, report::Report, snapshot::Snapshot};

/// Loads the configured snapshot and evaluates it.
///
/// A `today` field inside the snapshot wins over the configured date, so a
/// captured snapshot replays the same way on any day.
pub fn run(config: &CliConfig) -> Result<Report> {
    let snapshot = Snapshot::load(&config.snapshot_path)
        .wrap_err_with(|| format!("Failed to load snapshot {}", config.snapshot_path.display()))?;

    let today = snapshot.today.unwrap_or_else(|| config.today());
    info!("Evaluating {:?} eligibility as of {}", snapshot.mode, today);

    Ok(Report::evaluate(&snapshot, today))
}
