use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LOG_ENV;

const LOG_FILE: &str = "salaryplan.log";

/// Install a file-backed subscriber when `SALARYPLAN_LOG` is set.
///
/// The terminal belongs to the UI, so records never go to stdout or stderr.
/// Returns the log file path when logging was enabled.
pub(crate) fn init() -> Result<Option<PathBuf>> {
    let directive = match std::env::var(LOG_ENV) {
        Ok(d) if !d.trim().is_empty() => d,
        _ => return Ok(None),
    };

    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid {LOG_ENV} filter: {directive}"))?;

    let path = log_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;

    Ok(Some(path))
}

fn log_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "salaryplan", "SalaryPlan")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join(LOG_FILE))
}
