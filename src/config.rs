use std::time::Duration;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::plan::parse_salary_input;

/// How long the loading screen stays up before the plan appears.
pub(crate) const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(3000);

/// Environment variable holding the log filter (e.g. `debug`). Unset disables logging.
pub(crate) const LOG_ENV: &str = "SALARYPLAN_LOG";

/// Launch options for the interactive screen.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Config {
    pub(crate) loading_delay: Duration,
    pub(crate) dark_theme: bool,
    pub(crate) salary: Option<Decimal>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            loading_delay: DEFAULT_LOADING_DELAY,
            dark_theme: false,
            salary: None,
        }
    }
}

impl Config {
    /// Parse TUI flags (everything after the program name).
    pub(crate) fn from_args(args: &[String]) -> Result<Self> {
        let mut config = Self::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--dark" => config.dark_theme = true,
                "--no-splash" => config.loading_delay = Duration::ZERO,
                "--delay" => {
                    let raw = iter
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--delay needs a value in milliseconds"))?;
                    let ms: u64 = raw
                        .parse()
                        .map_err(|_| anyhow::anyhow!("Invalid --delay value: {raw}"))?;
                    config.loading_delay = Duration::from_millis(ms);
                }
                "--salary" => {
                    let raw = iter
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--salary needs an amount"))?;
                    let salary = parse_salary_input(raw)
                        .map_err(|e| anyhow::anyhow!("Invalid --salary value: {e}"))?;
                    config.salary = Some(salary);
                }
                other => anyhow::bail!("Unknown option: {other}"),
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
