//! Mutable state of one run of the calculator.

mod timer;

use timer::LoadingTimer;

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::config::Config;
use crate::plan::{parse_salary_input, plan_rows, PlanRow, SalaryInputError};

/// Longest text the salary field accepts.
const MAX_INPUT_LEN: usize = 24;

/// Upper bound on how long the event loop blocks waiting for input.
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Loading,
    Ready,
}

/// Date shown in the header, month/day/year without padding.
pub(crate) fn display_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

pub(crate) struct Session {
    pub(crate) running: bool,
    pub(crate) phase: Phase,
    pub(crate) display_date: String,
    pub(crate) dark_theme: bool,
    pub(crate) about_visible: bool,

    // Salary field
    pub(crate) salary: Decimal,
    pub(crate) salary_input: String,
    pub(crate) input_error: Option<SalaryInputError>,

    // Loading screen
    pub(crate) spinner_frame: usize,
    timer: LoadingTimer,
}

impl Session {
    /// Begin a session in the loading phase. `display_date` is captured once here.
    pub(crate) fn start(config: &Config, display_date: String, now: Instant) -> Self {
        let delay_ms = u64::try_from(config.loading_delay.as_millis()).unwrap_or(u64::MAX);
        info!(delay_ms, dark = config.dark_theme, "session started");
        let salary = config.salary.unwrap_or(Decimal::ZERO);
        Self {
            running: true,
            phase: Phase::Loading,
            display_date,
            dark_theme: config.dark_theme,
            about_visible: false,
            salary,
            salary_input: salary.to_string(),
            input_error: None,
            spinner_frame: 0,
            timer: LoadingTimer::start(now, config.loading_delay),
        }
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Advance time. Returns `true` only on the tick that ends loading.
    pub(crate) fn tick(&mut self, now: Instant) -> bool {
        if !self.is_loading() {
            return false;
        }
        if self.timer.poll(now) {
            self.phase = Phase::Ready;
            info!("loading finished");
            return true;
        }
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        false
    }

    /// How long the event loop may block before the next tick is due.
    pub(crate) fn poll_timeout(&self, now: Instant) -> Duration {
        self.timer
            .remaining(now)
            .map_or(IDLE_POLL, |left| left.min(IDLE_POLL))
    }

    /// End the session. A loading timer still pending is cancelled.
    pub(crate) fn quit(&mut self) {
        self.running = false;
        if self.timer.is_pending() {
            self.timer.cancel();
            info!("session ended during loading, timer cancelled");
        } else {
            info!("session ended");
        }
    }

    #[cfg(test)]
    pub(crate) fn loading_timer(&self) -> &LoadingTimer {
        &self.timer
    }

    // ── Toggles ─────────────────────────────────────────────────

    pub(crate) fn toggle_theme(&mut self) {
        self.dark_theme = !self.dark_theme;
        debug!(dark = self.dark_theme, "theme toggled");
    }

    pub(crate) fn open_about(&mut self) {
        self.about_visible = true;
        debug!("about opened");
    }

    pub(crate) fn close_about(&mut self) {
        self.about_visible = false;
        debug!("about closed");
    }

    // ── Salary field ────────────────────────────────────────────

    /// Replace the field text and revalidate.
    pub(crate) fn set_salary_input(&mut self, raw: impl Into<String>) {
        self.salary_input = raw.into();
        self.revalidate();
    }

    /// Append a typed character. Only characters that can appear in a
    /// salary are accepted; returns whether the field changed.
    pub(crate) fn push_salary_char(&mut self, c: char) -> bool {
        if !(c.is_ascii_digit() || matches!(c, '.' | ',' | '-')) {
            return false;
        }
        if self.salary_input.len() >= MAX_INPUT_LEN {
            return false;
        }
        // A leading zero is replaced rather than extended ("0" -> "5", not "05").
        if self.salary_input == "0" && c.is_ascii_digit() {
            self.salary_input.clear();
        }
        self.salary_input.push(c);
        self.revalidate();
        true
    }

    pub(crate) fn pop_salary_char(&mut self) {
        if self.salary_input.pop().is_some() {
            self.revalidate();
        }
    }

    pub(crate) fn clear_salary(&mut self) {
        self.salary_input.clear();
        self.revalidate();
    }

    /// Invalid text clamps the salary to zero and records a hint. An empty
    /// field is zero with no hint.
    fn revalidate(&mut self) {
        match parse_salary_input(&self.salary_input) {
            Ok(value) => {
                self.salary = value;
                self.input_error = None;
            }
            Err(SalaryInputError::Empty) => {
                self.salary = Decimal::ZERO;
                self.input_error = None;
            }
            Err(e) => {
                debug!(input = %self.salary_input, error = %e, "salary input rejected");
                self.salary = Decimal::ZERO;
                self.input_error = Some(e);
            }
        }
    }

    /// Rows for the current salary, recomputed on every call.
    pub(crate) fn rows(&self) -> Vec<PlanRow> {
        plan_rows(self.salary)
    }
}
