//! Salary split arithmetic: per-category amounts, grouped display strings
//! and salary input validation.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::ExpenseCategory;

/// Largest salary (exclusive of fraction) accepted from input.
const MAX_SALARY_UNITS: i64 = 1_000_000_000_000_000;

#[allow(clippy::expect_used)]
static SALARY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Plain digits or correctly comma-grouped digits, optional fraction.
    Regex::new(r"^(?:[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(?:\.[0-9]*)?$|^\.[0-9]+$")
        .expect("salary pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum SalaryInputError {
    #[error("Enter your monthly salary")]
    Empty,
    #[error("'{0}' is not a number")]
    Malformed(String),
    #[error("Salary cannot be negative")]
    Negative,
    #[error("Salary is too large")]
    TooLarge,
}

/// A single rendered line of the plan: one category projected onto a salary.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanRow {
    pub(crate) category: &'static ExpenseCategory,
    pub(crate) amount: Decimal,
}

impl PlanRow {
    pub(crate) fn formatted_amount(&self) -> String {
        format_thousands(self.amount)
    }
}

pub(crate) fn max_salary() -> Decimal {
    Decimal::new(MAX_SALARY_UNITS, 0)
}

/// `salary * percentage / 100`, rounded half away from zero to 2 places.
///
/// Arithmetic is exact decimal, so the only rounding is the final one.
pub(crate) fn compute_amount(salary: Decimal, percentage: u8) -> Decimal {
    let scaled = salary
        .checked_mul(Decimal::from(percentage))
        .unwrap_or(Decimal::MAX);
    (scaled / Decimal::ONE_HUNDRED).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a decimal with thousand separators and 2 decimal places.
/// e.g. `1234567.891` → `"1,234,567.89"`
pub(crate) fn format_thousands(value: Decimal) -> String {
    let fixed = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let abs = fixed.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if fixed < Decimal::ZERO {
        format!("-{with_commas}.{dec_part}")
    } else {
        format!("{with_commas}.{dec_part}")
    }
}

/// Parse the raw text of the salary field.
///
/// Accepts plain (`1234.5`) and comma-grouped (`1,234.50`) decimals, a bare
/// trailing point (`12.`) and a bare leading point (`.5`). Surrounding
/// whitespace is ignored. `-0` is zero, not an error.
pub(crate) fn parse_salary_input(raw: &str) -> Result<Decimal, SalaryInputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SalaryInputError::Empty);
    }

    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    if !SALARY_PATTERN.is_match(body) {
        return Err(SalaryInputError::Malformed(trimmed.to_string()));
    }

    let mut normalized = body.replace(',', "");
    if normalized.ends_with('.') {
        normalized.pop();
    }
    if normalized.starts_with('.') {
        normalized.insert(0, '0');
    }

    let value = Decimal::from_str(&normalized).map_err(|_| SalaryInputError::TooLarge)?;
    if value.is_zero() {
        return Ok(Decimal::ZERO);
    }
    if negative {
        return Err(SalaryInputError::Negative);
    }
    if value >= max_salary() {
        return Err(SalaryInputError::TooLarge);
    }
    Ok(value)
}

/// Project every catalog category onto `salary`, in catalog order.
pub(crate) fn plan_rows(salary: Decimal) -> Vec<PlanRow> {
    ExpenseCategory::all()
        .iter()
        .map(|category| PlanRow {
            category,
            amount: compute_amount(salary, category.percentage),
        })
        .collect()
}

/// Total across the catalog, rounded once from the exact shares.
///
/// Row amounts are rounded one by one, so for small salaries their sum can
/// drift from this figure (0.10 splits into rows adding up to 0.13).
pub(crate) fn plan_total(salary: Decimal) -> Decimal {
    let share: Decimal = ExpenseCategory::all()
        .iter()
        .map(|c| Decimal::from(c.percentage))
        .sum();
    let scaled = salary.checked_mul(share).unwrap_or(Decimal::MAX);
    (scaled / Decimal::ONE_HUNDRED).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests;
