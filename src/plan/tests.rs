#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::CATALOG;

// ── compute_amount ────────────────────────────────────────────

#[test]
fn test_compute_amount_basic() {
    assert_eq!(compute_amount(dec!(1000), 30), dec!(300));
    assert_eq!(compute_amount(dec!(1000), 20), dec!(200));
}

#[test]
fn test_compute_amount_zero_salary() {
    for cat in &CATALOG {
        assert_eq!(compute_amount(Decimal::ZERO, cat.percentage), Decimal::ZERO);
    }
}

#[test]
fn test_compute_amount_large_salary() {
    assert_eq!(compute_amount(dec!(1234567), 15), dec!(185185.05));
}

#[test]
fn test_compute_amount_rounds_half_away_from_zero() {
    // 0.5 * 5% = 0.025 lands on the midpoint
    assert_eq!(compute_amount(dec!(0.25), 5), dec!(0.01));
    assert_eq!(compute_amount(dec!(0.5), 5), dec!(0.03));
    // 10.5 * 5% = 0.525, where banker's rounding would give 0.52
    assert_eq!(compute_amount(dec!(10.5), 5), dec!(0.53));
}

#[test]
fn test_compute_amount_within_tolerance_for_all_categories() {
    let salaries = [dec!(0), dec!(0.01), dec!(1), dec!(999.99), dec!(4321.07), dec!(1000000)];
    for salary in salaries {
        for cat in &CATALOG {
            let exact = salary * Decimal::from(cat.percentage) / dec!(100);
            let diff = (compute_amount(salary, cat.percentage) - exact).abs();
            assert!(diff <= dec!(0.005), "salary {salary} pct {}", cat.percentage);
        }
    }
}

#[test]
fn test_compute_amount_hundred_percent_is_identity() {
    assert_eq!(compute_amount(dec!(1234.56), 100), dec!(1234.56));
}

// ── format_thousands ──────────────────────────────────────────

#[test]
fn test_format_thousands_basic() {
    assert_eq!(format_thousands(dec!(1234.56)), "1,234.56");
}

#[test]
fn test_format_thousands_no_commas() {
    assert_eq!(format_thousands(dec!(999.99)), "999.99");
}

#[test]
fn test_format_thousands_zero() {
    assert_eq!(format_thousands(Decimal::ZERO), "0.00");
}

#[test]
fn test_format_thousands_pads_fraction() {
    assert_eq!(format_thousands(dec!(1234.5)), "1,234.50");
    assert_eq!(format_thousands(dec!(1234)), "1,234.00");
}

#[test]
fn test_format_thousands_millions() {
    assert_eq!(format_thousands(dec!(10000000.00)), "10,000,000.00");
    assert_eq!(format_thousands(dec!(1234567.89)), "1,234,567.89");
}

#[test]
fn test_format_thousands_exact_group_boundaries() {
    assert_eq!(format_thousands(dec!(100)), "100.00");
    assert_eq!(format_thousands(dec!(1000)), "1,000.00");
    assert_eq!(format_thousands(dec!(100000)), "100,000.00");
    assert_eq!(format_thousands(dec!(1000000)), "1,000,000.00");
}

#[test]
fn test_format_thousands_negative() {
    assert_eq!(format_thousands(dec!(-99999.01)), "-99,999.01");
}

#[test]
fn test_format_thousands_is_stable_through_parse() {
    for v in [dec!(0), dec!(7.5), dec!(1234.56), dec!(185185.05), dec!(98765432.1)] {
        let once = format_thousands(v);
        let again = format_thousands(parse_salary_input(&once).unwrap());
        assert_eq!(once, again);
    }
}

// ── parse_salary_input ────────────────────────────────────────

#[test]
fn test_parse_plain() {
    assert_eq!(parse_salary_input("1000").unwrap(), dec!(1000));
    assert_eq!(parse_salary_input("1234.56").unwrap(), dec!(1234.56));
}

#[test]
fn test_parse_grouped() {
    assert_eq!(parse_salary_input("1,234,567.89").unwrap(), dec!(1234567.89));
}

#[test]
fn test_parse_trims_whitespace() {
    assert_eq!(parse_salary_input("  2500 ").unwrap(), dec!(2500));
}

#[test]
fn test_parse_partial_decimal_points() {
    assert_eq!(parse_salary_input("12.").unwrap(), dec!(12));
    assert_eq!(parse_salary_input(".5").unwrap(), dec!(0.5));
}

#[test]
fn test_parse_empty() {
    assert_eq!(parse_salary_input(""), Err(SalaryInputError::Empty));
    assert_eq!(parse_salary_input("   "), Err(SalaryInputError::Empty));
}

#[test]
fn test_parse_malformed() {
    for raw in ["abc", "12a", "1.2.3", "1,23", "12,34,567", "NaN", "inf", ".", "-", "1e5"] {
        assert!(
            matches!(parse_salary_input(raw), Err(SalaryInputError::Malformed(_))),
            "{raw} should be malformed"
        );
    }
}

#[test]
fn test_parse_negative() {
    assert_eq!(parse_salary_input("-5"), Err(SalaryInputError::Negative));
    assert_eq!(parse_salary_input("-1,000.50"), Err(SalaryInputError::Negative));
}

#[test]
fn test_parse_negative_zero_is_zero() {
    assert_eq!(parse_salary_input("-0").unwrap(), Decimal::ZERO);
}

#[test]
fn test_parse_too_large() {
    assert_eq!(
        parse_salary_input("1000000000000000"),
        Err(SalaryInputError::TooLarge)
    );
    assert_eq!(
        parse_salary_input("99999999999999999999999999999999999"),
        Err(SalaryInputError::TooLarge)
    );
}

#[test]
fn test_round_trip_through_formatting() {
    for s in [dec!(0), dec!(0.01), dec!(42), dec!(1234.5), dec!(987654.32)] {
        let shown = format_thousands(compute_amount(s, 100));
        assert_eq!(parse_salary_input(&shown).unwrap(), s);
    }
}

// ── plan_rows ─────────────────────────────────────────────────

#[test]
fn test_plan_rows_follow_catalog_order() {
    let rows = plan_rows(dec!(1000));
    let ids: Vec<u8> = rows.iter().map(|r| r.category.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_plan_rows_scenario_thousand() {
    let rows = plan_rows(dec!(1000));
    let rent = rows.iter().find(|r| r.category.label == "House Rent").unwrap();
    assert_eq!(rent.category.percentage, 30);
    assert_eq!(rent.formatted_amount(), "300.00");
    let savings = rows
        .iter()
        .find(|r| r.category.label == "Savings & Investment")
        .unwrap();
    assert_eq!(savings.category.percentage, 20);
    assert_eq!(savings.formatted_amount(), "200.00");
}

#[test]
fn test_plan_rows_scenario_large_salary() {
    let rows = plan_rows(dec!(1234567));
    let food = rows
        .iter()
        .find(|r| r.category.label == "Groceries & Food")
        .unwrap();
    assert_eq!(food.formatted_amount(), "185,185.05");
}

#[test]
fn test_plan_rows_zero_salary_all_zero() {
    assert!(plan_rows(Decimal::ZERO)
        .iter()
        .all(|r| r.formatted_amount() == "0.00"));
}

#[test]
fn test_plan_total_matches_salary_when_exact() {
    assert_eq!(plan_total(dec!(1000)), dec!(1000));
    assert_eq!(plan_total(dec!(1234567.89)), dec!(1234567.89));
}

#[test]
fn test_plan_total_for_small_salary_is_not_row_sum() {
    let rows = plan_rows(dec!(0.10));
    let row_sum: Decimal = rows.iter().map(|r| r.amount).sum();
    assert_eq!(row_sum, dec!(0.13));
    assert_eq!(plan_total(dec!(0.10)), dec!(0.10));
}

#[test]
fn test_plan_total_zero() {
    assert_eq!(format_thousands(plan_total(Decimal::ZERO)), "0.00");
}
