#![allow(clippy::unwrap_used)]

use ratatui::layout::Rect;

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_label() {
    assert_eq!(truncate("House Rent", 20), "House Rent");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("Savings", 7), "Savings");
}

#[test]
fn test_truncate_long_label() {
    assert_eq!(
        truncate("Utilities (data, wi-fi, mobile, gas, electricity)", 12),
        "Utilities (…"
    );
}

#[test]
fn test_truncate_empty() {
    assert_eq!(truncate("", 5), "");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("Groceries", 0), "");
}

#[test]
fn test_truncate_one_char() {
    assert_eq!(truncate("Groceries", 1), "…");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("café résumé", 5), "café…");
}

// ── centered_rect ─────────────────────────────────────────────

#[test]
fn test_centered_rect_fits() {
    let area = Rect::new(0, 0, 100, 40);
    assert_eq!(centered_rect(area, 50, 10), Rect::new(25, 15, 50, 10));
}

#[test]
fn test_centered_rect_clamps_to_area() {
    let area = Rect::new(0, 0, 30, 8);
    assert_eq!(centered_rect(area, 50, 10), Rect::new(0, 0, 30, 8));
}

#[test]
fn test_centered_rect_respects_offset() {
    let area = Rect::new(10, 5, 20, 10);
    assert_eq!(centered_rect(area, 10, 4), Rect::new(15, 8, 10, 4));
}
