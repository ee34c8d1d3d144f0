#![allow(clippy::unwrap_used)]

use super::*;

// ── Catalog ───────────────────────────────────────────────────

#[test]
fn test_catalog_has_nine_entries() {
    assert_eq!(ExpenseCategory::all().len(), 9);
}

#[test]
fn test_percentages_sum_to_hundred() {
    let total: u32 = CATALOG.iter().map(|c| u32::from(c.percentage)).sum();
    assert_eq!(total, 100);
}

#[test]
fn test_percentages_in_order() {
    let pcts: Vec<u8> = CATALOG.iter().map(|c| c.percentage).collect();
    assert_eq!(pcts, vec![30, 15, 5, 5, 5, 10, 5, 20, 5]);
}

#[test]
fn test_ids_are_unique() {
    let mut ids: Vec<u8> = CATALOG.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), CATALOG.len());
}

#[test]
fn test_every_percentage_in_range() {
    assert!(CATALOG.iter().all(|c| c.percentage <= 100));
}

// ── Display ───────────────────────────────────────────────────

#[test]
fn test_display_is_label() {
    assert_eq!(CATALOG[1].to_string(), "Groceries & Food");
}

#[test]
fn test_labels_are_unique() {
    let mut labels: Vec<&str> = CATALOG.iter().map(|c| c.label).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), CATALOG.len());
}
