// Copyright (c) 2025 Ledgerview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use ledgerview::metrics::{
    PROJECTION_MONTHS, due_soon_count, due_within, project_recurring, upcoming_list,
};
use ledgerview::models::{MonthKey, RecurringPayment};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn pay(name: &str, amount: i64, freq: i64, due: NaiveDate, active: bool) -> RecurringPayment {
    RecurringPayment {
        id: String::new(),
        name: name.to_string(),
        amount: Decimal::from(amount),
        frequency_in_days: freq,
        next_due_date: due,
        category_id: None,
        category_name: None,
        is_active: active,
        notes: None,
    }
}

#[test]
fn projection_always_has_six_chronological_buckets() {
    let buckets = project_recurring(&[], MonthKey::new(2025, 11));
    assert_eq!(buckets.len(), PROJECTION_MONTHS as usize);
    let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, ["11/25", "12/25", "01/26", "02/26", "03/26", "04/26"]);
    assert!(buckets.iter().all(|b| b.total == Decimal::ZERO));
}

#[test]
fn past_due_payment_fast_forwards_into_horizon() {
    // Due 40 days before the horizon start with a 30-day period: first
    // in-horizon occurrence is 2025-08-21, then every 30 days.
    let start = date(2025, 8, 1);
    let p = pay("gym", 50, 30, start - Duration::days(40), true);
    let buckets = project_recurring(&[p], MonthKey::new(2025, 8));
    let hit = buckets.iter().filter(|b| b.total > Decimal::ZERO).count();
    assert!(hit >= 2, "expected at least two monthly contributions, got {hit}");
    // Nothing can land before the horizon start, so the sum is exactly the
    // number of in-horizon occurrences times the amount.
    let total: Decimal = buckets.iter().map(|b| b.total).sum();
    assert_eq!(total, Decimal::from(50 * 6));
    assert_eq!(buckets[0].total, Decimal::from(50));
}

#[test]
fn fast_forward_boundary_lands_exactly_on_horizon_start() {
    // Due date an exact multiple of the period before the start: the floor
    // division alone is enough and the first occurrence is the start itself.
    let start = date(2025, 8, 1);
    let p = pay("rent", 1200, 30, start - Duration::days(60), true);
    let buckets = project_recurring(&[p], MonthKey::new(2025, 8));
    // 08-01, 08-31 both fall in the first bucket.
    assert_eq!(buckets[0].total, Decimal::from(2400));
}

#[test]
fn floor_undershoot_is_corrected_by_single_stepping() {
    // 95 days behind with a 30-day period: floor gives 3 skips (90 days),
    // leaving the due date 5 days before the start; one extra step is
    // required and the first occurrence lands 25 days after the start.
    let start = date(2025, 8, 1);
    let p = pay("insurance", 10, 30, start - Duration::days(95), true);
    let buckets = project_recurring(&[p], MonthKey::new(2025, 8));
    // First landing 2025-08-26, i.e. within one period of the start.
    assert_eq!(buckets[0].total, Decimal::from(10));
    let total: Decimal = buckets.iter().map(|b| b.total).sum();
    // 2025-08-26 .. 2026-01-23, stepping 30 days: six occurrences.
    assert_eq!(total, Decimal::from(60));
}

#[test]
fn due_date_beyond_horizon_contributes_nothing() {
    let p = pay("annual", 300, 365, date(2026, 3, 1), true);
    let buckets = project_recurring(&[p], MonthKey::new(2025, 8));
    assert!(buckets.iter().all(|b| b.total == Decimal::ZERO));
}

#[test]
fn inactive_zero_amount_and_zero_frequency_are_skipped() {
    let start = date(2025, 8, 1);
    let payments = vec![
        pay("paused", 50, 30, start, false),
        pay("free", 0, 30, start, true),
        pay("broken", 50, 0, start, true),
    ];
    let buckets = project_recurring(&payments, MonthKey::new(2025, 8));
    assert!(buckets.iter().all(|b| b.total == Decimal::ZERO));
}

#[test]
fn future_due_date_lands_in_its_own_month() {
    let p = pay("quarterly", 90, 90, date(2025, 10, 15), true);
    let buckets = project_recurring(&[p], MonthKey::new(2025, 8));
    assert_eq!(buckets[0].total, Decimal::ZERO);
    assert_eq!(buckets[1].total, Decimal::ZERO);
    // 2025-10-15 and 2026-01-13.
    assert_eq!(buckets[2].total, Decimal::from(90));
    assert_eq!(buckets[5].total, Decimal::from(90));
}

#[test]
fn due_window_is_inclusive_and_sorted() {
    let today = date(2025, 8, 10);
    let payments = vec![
        pay("later", 10, 30, today + Duration::days(7), true),
        pay("today", 10, 30, today, true),
        pay("too-far", 10, 30, today + Duration::days(8), true),
        pay("past", 10, 30, today - Duration::days(1), true),
        pay("paused", 10, 30, today + Duration::days(2), false),
    ];
    let due = due_within(&payments, today, 7);
    let names: Vec<&str> = due.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["today", "later"]);
    assert_eq!(due_soon_count(&payments, today), 2);
}

#[test]
fn upcoming_list_caps_to_nearest_ten() {
    let today = date(2025, 8, 10);
    let payments: Vec<RecurringPayment> = (0..14)
        .map(|i| pay(&format!("p{i}"), 10, 30, today + Duration::days(i), true))
        .collect();
    let due = upcoming_list(&payments, today);
    assert_eq!(due.len(), 10);
    // Nearest first; the four furthest-out entries are the ones dropped.
    assert_eq!(due[0].name, "p0");
    assert_eq!(due[9].name, "p9");
}
