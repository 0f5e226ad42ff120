// Copyright (c) 2025 Ledgerview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over a fetched snapshot: monthly KPIs, chart series,
//! category breakdown, and recurring-payment projection. Everything here is
//! a deterministic function of (snapshot, cursor); malformed records degrade
//! to zeros instead of erroring so one bad row never blanks a dashboard.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::models::{MonthKey, RecurringPayment, Transaction, TxKind};

/// Number of months in the chart series and in the projection horizon.
pub const SERIES_WINDOW: usize = 6;
pub const PROJECTION_MONTHS: u32 = 6;

pub const UPCOMING_SUMMARY_DAYS: i64 = 7;
pub const UPCOMING_LIST_DAYS: i64 = 14;
pub const UPCOMING_LIST_CAP: usize = 10;

const CHART_PALETTE: [&str; 8] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#9c755f",
];

pub fn palette_color(rank: usize) -> &'static str {
    CHART_PALETTE[rank % CHART_PALETTE.len()]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub total_transfer: Decimal,
    pub net_balance: Decimal,
    pub savings_rate: Decimal,
}

/// Four sums over one calendar month, boundary days inclusive. Transactions
/// with an unrecognized kind land in no bucket at all.
pub fn month_summary(txs: &[Transaction], month: MonthKey) -> MonthSummary {
    let mut summary = MonthSummary::default();
    for tx in txs.iter().filter(|t| month.contains(t.date)) {
        match tx.kind() {
            Some(TxKind::Income) => summary.total_income += tx.amount,
            Some(TxKind::Expense) => summary.total_expense += tx.amount,
            Some(TxKind::Transfer) => summary.total_transfer += tx.amount,
            None => {}
        }
    }
    summary.net_balance = summary.total_income - summary.total_expense;
    // Transfers are excluded from net; zero income means a zero rate, never
    // a division error.
    summary.savings_rate = if summary.total_income > Decimal::ZERO {
        summary.net_balance / summary.total_income
    } else {
        Decimal::ZERO
    };
    summary
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub transfer: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlySeries {
    pub points: Vec<SeriesPoint>,
}

impl MonthlySeries {
    /// True when every sum across every point is zero; callers render a
    /// placeholder instead of a degenerate chart.
    pub fn is_empty(&self) -> bool {
        self.points.iter().all(|p| {
            p.income.is_zero() && p.expense.is_zero() && p.transfer.is_zero()
        })
    }
}

/// Per-month income/expense/transfer totals for the `window` months ending at
/// `cursor`. Walking backward from the cursor gives chronological output with
/// no sort, regardless of input ordering.
pub fn monthly_series(txs: &[Transaction], cursor: MonthKey, window: usize) -> MonthlySeries {
    let mut points = Vec::with_capacity(window);
    for i in (0..window).rev() {
        let month = cursor.minus_months(i as u32);
        let mut income = Decimal::ZERO;
        let mut expense = Decimal::ZERO;
        let mut transfer = Decimal::ZERO;
        for tx in txs.iter().filter(|t| month.contains(t.date)) {
            match tx.kind() {
                Some(TxKind::Income) => income += tx.amount,
                Some(TxKind::Expense) => expense += tx.amount,
                Some(TxKind::Transfer) => transfer += tx.amount,
                None => {}
            }
        }
        points.push(SeriesPoint {
            label: month.label(),
            income,
            expense,
            transfer,
        });
    }
    MonthlySeries { points }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySlice {
    pub name: String,
    pub total: Decimal,
    pub color: String,
}

/// Expense totals for one month grouped by category name, largest first.
/// Grouping preserves first-seen order so equal totals tie deterministically,
/// and each slice gets a palette color by rank.
pub fn category_breakdown(txs: &[Transaction], month: MonthKey) -> Vec<CategorySlice> {
    let mut groups: Vec<(String, Decimal)> = Vec::new();
    for tx in txs.iter().filter(|t| month.contains(t.date)) {
        if tx.kind() != Some(TxKind::Expense) {
            continue;
        }
        let name = tx
            .category_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or("Other");
        match groups.iter_mut().find(|(n, _)| n == name) {
            Some((_, total)) => *total += tx.amount,
            None => groups.push((name.to_string(), tx.amount)),
        }
    }
    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups
        .into_iter()
        .enumerate()
        .map(|(rank, (name, total))| CategorySlice {
            name,
            total,
            color: palette_color(rank).to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectionBucket {
    pub label: String,
    pub total: Decimal,
}

/// Projects recurring obligations over a 6-month horizon starting at the
/// first day of the cursor month (exclusive upper bound). Payments already
/// past due are fast-forwarded with a floor division, then stepped one period
/// at a time; the floor can undershoot by one period near a boundary, so the
/// correction loop is load-bearing.
pub fn project_recurring(payments: &[RecurringPayment], cursor: MonthKey) -> Vec<ProjectionBucket> {
    let start = cursor.first_day();
    let end = cursor.plus_months(PROJECTION_MONTHS).first_day();
    let months: Vec<MonthKey> = (0..PROJECTION_MONTHS).map(|i| cursor.plus_months(i)).collect();
    let mut totals = vec![Decimal::ZERO; months.len()];

    for payment in payments {
        if !payment.is_active
            || payment.amount <= Decimal::ZERO
            || payment.frequency_in_days <= 0
        {
            continue;
        }
        let period = Duration::days(payment.frequency_in_days);
        let mut due = payment.next_due_date;
        if due < start {
            let skips = (start - due).num_days() / payment.frequency_in_days;
            due += Duration::days(skips * payment.frequency_in_days);
            while due < start {
                due += period;
            }
        }
        // A frequency longer than the horizon simply never lands; that is
        // zero contribution, not an error.
        while due < end {
            let key = MonthKey::from_date(due);
            if let Some(idx) = months.iter().position(|m| *m == key) {
                totals[idx] += payment.amount;
            }
            due += period;
        }
    }

    debug!(horizon = months.len(), payments = payments.len(), "recurring projection computed");
    months
        .into_iter()
        .zip(totals)
        .map(|(m, total)| ProjectionBucket {
            label: m.label(),
            total,
        })
        .collect()
}

/// Active payments due within `[today, today + days]`, soonest first.
pub fn due_within<'a>(
    payments: &'a [RecurringPayment],
    today: NaiveDate,
    days: i64,
) -> Vec<&'a RecurringPayment> {
    let cutoff = today + Duration::days(days);
    let mut due: Vec<&RecurringPayment> = payments
        .iter()
        .filter(|p| p.is_active && p.next_due_date >= today && p.next_due_date <= cutoff)
        .collect();
    due.sort_by_key(|p| p.next_due_date);
    due
}

/// 7-day due count for the dashboard summary line.
pub fn due_soon_count(payments: &[RecurringPayment], today: NaiveDate) -> usize {
    due_within(payments, today, UPCOMING_SUMMARY_DAYS).len()
}

/// 14-day upcoming list, capped to the nearest entries.
pub fn upcoming_list<'a>(
    payments: &'a [RecurringPayment],
    today: NaiveDate,
) -> Vec<&'a RecurringPayment> {
    let mut due = due_within(payments, today, UPCOMING_LIST_DAYS);
    due.truncate(UPCOMING_LIST_CAP);
    due
}
