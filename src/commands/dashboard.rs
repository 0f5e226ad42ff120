// Copyright (c) 2025 Ledgerview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;
use tracing::debug;

use crate::api::ApiClient;
use crate::metrics;
use crate::models::MonthKey;
use crate::utils::{fmt_money, fmt_percent, parse_month, pretty_table};

pub async fn handle(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let cursor = match sub.get_one::<String>("month") {
        Some(s) => parse_month(s)?,
        None => MonthKey::from_date(Utc::now().date_naive()),
    };

    let snapshot = api.fetch_snapshot().await?;
    debug!(
        transactions = snapshot.transactions.len(),
        categories = snapshot.categories.len(),
        recurring = snapshot.recurring.len(),
        "snapshot fetched"
    );

    let summary = metrics::month_summary(&snapshot.transactions, cursor);
    let series = metrics::monthly_series(&snapshot.transactions, cursor, metrics::SERIES_WINDOW);
    let breakdown = metrics::category_breakdown(&snapshot.transactions, cursor);
    let today = Utc::now().date_naive();
    let due_count = metrics::due_soon_count(&snapshot.recurring, today);

    if sub.get_flag("json") {
        let out = serde_json::json!({
            "month": cursor.label(),
            "summary": summary,
            "series": series.points,
            "breakdown": breakdown,
            "dueWithin7Days": due_count,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Dashboard for {}", cursor.label());
    println!(
        "{}",
        pretty_table(
            &["Income", "Expense", "Transfers", "Net", "Savings rate"],
            vec![vec![
                fmt_money(&summary.total_income),
                fmt_money(&summary.total_expense),
                fmt_money(&summary.total_transfer),
                fmt_money(&summary.net_balance),
                fmt_percent(&summary.savings_rate),
            ]],
        )
    );

    if series.is_empty() {
        println!(
            "No activity in the last {} months.",
            metrics::SERIES_WINDOW
        );
    } else {
        let rows: Vec<Vec<String>> = series
            .points
            .iter()
            .map(|p| {
                vec![
                    p.label.clone(),
                    fmt_money(&p.income),
                    fmt_money(&p.expense),
                    fmt_money(&p.transfer),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expense", "Transfers"], rows)
        );
    }

    if breakdown.is_empty() {
        println!("No expenses recorded this month.");
    } else {
        let rows: Vec<Vec<String>> = breakdown
            .iter()
            .map(|s| vec![s.name.clone(), fmt_money(&s.total), s.color.clone()])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent", "Color"], rows));
    }

    println!("{} payment(s) due in the next 7 days", due_count);
    Ok(())
}
