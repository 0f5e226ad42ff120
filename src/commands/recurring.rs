// Copyright (c) 2025 Ledgerview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;

use crate::api::ApiClient;
use crate::metrics;
use crate::models::MonthKey;
use crate::utils::{fmt_money, maybe_print_json, parse_month, pretty_table};

pub async fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(api, sub).await?,
        Some(("projection", sub)) => projection(api, sub).await?,
        Some(("upcoming", sub)) => upcoming(api, sub).await?,
        _ => {}
    }
    Ok(())
}

async fn list(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut payments = api.list_recurring().await?;
    payments.sort_by_key(|p| p.next_due_date);
    if !maybe_print_json(json_flag, jsonl_flag, &payments)? {
        let rows: Vec<Vec<String>> = payments
            .into_iter()
            .map(|p| {
                vec![
                    p.name,
                    fmt_money(&p.amount),
                    format!("every {} days", p.frequency_in_days),
                    p.next_due_date.to_string(),
                    p.category_name.unwrap_or_default(),
                    if p.is_active { "yes".into() } else { "no".into() },
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Payment", "Amount", "Frequency", "Next due", "Category", "Active"],
                rows,
            )
        );
    }
    Ok(())
}

async fn projection(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let cursor = match sub.get_one::<String>("month") {
        Some(s) => parse_month(s)?,
        None => MonthKey::from_date(Utc::now().date_naive()),
    };
    let payments = api.list_recurring().await?;
    let buckets = metrics::project_recurring(&payments, cursor);
    if !maybe_print_json(json_flag, jsonl_flag, &buckets)? {
        let rows: Vec<Vec<String>> = buckets
            .into_iter()
            .map(|b| vec![b.label, fmt_money(&b.total)])
            .collect();
        println!("{}", pretty_table(&["Month", "Expected"], rows));
    }
    Ok(())
}

async fn upcoming(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let payments = api.list_recurring().await?;
    let today = Utc::now().date_naive();
    let due = metrics::upcoming_list(&payments, today);
    if !maybe_print_json(json_flag, jsonl_flag, &due)? {
        if due.is_empty() {
            println!(
                "Nothing due in the next {} days.",
                metrics::UPCOMING_LIST_DAYS
            );
            return Ok(());
        }
        let rows: Vec<Vec<String>> = due
            .into_iter()
            .map(|p| {
                let in_days = (p.next_due_date - today).num_days();
                vec![
                    p.name.clone(),
                    fmt_money(&p.amount),
                    p.next_due_date.to_string(),
                    format!("in {} day(s)", in_days),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Payment", "Amount", "Due", "When"], rows));
    }
    Ok(())
}
