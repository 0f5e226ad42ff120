// Copyright (c) 2025 Ledgerview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::api::{ApiClient, NewTransaction};
use crate::models::Transaction;
use crate::utils::{
    fmt_money, maybe_print_json, parse_date, parse_decimal, parse_month, pretty_table,
};

pub async fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(api, sub).await?,
        Some(("list", sub)) => list(api, sub).await?,
        Some(("delete", sub)) => delete(api, sub).await?,
        _ => {}
    }
    Ok(())
}

async fn add(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let description = sub.get_one::<String>("description").unwrap().clone();
    let category_id = sub.get_one::<String>("category").cloned();
    let kind = sub.get_one::<String>("type").unwrap().clone();

    // Client-side validation; an invalid record never reaches the server.
    if amount < Decimal::ZERO {
        bail!("Amount must be non-negative; direction is carried by --type");
    }
    if description.trim().is_empty() {
        bail!("Description must not be empty");
    }

    api.create_transaction(&NewTransaction {
        amount,
        date,
        description: description.clone(),
        category_id,
        kind,
    })
    .await?;
    println!("Recorded {} on {} ('{}')", amount, date, description);
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub description: String,
    pub amount: String,
    pub kind: String,
    pub category: String,
}

fn to_rows(mut txs: Vec<Transaction>, limit: Option<usize>) -> Vec<TransactionRow> {
    txs.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = limit {
        txs.truncate(limit);
    }
    txs.into_iter()
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.to_string(),
            description: t.description,
            amount: fmt_money(&t.amount),
            kind: t.kind,
            category: t.category_name.unwrap_or_default(),
        })
        .collect()
}

async fn list(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut txs = api.list_transactions().await?;
    if let Some(month) = sub.get_one::<String>("month") {
        let cursor = parse_month(month)?;
        txs.retain(|t| cursor.contains(t.date));
    }
    let data = to_rows(txs, sub.get_one::<usize>("limit").copied());
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.kind.clone(),
                    r.category.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Description", "Amount", "Type", "Category"],
                rows,
            )
        );
    }
    Ok(())
}

async fn delete(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    api.delete_transaction(id).await?;
    println!("Deleted transaction {}", id);
    Ok(())
}
