// Copyright (c) 2025 Ledgerview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::api::ApiClient;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, pretty_table};

pub async fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let goals = api.list_goals().await?;
            if !maybe_print_json(json_flag, jsonl_flag, &goals)? {
                let rows: Vec<Vec<String>> = goals
                    .into_iter()
                    .map(|g| {
                        let progress = if g.target_amount > Decimal::ZERO {
                            g.saved_amount / g.target_amount
                        } else {
                            Decimal::ZERO
                        };
                        vec![
                            g.name,
                            fmt_money(&g.saved_amount),
                            fmt_money(&g.target_amount),
                            fmt_percent(&progress),
                            g.deadline.map(|d| d.to_string()).unwrap_or_default(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Goal", "Saved", "Target", "Progress", "Deadline"], rows)
                );
            }
        }
        _ => {}
    }
    Ok(())
}
