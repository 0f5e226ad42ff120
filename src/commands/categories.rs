// Copyright (c) 2025 Ledgerview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::api::ApiClient;
use crate::utils::{maybe_print_json, pretty_table};

pub async fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let mut cats = api.list_categories().await?;
            if !sub.get_flag("all") {
                cats.retain(|c| !c.is_archived);
            }
            cats.sort_by(|a, b| a.name.cmp(&b.name));
            if !maybe_print_json(json_flag, jsonl_flag, &cats)? {
                let rows: Vec<Vec<String>> = cats
                    .into_iter()
                    .map(|c| {
                        vec![
                            c.name,
                            c.kind,
                            c.color_hex.unwrap_or_default(),
                            if c.is_archived { "yes".into() } else { "no".into() },
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Category", "Type", "Color", "Archived"], rows)
                );
            }
        }
        _ => {}
    }
    Ok(())
}
