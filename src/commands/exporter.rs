// Copyright (c) 2025 Ledgerview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::api::ApiClient;

pub async fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("csv", sub)) => export_csv(api, sub).await,
        Some(("report", sub)) => export_report(api, sub).await,
        _ => Ok(()),
    }
}

async fn export_csv(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub.get_one::<String>("out").unwrap();
    let mut txs = api.list_transactions().await?;
    txs.sort_by(|a, b| a.date.cmp(&b.date));

    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record(["date", "description", "amount", "type", "category"])?;
    for t in txs {
        wtr.write_record([
            t.date.to_string(),
            t.description,
            t.amount.to_string(),
            t.kind,
            t.category_name.unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    println!("Exported transactions to {}", out);
    Ok(())
}

/// The report itself is produced server-side; this only decodes the payload
/// and writes it where asked.
async fn export_report(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let format = sub.get_one::<String>("format").unwrap();
    let out = sub.get_one::<String>("out").unwrap();

    let report = api.export_report(format).await?;
    let bytes = BASE64
        .decode(report.content.as_bytes())
        .context("Report payload is not valid base64")?;
    std::fs::write(out, bytes).with_context(|| format!("Write report to {}", out))?;
    println!(
        "Saved {} ({}) to {}",
        report.file_name, report.content_type, out
    );
    Ok(())
}
