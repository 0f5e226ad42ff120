// Copyright (c) 2025 Ledgerview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use ledgerview::api::{API_URL_ENV, ApiClient, DEFAULT_API_URL};
use ledgerview::{cli, commands, session};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let base_url = matches
        .get_one::<String>("api-url")
        .cloned()
        .or_else(|| std::env::var(API_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let token = session::load_token()?;
    let api = ApiClient::new(&base_url, token)?;

    match matches.subcommand() {
        Some(("login", sub)) => commands::auth::login(&api, sub).await?,
        Some(("logout", _)) => commands::auth::logout()?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&api, sub).await?,
        Some(("tx", sub)) => commands::transactions::handle(&api, sub).await?,
        Some(("category", sub)) => commands::categories::handle(&api, sub).await?,
        Some(("goal", sub)) => commands::goals::handle(&api, sub).await?,
        Some(("recurring", sub)) => commands::recurring::handle(&api, sub).await?,
        Some(("export", sub)) => commands::exporter::handle(&api, sub).await?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
