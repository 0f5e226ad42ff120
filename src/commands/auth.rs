// Copyright (c) 2025 Ledgerview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::api::ApiClient;
use crate::session;

pub async fn login(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let email = sub.get_one::<String>("email").unwrap();
    let password = sub.get_one::<String>("password").unwrap();
    let token = api.login(email, password).await?;
    session::save_token(&token)?;
    println!("Logged in as {}", email);
    Ok(())
}

pub fn logout() -> Result<()> {
    session::clear_token()?;
    println!("Logged out.");
    Ok(())
}
