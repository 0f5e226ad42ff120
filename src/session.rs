// Copyright (c) 2025 Ledgerview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.ledgerview", "Ledgerview", "ledgerview"));

/// The session token is the only thing this client ever persists.
pub fn token_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    let config_dir = proj.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config dir")?;
    Ok(config_dir.join("token"))
}

pub fn save_token(token: &str) -> Result<()> {
    save_token_at(&token_path()?, token)
}

/// `None` when no session exists; a missing file is not an error.
pub fn load_token() -> Result<Option<String>> {
    load_token_at(&token_path()?)
}

pub fn clear_token() -> Result<()> {
    clear_token_at(&token_path()?)
}

// Path-explicit variants; the integration tests point these at a tempdir
// instead of the real config dir.

pub fn save_token_at(path: &Path, token: &str) -> Result<()> {
    fs::write(path, token.trim()).with_context(|| format!("Write token to {}", path.display()))
}

pub fn load_token_at(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(s) => {
            let t = s.trim().to_string();
            Ok(if t.is_empty() { None } else { Some(t) })
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Read token from {}", path.display())),
    }
}

pub fn clear_token_at(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Remove token at {}", path.display())),
    }
}
