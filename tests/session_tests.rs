// Copyright (c) 2025 Ledgerview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use ledgerview::session::{clear_token_at, load_token_at, save_token_at};

#[test]
fn token_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    save_token_at(&path, "  secret-bearer-token\n").unwrap();
    assert_eq!(
        load_token_at(&path).unwrap().as_deref(),
        Some("secret-bearer-token")
    );
}

#[test]
fn missing_token_is_none_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    assert_eq!(load_token_at(&path).unwrap(), None);
}

#[test]
fn empty_token_file_counts_as_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    save_token_at(&path, "   ").unwrap();
    assert_eq!(load_token_at(&path).unwrap(), None);
}

#[test]
fn clear_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("token");
    save_token_at(&path, "tok").unwrap();
    clear_token_at(&path).unwrap();
    clear_token_at(&path).unwrap();
    assert_eq!(load_token_at(&path).unwrap(), None);
}
