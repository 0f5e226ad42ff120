// Copyright (c) 2025 Ledgerview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use reqwest::StatusCode;
use rust_decimal::Decimal;

use ledgerview::api::extract_server_message;
use ledgerview::models::{Listing, RawRecurringPayment, RawTransaction, TxKind};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn transaction_accepts_pascal_case_fields() {
    let json = r#"{
        "Id": 42,
        "Amount": "129.95",
        "Date": "2025-08-03",
        "Description": "Groceries",
        "CategoryId": 7,
        "CategoryName": "Food",
        "Type": "Expense"
    }"#;
    let raw: RawTransaction = serde_json::from_str(json).unwrap();
    let tx = raw.into_canonical().unwrap();
    assert_eq!(tx.id, "42");
    assert_eq!(tx.amount, "129.95".parse::<Decimal>().unwrap());
    assert_eq!(tx.date, date(2025, 8, 3));
    assert_eq!(tx.category_id.as_deref(), Some("7"));
    assert_eq!(tx.kind(), Some(TxKind::Expense));
}

#[test]
fn transaction_accepts_camel_case_and_numeric_amount() {
    let json = r#"{
        "id": "abc",
        "amount": 20.5,
        "date": "2025-08-04T09:15:00Z",
        "description": "Coffee",
        "type": "expense"
    }"#;
    let raw: RawTransaction = serde_json::from_str(json).unwrap();
    let tx = raw.into_canonical().unwrap();
    assert_eq!(tx.amount, "20.5".parse::<Decimal>().unwrap());
    // ISO timestamp collapses to its date part.
    assert_eq!(tx.date, date(2025, 8, 4));
}

#[test]
fn malformed_amount_coerces_to_zero() {
    let json = r#"{"id": "1", "amount": "not-a-number", "date": "2025-08-01", "type": "Income"}"#;
    let raw: RawTransaction = serde_json::from_str(json).unwrap();
    let tx = raw.into_canonical().unwrap();
    assert_eq!(tx.amount, Decimal::ZERO);
}

#[test]
fn missing_date_drops_the_record_instead_of_erroring() {
    let json = r#"{"id": "1", "amount": 10, "type": "Income"}"#;
    let raw: RawTransaction = serde_json::from_str(json).unwrap();
    assert!(raw.into_canonical().is_none());
}

#[test]
fn unknown_type_survives_ingest_but_parses_to_none() {
    let json = r#"{"id": "1", "amount": 10, "date": "2025-08-01", "type": "Loan"}"#;
    let raw: RawTransaction = serde_json::from_str(json).unwrap();
    let tx = raw.into_canonical().unwrap();
    assert_eq!(tx.kind, "Loan");
    assert_eq!(tx.kind(), None);
}

#[test]
fn recurring_payment_decodes_string_booleans() {
    let json = r#"{
        "Id": 3,
        "Name": "Netflix",
        "Amount": "15.99",
        "FrequencyInDays": "30",
        "NextDueDate": "2025-09-01",
        "IsActive": "True"
    }"#;
    let raw: RawRecurringPayment = serde_json::from_str(json).unwrap();
    let p = raw.into_canonical().unwrap();
    assert!(p.is_active);
    assert_eq!(p.frequency_in_days, 30);
    assert_eq!(p.amount, "15.99".parse::<Decimal>().unwrap());
}

#[test]
fn list_endpoints_accept_bare_arrays_and_paging_envelopes() {
    let bare = r#"[{"id":"1","amount":1,"date":"2025-08-01","type":"Income"}]"#;
    let paged = r#"{"items":[{"id":"1","amount":1,"date":"2025-08-01","type":"Income"}]}"#;
    let a: Listing<RawTransaction> = serde_json::from_str(bare).unwrap();
    let b: Listing<RawTransaction> = serde_json::from_str(paged).unwrap();
    assert_eq!(a.into_vec().len(), 1);
    assert_eq!(b.into_vec().len(), 1);
}

#[test]
fn server_message_extraction_prefers_conventional_shapes() {
    let status = StatusCode::BAD_REQUEST;
    assert_eq!(
        extract_server_message(status, r#"{"message":"Amount is required"}"#),
        "Amount is required"
    );
    assert_eq!(
        extract_server_message(status, r#"{"error":"bad category"}"#),
        "bad category"
    );
    assert_eq!(
        extract_server_message(status, r#"{"errors":{"Amount":["must be positive"]}}"#),
        "must be positive"
    );
    assert_eq!(
        extract_server_message(status, r#"{"title":"One or more validation errors occurred."}"#),
        "One or more validation errors occurred."
    );
    // Unrecognized bodies fall back to the status reason.
    assert_eq!(extract_server_message(status, "<html>oops</html>"), "Bad Request");
}
