// Copyright (c) 2025 Ledgerview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use reqwest::{Method, Response, StatusCode};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{
    Category, Goal, Listing, RawCategory, RawGoal, RawRecurringPayment, RawTransaction,
    RecurringPayment, Snapshot, Transaction,
};

const UA: &str = concat!(
    "ledgerview/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/ledgerview/ledgerview)"
);

pub const DEFAULT_API_URL: &str = "https://api.ledgerview.app";
pub const API_URL_ENV: &str = "LEDGERVIEW_API_URL";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("could not reach the server: {0}")]
    Network(#[from] reqwest::Error),
    #[error("not logged in; run `ledgerview login` first")]
    Unauthorized,
    #[error("{message}")]
    Server {
        status: StatusCode,
        message: String,
    },
    #[error("invalid request payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Pulls a human-readable message out of whichever conventional error-body
/// shape the backend used: `message`, `error`, the first validation error
/// under `errors`, or `title`. Falls back to the status reason.
pub fn extract_server_message(status: StatusCode, body: &str) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(s) = v.get(key).and_then(Value::as_str) {
                if !s.is_empty() {
                    return s.to_string();
                }
            }
        }
        if let Some(errors) = v.get("errors") {
            let first = match errors {
                Value::Object(map) => map
                    .values()
                    .next()
                    .and_then(|field| match field {
                        Value::Array(a) => a.first().and_then(Value::as_str),
                        Value::String(s) => Some(s.as_str()),
                        _ => None,
                    }),
                Value::Array(a) => a.first().and_then(Value::as_str),
                _ => None,
            };
            if let Some(s) = first {
                return s.to_string();
            }
        }
        if let Some(s) = v.get("title").and_then(Value::as_str) {
            return s.to_string();
        }
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

/// Outbound transaction payload. The backend accepts camelCase here.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportExport {
    #[serde(default, alias = "FileName")]
    pub file_name: String,
    #[serde(default, alias = "ContentType")]
    pub content_type: String,
    #[serde(default, alias = "Content")]
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(alias = "Token", alias = "accessToken", alias = "AccessToken")]
    token: String,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<ApiClient, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .user_agent(UA)
            .build()?;
        Ok(ApiClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// One request with a single transparent retry on transport-level
    /// failures (connect/timeout). Server-reported errors are never retried.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut attempt = 0;
        loop {
            attempt += 1;
            let mut req = self.http.request(method.clone(), &url);
            if let Some(tok) = &self.token {
                req = req.bearer_auth(tok);
            }
            if let Some(b) = body {
                req = req.json(b);
            }
            match req.send().await {
                Ok(resp) => return check_status(resp).await,
                Err(e) if attempt == 1 && (e.is_connect() || e.is_timeout()) => {
                    warn!(error = %e, url = %url, "network error, retrying once");
                }
                Err(e) => return Err(ApiError::Network(e)),
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.send(Method::GET, path, None).await?;
        Ok(resp.json::<T>().await?)
    }

    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let raw: Listing<RawTransaction> = self.get_json("/transaction").await?;
        let txs: Vec<Transaction> = raw
            .into_vec()
            .into_iter()
            .filter_map(RawTransaction::into_canonical)
            .collect();
        debug!(count = txs.len(), "fetched transactions");
        Ok(txs)
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let raw: Listing<RawCategory> = self.get_json("/category").await?;
        Ok(raw
            .into_vec()
            .into_iter()
            .map(RawCategory::into_canonical)
            .collect())
    }

    pub async fn list_recurring(&self) -> Result<Vec<RecurringPayment>, ApiError> {
        // Backend path keeps its odd casing.
        let raw: Listing<RawRecurringPayment> = self.get_json("/RecurringPayment").await?;
        Ok(raw
            .into_vec()
            .into_iter()
            .filter_map(RawRecurringPayment::into_canonical)
            .collect())
    }

    pub async fn list_goals(&self) -> Result<Vec<Goal>, ApiError> {
        let raw: Listing<RawGoal> = self.get_json("/Goal").await?;
        Ok(raw
            .into_vec()
            .into_iter()
            .map(RawGoal::into_canonical)
            .collect())
    }

    pub async fn create_transaction(&self, tx: &NewTransaction) -> Result<(), ApiError> {
        let body = serde_json::to_value(tx)?;
        self.send(Method::POST, "/transaction", Some(&body)).await?;
        Ok(())
    }

    pub async fn delete_transaction(&self, id: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, &format!("/transaction/{id}"), None)
            .await?;
        Ok(())
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = self.send(Method::POST, "/auth/login", Some(&body)).await?;
        let login: LoginResponse = resp.json().await?;
        Ok(login.token)
    }

    pub async fn export_report(&self, format: &str) -> Result<ReportExport, ApiError> {
        self.get_json(&format!("/analytics/export?format={format}"))
            .await
    }

    /// Fetches the three dashboard collections concurrently and joins them
    /// into one snapshot, so aggregation never sees partially-updated state.
    pub async fn fetch_snapshot(&self) -> Result<Snapshot, ApiError> {
        let (transactions, categories, recurring) = tokio::try_join!(
            self.list_transactions(),
            self.list_categories(),
            self.list_recurring(),
        )?;
        Ok(Snapshot {
            transactions,
            categories,
            recurring,
        })
    }
}

async fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Server {
            status,
            message: extract_server_message(status, &body),
        });
    }
    Ok(resp)
}
