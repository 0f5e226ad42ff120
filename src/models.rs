// Copyright (c) 2025 Ledgerview Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Canonical transaction shape. `amount` is always non-negative; direction is
/// carried by `kind`, never by the sign.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
    pub category_id: Option<String>,
    pub category_name: Option<String>,
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    Income,
    Expense,
    Transfer,
}

impl TxKind {
    /// Case-insensitive. Anything outside the three known kinds is `None`
    /// and is excluded from every aggregate bucket.
    pub fn parse(raw: &str) -> Option<TxKind> {
        let t = raw.trim();
        if t.eq_ignore_ascii_case("income") {
            Some(TxKind::Income)
        } else if t.eq_ignore_ascii_case("expense") {
            Some(TxKind::Expense)
        } else if t.eq_ignore_ascii_case("transfer") {
            Some(TxKind::Transfer)
        } else {
            None
        }
    }
}

impl Transaction {
    pub fn kind(&self) -> Option<TxKind> {
        TxKind::parse(&self.kind)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub icon: Option<String>,
    pub color_hex: Option<String>,
    pub is_archived: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecurringPayment {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub frequency_in_days: i64,
    pub next_due_date: NaiveDate,
    pub category_id: Option<String>,
    pub category_name: Option<String>,
    pub is_active: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub saved_amount: Decimal,
    pub deadline: Option<NaiveDate>,
}

/// A complete, internally-consistent snapshot of the backend collections.
/// Aggregation only ever runs against one of these, never a partial fetch.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub recurring: Vec<RecurringPayment>,
}

/// Calendar-month cursor. Explicit parameter everywhere; the metrics engine
/// never reads ambient clock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> MonthKey {
        MonthKey { year, month }
    }

    pub fn from_date(date: NaiveDate) -> MonthKey {
        MonthKey {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last calendar day of the month, inclusive filter boundary.
    pub fn last_day(self) -> NaiveDate {
        self.plus_months(1)
            .first_day()
            .pred_opt()
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn plus_months(self, n: u32) -> MonthKey {
        let total = self.year as i64 * 12 + (self.month as i64 - 1) + n as i64;
        MonthKey {
            year: total.div_euclid(12) as i32,
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    pub fn minus_months(self, n: u32) -> MonthKey {
        let total = self.year as i64 * 12 + (self.month as i64 - 1) - n as i64;
        MonthKey {
            year: total.div_euclid(12) as i32,
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date >= self.first_day() && date <= self.last_day()
    }

    /// Short chart label, e.g. "03/26" for March 2026.
    pub fn label(self) -> String {
        format!("{:02}/{:02}", self.month, self.year.rem_euclid(100))
    }
}

// ---------------------------------------------------------------------------
// Wire-format ingest. The backend is inconsistent about field casing
// (PascalCase vs camelCase), encodes some booleans as the strings
// "true"/"false", and sometimes sends amounts as strings. Everything is
// coerced to the canonical shapes above right here; nothing downstream
// special-cases the wire format.
// ---------------------------------------------------------------------------

/// List endpoints answer either a bare array or a paging envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Plain(Vec<T>),
    Paged { items: Vec<T> },
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Plain(v) => v,
            Listing::Paged { items } => items,
        }
    }
}

fn coerce_decimal(v: Option<&Value>) -> Decimal {
    match v {
        Some(Value::Number(n)) => n.to_string().parse().unwrap_or(Decimal::ZERO),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

fn flex_decimal<'de, D: Deserializer<'de>>(d: D) -> Result<Decimal, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(coerce_decimal(v.as_ref()))
}

fn flex_bool<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

fn flex_i64<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn flex_id<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s,
        _ => String::new(),
    })
}

fn flex_opt_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}

fn parse_wire_date(s: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    // Some endpoints send full ISO timestamps; the date prefix is enough.
    s.get(..10)
        .and_then(|p| NaiveDate::parse_from_str(p, "%Y-%m-%d").ok())
}

fn flex_date<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::String(s)) => parse_wire_date(&s),
        _ => None,
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    #[serde(default, alias = "Id", alias = "ID", deserialize_with = "flex_id")]
    pub id: String,
    #[serde(default, alias = "Amount", deserialize_with = "flex_decimal")]
    pub amount: Decimal,
    #[serde(default, alias = "Date", deserialize_with = "flex_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, alias = "Description")]
    pub description: Option<String>,
    #[serde(
        default,
        alias = "CategoryId",
        alias = "categoryID",
        deserialize_with = "flex_opt_id"
    )]
    pub category_id: Option<String>,
    #[serde(default, alias = "CategoryName")]
    pub category_name: Option<String>,
    #[serde(default, rename = "type", alias = "Type")]
    pub kind: Option<String>,
}

impl RawTransaction {
    /// A record without a usable date cannot be bucketed anywhere; it is
    /// dropped rather than failing the whole ingest.
    pub fn into_canonical(self) -> Option<Transaction> {
        let date = self.date?;
        Some(Transaction {
            id: self.id,
            amount: self.amount,
            date,
            description: self.description.unwrap_or_default(),
            category_id: self.category_id,
            category_name: self.category_name,
            kind: self.kind.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCategory {
    #[serde(default, alias = "Id", alias = "ID", deserialize_with = "flex_id")]
    pub id: String,
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(default, rename = "type", alias = "Type")]
    pub kind: String,
    #[serde(default, alias = "Icon")]
    pub icon: Option<String>,
    #[serde(default, alias = "ColorHex")]
    pub color_hex: Option<String>,
    #[serde(default, alias = "IsArchived", deserialize_with = "flex_bool")]
    pub is_archived: bool,
}

impl RawCategory {
    pub fn into_canonical(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
            kind: self.kind,
            icon: self.icon,
            color_hex: self.color_hex,
            is_archived: self.is_archived,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecurringPayment {
    #[serde(default, alias = "Id", alias = "ID", deserialize_with = "flex_id")]
    pub id: String,
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Amount", deserialize_with = "flex_decimal")]
    pub amount: Decimal,
    #[serde(default, alias = "FrequencyInDays", deserialize_with = "flex_i64")]
    pub frequency_in_days: i64,
    #[serde(default, alias = "NextDueDate", deserialize_with = "flex_date")]
    pub next_due_date: Option<NaiveDate>,
    #[serde(
        default,
        alias = "CategoryId",
        alias = "categoryID",
        deserialize_with = "flex_opt_id"
    )]
    pub category_id: Option<String>,
    #[serde(default, alias = "CategoryName")]
    pub category_name: Option<String>,
    #[serde(default, alias = "IsActive", deserialize_with = "flex_bool")]
    pub is_active: bool,
    #[serde(default, alias = "Notes")]
    pub notes: Option<String>,
}

impl RawRecurringPayment {
    pub fn into_canonical(self) -> Option<RecurringPayment> {
        let next_due_date = self.next_due_date?;
        Some(RecurringPayment {
            id: self.id,
            name: self.name,
            amount: self.amount,
            frequency_in_days: self.frequency_in_days,
            next_due_date,
            category_id: self.category_id,
            category_name: self.category_name,
            is_active: self.is_active,
            notes: self.notes,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGoal {
    #[serde(default, alias = "Id", alias = "ID", deserialize_with = "flex_id")]
    pub id: String,
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(default, alias = "TargetAmount", deserialize_with = "flex_decimal")]
    pub target_amount: Decimal,
    #[serde(default, alias = "SavedAmount", deserialize_with = "flex_decimal")]
    pub saved_amount: Decimal,
    #[serde(default, alias = "Deadline", deserialize_with = "flex_date")]
    pub deadline: Option<NaiveDate>,
}

impl RawGoal {
    pub fn into_canonical(self) -> Goal {
        Goal {
            id: self.id,
            name: self.name,
            target_amount: self.target_amount,
            saved_amount: self.saved_amount,
            deadline: self.deadline,
        }
    }
}
