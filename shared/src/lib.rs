use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub mod account_form;
pub mod api;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod executor;
pub mod modal;
pub mod request_guard;
pub mod validation;
pub mod view;

pub use account_form::{AccountForm, FieldVisibility, FormMode};
pub use api::DashboardApi;
pub use chart::LineChartConfig;
pub use config::DashboardConfig;
pub use dashboard::{Action, ApiCall, Dashboard, Effect, Field, Movement, Notice, NoticeKind, Response};
pub use error::{ApiError, ConfigError, ValidationError};
pub use executor::perform;
pub use modal::{ModalCoordinator, ModalKind};
pub use request_guard::{RequestToken, RequestTracker, ViewKind};

/// Server-assigned account identifier
pub type AccountId = i64;

/// Kind of account. The wire format is the display label the server stores,
/// so unknown labels are carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountType {
    Bank,
    Stock,
    Other(String),
}

impl AccountType {
    pub const BANK_LABEL: &'static str = "银行账户";
    pub const STOCK_LABEL: &'static str = "股票账户";
    pub const OTHER_LABEL: &'static str = "其他账户";

    /// Label as stored by the server
    pub fn label(&self) -> &str {
        match self {
            AccountType::Bank => Self::BANK_LABEL,
            AccountType::Stock => Self::STOCK_LABEL,
            AccountType::Other(label) => label,
        }
    }

    /// Stock accounts are valued from symbol and share count instead of a
    /// manually entered market value
    pub fn is_stock(&self) -> bool {
        matches!(self, AccountType::Stock)
    }

    /// Types offered by the account form, in display order
    pub fn choices() -> Vec<AccountType> {
        vec![
            AccountType::Bank,
            AccountType::Stock,
            AccountType::Other(Self::OTHER_LABEL.to_string()),
        ]
    }
}

impl Default for AccountType {
    fn default() -> Self {
        AccountType::Bank
    }
}

impl From<String> for AccountType {
    fn from(label: String) -> Self {
        match label.as_str() {
            Self::BANK_LABEL => AccountType::Bank,
            Self::STOCK_LABEL => AccountType::Stock,
            _ => AccountType::Other(label),
        }
    }
}

impl From<&str> for AccountType {
    fn from(label: &str) -> Self {
        AccountType::from(label.to_string())
    }
}

impl From<AccountType> for String {
    fn from(account_type: AccountType) -> Self {
        account_type.label().to_string()
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A financial account as returned by `/api/accounts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Free-text description entered by the user
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub stock_symbol: Option<String>,
    #[serde(default)]
    pub shares: Option<u64>,
    /// Current valuation; `None` means unset or unknown
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub market_value: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Account {
    /// Market value used for sorting and totals
    pub fn market_value_or_zero(&self) -> f64 {
        self.market_value.unwrap_or(0.0)
    }

    /// Label used in the account selection lists, e.g. "Savings (银行账户)"
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.details, self.account_type)
    }
}

/// Body for account creation and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPayload {
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub details: String,
    pub stock_symbol: Option<String>,
    pub shares: u64,
    pub market_value: f64,
}

/// One point of the monthly total market value series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyMarketValue {
    /// First day of the month (YYYY-MM-DD)
    pub month: String,
    pub total_market_value: f64,
}

/// Market value aggregated per account type, in the order the server sent it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeMarketValues(pub Vec<(String, Option<f64>)>);

impl TypeMarketValues {
    pub fn iter(&self) -> impl Iterator<Item = &(String, Option<f64>)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for TypeMarketValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in &self.0 {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TypeMarketValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = TypeMarketValues;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of account type to market value")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, value)) = access.next_entry::<String, LenientDecimal>()? {
                    entries.push((label, value.0));
                }
                Ok(TypeMarketValues(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

/// A recorded balance change (income, expense or one leg of a transfer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub id: Option<i64>,
    pub account_id: AccountId,
    /// Server-resolved account label; absent once the account is deleted
    #[serde(default)]
    pub account_details: Option<String>,
    pub change: f64,
    #[serde(default)]
    pub reason: Option<String>,
    /// Raw server timestamp, displayed as-is
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub previous_balance: Option<f64>,
    #[serde(default)]
    pub new_balance: Option<f64>,
}

/// Request for recording income on an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeRequest {
    pub account_id: AccountId,
    pub reason: String,
    pub amount: f64,
}

/// Request for recording an expense on an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRequest {
    pub account_id: AccountId,
    pub reason: String,
    /// Positive amount; the server books it as a negative change
    pub amount: f64,
}

/// Request for moving money between two accounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from_account_id: AccountId,
    pub to_account_id: AccountId,
    pub amount: f64,
}

/// Generic status body returned by mutating endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Inclusive date range for the transactions query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Accepts numbers, numeric strings and null; anything else becomes `None`
struct LenientDecimal(Option<f64>);

impl<'de> Deserialize<'de> for LenientDecimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        let parsed = value.and_then(|value| match value {
            serde_json::Value::Number(number) => number.as_f64(),
            serde_json::Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        });
        Ok(LenientDecimal(parsed.filter(|v| v.is_finite())))
    }
}

fn lenient_decimal<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    LenientDecimal::deserialize(deserializer).map(|value| value.0)
}
