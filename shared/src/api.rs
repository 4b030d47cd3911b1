//! The remote JSON API consumed by the dashboard.
//!
//! `DashboardApi` has one method per (resource, verb) pair. Implementations
//! make exactly one request per call: no retries, no timeout of their own and
//! no branching on the HTTP status. A body with the expected shape is a
//! success whatever the status code was.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::validation::QUERY_DATE_FORMAT;
use crate::{
    Account, AccountId, AccountPayload, ExpenseRequest, IncomeRequest, MonthlyMarketValue,
    StatusResponse, Transaction, TransactionQuery, TransferRequest, TypeMarketValues,
};

/// Futures are not `Send`: the browser client runs on the UI thread.
#[async_trait(?Send)]
pub trait DashboardApi {
    async fn list_accounts(&self) -> Result<Vec<Account>, ApiError>;
    async fn get_account(&self, id: AccountId) -> Result<Account, ApiError>;
    async fn create_account(&self, payload: &AccountPayload) -> Result<Account, ApiError>;
    async fn update_account(&self, id: AccountId, payload: &AccountPayload) -> Result<Account, ApiError>;
    async fn delete_account(&self, id: AccountId) -> Result<StatusResponse, ApiError>;
    async fn refresh_market_values(&self) -> Result<StatusResponse, ApiError>;
    async fn monthly_market_values(&self) -> Result<Vec<MonthlyMarketValue>, ApiError>;
    async fn type_market_values(&self) -> Result<TypeMarketValues, ApiError>;
    async fn transactions(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, ApiError>;
    async fn record_income(&self, request: &IncomeRequest) -> Result<StatusResponse, ApiError>;
    async fn record_expense(&self, request: &ExpenseRequest) -> Result<StatusResponse, ApiError>;
    async fn transfer(&self, request: &TransferRequest) -> Result<StatusResponse, ApiError>;
}

/// Endpoint paths, relative to the configured base URL
pub mod endpoints {
    use super::*;

    pub const ACCOUNTS: &str = "/api/accounts";
    pub const REFRESH: &str = "/api/refresh";
    pub const MONTHLY_MARKET_VALUES: &str = "/api/monthlyMarketValues";
    pub const TYPE_MARKET_VALUES: &str = "/api/typeMarketValues";
    pub const INCOME: &str = "/api/income";
    pub const EXPENSE: &str = "/api/expense";
    pub const TRANSFER: &str = "/api/transfer";

    pub fn account(id: AccountId) -> String {
        format!("{}/{}", ACCOUNTS, id)
    }

    pub fn transactions(query: &TransactionQuery) -> String {
        format!(
            "/api/transactions?start={}&end={}",
            query.start.format(QUERY_DATE_FORMAT),
            query.end.format(QUERY_DATE_FORMAT)
        )
    }
}

/// Decode a response body into the expected type.
///
/// When the body does not fit but is a status object with a message (for
/// example `{"message": "Account not found"}`), the message is surfaced as
/// `ApiError::Server` so callers can show it instead of generic text.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<T>(body) {
        Ok(value) => Ok(value),
        Err(decode_error) => match serde_json::from_str::<StatusResponse>(body) {
            Ok(StatusResponse {
                message: Some(message),
            }) => Err(ApiError::Server { message }),
            _ => Err(ApiError::Decode(decode_error.to_string())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(endpoints::account(5), "/api/accounts/5");

        let query = TransactionQuery {
            start: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(),
        };
        assert_eq!(
            endpoints::transactions(&query),
            "/api/transactions?start=2024-06-01&end=2024-06-09"
        );
    }

    #[test]
    fn test_decode_expected_shape() {
        let accounts: Vec<Account> =
            decode_body(r#"[{"id": 1, "type": "银行账户", "marketValue": 3}]"#).unwrap();
        assert_eq!(accounts.len(), 1);

        let status: StatusResponse = decode_body(r#"{"message": "转账成功"}"#).unwrap();
        assert_eq!(status.message.as_deref(), Some("转账成功"));
    }

    #[test]
    fn test_decode_surfaces_server_message() {
        let result = decode_body::<Account>(r#"{"message": "Account not found"}"#);
        assert_eq!(
            result,
            Err(ApiError::Server {
                message: "Account not found".to_string()
            })
        );
    }

    #[test]
    fn test_decode_rejects_non_json() {
        let result = decode_body::<Vec<Account>>("<html>Internal Server Error</html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
