//! Error types for the dashboard
//!
//! Validation errors are shown to the user verbatim, so their messages are
//! written as instructions. API errors are logged and then mapped to a
//! generic notice unless the server sent a message of its own.

use thiserror::Error;

/// Local form validation failures. No network call is made when one occurs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please choose an account for {0}")]
    MissingAccount(&'static str),

    #[error("Invalid account for {field}: {value}")]
    InvalidAccountId { field: &'static str, value: String },

    #[error("Please enter an amount")]
    MissingAmount,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount must be greater than zero")]
    AmountNotPositive,

    #[error("Cannot transfer to the same account")]
    SameAccountTransfer,

    #[error("Please enter the account details")]
    EmptyDetails,

    #[error("Please enter a stock symbol")]
    MissingStockSymbol,

    #[error("Shares must be a whole number of zero or more, got {0}")]
    InvalidShares(String),

    #[error("Invalid market value: {0}")]
    InvalidMarketValue(String),

    #[error("Please enter both a start and an end date")]
    MissingDate,

    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("The end date must not be before the start date")]
    EndBeforeStart,
}

/// Failures reported by the API client
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    #[error("Unexpected response body: {0}")]
    Decode(String),

    /// The body did not have the expected shape but carried a message
    #[error("Server error: {message}")]
    Server { message: String },
}

impl ApiError {
    /// Message the server supplied, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message } => Some(message),
            _ => None,
        }
    }
}

/// Problems with the dashboard configuration document
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid configuration value: {field} - {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Result type with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
