//! # Account Form
//!
//! State of the create/edit account form. The form is either creating a new
//! account or editing an existing one; the mode decides which call a submit
//! turns into and which label the submit button shows.

use crate::error::ValidationError;
use crate::{Account, AccountId, AccountPayload, AccountType};

/// Whether a submit creates a new account or updates an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(AccountId),
}

/// Which inputs the form shows for the selected account type.
/// Stock accounts are valued from symbol and shares, every other type from a
/// manually entered market value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldVisibility {
    pub stock_symbol: bool,
    pub shares: bool,
    pub market_value: bool,
}

impl FieldVisibility {
    pub fn for_type(account_type: &AccountType) -> Self {
        let stock = account_type.is_stock();
        Self {
            stock_symbol: stock,
            shares: stock,
            market_value: !stock,
        }
    }
}

/// What a valid submit should do
#[derive(Debug, Clone, PartialEq)]
pub enum AccountSubmission {
    Create(AccountPayload),
    Update { id: AccountId, payload: AccountPayload },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountForm {
    pub account_type: AccountType,
    pub details: String,
    pub stock_symbol: String,
    pub shares: String,
    pub market_value: String,
    mode: FormMode,
}

impl AccountForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn visibility(&self) -> FieldVisibility {
        FieldVisibility::for_type(&self.account_type)
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add account",
            FormMode::Edit(_) => "Update account",
        }
    }

    pub fn set_type(&mut self, label: &str) {
        self.account_type = AccountType::from(label);
    }

    /// Fill the form from a fetched account and switch to editing it
    pub fn populate(&mut self, account: &Account) {
        self.account_type = account.account_type.clone();
        self.details = account.details.clone();
        self.stock_symbol = account.stock_symbol.clone().unwrap_or_default();
        self.shares = account.shares.map(|s| s.to_string()).unwrap_or_default();
        self.market_value = account.market_value_or_zero().to_string();
        self.mode = FormMode::Edit(account.id);
    }

    /// Reset every field and return to create mode
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_payload(&self) -> Result<AccountPayload, ValidationError> {
        let details = self.details.trim();
        if details.is_empty() {
            return Err(ValidationError::EmptyDetails);
        }

        if self.account_type.is_stock() {
            let symbol = self.stock_symbol.trim();
            if symbol.is_empty() {
                return Err(ValidationError::MissingStockSymbol);
            }

            Ok(AccountPayload {
                account_type: self.account_type.clone(),
                details: details.to_string(),
                stock_symbol: Some(symbol.to_string()),
                shares: parse_shares(&self.shares)?,
                market_value: 0.0,
            })
        } else {
            Ok(AccountPayload {
                account_type: self.account_type.clone(),
                details: details.to_string(),
                stock_symbol: None,
                shares: 0,
                market_value: parse_market_value(&self.market_value)?,
            })
        }
    }

    /// Validate the fields and decide between create and update
    pub fn submission(&self) -> Result<AccountSubmission, ValidationError> {
        let payload = self.to_payload()?;
        Ok(match self.mode {
            FormMode::Create => AccountSubmission::Create(payload),
            FormMode::Edit(id) => AccountSubmission::Update { id, payload },
        })
    }
}

fn parse_shares(input: &str) -> Result<u64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| ValidationError::InvalidShares(trimmed.to_string()))
}

fn parse_market_value(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::InvalidMarketValue(trimmed.to_string()))
}
