//! Validation of the income, expense, transfer and transaction-query forms.
//!
//! Inputs are kept as the raw strings the user typed; a request object only
//! exists once every field has been checked.

use chrono::{Datelike, NaiveDate};

use crate::error::ValidationError;
use crate::{AccountId, ExpenseRequest, IncomeRequest, TransactionQuery, TransferRequest};

/// Date format expected by `/api/transactions`
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw input of the income or expense dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoneyFormInput {
    pub account_id: String,
    pub reason: String,
    pub amount: String,
}

/// Raw input of the transfer dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferFormInput {
    pub from_account_id: String,
    pub to_account_id: String,
    pub amount: String,
}

/// Raw input of the transactions query dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateRangeInput {
    pub start: String,
    pub end: String,
}

impl MoneyFormInput {
    pub fn to_income_request(&self) -> Result<IncomeRequest, ValidationError> {
        Ok(IncomeRequest {
            account_id: parse_account_id("income", &self.account_id)?,
            reason: self.reason.trim().to_string(),
            amount: parse_positive_amount(&self.amount)?,
        })
    }

    pub fn to_expense_request(&self) -> Result<ExpenseRequest, ValidationError> {
        Ok(ExpenseRequest {
            account_id: parse_account_id("expense", &self.account_id)?,
            reason: self.reason.trim().to_string(),
            amount: parse_positive_amount(&self.amount)?,
        })
    }
}

impl TransferFormInput {
    pub fn to_request(&self) -> Result<TransferRequest, ValidationError> {
        let from_account_id = parse_account_id("the transfer source", &self.from_account_id)?;
        let to_account_id = parse_account_id("the transfer destination", &self.to_account_id)?;
        let amount = parse_positive_amount(&self.amount)?;

        if from_account_id == to_account_id {
            return Err(ValidationError::SameAccountTransfer);
        }

        Ok(TransferRequest {
            from_account_id,
            to_account_id,
            amount,
        })
    }
}

impl DateRangeInput {
    /// Range covering the first day of `today`'s month through `today`
    pub fn current_month(today: NaiveDate) -> Self {
        let first = today.with_day0(0).unwrap_or(today);
        Self {
            start: first.format(QUERY_DATE_FORMAT).to_string(),
            end: today.format(QUERY_DATE_FORMAT).to_string(),
        }
    }

    pub fn to_query(&self) -> Result<TransactionQuery, ValidationError> {
        if self.start.trim().is_empty() || self.end.trim().is_empty() {
            return Err(ValidationError::MissingDate);
        }

        let start = parse_date(&self.start)?;
        let end = parse_date(&self.end)?;
        if end < start {
            return Err(ValidationError::EndBeforeStart);
        }

        Ok(TransactionQuery { start, end })
    }
}

/// Parse the value of an account `<select>`; the placeholder option is empty
pub fn parse_account_id(field: &'static str, input: &str) -> Result<AccountId, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingAccount(field));
    }

    trimmed
        .parse::<AccountId>()
        .map_err(|_| ValidationError::InvalidAccountId {
            field,
            value: trimmed.to_string(),
        })
}

pub fn parse_positive_amount(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingAmount);
    }

    let amount = trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::InvalidAmount(trimmed.to_string()))?;

    if amount <= 0.0 {
        return Err(ValidationError::AmountNotPositive);
    }

    Ok(amount)
}

pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, QUERY_DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(account_id: &str, amount: &str) -> MoneyFormInput {
        MoneyFormInput {
            account_id: account_id.to_string(),
            reason: " salary ".to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn test_income_request_from_valid_input() {
        let request = money("4", "1200.50").to_income_request().unwrap();
        assert_eq!(request.account_id, 4);
        assert_eq!(request.amount, 1200.50);
        assert_eq!(request.reason, "salary");
    }

    #[test]
    fn test_amount_must_be_positive_number() {
        assert_eq!(
            money("4", "abc").to_expense_request(),
            Err(ValidationError::InvalidAmount("abc".to_string()))
        );
        assert_eq!(
            money("4", "0").to_expense_request(),
            Err(ValidationError::AmountNotPositive)
        );
        assert_eq!(
            money("4", "-5").to_income_request(),
            Err(ValidationError::AmountNotPositive)
        );
        assert_eq!(
            money("4", "").to_income_request(),
            Err(ValidationError::MissingAmount)
        );
        assert_eq!(
            money("4", "NaN").to_income_request(),
            Err(ValidationError::InvalidAmount("NaN".to_string()))
        );
    }

    #[test]
    fn test_account_must_be_selected() {
        assert_eq!(
            money("", "10").to_income_request(),
            Err(ValidationError::MissingAccount("income"))
        );
        assert!(matches!(
            money("x1", "10").to_expense_request(),
            Err(ValidationError::InvalidAccountId { .. })
        ));
    }

    #[test]
    fn test_transfer_validation() {
        let input = TransferFormInput {
            from_account_id: "1".to_string(),
            to_account_id: "2".to_string(),
            amount: "50".to_string(),
        };
        let request = input.to_request().unwrap();
        assert_eq!(request.from_account_id, 1);
        assert_eq!(request.to_account_id, 2);

        let missing_to = TransferFormInput {
            to_account_id: String::new(),
            ..input.clone()
        };
        assert_eq!(
            missing_to.to_request(),
            Err(ValidationError::MissingAccount("the transfer destination"))
        );
    }

    // Added rule: source and destination of a transfer must differ.
    #[test]
    fn test_transfer_to_same_account_is_rejected() {
        let input = TransferFormInput {
            from_account_id: "3".to_string(),
            to_account_id: "3".to_string(),
            amount: "10".to_string(),
        };
        assert_eq!(input.to_request(), Err(ValidationError::SameAccountTransfer));
    }

    #[test]
    fn test_default_range_is_current_month() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        let range = DateRangeInput::current_month(today);
        assert_eq!(range.start, "2024-03-01");
        assert_eq!(range.end, "2024-03-17");

        let query = range.to_query().unwrap();
        assert_eq!(query.start, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(query.end, today);
    }

    #[test]
    fn test_date_range_validation() {
        let reversed = DateRangeInput {
            start: "2024-03-10".to_string(),
            end: "2024-03-01".to_string(),
        };
        assert_eq!(reversed.to_query(), Err(ValidationError::EndBeforeStart));

        let same_day = DateRangeInput {
            start: "2024-03-10".to_string(),
            end: "2024-03-10".to_string(),
        };
        assert!(same_day.to_query().is_ok());

        let missing = DateRangeInput {
            start: String::new(),
            end: "2024-03-10".to_string(),
        };
        assert_eq!(missing.to_query(), Err(ValidationError::MissingDate));

        let garbage = DateRangeInput {
            start: "03/01/2024".to_string(),
            end: "2024-03-10".to_string(),
        };
        assert_eq!(
            garbage.to_query(),
            Err(ValidationError::InvalidDate("03/01/2024".to_string()))
        );
    }
}
