//! View models for the account table, the account selection lists, the
//! per-type table and the transactions table.
//!
//! Every function here rebuilds its output from the records it is given; no
//! state from a previous render is consulted.

use std::cmp::Ordering;

use crate::config::DashboardConfig;
use crate::{Account, AccountId, Transaction, TypeMarketValues};

#[derive(Debug, Clone, PartialEq)]
pub struct AccountRow {
    pub id: AccountId,
    pub account_type: String,
    pub details: String,
    pub stock_symbol: String,
    pub shares: String,
    pub market_value: String,
}

/// One `<option>`; an empty value marks the placeholder
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// The four account pickers used by the transfer, income and expense dialogs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountSelects {
    pub transfer_from: Vec<SelectOption>,
    pub transfer_to: Vec<SelectOption>,
    pub income: Vec<SelectOption>,
    pub expense: Vec<SelectOption>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountsView {
    pub rows: Vec<AccountRow>,
    pub selects: AccountSelects,
    /// Sum of all market values, two decimals
    pub total: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeValueRow {
    pub account_type: String,
    pub market_value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub account: String,
    /// Signed change, e.g. "+100.00" or "-20.50"
    pub change: String,
    pub is_debit: bool,
    pub reason: String,
    pub timestamp: String,
    /// Balance after the change, empty when the server did not send it
    pub balance_after: String,
}

pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Accounts ordered by market value, largest first. Missing values count as
/// zero and equal values keep their input order.
pub fn sort_by_market_value(accounts: &[Account]) -> Vec<Account> {
    let mut sorted = accounts.to_vec();
    sorted.sort_by(|a, b| {
        b.market_value_or_zero()
            .partial_cmp(&a.market_value_or_zero())
            .unwrap_or(Ordering::Equal)
    });
    sorted
}

pub fn total_market_value(accounts: &[Account]) -> f64 {
    accounts.iter().map(Account::market_value_or_zero).sum()
}

/// Build the account table, the four selection lists and the total in one pass
pub fn render_accounts(accounts: &[Account], config: &DashboardConfig) -> AccountsView {
    let sorted = sort_by_market_value(accounts);

    let mut selects = AccountSelects {
        transfer_from: vec![placeholder(&config.transfer_from_placeholder)],
        transfer_to: vec![placeholder(&config.transfer_to_placeholder)],
        income: vec![placeholder(&config.account_placeholder)],
        expense: vec![placeholder(&config.account_placeholder)],
    };
    let mut rows = Vec::with_capacity(sorted.len());

    for account in &sorted {
        rows.push(AccountRow {
            id: account.id,
            account_type: account.account_type.to_string(),
            details: account.details.clone(),
            stock_symbol: account.stock_symbol.clone().unwrap_or_default(),
            shares: account.shares.map(|s| s.to_string()).unwrap_or_default(),
            market_value: account
                .market_value
                .map(format_amount)
                .unwrap_or_else(|| config.missing_value_placeholder.clone()),
        });

        let option = SelectOption {
            value: account.id.to_string(),
            label: account.option_label(),
        };
        selects.transfer_from.push(option.clone());
        selects.transfer_to.push(option.clone());
        selects.income.push(option.clone());
        selects.expense.push(option);
    }

    AccountsView {
        rows,
        selects,
        total: format_amount(total_market_value(&sorted)),
    }
}

pub fn render_type_values(values: &TypeMarketValues, config: &DashboardConfig) -> Vec<TypeValueRow> {
    values
        .iter()
        .map(|(label, value)| TypeValueRow {
            account_type: label.clone(),
            market_value: value
                .map(format_amount)
                .unwrap_or_else(|| config.missing_value_placeholder.clone()),
        })
        .collect()
}

/// Rows in server order
pub fn render_transactions(transactions: &[Transaction], config: &DashboardConfig) -> Vec<TransactionRow> {
    transactions
        .iter()
        .map(|tx| TransactionRow {
            account: tx
                .account_details
                .as_deref()
                .filter(|label| !label.trim().is_empty())
                .unwrap_or(&config.deleted_account_label)
                .to_string(),
            change: format!("{:+.2}", tx.change),
            is_debit: tx.change < 0.0,
            reason: tx.reason.clone().unwrap_or_default(),
            timestamp: tx.timestamp.clone(),
            balance_after: tx.new_balance.map(format_amount).unwrap_or_default(),
        })
        .collect()
}

fn placeholder(label: &str) -> SelectOption {
    SelectOption {
        value: String::new(),
        label: label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AccountType;

    fn account(id: AccountId, market_value: Option<f64>) -> Account {
        Account {
            id,
            account_type: AccountType::Bank,
            details: format!("Account {}", id),
            stock_symbol: None,
            shares: None,
            market_value,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_example_accounts_render_total_and_order() {
        let json = r#"[
            {"id": 1, "type": "银行账户", "marketValue": 100},
            {"id": 2, "type": "股票账户", "marketValue": 250.5}
        ]"#;
        let accounts: Vec<Account> = serde_json::from_str(json).unwrap();
        let view = render_accounts(&accounts, &DashboardConfig::default());

        assert_eq!(view.total, "350.50");
        let order: Vec<AccountId> = view.rows.iter().map(|r| r.id).collect();
        assert_eq!(order, vec![2, 1]);
        assert_eq!(view.rows[0].market_value, "250.50");
    }

    #[test]
    fn test_missing_values_sort_as_zero_and_ties_keep_order() {
        let accounts = vec![
            account(1, None),
            account(2, Some(-10.0)),
            account(3, Some(0.0)),
            account(4, Some(30.0)),
            account(5, None),
        ];

        let order: Vec<AccountId> = sort_by_market_value(&accounts).iter().map(|a| a.id).collect();
        assert_eq!(order, vec![4, 1, 3, 5, 2]);
        assert_eq!(total_market_value(&accounts), 20.0);
    }

    #[test]
    fn test_missing_value_uses_placeholder() {
        let view = render_accounts(&[account(9, None)], &DashboardConfig::default());
        assert_eq!(view.rows[0].market_value, "N/A");
        assert_eq!(view.total, "0.00");
    }

    #[test]
    fn test_selects_have_placeholder_and_all_accounts() {
        let config = DashboardConfig::default();
        let view = render_accounts(&[account(1, Some(5.0)), account(2, Some(50.0))], &config);

        for list in [
            &view.selects.transfer_from,
            &view.selects.transfer_to,
            &view.selects.income,
            &view.selects.expense,
        ] {
            assert_eq!(list.len(), 3);
            assert_eq!(list[0].value, "");
            assert_eq!(list[1].value, "2");
            assert_eq!(list[1].label, "Account 2 (银行账户)");
        }
        assert_eq!(view.selects.transfer_from[0].label, config.transfer_from_placeholder);

        let empty = render_accounts(&[], &config);
        assert_eq!(empty.selects.income.len(), 1);
        assert!(empty.rows.is_empty());
    }

    #[test]
    fn test_render_is_idempotent() {
        let config = DashboardConfig::default();
        let accounts = vec![account(1, Some(5.0)), account(2, Some(7.0))];
        assert_eq!(render_accounts(&accounts, &config), render_accounts(&accounts, &config));
    }

    #[test]
    fn test_type_values_rows() {
        let values = TypeMarketValues(vec![
            ("股票账户".to_string(), Some(1234.567)),
            ("银行账户".to_string(), None),
        ]);
        let rows = render_type_values(&values, &DashboardConfig::default());
        assert_eq!(rows[0].market_value, "1234.57");
        assert_eq!(rows[1].market_value, "N/A");
        assert_eq!(rows[1].account_type, "银行账户");
    }

    #[test]
    fn test_transactions_use_deleted_sentinel() {
        let transactions = vec![
            Transaction {
                id: Some(1),
                account_id: 1,
                account_details: Some("Checking".to_string()),
                change: 100.0,
                reason: Some("salary".to_string()),
                timestamp: "2024-05-01 09:00:00".to_string(),
                previous_balance: Some(0.0),
                new_balance: Some(100.0),
            },
            Transaction {
                id: Some(2),
                account_id: 99,
                account_details: None,
                change: -20.5,
                reason: None,
                timestamp: "2024-05-02 09:00:00".to_string(),
                previous_balance: None,
                new_balance: None,
            },
        ];

        let rows = render_transactions(&transactions, &DashboardConfig::default());
        assert_eq!(rows[0].account, "Checking");
        assert_eq!(rows[0].change, "+100.00");
        assert_eq!(rows[0].balance_after, "100.00");
        assert_eq!(rows[1].account, "Deleted account");
        assert_eq!(rows[1].change, "-20.50");
        assert!(rows[1].is_debit);
        assert_eq!(rows[1].timestamp, "2024-05-02 09:00:00");
    }
}
