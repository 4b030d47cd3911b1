//! # Dashboard Controller
//!
//! Single owner of the dashboard state: the account form, the modal
//! coordinator, the request tracker, the raw dialog inputs and the latest
//! rendered views.
//!
//! The controller never performs I/O. `Dashboard::update` takes an
//! [`Action`] (a user intent or the completion of an API call) and returns
//! the [`Effect`]s the host must carry out: API calls to perform and notices
//! to show. Completed calls come back as `Action::Completed`.
//!
//! ## Data Flow:
//! 1. The host dispatches `Action::Load` once the page is up
//! 2. `update` validates input and emits `Effect::Call`s
//! 3. The host runs each call through [`crate::executor::perform`]
//! 4. The result is dispatched back and rebuilds the affected view
//! 5. Every successful mutation re-fetches accounts and type values

use chrono::NaiveDate;
use log::{debug, error, info};

use crate::account_form::{AccountForm, AccountSubmission, FormMode};
use crate::chart::LineChartConfig;
use crate::config::DashboardConfig;
use crate::error::{ApiError, ValidationError};
use crate::modal::{ModalCoordinator, ModalKind};
use crate::request_guard::{RequestToken, RequestTracker, ViewKind};
use crate::validation::{DateRangeInput, MoneyFormInput, TransferFormInput};
use crate::view::{self, AccountsView, TransactionRow, TypeValueRow};
use crate::{
    Account, AccountId, AccountPayload, ExpenseRequest, IncomeRequest, MonthlyMarketValue,
    StatusResponse, Transaction, TransactionQuery, TransferRequest, TypeMarketValues,
};

/// Editable inputs, addressed by the host when a field changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    AccountType,
    Details,
    StockSymbol,
    Shares,
    MarketValue,
    IncomeAccount,
    IncomeReason,
    IncomeAmount,
    ExpenseAccount,
    ExpenseReason,
    ExpenseAmount,
    TransferFrom,
    TransferTo,
    TransferAmount,
    QueryStart,
    QueryEnd,
}

/// Income, expense and transfer share their completion handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Income,
    Expense,
    Transfer,
}

impl Movement {
    fn modal(self) -> ModalKind {
        match self {
            Movement::Income => ModalKind::Income,
            Movement::Expense => ModalKind::Expense,
            Movement::Transfer => ModalKind::Transfer,
        }
    }

    fn success_text(self) -> &'static str {
        match self {
            Movement::Income => "Income recorded",
            Movement::Expense => "Expense recorded",
            Movement::Transfer => "Transfer completed",
        }
    }

    fn failure_text(self) -> &'static str {
        match self {
            Movement::Income => "Failed to record income",
            Movement::Expense => "Failed to record expense",
            Movement::Transfer => "Transfer failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Page load: fetch accounts, monthly values and type values
    Load { today: NaiveDate },
    Input(Field, String),
    SubmitAccountForm,
    ResetAccountForm,
    EditAccount(AccountId),
    RequestDelete(AccountId),
    ConfirmDelete,
    ShowModal(ModalKind),
    HideModal(ModalKind),
    SubmitIncome,
    SubmitExpense,
    SubmitTransfer,
    QueryTransactions,
    RefreshMarketValues,
    Completed(Response),
}

/// A request the host must send
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    ListAccounts(RequestToken),
    GetAccount { id: AccountId, token: RequestToken },
    CreateAccount(AccountPayload),
    UpdateAccount { id: AccountId, payload: AccountPayload },
    DeleteAccount(AccountId),
    RefreshMarketValues,
    MonthlyMarketValues(RequestToken),
    TypeMarketValues(RequestToken),
    Transactions { query: TransactionQuery, token: RequestToken },
    RecordIncome(IncomeRequest),
    RecordExpense(ExpenseRequest),
    Transfer(TransferRequest),
}

/// Outcome of an [`ApiCall`], carrying whatever the call was tagged with
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    AccountsLoaded {
        token: RequestToken,
        result: Result<Vec<Account>, ApiError>,
    },
    AccountLoaded {
        id: AccountId,
        token: RequestToken,
        result: Result<Account, ApiError>,
    },
    AccountSaved {
        mode: FormMode,
        result: Result<Account, ApiError>,
    },
    AccountDeleted {
        id: AccountId,
        result: Result<StatusResponse, ApiError>,
    },
    MarketValuesRefreshed(Result<StatusResponse, ApiError>),
    MonthlyValuesLoaded {
        token: RequestToken,
        result: Result<Vec<MonthlyMarketValue>, ApiError>,
    },
    TypeValuesLoaded {
        token: RequestToken,
        result: Result<TypeMarketValues, ApiError>,
    },
    TransactionsLoaded {
        token: RequestToken,
        result: Result<Vec<Transaction>, ApiError>,
    },
    MovementRecorded {
        movement: Movement,
        result: Result<StatusResponse, ApiError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A blocking message for the user
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Prefer the server's own message over the generic text
    fn from_api_error(err: &ApiError, fallback: &str) -> Self {
        Self::error(err.server_message().unwrap_or(fallback))
    }

    fn from_validation(err: &ValidationError) -> Self {
        Self::error(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Call(ApiCall),
    Notify(Notice),
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
    form: AccountForm,
    modals: ModalCoordinator,
    requests: RequestTracker,
    income: MoneyFormInput,
    expense: MoneyFormInput,
    transfer: TransferFormInput,
    query: DateRangeInput,
    accounts: AccountsView,
    type_values: Vec<TypeValueRow>,
    chart: Option<LineChartConfig>,
    transactions: Vec<TransactionRow>,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Self {
        let accounts = view::render_accounts(&[], &config);
        Self {
            config,
            form: AccountForm::new(),
            modals: ModalCoordinator::new(),
            requests: RequestTracker::new(),
            income: MoneyFormInput::default(),
            expense: MoneyFormInput::default(),
            transfer: TransferFormInput::default(),
            query: DateRangeInput::default(),
            accounts,
            type_values: Vec::new(),
            chart: None,
            transactions: Vec::new(),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn form(&self) -> &AccountForm {
        &self.form
    }

    pub fn modals(&self) -> &ModalCoordinator {
        &self.modals
    }

    pub fn accounts(&self) -> &AccountsView {
        &self.accounts
    }

    pub fn type_values(&self) -> &[TypeValueRow] {
        &self.type_values
    }

    /// `None` until the monthly series has loaded
    pub fn chart(&self) -> Option<&LineChartConfig> {
        self.chart.as_ref()
    }

    pub fn transactions(&self) -> &[TransactionRow] {
        &self.transactions
    }

    pub fn income_input(&self) -> &MoneyFormInput {
        &self.income
    }

    pub fn expense_input(&self) -> &MoneyFormInput {
        &self.expense
    }

    pub fn transfer_input(&self) -> &TransferFormInput {
        &self.transfer
    }

    pub fn query_input(&self) -> &DateRangeInput {
        &self.query
    }

    pub fn update(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Load { today } => self.load(today),
            Action::Input(field, value) => {
                self.set_field(field, value);
                Vec::new()
            }
            Action::SubmitAccountForm => self.submit_account_form(),
            Action::ResetAccountForm => {
                self.requests.invalidate(ViewKind::EditAccount);
                self.form.clear();
                Vec::new()
            }
            Action::EditAccount(id) => {
                let token = self.requests.issue(ViewKind::EditAccount);
                vec![Effect::Call(ApiCall::GetAccount { id, token })]
            }
            Action::RequestDelete(id) => {
                self.modals.request_delete(id);
                Vec::new()
            }
            Action::ConfirmDelete => match self.modals.take_pending_delete() {
                Some(id) => vec![Effect::Call(ApiCall::DeleteAccount(id))],
                None => Vec::new(),
            },
            Action::ShowModal(kind) => {
                self.modals.show(kind);
                Vec::new()
            }
            Action::HideModal(kind) => {
                self.modals.hide(kind);
                Vec::new()
            }
            Action::SubmitIncome => {
                let call = self.income.to_income_request().map(ApiCall::RecordIncome);
                self.submit_validated(call)
            }
            Action::SubmitExpense => {
                let call = self.expense.to_expense_request().map(ApiCall::RecordExpense);
                self.submit_validated(call)
            }
            Action::SubmitTransfer => {
                let call = self.transfer.to_request().map(ApiCall::Transfer);
                self.submit_validated(call)
            }
            Action::QueryTransactions => match self.query.to_query() {
                Ok(query) => {
                    let token = self.requests.issue(ViewKind::Transactions);
                    vec![Effect::Call(ApiCall::Transactions { query, token })]
                }
                Err(err) => vec![Effect::Notify(Notice::from_validation(&err))],
            },
            Action::RefreshMarketValues => vec![Effect::Call(ApiCall::RefreshMarketValues)],
            Action::Completed(response) => self.complete(response),
        }
    }

    fn load(&mut self, today: NaiveDate) -> Vec<Effect> {
        info!("📊 Loading dashboard data");
        self.query = DateRangeInput::current_month(today);

        let mut effects = self.refresh_effects();
        let monthly = self.requests.issue(ViewKind::MonthlyValues);
        effects.insert(1, Effect::Call(ApiCall::MonthlyMarketValues(monthly)));
        effects
    }

    /// One accounts fetch and one type-values fetch
    fn refresh_effects(&mut self) -> Vec<Effect> {
        let accounts = self.requests.issue(ViewKind::Accounts);
        let types = self.requests.issue(ViewKind::TypeValues);
        vec![
            Effect::Call(ApiCall::ListAccounts(accounts)),
            Effect::Call(ApiCall::TypeMarketValues(types)),
        ]
    }

    fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::AccountType => self.form.set_type(&value),
            Field::Details => self.form.details = value,
            Field::StockSymbol => self.form.stock_symbol = value,
            Field::Shares => self.form.shares = value,
            Field::MarketValue => self.form.market_value = value,
            Field::IncomeAccount => self.income.account_id = value,
            Field::IncomeReason => self.income.reason = value,
            Field::IncomeAmount => self.income.amount = value,
            Field::ExpenseAccount => self.expense.account_id = value,
            Field::ExpenseReason => self.expense.reason = value,
            Field::ExpenseAmount => self.expense.amount = value,
            Field::TransferFrom => self.transfer.from_account_id = value,
            Field::TransferTo => self.transfer.to_account_id = value,
            Field::TransferAmount => self.transfer.amount = value,
            Field::QueryStart => self.query.start = value,
            Field::QueryEnd => self.query.end = value,
        }
    }

    fn submit_account_form(&mut self) -> Vec<Effect> {
        match self.form.submission() {
            Ok(AccountSubmission::Create(payload)) => {
                vec![Effect::Call(ApiCall::CreateAccount(payload))]
            }
            Ok(AccountSubmission::Update { id, payload }) => {
                vec![Effect::Call(ApiCall::UpdateAccount { id, payload })]
            }
            Err(err) => vec![Effect::Notify(Notice::from_validation(&err))],
        }
    }

    fn submit_validated(&self, call: Result<ApiCall, ValidationError>) -> Vec<Effect> {
        match call {
            Ok(call) => vec![Effect::Call(call)],
            Err(err) => {
                debug!("Rejected submission: {}", err);
                vec![Effect::Notify(Notice::from_validation(&err))]
            }
        }
    }

    /// Drop responses superseded by a newer request for the same view
    fn accept(&self, view: ViewKind, token: RequestToken) -> bool {
        let current = self.requests.is_current(view, token);
        if !current {
            debug!("Ignoring stale {:?} response {}", view, token);
        }
        current
    }

    fn complete(&mut self, response: Response) -> Vec<Effect> {
        match response {
            Response::AccountsLoaded { token, result } => {
                if self.accept(ViewKind::Accounts, token) {
                    match result {
                        Ok(accounts) => {
                            info!("💰 Loaded {} accounts", accounts.len());
                            self.accounts = view::render_accounts(&accounts, &self.config);
                        }
                        Err(err) => error!("❌ Failed to fetch accounts: {}", err),
                    }
                }
                Vec::new()
            }
            Response::TypeValuesLoaded { token, result } => {
                if self.accept(ViewKind::TypeValues, token) {
                    match result {
                        Ok(values) => {
                            self.type_values = view::render_type_values(&values, &self.config)
                        }
                        Err(err) => error!("❌ Failed to fetch type market values: {}", err),
                    }
                }
                Vec::new()
            }
            Response::MonthlyValuesLoaded { token, result } => {
                if self.accept(ViewKind::MonthlyValues, token) {
                    match result {
                        Ok(points) => {
                            self.chart = Some(LineChartConfig::from_points(&points, &self.config.chart))
                        }
                        Err(err) => error!("❌ Failed to fetch monthly market values: {}", err),
                    }
                }
                Vec::new()
            }
            Response::TransactionsLoaded { token, result } => {
                if !self.accept(ViewKind::Transactions, token) {
                    return Vec::new();
                }
                match result {
                    Ok(transactions) => {
                        self.transactions = view::render_transactions(&transactions, &self.config);
                        Vec::new()
                    }
                    Err(err) => {
                        error!("❌ Failed to fetch transactions: {}", err);
                        vec![Effect::Notify(Notice::from_api_error(&err, "Failed to load transactions"))]
                    }
                }
            }
            Response::AccountLoaded { id, token, result } => {
                if !self.accept(ViewKind::EditAccount, token) {
                    return Vec::new();
                }
                match result {
                    Ok(account) => {
                        self.form.populate(&account);
                        Vec::new()
                    }
                    Err(err) => {
                        error!("❌ Failed to fetch account {}: {}", id, err);
                        vec![Effect::Notify(Notice::from_api_error(&err, "Failed to load account"))]
                    }
                }
            }
            Response::AccountSaved { mode, result } => match result {
                Ok(account) => {
                    info!("✅ Saved account {}", account.id);
                    // Keep a form the user has since moved to another account
                    if self.form.mode() == mode {
                        self.form.clear();
                    }
                    self.refresh_effects()
                }
                Err(err) => {
                    let fallback = match mode {
                        FormMode::Create => "Failed to add account",
                        FormMode::Edit(_) => "Failed to update account",
                    };
                    error!("❌ {}: {}", fallback, err);
                    vec![Effect::Notify(Notice::from_api_error(&err, fallback))]
                }
            },
            Response::AccountDeleted { id, result } => match result {
                Ok(_) => {
                    info!("🗑️ Deleted account {}", id);
                    if self.form.mode() == FormMode::Edit(id) {
                        self.form.clear();
                    }
                    self.modals.hide(ModalKind::DeleteConfirm);
                    let mut effects = self.refresh_effects();
                    effects.push(Effect::Notify(Notice::info("Account deleted")));
                    effects
                }
                Err(err) => {
                    error!("❌ Failed to delete account {}: {}", id, err);
                    if self.modals.is_open(ModalKind::DeleteConfirm) {
                        self.modals.request_delete(id);
                    }
                    vec![Effect::Notify(Notice::from_api_error(&err, "Failed to delete account"))]
                }
            },
            Response::MarketValuesRefreshed(result) => match result {
                Ok(_) => {
                    let mut effects = self.refresh_effects();
                    effects.push(Effect::Notify(Notice::info("Market values refreshed")));
                    effects
                }
                Err(err) => {
                    error!("❌ Failed to refresh market values: {}", err);
                    vec![Effect::Notify(Notice::from_api_error(&err, "Failed to refresh market values"))]
                }
            },
            Response::MovementRecorded { movement, result } => match result {
                Ok(status) => {
                    self.modals.hide(movement.modal());
                    let mut effects = self.refresh_effects();
                    let message = status
                        .message
                        .unwrap_or_else(|| movement.success_text().to_string());
                    effects.push(Effect::Notify(Notice::info(message)));
                    effects
                }
                Err(err) => {
                    error!("❌ {}: {}", movement.failure_text(), err);
                    vec![Effect::Notify(Notice::from_api_error(&err, movement.failure_text()))]
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AccountType;

    fn dashboard() -> Dashboard {
        Dashboard::new(DashboardConfig::default())
    }

    fn calls(effects: &[Effect]) -> Vec<&ApiCall> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Call(call) => Some(call),
                _ => None,
            })
            .collect()
    }

    fn notices(effects: &[Effect]) -> Vec<&Notice> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Notify(notice) => Some(notice),
                _ => None,
            })
            .collect()
    }

    fn account(id: AccountId, market_value: f64) -> Account {
        Account {
            id,
            account_type: AccountType::Bank,
            details: format!("Account {}", id),
            stock_symbol: None,
            shares: None,
            market_value: Some(market_value),
            created_at: None,
            updated_at: None,
        }
    }

    fn type_token(effects: &[Effect]) -> RequestToken {
        calls(effects)
            .into_iter()
            .find_map(|c| match c {
                ApiCall::TypeMarketValues(token) => Some(*token),
                _ => None,
            })
            .unwrap()
    }

    fn accounts_token(effects: &[Effect]) -> RequestToken {
        calls(effects)
            .into_iter()
            .find_map(|c| match c {
                ApiCall::ListAccounts(token) => Some(*token),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_load_issues_three_fetches_and_sets_default_range() {
        let mut dash = dashboard();
        let today = NaiveDate::from_ymd_opt(2024, 8, 20).unwrap();
        let effects = dash.update(Action::Load { today });

        let calls = calls(&effects);
        assert_eq!(calls.len(), 3);
        assert!(matches!(calls[0], ApiCall::ListAccounts(_)));
        assert!(matches!(calls[1], ApiCall::MonthlyMarketValues(_)));
        assert!(matches!(calls[2], ApiCall::TypeMarketValues(_)));
        assert_eq!(dash.query_input().start, "2024-08-01");
        assert_eq!(dash.query_input().end, "2024-08-20");
    }

    #[test]
    fn test_invalid_amounts_make_no_calls() {
        let mut dash = dashboard();
        dash.update(Action::Input(Field::IncomeAccount, "1".to_string()));
        dash.update(Action::Input(Field::IncomeAmount, "abc".to_string()));
        let effects = dash.update(Action::SubmitIncome);
        assert!(calls(&effects).is_empty());
        assert_eq!(notices(&effects).len(), 1);

        dash.update(Action::Input(Field::ExpenseAccount, "1".to_string()));
        dash.update(Action::Input(Field::ExpenseAmount, "-4".to_string()));
        let effects = dash.update(Action::SubmitExpense);
        assert!(calls(&effects).is_empty());
        assert_eq!(notices(&effects)[0].kind, NoticeKind::Error);

        dash.update(Action::Input(Field::TransferFrom, "1".to_string()));
        dash.update(Action::Input(Field::TransferTo, "2".to_string()));
        dash.update(Action::Input(Field::TransferAmount, "0".to_string()));
        let effects = dash.update(Action::SubmitTransfer);
        assert!(calls(&effects).is_empty());
        assert_eq!(notices(&effects)[0].message, "Amount must be greater than zero");
    }

    #[test]
    fn test_transfer_to_same_account_makes_no_call() {
        let mut dash = dashboard();
        dash.update(Action::Input(Field::TransferFrom, "2".to_string()));
        dash.update(Action::Input(Field::TransferTo, "2".to_string()));
        dash.update(Action::Input(Field::TransferAmount, "10".to_string()));

        let effects = dash.update(Action::SubmitTransfer);
        assert!(calls(&effects).is_empty());
        assert_eq!(notices(&effects)[0].message, "Cannot transfer to the same account");
    }

    #[test]
    fn test_reversed_date_range_makes_no_call() {
        let mut dash = dashboard();
        dash.update(Action::Input(Field::QueryStart, "2024-05-10".to_string()));
        dash.update(Action::Input(Field::QueryEnd, "2024-05-01".to_string()));

        let effects = dash.update(Action::QueryTransactions);
        assert!(calls(&effects).is_empty());
        assert_eq!(notices(&effects).len(), 1);
    }

    #[test]
    fn test_create_submit_then_refresh_once() {
        let mut dash = dashboard();
        dash.update(Action::Input(Field::Details, "Savings".to_string()));
        dash.update(Action::Input(Field::MarketValue, "99.5".to_string()));

        let effects = dash.update(Action::SubmitAccountForm);
        let submitted = calls(&effects);
        assert_eq!(submitted.len(), 1);
        assert!(matches!(submitted[0], ApiCall::CreateAccount(p) if p.market_value == 99.5));

        let effects = dash.update(Action::Completed(Response::AccountSaved {
            mode: FormMode::Create,
            result: Ok(account(10, 99.5)),
        }));
        let refresh = calls(&effects);
        assert_eq!(refresh.len(), 2);
        assert_eq!(refresh.iter().filter(|c| matches!(c, ApiCall::ListAccounts(_))).count(), 1);
        assert_eq!(refresh.iter().filter(|c| matches!(c, ApiCall::TypeMarketValues(_))).count(), 1);
        assert_eq!(dash.form().mode(), FormMode::Create);
        assert!(dash.form().details.is_empty());
    }

    #[test]
    fn test_edit_then_submit_updates_that_account() {
        let mut dash = dashboard();
        let effects = dash.update(Action::EditAccount(7));
        let token = match calls(&effects)[0] {
            ApiCall::GetAccount { id, token } => {
                assert_eq!(*id, 7);
                *token
            }
            other => panic!("unexpected call {:?}", other),
        };

        dash.update(Action::Completed(Response::AccountLoaded {
            id: 7,
            token,
            result: Ok(account(7, 300.0)),
        }));
        assert_eq!(dash.form().mode(), FormMode::Edit(7));
        assert_eq!(dash.form().submit_label(), "Update account");

        dash.update(Action::Input(Field::MarketValue, "320".to_string()));
        let effects = dash.update(Action::SubmitAccountForm);
        let submitted = calls(&effects);
        assert_eq!(submitted.len(), 1);
        match submitted[0] {
            ApiCall::UpdateAccount { id, payload } => {
                assert_eq!(*id, 7);
                assert_eq!(payload.market_value, 320.0);
            }
            other => panic!("expected update, got {:?}", other),
        }

        dash.update(Action::Completed(Response::AccountSaved {
            mode: FormMode::Edit(7),
            result: Ok(account(7, 320.0)),
        }));
        assert_eq!(dash.form().mode(), FormMode::Create);
    }

    #[test]
    fn test_failed_update_keeps_edit_mode_and_prefers_server_message() {
        let mut dash = dashboard();
        let effects = dash.update(Action::EditAccount(3));
        let token = match calls(&effects)[0] {
            ApiCall::GetAccount { token, .. } => *token,
            other => panic!("unexpected call {:?}", other),
        };
        dash.update(Action::Completed(Response::AccountLoaded {
            id: 3,
            token,
            result: Ok(account(3, 1.0)),
        }));

        let effects = dash.update(Action::Completed(Response::AccountSaved {
            mode: FormMode::Edit(3),
            result: Err(ApiError::Server {
                message: "Account not found".to_string(),
            }),
        }));
        assert!(calls(&effects).is_empty());
        assert_eq!(notices(&effects)[0].message, "Account not found");
        assert_eq!(dash.form().mode(), FormMode::Edit(3));
    }

    #[test]
    fn test_delete_confirm_and_cancel() {
        let mut dash = dashboard();

        let effects = dash.update(Action::RequestDelete(4));
        assert!(effects.is_empty());
        assert!(dash.modals().is_open(ModalKind::DeleteConfirm));

        let effects = dash.update(Action::HideModal(ModalKind::DeleteConfirm));
        assert!(effects.is_empty());
        assert_eq!(dash.update(Action::ConfirmDelete), Vec::new());

        dash.update(Action::RequestDelete(4));
        let effects = dash.update(Action::ConfirmDelete);
        assert_eq!(effects, vec![Effect::Call(ApiCall::DeleteAccount(4))]);

        let effects = dash.update(Action::Completed(Response::AccountDeleted {
            id: 4,
            result: Ok(StatusResponse::default()),
        }));
        assert_eq!(calls(&effects).len(), 2);
        assert_eq!(notices(&effects)[0].message, "Account deleted");
        assert!(!dash.modals().is_open(ModalKind::DeleteConfirm));
        assert_eq!(dash.modals().pending_delete(), None);
    }

    #[test]
    fn test_movement_success_closes_dialog_and_shows_server_message() {
        let mut dash = dashboard();
        dash.update(Action::ShowModal(ModalKind::Transfer));
        dash.update(Action::ShowModal(ModalKind::Income));

        let effects = dash.update(Action::Completed(Response::MovementRecorded {
            movement: Movement::Transfer,
            result: Ok(StatusResponse {
                message: Some("转账成功".to_string()),
            }),
        }));
        assert!(!dash.modals().is_open(ModalKind::Transfer));
        assert!(dash.modals().is_open(ModalKind::Income));
        assert_eq!(calls(&effects).len(), 2);
        assert_eq!(notices(&effects)[0].message, "转账成功");

        let effects = dash.update(Action::Completed(Response::MovementRecorded {
            movement: Movement::Income,
            result: Ok(StatusResponse::default()),
        }));
        assert_eq!(notices(&effects)[0].message, "Income recorded");
    }

    #[test]
    fn test_movement_failure_uses_generic_text() {
        let mut dash = dashboard();
        dash.update(Action::ShowModal(ModalKind::Expense));
        let effects = dash.update(Action::Completed(Response::MovementRecorded {
            movement: Movement::Expense,
            result: Err(ApiError::Network("offline".to_string())),
        }));

        assert!(calls(&effects).is_empty());
        assert_eq!(notices(&effects)[0].message, "Failed to record expense");
        assert!(dash.modals().is_open(ModalKind::Expense));
    }

    #[test]
    fn test_stale_accounts_response_is_ignored() {
        let mut dash = dashboard();
        let first = dash.update(Action::RefreshMarketValues);
        assert_eq!(first, vec![Effect::Call(ApiCall::RefreshMarketValues)]);

        let older = dash.update(Action::Completed(Response::MarketValuesRefreshed(Ok(
            StatusResponse::default(),
        ))));
        let newer = dash.update(Action::Completed(Response::MarketValuesRefreshed(Ok(
            StatusResponse::default(),
        ))));

        dash.update(Action::Completed(Response::AccountsLoaded {
            token: accounts_token(&newer),
            result: Ok(vec![account(1, 10.0), account(2, 20.0)]),
        }));
        dash.update(Action::Completed(Response::AccountsLoaded {
            token: accounts_token(&older),
            result: Ok(vec![account(1, 10.0)]),
        }));

        assert_eq!(dash.accounts().rows.len(), 2);
        assert_eq!(dash.accounts().total, "30.00");

        dash.update(Action::Completed(Response::TypeValuesLoaded {
            token: type_token(&older),
            result: Ok(TypeMarketValues(vec![("银行账户".to_string(), Some(1.0))])),
        }));
        assert!(dash.type_values().is_empty());
    }

    #[test]
    fn test_fetch_failures_keep_previous_views() {
        let mut dash = dashboard();
        let effects = dash.update(Action::Load {
            today: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        });
        dash.update(Action::Completed(Response::AccountsLoaded {
            token: accounts_token(&effects),
            result: Ok(vec![account(1, 10.0)]),
        }));

        let effects = dash.update(Action::RefreshMarketValues);
        assert_eq!(calls(&effects).len(), 1);
        let effects = dash.update(Action::Completed(Response::MarketValuesRefreshed(Ok(
            StatusResponse::default(),
        ))));
        let effects = dash.update(Action::Completed(Response::AccountsLoaded {
            token: accounts_token(&effects),
            result: Err(ApiError::Network("offline".to_string())),
        }));

        assert!(effects.is_empty());
        assert_eq!(dash.accounts().rows.len(), 1);
    }

    #[test]
    fn test_transactions_query_renders_rows() {
        let mut dash = dashboard();
        dash.update(Action::Input(Field::QueryStart, "2024-05-01".to_string()));
        dash.update(Action::Input(Field::QueryEnd, "2024-05-31".to_string()));

        let effects = dash.update(Action::QueryTransactions);
        let token = match calls(&effects)[0] {
            ApiCall::Transactions { query, token } => {
                assert_eq!(query.start, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
                *token
            }
            other => panic!("unexpected call {:?}", other),
        };

        dash.update(Action::Completed(Response::TransactionsLoaded {
            token,
            result: Ok(vec![Transaction {
                id: None,
                account_id: 5,
                account_details: None,
                change: 12.0,
                reason: Some("refund".to_string()),
                timestamp: "2024-05-03 12:00:00".to_string(),
                previous_balance: None,
                new_balance: None,
            }]),
        }));

        assert_eq!(dash.transactions().len(), 1);
        assert_eq!(dash.transactions()[0].account, "Deleted account");
    }

    fn edit_token(effects: &[Effect]) -> RequestToken {
        match calls(effects)[0] {
            ApiCall::GetAccount { token, .. } => *token,
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[test]
    fn test_reset_drops_late_edit_response() {
        let mut dash = dashboard();
        let effects = dash.update(Action::EditAccount(7));
        let token = edit_token(&effects);

        dash.update(Action::ResetAccountForm);
        dash.update(Action::Completed(Response::AccountLoaded {
            id: 7,
            token,
            result: Ok(account(7, 300.0)),
        }));
        assert_eq!(dash.form().mode(), FormMode::Create);

        dash.update(Action::Input(Field::Details, "Fresh".to_string()));
        let effects = dash.update(Action::SubmitAccountForm);
        assert!(matches!(calls(&effects)[0], ApiCall::CreateAccount(_)));
    }

    #[test]
    fn test_double_confirm_deletes_once() {
        let mut dash = dashboard();
        dash.update(Action::RequestDelete(3));

        let first = dash.update(Action::ConfirmDelete);
        let second = dash.update(Action::ConfirmDelete);
        assert_eq!(first, vec![Effect::Call(ApiCall::DeleteAccount(3))]);
        assert!(second.is_empty());
        assert!(dash.modals().is_open(ModalKind::DeleteConfirm));
    }

    #[test]
    fn test_failed_delete_can_be_confirmed_again() {
        let mut dash = dashboard();
        dash.update(Action::RequestDelete(3));
        dash.update(Action::ConfirmDelete);

        let effects = dash.update(Action::Completed(Response::AccountDeleted {
            id: 3,
            result: Err(ApiError::Network("offline".to_string())),
        }));
        assert_eq!(notices(&effects)[0].message, "Failed to delete account");
        assert_eq!(dash.modals().pending_delete(), Some(3));

        let retry = dash.update(Action::ConfirmDelete);
        assert_eq!(retry, vec![Effect::Call(ApiCall::DeleteAccount(3))]);
    }

    #[test]
    fn test_finished_create_keeps_newer_edit() {
        let mut dash = dashboard();
        dash.update(Action::Input(Field::Details, "Savings".to_string()));
        let effects = dash.update(Action::SubmitAccountForm);
        assert!(matches!(calls(&effects)[0], ApiCall::CreateAccount(_)));

        let effects = dash.update(Action::EditAccount(5));
        let token = edit_token(&effects);
        dash.update(Action::Completed(Response::AccountLoaded {
            id: 5,
            token,
            result: Ok(account(5, 80.0)),
        }));

        let effects = dash.update(Action::Completed(Response::AccountSaved {
            mode: FormMode::Create,
            result: Ok(account(11, 0.0)),
        }));
        assert_eq!(calls(&effects).len(), 2);
        assert_eq!(dash.form().mode(), FormMode::Edit(5));
        assert_eq!(dash.form().details, "Account 5");
    }
}
