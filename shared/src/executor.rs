//! Runs an [`ApiCall`] against a [`DashboardApi`] and packs the outcome into
//! the `Action` that feeds it back to the dashboard.

use crate::account_form::FormMode;
use crate::api::DashboardApi;
use crate::dashboard::{Action, ApiCall, Movement, Response};

pub async fn perform<A: DashboardApi + ?Sized>(api: &A, call: ApiCall) -> Action {
    let response = match call {
        ApiCall::ListAccounts(token) => Response::AccountsLoaded {
            token,
            result: api.list_accounts().await,
        },
        ApiCall::GetAccount { id, token } => Response::AccountLoaded {
            id,
            token,
            result: api.get_account(id).await,
        },
        ApiCall::CreateAccount(payload) => Response::AccountSaved {
            mode: FormMode::Create,
            result: api.create_account(&payload).await,
        },
        ApiCall::UpdateAccount { id, payload } => Response::AccountSaved {
            mode: FormMode::Edit(id),
            result: api.update_account(id, &payload).await,
        },
        ApiCall::DeleteAccount(id) => Response::AccountDeleted {
            id,
            result: api.delete_account(id).await,
        },
        ApiCall::RefreshMarketValues => {
            Response::MarketValuesRefreshed(api.refresh_market_values().await)
        }
        ApiCall::MonthlyMarketValues(token) => Response::MonthlyValuesLoaded {
            token,
            result: api.monthly_market_values().await,
        },
        ApiCall::TypeMarketValues(token) => Response::TypeValuesLoaded {
            token,
            result: api.type_market_values().await,
        },
        ApiCall::Transactions { query, token } => Response::TransactionsLoaded {
            token,
            result: api.transactions(&query).await,
        },
        ApiCall::RecordIncome(request) => Response::MovementRecorded {
            movement: Movement::Income,
            result: api.record_income(&request).await,
        },
        ApiCall::RecordExpense(request) => Response::MovementRecorded {
            movement: Movement::Expense,
            result: api.record_expense(&request).await,
        },
        ApiCall::Transfer(request) => Response::MovementRecorded {
            movement: Movement::Transfer,
            result: api.transfer(&request).await,
        },
    };
    Action::Completed(response)
}
