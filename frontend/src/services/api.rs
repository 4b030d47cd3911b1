use async_trait::async_trait;
use gloo::net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::api::{decode_body, endpoints};
use shared::{
    Account, AccountId, AccountPayload, ApiError, DashboardApi, DashboardConfig, ExpenseRequest,
    IncomeRequest, MonthlyMarketValue, StatusResponse, Transaction, TransactionQuery,
    TransferRequest, TypeMarketValues,
};

/// API client for the finance backend
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// An empty base URL targets the origin that served the page
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            base_url: config.url(""),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send the request and decode whatever body comes back, status aside
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_body(&body)
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = request
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_body(&text)
    }
}

#[async_trait(?Send)]
impl DashboardApi for ApiClient {
    async fn list_accounts(&self) -> Result<Vec<Account>, ApiError> {
        self.send(Request::get(&self.url(endpoints::ACCOUNTS))).await
    }

    async fn get_account(&self, id: AccountId) -> Result<Account, ApiError> {
        self.send(Request::get(&self.url(&endpoints::account(id)))).await
    }

    async fn create_account(&self, payload: &AccountPayload) -> Result<Account, ApiError> {
        self.send_json(Request::post(&self.url(endpoints::ACCOUNTS)), payload)
            .await
    }

    async fn update_account(&self, id: AccountId, payload: &AccountPayload) -> Result<Account, ApiError> {
        self.send_json(Request::put(&self.url(&endpoints::account(id))), payload)
            .await
    }

    async fn delete_account(&self, id: AccountId) -> Result<StatusResponse, ApiError> {
        self.send(Request::delete(&self.url(&endpoints::account(id))))
            .await
    }

    async fn refresh_market_values(&self) -> Result<StatusResponse, ApiError> {
        self.send(Request::post(&self.url(endpoints::REFRESH))).await
    }

    async fn monthly_market_values(&self) -> Result<Vec<MonthlyMarketValue>, ApiError> {
        self.send(Request::get(&self.url(endpoints::MONTHLY_MARKET_VALUES)))
            .await
    }

    async fn type_market_values(&self) -> Result<TypeMarketValues, ApiError> {
        self.send(Request::get(&self.url(endpoints::TYPE_MARKET_VALUES)))
            .await
    }

    async fn transactions(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, ApiError> {
        self.send(Request::get(&self.url(&endpoints::transactions(query))))
            .await
    }

    async fn record_income(&self, request: &IncomeRequest) -> Result<StatusResponse, ApiError> {
        self.send_json(Request::post(&self.url(endpoints::INCOME)), request)
            .await
    }

    async fn record_expense(&self, request: &ExpenseRequest) -> Result<StatusResponse, ApiError> {
        self.send_json(Request::post(&self.url(endpoints::EXPENSE)), request)
            .await
    }

    async fn transfer(&self, request: &TransferRequest) -> Result<StatusResponse, ApiError> {
        self.send_json(Request::post(&self.url(endpoints::TRANSFER)), request)
            .await
    }
}
