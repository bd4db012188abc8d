use axum::{
    Router,
    extract::{Path, Query, State, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::Instrument;

use crate::downstream::IdentityClient;
use crate::error::Error;
use crate::ledger::AccountLedger;
use crate::observability;
use crate::onboarding::{OnboardRequest, Onboarder};
use crate::types::balance::Balance;
use crate::types::ids::{AccountId, UserId};
use crate::{DEFAULT_ACCOUNT_TYPE, SERVICE_NAME};

pub struct ApiState {
    pub ledger: Arc<RwLock<AccountLedger>>,
    pub identity: IdentityClient,
    pub onboarder: Onboarder,
}

pub fn create_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/accounts", post(create_account).get(list_accounts))
        .route("/accounts/onboard", post(onboard))
        .route("/accounts/:id", get(get_account))
        .route("/accounts/:id/credit", post(credit_account))
        .with_state(state)
}

/// Every error leaves the API as `{"error": "..."}` with the taxonomy's
/// status; upstream statuses pass through verbatim.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok", "service": SERVICE_NAME }))
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateAccountRequest {
    user_id: Option<String>,
    #[serde(rename = "type")]
    account_type: Option<String>,
}

async fn create_account(
    State(state): State<Arc<ApiState>>,
    Json(req): Json<CreateAccountRequest>,
) -> Result<impl IntoResponse, Error> {
    let user_id = match req.user_id {
        Some(v) if !v.is_empty() => UserId::new(v),
        _ => return Err(Error::MissingField("userId")),
    };

    // The identity service is the authority on user ids; an unknown id
    // propagates its 404 before any local state is touched.
    state.identity.fetch_user(&user_id).await?;

    let account_type = req
        .account_type
        .unwrap_or_else(|| DEFAULT_ACCOUNT_TYPE.to_string());
    let account = state
        .ledger
        .write()
        .await
        .create_account(user_id, &account_type);

    Ok((StatusCode::CREATED, Json(json!({ "account": account }))))
}

async fn get_account(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, Error> {
    let id = AccountId::new(id);
    let ledger = state.ledger.read().await;
    let account = ledger.get_account(&id)?.clone();
    let balance = ledger.balance(&id)?;

    Ok(Json(json!({ "account": account, "balance": balance })))
}

#[derive(serde::Deserialize)]
struct ListAccountsQuery {
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

async fn list_accounts(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ListAccountsQuery>,
) -> Result<Json<Value>, Error> {
    let user_id = match query.user_id {
        Some(v) if !v.is_empty() => UserId::new(v),
        _ => return Err(Error::MissingField("userId")),
    };

    let accounts = state.ledger.read().await.list_accounts(&user_id);
    Ok(Json(json!({ "accounts": accounts })))
}

#[derive(serde::Deserialize)]
struct CreditRequest {
    amount: Option<Value>,
}

async fn credit_account(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Json(req): Json<CreditRequest>,
) -> Result<Json<Value>, Error> {
    // Unlike onboarding's initialCredit, a direct credit with a
    // non-numeric amount is a client error.
    let amount = req
        .amount
        .as_ref()
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite())
        .map(Balance::from_f64)
        .ok_or_else(|| Error::InvalidRequest("amount must be a number".to_string()))?;

    let id = AccountId::new(id);
    let balance = async { state.ledger.write().await.credit(&id, amount) }
        .instrument(observability::tracing::trace_credit(&id))
        .await?;

    Ok(Json(json!({ "accountId": id, "balance": balance })))
}

async fn onboard(
    State(state): State<Arc<ApiState>>,
    Json(req): Json<OnboardRequest>,
) -> Result<impl IntoResponse, Error> {
    let outcome = state
        .onboarder
        .onboard(req)
        .instrument(observability::tracing::trace_onboarding())
        .await?;

    Ok((StatusCode::CREATED, Json(outcome)))
}
