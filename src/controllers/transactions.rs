use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use crate::errors::LedgerError;
use crate::models::transaction::{AmountRequest, BalanceResponse, Transaction, TransactionSummary};
use crate::services::register_service::ServiceRegister;

pub fn router() -> Router<ServiceRegister> {
    Router::new()
        .route("/api/transactions/last20", get(get_last20))
        .route("/api/transactions/balance", get(get_balance))
        .route("/api/transactions/deposit", post(post_deposit))
        .route("/api/transactions/withdraw", post(post_withdraw))
        .route("/api/transactions/show/:id", get(get_transaction))
        .route("/api/transactions/delete/:id", post(post_delete))
}

async fn get_last20(State(services): State<ServiceRegister>) -> Json<Vec<TransactionSummary>> {
    Json(services.ledger_service.last20().await)
}

async fn get_balance(State(services): State<ServiceRegister>) -> Json<BalanceResponse> {
    let balance = services.ledger_service.current_balance().await;
    Json(BalanceResponse { balance })
}

async fn post_deposit(
    State(services): State<ServiceRegister>,
    Json(body): Json<AmountRequest>,
) -> Result<Json<Transaction>, LedgerError> {
    let transaction = services
        .ledger_service
        .deposit(body.amount, body.description)
        .await?;
    Ok(Json(transaction))
}

async fn post_withdraw(
    State(services): State<ServiceRegister>,
    Json(body): Json<AmountRequest>,
) -> Result<Json<Transaction>, LedgerError> {
    let transaction = services
        .ledger_service
        .withdraw(body.amount, body.description)
        .await?;
    Ok(Json(transaction))
}

async fn get_transaction(
    State(services): State<ServiceRegister>,
    Path(id): Path<i64>,
) -> Result<Json<Transaction>, LedgerError> {
    let transaction = services.ledger_service.get(id).await?;
    Ok(Json(transaction))
}

async fn post_delete(
    State(services): State<ServiceRegister>,
    Path(id): Path<i64>,
) -> Result<Json<Transaction>, LedgerError> {
    let reversal = services.ledger_service.delete(id).await?;
    Ok(Json(reversal))
}
