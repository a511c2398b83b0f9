use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use crate::models::ErrorResponse;

/// Failures of a chart load. Both are logged and never reach the caller.
#[derive(Debug, Error)]
pub enum LoaderError {
    //Network error, non-2xx status and undecodable body alike
    #[error("Request failed: {0}")]
    RequestFailure(#[from] reqwest::Error),

    #[error("Chart rendering failed: {0}")]
    Render(String),
}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Render(err.to_string())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("Amount must be a positive number, got {0}")]
    InvalidAmount(i64),

    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: i64, requested: i64 },

    #[error("Balance {balance} cannot absorb a change of {change}")]
    BalanceOverflow { balance: i64, change: i64 },

    #[error("Transaction with ID {0} not found")]
    NotFound(i64),

    #[error("Transaction with ID {0} has already been deleted")]
    AlreadyDeleted(i64),
}

impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        let status = match self {
            LedgerError::InvalidAmount(_) => StatusCode::BAD_REQUEST,
            LedgerError::InsufficientFunds { .. } => StatusCode::CONFLICT,
            LedgerError::BalanceOverflow { .. } => StatusCode::BAD_REQUEST,
            LedgerError::NotFound(_) => StatusCode::NOT_FOUND,
            LedgerError::AlreadyDeleted(_) => StatusCode::CONFLICT,
        };
        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}
