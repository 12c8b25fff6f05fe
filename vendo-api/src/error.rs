use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use vendo_core::repository::StoreError;
use vendo_order::OrderError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidId(id) => AppError::BadRequest(format!("invalid order id: {id}")),
            StoreError::NotFound(id) => AppError::NotFound(format!("order not found: {id}")),
            err @ (StoreError::CorruptRecord(_) | StoreError::Internal(_)) => {
                AppError::Internal(err.into())
            }
        }
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::UserNotFound(id) => AppError::NotFound(format!("user not found: {id}")),
            OrderError::ProductNotFound(id) => {
                AppError::NotFound(format!("product not found: {id}"))
            }
            OrderError::Dependency(err) => AppError::Internal(err.into()),
        }
    }
}
