use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Error taxonomy shared by every operation. Business-rule violations are
/// produced before any write; `StoreFailure` is anything the store itself
/// refused (failed commit, constraint violation, lost connection).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error("insufficient stock: only {available} available")]
    InsufficientStock { available: i32 },
    #[error("{0}")]
    InvalidState(String),
    #[error("store failure: {0}")]
    StoreFailure(String),
}

impl AppError {
    pub fn store<E: std::fmt::Display>(err: E) -> Self {
        Self::StoreFailure(err.to_string())
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        Self::StoreFailure(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::InsufficientStock { .. } | AppError::InvalidState(_) => StatusCode::CONFLICT,
            AppError::StoreFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Driver detail goes to the log, not the client.
        let message = if let AppError::StoreFailure(detail) = &self {
            tracing::error!("store failure: {}", detail);
            "store failure".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nothing to see here")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_codes() {
        assert_eq!(
            AppError::NotFound("user 1 not found".into())
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidInput("quantity is required".into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InsufficientStock { available: 1 }
                .into_response()
                .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::InvalidState("order is Delivered".into())
                .into_response()
                .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::StoreFailure("connection reset".into())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn insufficient_stock_message_reports_available() {
        let err = AppError::InsufficientStock { available: 7 };
        assert_eq!(err.to_string(), "insufficient stock: only 7 available");
    }

    #[test]
    fn diesel_errors_fold_into_store_failure() {
        let err: AppError = diesel::result::Error::RollbackTransaction.into();
        assert!(matches!(err, AppError::StoreFailure(_)));
    }
}
