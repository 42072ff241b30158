use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use optimizer::error::OptimizerError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] JsonRejection),
    #[error("Optimizer error: {0}")]
    Optimizer(#[from] OptimizerError),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidRequest(rejection) => {
                tracing::warn!(error = %rejection, "Rejected optimization request.");
                (rejection.status(), rejection.body_text())
            }
            AppError::Optimizer(OptimizerError::InvalidBudget(budget)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Budget must be greater than zero, got {budget}"),
            ),
            AppError::Optimizer(optimizer_err) => {
                tracing::error!(error = ?optimizer_err, "Optimization failed.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred during optimization".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
