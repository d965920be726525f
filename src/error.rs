use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Quiz data unavailable")]
    QuizUnavailable,

    #[error("Answer key unavailable")]
    AnswerKeyUnavailable,

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::QuizUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({
                    "errorCode": "DATA_UNAVAILABLE",
                    "message": "Quiz questions are not available yet. Try again shortly.",
                }),
            ),
            AppError::AnswerKeyUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({ "error": "Data unavailable" }),
            ),
            AppError::Internal(source) => {
                tracing::error!("Handler failure: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
