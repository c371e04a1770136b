use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Week is locked")]
    WeekLocked,

    #[error("{0}")]
    Generation(String),

    #[error("Internal server error")]
    Internal(String),
}

impl From<yeschef_shared::Error> for AppError {
    fn from(err: yeschef_shared::Error) -> Self {
        match err {
            yeschef_shared::Error::Validate(msg) => AppError::BadRequest(msg),
            yeschef_shared::Error::Generation(msg) => AppError::Generation(msg),
            yeschef_shared::Error::Server(msg) => AppError::Internal(msg),
            yeschef_shared::Error::Unknown(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::WeekLocked => StatusCode::LOCKED,
            AppError::Generation(msg) => {
                tracing::error!("Generation error: {msg}");
                StatusCode::BAD_GATEWAY
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(json!({ "status": "error", "error": self.to_string() })),
        )
            .into_response()
    }
}
