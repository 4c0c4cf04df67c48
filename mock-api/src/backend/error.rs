use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ApiErrorBody;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Schedule {0} not found")]
    ScheduleNotFound(String),

    #[error("Animal {0} not found")]
    AnimalNotFound(String),

    #[error("Notification {0} not found")]
    NotificationNotFound(String),

    #[error("Schedule {0} is already {1}")]
    ScheduleClosed(String, String),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::ScheduleNotFound(_)
            | ApiError::AnimalNotFound(_)
            | ApiError::NotificationNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ScheduleClosed(..) => StatusCode::CONFLICT,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ApiErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
