use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Error: required keys are name,duration,price,description")]
    MissingKeys,
    #[error("Error: wrong key name")]
    WrongKey,
    #[error("Error: empty value field")]
    EmptyValue,
    #[error("cannot update identity column")]
    IdentityColumn,
    #[error("Movie not found.")]
    NotFound,
    #[error("Movie already exists.")]
    Conflict,
    #[error("Service unavailable")]
    Unavailable,
    /// The existence lookup itself failed.
    #[error("Something went wrong!")]
    Lookup,
    #[error("Internal server error")]
    Internal,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingKeys
            | AppError::WrongKey
            | AppError::EmptyValue
            | AppError::IdentityColumn
            | AppError::Lookup => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Conflict => StatusCode::CONFLICT,
            AppError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "message": self.to_string() }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
