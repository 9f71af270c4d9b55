//! HTTP mapping for request failures.

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;

use crate::ValidationError;

// ---

#[derive(Debug)]
pub enum ApiError {
    /// Caller-supplied input rejected before reaching the classifier.
    Invalid(ValidationError),
    /// No reading exists for the requested date.
    NoData(NaiveDate),
    /// The dataset holds no readings at all.
    Empty,
    /// The path or query string could not be extracted.
    BadRequest(String),
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Invalid(e)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // ---
        let (status, code, message) = match self {
            ApiError::Invalid(ValidationError::MissingName) => (
                StatusCode::BAD_REQUEST,
                "NAME_REQUIRED",
                "Please enter your name first.".to_string(),
            ),
            ApiError::Invalid(ValidationError::InvalidDate(_)) => (
                StatusCode::BAD_REQUEST,
                "INVALID_DATE",
                "Please enter a valid date in YYYY-MM-DD format.".to_string(),
            ),
            ApiError::Invalid(e) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST", e.to_string()),
            ApiError::NoData(date) => (
                StatusCode::NOT_FOUND,
                "NO_DATA",
                format!("No air quality data available for {date}."),
            ),
            ApiError::Empty => (
                StatusCode::NOT_FOUND,
                "NO_DATA",
                "No air quality data available.".to_string(),
            ),
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", message)
            }
        };

        (
            status,
            Json(serde_json::json!({ "error": { "code": code, "message": message } })),
        )
            .into_response()
    }
}
