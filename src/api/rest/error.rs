use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::rest::dto::ErrorResponse;
use crate::domain::error::DomainError;

/// How a failed request leaves the service. All variants are terminal and
/// map straight onto the HTTP response; the API layer logs them here rather
/// than anywhere upstream.
#[derive(Debug)]
pub enum ApiError {
    /// Body failed structural parsing, or a required field is missing or
    /// empty. Carries the binding error message.
    MalformedRequest(String),
    /// A phone number failed the Australian format check. The response is a
    /// fixed message that does not echo the offending entry.
    InvalidPhoneNumber,
    /// The insert failed at the storage layer; carries the driver error text.
    StorageFailure(String),
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation { .. } => Self::MalformedRequest(e.to_string()),
            DomainError::InvalidPhoneNumber => Self::InvalidPhoneNumber,
            DomainError::Storage(source) => Self::StorageFailure(source.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MalformedRequest(msg) => {
                tracing::warn!(error = %msg, "rejected malformed contact request");
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::InvalidPhoneNumber => {
                tracing::warn!("rejected contact with invalid phone number");
                (
                    StatusCode::BAD_REQUEST,
                    "Invalid Australian phone number".to_owned(),
                )
            }
            ApiError::StorageFailure(msg) => {
                tracing::error!(error = %msg, "contact insert failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
