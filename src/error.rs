//! Application error types.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::repository::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required parameter is missing or malformed. Surfaced verbatim.
    #[error("{0}")]
    Validation(String),

    /// The datastore connection is not established yet.
    #[error("datastore not ready")]
    ServiceUnavailable,

    /// Anything else. Logged with full context; the caller only ever
    /// sees the generic message.
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> ApiError {
        ApiError::Validation(message.into())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> ApiError {
        ApiError::Internal(err.into())
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(err) = self {
            tracing::error!(error = ?err, "request failed");
        }
        HttpResponse::build(self.status_code()).json(ErrorBody { error: &self.to_string() })
    }
}
