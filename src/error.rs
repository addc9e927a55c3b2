use axum::{
    extract::rejection::{BytesRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::entitlements::EntitlementError;

/// Fixed client-facing messages.
pub mod msg {
    pub const MISSING_DEVICE_ID: &str = "Missing deviceId";
    pub const INVALID_BODY: &str = "Invalid request body";
    pub const REMOTE_QUERY_FAILED: &str = "Database error";
    pub const REMOTE_TIMEOUT: &str = "Entitlement lookup timed out";
    pub const INTERNAL: &str = "Internal error";
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Database(#[from] rusqlite::Error),

    #[error("{0}")]
    Pool(#[from] r2d2::Error),

    #[error("Entitlement lookup failed: {0}")]
    Entitlement(#[from] EntitlementError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        tracing::debug!("Could not read request body: {}", rejection.body_text());
        AppError::BadRequest(msg::INVALID_BODY.into())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Local store faults carry the raw message back to the caller; remote
        // and internal faults stay server-side.
        let (status, error) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Pool(e) => {
                tracing::error!("Pool error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Entitlement(e) => {
                tracing::error!("Entitlement source error: {}", e);
                let message = match e {
                    EntitlementError::Timeout(_) => msg::REMOTE_TIMEOUT,
                    _ => msg::REMOTE_QUERY_FAILED,
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, msg::INTERNAL.to_string())
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
