//! # API Error Responses
//!
//! JSON envelope for failed requests and the axum conversion for [`AppError`].
//!
//! ## Response Format
//!
//! ```json
//! {
//!   "success": false,
//!   "code": "CONFLICT",
//!   "message": "Email already registered"
//! }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppError;

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always false on the error path.
    pub success: bool,

    /// Machine-readable error code.
    pub code: String,

    /// Human-readable error message.
    pub message: String,
}

impl ErrorBody {
    /// Build the wire body for an error, with internal detail masked.
    #[must_use]
    pub fn from_error(err: &AppError) -> Self {
        Self {
            success: false,
            code:    err.code().to_string(),
            message: err.public_message(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(code = %self.code(), error = %self.message(), "Request failed");
        }

        (status, Json(ErrorBody::from_error(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let err = AppError::conflict("Email already registered");
        let body = ErrorBody::from_error(&err);
        assert!(!body.success);
        assert_eq!(body.code, "CONFLICT");
        assert_eq!(body.message, "Email already registered");
    }

    #[test]
    fn test_error_body_masks_internal_detail() {
        let err = AppError::database("password=hunter2 leaked in error text");
        let body = ErrorBody::from_error(&err);
        assert_eq!(body.message, "Server error");
    }

    #[test]
    fn test_into_response_status() {
        let err = AppError::not_found("Announcement not found");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_body_serialization() {
        let body = ErrorBody {
            success: false,
            code:    "UNAUTHORIZED".to_string(),
            message: "Invalid or expired token".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"code\":\"UNAUTHORIZED\""));
    }
}
