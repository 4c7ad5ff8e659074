//! JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use menulens_core::MenuError;

/// Message returned for any server-side failure; internals are never echoed.
pub const GENERIC_FAILURE: &str = "Failed to process menu";

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    PayloadTooLarge(String),
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MenuError> for ApiError {
    fn from(err: MenuError) -> Self {
        if err.is_client_error() {
            match err {
                MenuError::InvalidUpload(msg) => ApiError::BadRequest(msg),
                other => ApiError::BadRequest(other.to_string()),
            }
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) | ApiError::PayloadTooLarge(msg) => msg,
            ApiError::Internal(detail) => {
                error!(detail = %detail, "Request failed");
                GENERIC_FAILURE.to_string()
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_upload_maps_to_bad_request() {
        let err: ApiError = MenuError::InvalidUpload("No file uploaded".into()).into();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == "No file uploaded"));
    }

    #[test]
    fn internal_errors_hide_detail() {
        let err: ApiError = MenuError::Config("OPENAI_API_KEY is not set".into()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
