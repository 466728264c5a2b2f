//! Service error types and error response formatting.

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paging::MAX_PAGE;

/// Error codes reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// `page-num` missing or not an integer.
    InvalidPageNumber,
    /// `page-num` outside `[1, MAX_PAGE]`.
    PageOutOfRange,
    /// `selected-num` present but not an integer.
    InvalidSelection,
    /// Request body could not be decoded as a form.
    InvalidForm,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidPageNumber => "InvalidPageNumber",
            ErrorCode::PageOutOfRange => "PageOutOfRange",
            ErrorCode::InvalidSelection => "InvalidSelection",
            ErrorCode::InvalidForm => "InvalidForm",
        }
    }

    /// Returns the HTTP status code for this error code.
    ///
    /// Every code describes a malformed request.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// Returns the default message for this error code.
    pub fn default_message(&self) -> String {
        match self {
            ErrorCode::InvalidPageNumber => "The page number must be an integer.".to_string(),
            ErrorCode::PageOutOfRange => {
                format!("The page number must be between 1 and {}.", MAX_PAGE)
            }
            ErrorCode::InvalidSelection => "The selected number must be an integer.".to_string(),
            ErrorCode::InvalidForm => "The request body is not a valid form.".to_string(),
        }
    }

    /// Whether the client should fall back to the first page on this error.
    pub fn is_page_validation(&self) -> bool {
        matches!(self, ErrorCode::InvalidPageNumber | ErrorCode::PageOutOfRange)
    }
}

/// Service error with code and message.
#[derive(Debug, Error)]
#[error("{code:?}: {message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub request_id: Option<String>,
}

impl AppError {
    /// Creates a new error with the given code and default message.
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.default_message(),
            code,
            request_id: None,
        }
    }

    /// Creates a new error with a custom message.
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            request_id: None,
        }
    }

    /// Sets the request ID for this error.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

/// JSON body of an error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    pub request_id: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.code.status_code();
        let request_id = self
            .request_id
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let body = ErrorBody {
            code: self.code,
            message: self.message,
            request_id: request_id.clone(),
        };

        let mut response = (status, Json(body)).into_response();
        let headers = response.headers_mut();
        if let Ok(value) = HeaderValue::from_str(&request_id) {
            headers.insert("x-request-id", value);
        }
        headers.insert("x-error-code", HeaderValue::from_static(self.code.as_str()));
        response
    }
}

/// Result type alias for request handling.
pub type AppResult<T> = Result<T, AppError>;
