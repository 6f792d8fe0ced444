//! Request-path error kinds and their HTTP mapping.
//!
//! Every failure a request can hit is an [`AppError`]. Status codes are
//! assigned in exactly one place ([`AppError::status_code`]), so adding a new
//! kind never touches the dispatcher.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::ops::ControlFlow;
use thiserror::Error;

/// Errors produced while resolving and dispatching a key.
///
/// The `Display` output is the exact response body sent to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// The key has no entry in the redirect registry.
    #[error("Key not in DB")]
    KeyNotFound { key: String },

    /// The resolved value cannot be sent as a `Location` header.
    #[error("Invalid redirect target")]
    InvalidTarget { target: String },
}

impl AppError {
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    pub fn invalid_target(target: impl Into<String>) -> Self {
        Self::InvalidTarget {
            target: target.into(),
        }
    }

    /// HTTP status for this error kind.
    ///
    /// Both kinds currently collapse to `500 Internal Server Error`.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::KeyNotFound { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidTarget { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable name, used as a log and metric label.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::KeyNotFound { .. } => "key_not_found",
            AppError::InvalidTarget { .. } => "invalid_target",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            [(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            )],
            self.to_string(),
        )
            .into_response()
    }
}

/// Turns a fallible step into "keep going" or "stop with this response".
///
/// - `Ok(value)` → [`ControlFlow::Continue`] with no side effect
/// - `Err(e)` → logs `HTTP <status> - <message>` and returns
///   [`ControlFlow::Break`] carrying the error response
///
/// # Example
///
/// ```rust,ignore
/// let target = match handle_error(service.resolve(&key).await) {
///     ControlFlow::Continue(target) => target,
///     ControlFlow::Break(response) => return response,
/// };
/// ```
pub fn handle_error<T>(result: Result<T, AppError>) -> ControlFlow<Response, T> {
    match result {
        Ok(value) => ControlFlow::Continue(value),
        Err(e) => {
            let status = e.status_code();
            match &e {
                AppError::KeyNotFound { key } => {
                    tracing::error!(key = %key, code = e.code(), "HTTP {} - {}", status.as_u16(), e)
                }
                AppError::InvalidTarget { target } => {
                    tracing::error!(target_url = %target, code = e.code(), "HTTP {} - {}", status.as_u16(), e)
                }
            }
            ControlFlow::Break(e.into_response())
        }
    }
}
