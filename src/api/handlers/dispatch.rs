//! Handler for key dispatch.

use axum::{
    extract::{Path, Request, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::convert::Infallible;
use std::ops::ControlFlow;
use tracing::debug;

use crate::domain::entities::{Resolution, StaticEntry};
use crate::error::{AppError, handle_error};
use crate::state::AppState;

/// Turns a request for `/{key}` into a response.
///
/// # Endpoint
///
/// `ANY /{key}`
///
/// # Request Flow
///
/// 1. Resolve `key` in the redirect registry
/// 2. Match the resolved value against the static-page registry
/// 3. Respond:
///    - static entry with a handler: the handler's own response
///    - static entry without a handler: empty `200 OK`
///    - anything else: `302 Found` to the resolved value
///
/// # Errors
///
/// Returns `500 Internal Server Error` with body `Key not in DB` if the key
/// is not registered, including segments that do not decode to UTF-8.
pub async fn dispatch_handler(
    State(state): State<AppState>,
    key: Result<Path<String>, PathRejection>,
    request: Request,
) -> Response {
    let key = match key {
        Ok(Path(key)) => key,
        Err(rejection) => {
            debug!(error = %rejection, "Undecodable key");
            let raw = request.uri().path().trim_start_matches('/').to_string();
            return error_response(AppError::key_not_found(raw));
        }
    };

    let resolution = match handle_error(state.resolver_service.resolve_request(&key).await) {
        ControlFlow::Continue(resolution) => resolution,
        ControlFlow::Break(response) => {
            record_outcome("error");
            return response;
        }
    };

    let outcome = resolution.outcome();
    debug!(key = %key, resolved = resolution.value(), outcome, "Resolved key");

    match resolution {
        Resolution::Static {
            entry: StaticEntry::Delegate(handler),
            ..
        } => {
            record_outcome(outcome);
            handler(request).await
        }
        Resolution::Static {
            entry: StaticEntry::NoOp,
            ..
        } => {
            record_outcome(outcome);
            StatusCode::OK.into_response()
        }
        Resolution::Redirect(target) => match handle_error(found(&target)) {
            ControlFlow::Continue(response) => {
                record_outcome(outcome);
                response
            }
            ControlFlow::Break(response) => {
                record_outcome("error");
                response
            }
        },
    }
}

/// Runs `err` through [`handle_error`] and counts it.
fn error_response(err: AppError) -> Response {
    record_outcome("error");
    match handle_error::<Infallible>(Err(err)) {
        ControlFlow::Break(response) => response,
        ControlFlow::Continue(never) => match never {},
    }
}

fn record_outcome(outcome: &'static str) {
    metrics::counter!("dispatch_outcomes_total", "outcome" => outcome).increment(1);
}

/// Builds a `302 Found` response pointing at `target`.
///
/// # Errors
///
/// Returns [`AppError::InvalidTarget`] if `target` is not a valid header value.
pub fn found(target: &str) -> Result<Response, AppError> {
    let location =
        HeaderValue::from_str(target).map_err(|_| AppError::invalid_target(target))?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
