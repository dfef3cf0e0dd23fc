//! The `{success, data | error}` response envelope and the mapping from
//! `ContactError` to HTTP status codes.

use crate::domain::FieldError;
use crate::error::ContactError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// Uniform response body.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Per-field problems, present only for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            details: None,
        }
    }
}

impl Envelope<Value> {
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            details: None,
        }
    }
}

/// `{success: true, data}` with the given status.
pub fn success<T: Serialize>(status: StatusCode, data: T) -> Response {
    (status, Json(Envelope::ok(data))).into_response()
}

/// `{success: true, data: {}}` for operations with nothing to return.
pub fn empty_success() -> Response {
    success(StatusCode::OK, json!({}))
}

/// `{success: false, error}` with the given status.
pub fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(Envelope::err(message))).into_response()
}

/// Status code for a contact operation failure.
pub fn status_for(error: &ContactError) -> StatusCode {
    match error {
        ContactError::MissingFields
        | ContactError::Validation(_)
        | ContactError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        ContactError::NotFound => StatusCode::NOT_FOUND,
        ContactError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render a failed operation.
///
/// Store failures are replaced by `store_message` so internal details stay
/// in the logs.
pub fn error_response(error: &ContactError, store_message: &'static str) -> Response {
    let status = status_for(error);
    let envelope = match error {
        ContactError::Store(_) => Envelope::err(store_message),
        ContactError::Validation(errors) => Envelope {
            details: Some(errors.field_errors()),
            ..Envelope::err(error.to_string())
        },
        _ => Envelope::err(error.to_string()),
    };
    (status, Json(envelope)).into_response()
}
