//! HTTP handlers for the contact resource.

use super::envelope::{empty_success, error_response, failure, success};
use super::AppState;
use crate::error::ContactError;
use crate::models::ContactInput;
use crate::observability::Timer;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use tracing::debug;

fn finish(timer: Timer, state: &AppState, response: Response) -> Response {
    timer.finish(&state.metrics, response.status().as_u16());
    response
}

fn decode_body(
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> Result<ContactInput, ContactError> {
    payload.map(|Json(input)| input).map_err(|rejection| {
        debug!(error = %rejection, "Rejected request body");
        ContactError::InvalidBody(rejection.body_text())
    })
}

/// `GET /api/contacts`
pub async fn list_contacts(State(state): State<AppState>) -> Response {
    let timer = Timer::new("list_contacts");
    let response = match state.service.list_contacts().await {
        Ok(contacts) => success(StatusCode::OK, contacts),
        Err(e) => error_response(&e, "Failed to fetch contacts"),
    };
    finish(timer, &state, response)
}

/// `POST /api/contacts`
pub async fn create_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> Response {
    let timer = Timer::new("create_contact");
    let result = match decode_body(payload) {
        Ok(input) => state.service.create_contact(input).await,
        Err(e) => Err(e),
    };
    let response = match result {
        Ok(contact) => success(StatusCode::CREATED, contact),
        Err(e) => error_response(&e, "Failed to create contact"),
    };
    finish(timer, &state, response)
}

/// `GET /api/contacts/{id}`
pub async fn get_contact(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let timer = Timer::new("get_contact");
    let response = match state.service.get_contact(&id).await {
        Ok(contact) => success(StatusCode::OK, contact),
        Err(e) => error_response(&e, "Failed to fetch contact"),
    };
    finish(timer, &state, response)
}

/// `PUT /api/contacts/{id}`
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> Response {
    let timer = Timer::new("update_contact");
    let result = match decode_body(payload) {
        Ok(input) => state.service.update_contact(&id, input).await,
        Err(e) => Err(e),
    };
    let response = match result {
        Ok(contact) => success(StatusCode::OK, contact),
        Err(e) => error_response(&e, "Failed to update contact"),
    };
    finish(timer, &state, response)
}

/// `DELETE /api/contacts/{id}`
pub async fn delete_contact(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let timer = Timer::new("delete_contact");
    let response = match state.service.delete_contact(&id).await {
        Ok(()) => empty_success(),
        Err(e) => error_response(&e, "Failed to delete contact"),
    };
    finish(timer, &state, response)
}

/// `GET /api/health`
pub async fn health(State(state): State<AppState>) -> Response {
    match state.service.check_health().await {
        Ok(()) => success(
            StatusCode::OK,
            json!({
                "status": "ok",
                "requestsTotal": state.metrics.requests_total(),
                "errorsTotal": state.metrics.errors_total(),
            }),
        ),
        Err(_) => failure(StatusCode::SERVICE_UNAVAILABLE, "Database unavailable"),
    }
}
