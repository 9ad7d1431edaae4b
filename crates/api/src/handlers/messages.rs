//! Message submission and retrieval endpoints.
//!
//! Messages are short-lived texts addressed to a username. They accumulate
//! in the recipient's mailbox until a single consuming read delivers and
//! clears them.
//!
//! ## Delivery contract
//!
//! - Retrieval drains the whole mailbox: expired entries are discarded,
//!   live ones are returned once and never again.
//! - A mailbox that is unknown or holds only expired messages produces the
//!   same 404; callers cannot tell the two apart.
//!
//! ## Endpoints
//!
//! - POST /chat - Submit a message to a username's mailbox
//! - GET /chat/{username} - Retrieve and clear all live messages

use axum::{
    Json, Router, debug_handler,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use garde::Validate;
use shared::api::{SubmitMessagePayload, SubmitMessageResponse};

use crate::{error::AppError, state::AppState, stores::DrainOutcome};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_message))
        .route("/{username}", get(retrieve_messages))
}

#[debug_handler]
async fn submit_message(
    State(state): State<AppState>,
    Json(payload): Json<SubmitMessagePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    // One clock reading per request; the expiration is computed from it.
    let now = Utc::now();

    let id = state
        .stores
        .mailboxes
        .deposit(&payload.username, &payload.text, payload.timeout, now)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    tracing::info!(
        id,
        username = %payload.username,
        timeout = payload.timeout,
        "message deposited"
    );

    Ok((StatusCode::CREATED, Json(SubmitMessageResponse { id })))
}

#[debug_handler]
async fn retrieve_messages(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let now = Utc::now();

    match state.stores.mailboxes.drain(&username, now) {
        DrainOutcome::Delivered(messages) => {
            tracing::info!(username = %username, count = messages.len(), "mailbox drained");

            Ok(Json(messages))
        }
        DrainOutcome::AllExpired | DrainOutcome::UnknownRecipient => Err(AppError::NotFound(
            format!("No unexpired messages found for {username}"),
        )),
    }
}
