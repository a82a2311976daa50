use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::DialogResponse;
use crate::services::{dispatcher, reader};
use crate::state::AppState;

/// Code hook entry point. One request is one invocation.
pub async fn code_hook(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<DialogResponse>, AppError> {
    let request = reader::read_event(&body).map_err(|e| {
        match &e {
            AppError::MalformedInput(_) => tracing::warn!(error = %e, "rejecting malformed event"),
            _ => tracing::error!(error = %e, "event does not match configured intents"),
        }
        e
    })?;

    let response = dispatcher::dispatch(&request, &state.config);
    tracing::debug!(action = response.action_type(), "code hook response ready");

    Ok(Json(response))
}
