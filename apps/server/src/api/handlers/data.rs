//! `/api/data` handlers

use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use crate::{request_context::RequestContext, state::AppState, Result};

/// Body returned by `GET /api/data` when nothing was stored in this request.
pub const NO_DATA_MESSAGE: &str = "No data set for current request";

#[derive(Debug, Deserialize)]
pub struct DataRequest {
    pub data: String,
}

/// `POST /api/data`: store the payload in the current request's slot.
pub async fn set_data(
    State(state): State<AppState>,
    context: Option<Extension<RequestContext>>,
    Json(request): Json<DataRequest>,
) -> Result<String> {
    state
        .data_service
        .set_data_for_current_request(&request.data)?;

    if let Some(Extension(context)) = context {
        tracing::debug!(
            request_id = %context.request_id,
            correlation_id = ?context.correlation_id,
            "Data set for request"
        );
    }

    Ok(format!("Data set for current request: {}", request.data))
}

/// `GET /api/data`: report what this request has stored, which for a fresh
/// request is always nothing.
pub async fn get_data(State(state): State<AppState>) -> Result<String> {
    if !state.data_service.has_data_in_current_request()? {
        return Ok(NO_DATA_MESSAGE.to_string());
    }
    state.data_service.data_from_current_request()
}
