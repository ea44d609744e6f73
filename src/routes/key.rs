use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

/// `GET /api/key`
///
/// Returns the API key loaded at startup. The key is a startup precondition,
/// so this handler cannot observe an unconfigured value.
pub async fn api_key(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(json!({ "apiKey": state.config.api_key }))
}
