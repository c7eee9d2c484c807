//! Liveness endpoint.

use axum::extract::State;
use axum::Json;

use listkeeper_core::repository::session::SessionStore;

use crate::state::AppState;

/// GET /health - Status, version and live session count.
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "sessions": state.list_service.store().len(),
    }))
}
