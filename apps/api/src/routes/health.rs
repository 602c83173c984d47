use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / and GET /health
/// Returns service status, version and the size of the loaded skill vocabulary.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "skillmatch-api",
        "vocabulary_size": state.engine.vocabulary().len(),
        "job_import_enabled": state.jsearch.is_some()
    }))
}
