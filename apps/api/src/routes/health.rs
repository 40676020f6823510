use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status plus the sizes of the loaded catalog and vocabulary.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let job_roles = state.catalog.read().await.len();
    Json(json!({
        "status": "ok",
        "service": "talentvault-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
        "job_roles": job_roles,
        "vocabulary_size": state.matcher.vocabulary().len(),
    }))
}
