use axum::{extract::State, Json};
use serde_json::json;

use crate::SharedState;

pub async fn health_check(State(state): State<SharedState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "application": env!("CARGO_PKG_NAME"),
        "jobsLoaded": state.jobs.len(),
    }))
}
