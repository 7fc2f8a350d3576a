//! Health endpoint.

use axum::Json;
use serde_json::{json, Value};

/// GET /health — liveness probe.
pub async fn get_health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
