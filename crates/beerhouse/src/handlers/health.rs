use axum::Json;
use serde_json::{json, Value};

/// GET /health - liveness probe.
///
/// Returns 200 immediately without touching the table.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
