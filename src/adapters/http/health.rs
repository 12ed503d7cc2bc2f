//! Liveness endpoint.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

/// GET /health - process liveness, no upstream calls.
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn health_routes<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_ok() {
        let Json(body) = health().await;
        assert_eq!(body["status"], "ok");
    }
}
