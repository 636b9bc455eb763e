use axum::{Json, extract::State};
use serde_json::{Value, json};
use tracing::debug;

use crate::infra::app_state::AppState;

pub async fn ping_handler() -> Json<Value> {
    debug!("Ping endpoint called");
    Json(json!({
        "status": "ok",
        "message": "Thumbinator is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let total_images = state.catalog.size();
    // An empty catalog still serves requests; report it without failing.
    let catalog_status = if total_images > 0 { "healthy" } else { "empty" };

    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {
            "catalog": {
                "status": catalog_status,
                "total_images": total_images,
                "categories": state.catalog.categories().len(),
                "tags": state.catalog.tags().len(),
            }
        }
    }))
}
