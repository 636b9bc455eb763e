use axum::{Router, http::HeaderValue, http::Method, routing::get};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::handlers::{images, system};
use crate::infra::app_state::AppState;

pub mod paths {
    pub const PING: &str = "/ping";
    pub const HEALTH: &str = "/health";
    pub const IMAGE_FILTERS: &str = "/api/images/filters";
    pub const IMAGE_STREAM: &str = "/api/images/stream";
    pub const IMAGE_ITEM: &str = "/api/images/{id}";
}

/// Image catalog API routes.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route(paths::IMAGE_FILTERS, get(images::filter_options_handler))
        .route(paths::IMAGE_STREAM, get(images::stream_images_handler))
        .route(paths::IMAGE_ITEM, get(images::get_image_handler))
}

/// Full application router with middleware applied.
pub fn create_app(state: AppState) -> Router {
    let cors_layer = build_cors_layer(&state);

    Router::new()
        .route(paths::PING, get(system::ping_handler))
        .route(paths::HEALTH, get(system::health_handler))
        .merge(create_api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Permissive in dev mode, allow-list otherwise.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let config = state.config();
    if config.dev_mode {
        return CorsLayer::permissive();
    }

    let allow_origin = if config.cors.is_wildcard_included() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
}
