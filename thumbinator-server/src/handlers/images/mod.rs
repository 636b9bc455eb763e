pub mod params;
pub mod stream;

use std::convert::Infallible;

use axum::{
    Json,
    extract::{Path, Query, State},
    response::sse::{Event, Sse},
};
use thumbinator_model::{FilterOptions, ImageId, ImageRecord};
use tokio_stream::Stream;
use tracing::debug;

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

pub use params::ImageStreamParams;

/// GET /api/images/filters - facet values for the filter controls.
pub async fn filter_options_handler(
    State(state): State<AppState>,
) -> Json<FilterOptions> {
    Json(state.catalog.filter_options())
}

/// GET /api/images/stream - matching images as server-sent events.
///
/// Parameter errors are returned as a plain JSON 400 before any event is
/// sent.
pub async fn stream_images_handler(
    State(state): State<AppState>,
    Query(params): Query<ImageStreamParams>,
) -> AppResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    let query = params.into_query()?;
    debug!(?query, "starting image stream");

    let config = &state.config().stream;
    let events = stream::spawn_search_stream(state.catalog(), query, config);
    Ok(stream::into_sse(events, config))
}

/// GET /api/images/{id}
pub async fn get_image_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ImageRecord>> {
    let id: u64 = raw_id.trim().parse().map_err(|_| {
        AppError::bad_request(format!("Invalid image id '{raw_id}'"))
    })?;
    state
        .catalog
        .get(ImageId(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Image {id} not found")))
}
