//! Async driver that feeds a search into a transport.
//!
//! Planning runs on the blocking pool. Emission then awaits the sink for
//! every record, which is where backpressure from a slow consumer lands.
//! Each run owns its task and its [`CancellationToken`], so one stalled or
//! dropped consumer never holds up another search.

use async_trait::async_trait;
use thumbinator_model::{ImageRecord, SearchSummary};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::catalog::SharedCatalog;
use crate::error::{CatalogError, Result};
use crate::query::{ImageQuery, QueryPipeline};

/// Receives the events of one search in order: zero or more images followed
/// by exactly one summary.
#[async_trait]
pub trait ImageSink: Send {
    async fn send_image(&mut self, image: &ImageRecord) -> Result<()>;

    async fn send_summary(&mut self, summary: SearchSummary) -> Result<()>;
}

#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub parallel_threshold: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: crate::query::pipeline::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Run `query` against `catalog`, pushing every match into `sink`.
///
/// Returns the summary that was sent. On cancellation or sink failure the
/// remaining records are not evaluated or emitted and no summary is sent.
pub async fn run_search<S>(
    catalog: SharedCatalog,
    query: ImageQuery,
    sink: &mut S,
    cancel: CancellationToken,
) -> Result<SearchSummary>
where
    S: ImageSink + ?Sized,
{
    run_search_with(catalog, query, sink, cancel, SearchOptions::default())
        .await
}

pub async fn run_search_with<S>(
    catalog: SharedCatalog,
    query: ImageQuery,
    sink: &mut S,
    cancel: CancellationToken,
    options: SearchOptions,
) -> Result<SearchSummary>
where
    S: ImageSink + ?Sized,
{
    let matches = {
        let catalog = SharedCatalog::clone(&catalog);
        let cancel = cancel.clone();
        tokio::task::spawn_blocking(move || {
            QueryPipeline::new(&catalog)
                .with_parallel_threshold(options.parallel_threshold)
                .plan(&query, &cancel)
        })
        .await
        .map_err(|err| CatalogError::Join(err.to_string()))??
    };

    let mut emission = matches.emit(&catalog);
    while let Some(image) = emission.next() {
        if cancel.is_cancelled() {
            warn!(
                emitted = emission.matched() - 1,
                remaining = emission.remaining() + 1,
                "search cancelled mid-stream"
            );
            return Err(CatalogError::Cancelled);
        }
        if let Err(err) = sink.send_image(image).await {
            warn!(
                image_id = %image.id,
                emitted = emission.matched() - 1,
                error = %err,
                "search sink rejected image; stopping emission"
            );
            return Err(err);
        }
    }

    let summary = emission.finish()?;
    sink.send_summary(summary).await?;
    info!(
        total = summary.total,
        matched = summary.matched,
        "search complete"
    );
    Ok(summary)
}
