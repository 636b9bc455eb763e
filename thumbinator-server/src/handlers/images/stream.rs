//! Server-sent event transport for catalog searches.
//!
//! Each request gets its own search task. Events travel over a bounded
//! channel, so a slow reader only backs up its own task, and dropping the
//! response body cancels that task's token.

use std::convert::Infallible;

use async_trait::async_trait;
use axum::response::sse::{Event, KeepAlive, KeepAliveStream, Sse};
use serde::Serialize;
use thumbinator_core::{
    CatalogError, ImageQuery, ImageSink, SearchOptions, SharedCatalog,
    run_search_with,
};
use thumbinator_model::{ImageRecord, ImageSseEventType, SearchSummary};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::Stream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::infra::config::StreamConfig;

/// Pushes search results into the per-request event channel.
#[derive(Debug)]
pub struct SseSink {
    sender: mpsc::Sender<Event>,
}

impl SseSink {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    async fn send_json<T: Serialize + ?Sized>(
        &mut self,
        kind: ImageSseEventType,
        payload: &T,
    ) -> thumbinator_core::Result<()> {
        let event = Event::default()
            .event(kind.event_name())
            .json_data(payload)
            .map_err(|err| CatalogError::Encode(err.to_string()))?;
        self.sender
            .send(event)
            .await
            .map_err(|_| CatalogError::Sink("client disconnected".into()))
    }

    /// Terminal failure event, sent instead of `complete`.
    pub async fn send_error(&mut self, err: &CatalogError) {
        #[derive(Serialize)]
        struct ErrorPayload<'a> {
            message: &'a str,
        }

        let message = err.to_string();
        if let Err(send_err) = self
            .send_json(ImageSseEventType::Error, &ErrorPayload { message: &message })
            .await
        {
            debug!(error = %send_err, "could not deliver search error event");
        }
    }
}

#[async_trait]
impl ImageSink for SseSink {
    async fn send_image(
        &mut self,
        image: &ImageRecord,
    ) -> thumbinator_core::Result<()> {
        self.send_json(ImageSseEventType::Image, image).await
    }

    async fn send_summary(
        &mut self,
        summary: SearchSummary,
    ) -> thumbinator_core::Result<()> {
        self.send_json(ImageSseEventType::Complete, &summary).await
    }
}

/// Spawn the search and return the event stream feeding the response.
pub fn spawn_search_stream(
    catalog: SharedCatalog,
    query: ImageQuery,
    config: &StreamConfig,
) -> impl Stream<Item = Result<Event, Infallible>> + Send + 'static + use<> {
    start_search(catalog, query, config).0
}

/// Like [`spawn_search_stream`], also returning the search task's handle.
fn start_search(
    catalog: SharedCatalog,
    query: ImageQuery,
    config: &StreamConfig,
) -> (
    impl Stream<Item = Result<Event, Infallible>> + Send + 'static + use<>,
    JoinHandle<thumbinator_core::Result<SearchSummary>>,
) {
    let (sender, mut receiver) = mpsc::channel(config.channel_capacity.max(1));
    let cancel = CancellationToken::new();
    let guard = cancel.clone().drop_guard();
    let options: SearchOptions = config.search_options();

    let task = tokio::spawn(async move {
        let mut sink = SseSink::new(sender);
        let result =
            run_search_with(catalog, query, &mut sink, cancel, options).await;
        match &result {
            Ok(_) => {}
            Err(err) if err.is_disconnect() => {
                debug!(error = %err, "image stream closed by client");
            }
            Err(err) => {
                error!(error = %err, "image search failed");
                sink.send_error(err).await;
            }
        }
        result
    });

    let events = async_stream::stream! {
        // Dropped with the response body; cancels the search task.
        let _guard = guard;
        while let Some(event) = receiver.recv().await {
            yield Ok::<Event, Infallible>(event);
        }
    };

    (events, task)
}

pub fn keep_alive(config: &StreamConfig) -> KeepAlive {
    KeepAlive::new()
        .interval(config.keep_alive)
        .text("keep-alive")
}

pub fn into_sse<S>(stream: S, config: &StreamConfig) -> Sse<KeepAliveStream<S>>
where
    S: Stream<Item = Result<Event, Infallible>> + Send + 'static,
{
    Sse::new(stream).keep_alive(keep_alive(config))
}
