use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=warn";

/// Install the global subscriber. Override verbosity via `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
