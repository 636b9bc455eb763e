use thiserror::Error;

/// Failures of a single search run.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The run's cancellation token fired.
    #[error("Search cancelled")]
    Cancelled,

    /// A summary was requested before every match was emitted.
    #[error("Search stopped after {emitted} records with {remaining} still pending")]
    Incomplete { emitted: u64, remaining: usize },

    /// The consumer went away or refused a record.
    #[error("Result sink failed: {0}")]
    Sink(String),

    /// A record or summary could not be encoded for the transport.
    #[error("Failed to encode search event: {0}")]
    Encode(String),

    /// The blocking planner panicked or was aborted.
    #[error("Search worker failed: {0}")]
    Join(String),
}

impl CatalogError {
    /// Client-side faults (disconnects, cancellation) as opposed to a broken
    /// search worker.
    pub fn is_disconnect(&self) -> bool {
        matches!(self, CatalogError::Cancelled | CatalogError::Sink(_))
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
