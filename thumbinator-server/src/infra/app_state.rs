use std::{fmt, sync::Arc};

use thumbinator_core::SharedCatalog;

use crate::infra::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub catalog: SharedCatalog,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("catalog_size", &self.catalog.size())
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(catalog: SharedCatalog, config: Config) -> Self {
        Self {
            catalog,
            config: Arc::new(config),
        }
    }

    /// Cheap handle to the shared catalog for a spawned search task.
    pub fn catalog(&self) -> SharedCatalog {
        SharedCatalog::clone(&self.catalog)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
