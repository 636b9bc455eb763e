pub mod loader;
pub mod models;
pub mod sources;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions};
pub use models::{
    CatalogConfig, Config, ConfigMetadata, CorsConfig, ServerConfig,
    StreamConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
