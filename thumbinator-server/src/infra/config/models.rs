use std::path::PathBuf;
use std::time::Duration;

use thumbinator_core::generator::{DEFAULT_CATALOG_SIZE, GeneratorOptions};
use thumbinator_core::query::pipeline::DEFAULT_PARALLEL_THRESHOLD;
use thumbinator_core::stream::SearchOptions;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;
pub const DEFAULT_KEEP_ALIVE: Duration = Duration::from_secs(15);

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub stream: StreamConfig,
    pub cors: CorsConfig,
    pub dev_mode: bool,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub size: usize,
    pub seed: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_CATALOG_SIZE,
            seed: None,
        }
    }
}

impl CatalogConfig {
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            count: self.size,
            seed: self.seed,
        }
    }
}

/// Per-request streaming behaviour for `/api/images/stream`.
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Events buffered between the search task and the HTTP body.
    pub channel_capacity: usize,
    pub keep_alive: Duration,
    /// Catalog size at which filtering fans out across the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            keep_alive: DEFAULT_KEEP_ALIVE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl StreamConfig {
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            parallel_threshold: self.parallel_threshold,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_cors_origins(),
        }
    }
}

impl CorsConfig {
    pub fn is_wildcard_included(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin.trim() == "*")
    }
}

pub fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
    ]
}

/// Where the configuration came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
