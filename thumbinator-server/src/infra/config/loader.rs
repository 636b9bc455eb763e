use once_cell::sync::Lazy;
use std::{fs, path::PathBuf, time::Duration};
use thiserror::Error;

use super::{
    models::{
        CatalogConfig, Config, ConfigMetadata, CorsConfig, DEFAULT_HOST,
        DEFAULT_PORT, ServerConfig, StreamConfig, default_cors_origins,
    },
    sources::{EnvConfig, FileConfig},
    validation::{self, ConfigGuardRailError, ConfigWarnings},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("thumbinator.toml"),
        PathBuf::from("config/thumbinator.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

/// Resolves configuration from `.env`, TOML and process environment, in
/// increasing order of precedence.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let mut load = self.load_from(EnvConfig::gather()?)?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Resolve against an already gathered environment. No `.env` file is
    /// read.
    pub fn load_from(
        &self,
        env_config: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env_config)?;
        let (config, warnings) =
            compose_config(file_config, env_config, config_path)?;
        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env_config: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let (path, explicit) = if let Some(path) = &self.options.config_path {
            (path.clone(), true)
        } else if let Some(path) = &env_config.config_path {
            (path.clone(), true)
        } else if let Some(path) = DEFAULT_CONFIG_LOCATIONS
            .iter()
            .find(|candidate| candidate.exists())
        {
            (path.clone(), false)
        } else {
            return Ok((None, None));
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let contents =
            fs::read_to_string(&path).map_err(|err| ConfigLoadError::Io {
                path: path.clone(),
                source: err,
            })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                path: path.clone(),
                source: err,
            })?;

        Ok((Some(file_config), Some(path)))
    }
}

fn compose_config(
    file_config: Option<FileConfig>,
    env: EnvConfig,
    config_path: Option<PathBuf>,
) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
    let mut warnings = ConfigWarnings::default();

    if config_path.is_none() {
        warnings.push_with_hint(
            "No thumbinator.toml detected; using environment variables and defaults",
            "Create thumbinator.toml or pass --config to pin settings",
        );
    }

    let FileConfig {
        server: file_server,
        catalog: file_catalog,
        stream: file_stream,
        cors: file_cors,
        dev_mode: file_dev_mode,
    } = file_config.unwrap_or_default();

    let server = ServerConfig {
        host: env
            .server_host
            .or(file_server.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: env.server_port.or(file_server.port).unwrap_or(DEFAULT_PORT),
    };

    let catalog_defaults = CatalogConfig::default();
    let catalog = CatalogConfig {
        size: env
            .catalog_size
            .or(file_catalog.size)
            .unwrap_or(catalog_defaults.size),
        seed: env.catalog_seed.or(file_catalog.seed),
    };

    let stream_defaults = StreamConfig::default();
    let keep_alive = match env.stream_keep_alive.or(file_stream.keep_alive) {
        Some(raw) => parse_duration("stream.keep_alive", &raw)?,
        None => stream_defaults.keep_alive,
    };
    let stream = StreamConfig {
        channel_capacity: env
            .stream_channel_capacity
            .or(file_stream.channel_capacity)
            .unwrap_or(stream_defaults.channel_capacity),
        keep_alive,
        parallel_threshold: env
            .stream_parallel_threshold
            .or(file_stream.parallel_threshold)
            .unwrap_or(stream_defaults.parallel_threshold),
    };

    let cors = CorsConfig {
        allowed_origins: env
            .cors_allowed_origins
            .or(file_cors.allowed_origins)
            .unwrap_or_else(default_cors_origins),
    };

    let config = Config {
        server,
        catalog,
        stream,
        cors,
        dev_mode: env.dev_mode.or(file_dev_mode).unwrap_or(false),
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded: false,
        },
    };

    warnings.extend(validation::apply_guard_rails(&config)?);

    Ok((config, warnings))
}

fn parse_duration(key: &str, raw: &str) -> Result<Duration, ConfigLoadError> {
    humantime::parse_duration(raw.trim()).map_err(|err| {
        ConfigLoadError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
            reason: err.to_string(),
        }
    })
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}
