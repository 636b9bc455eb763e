use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use super::loader::ConfigLoadError;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub catalog: FileCatalogConfig,
    #[serde(default)]
    pub stream: FileStreamConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
    pub dev_mode: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCatalogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileStreamConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_capacity: Option<usize>,
    /// Humantime duration, e.g. "15s".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_threshold: Option<usize>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub catalog_size: Option<usize>,
    pub catalog_seed: Option<u64>,
    pub stream_channel_capacity: Option<usize>,
    pub stream_keep_alive: Option<String>,
    pub stream_parallel_threshold: Option<usize>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub dev_mode: Option<bool>,
}

impl EnvConfig {
    pub fn gather() -> Result<Self, ConfigLoadError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name).filter(|value| !value.trim().is_empty())
        };

        Ok(Self {
            config_path: var("THUMBINATOR_CONFIG").map(PathBuf::from),
            server_host: var("SERVER_HOST"),
            server_port: parse_var(&var, "SERVER_PORT")?,
            catalog_size: parse_var(&var, "CATALOG_SIZE")?,
            catalog_seed: parse_var(&var, "CATALOG_SEED")?,
            stream_channel_capacity: parse_var(
                &var,
                "STREAM_CHANNEL_CAPACITY",
            )?,
            stream_keep_alive: var("STREAM_KEEP_ALIVE"),
            stream_parallel_threshold: parse_var(
                &var,
                "STREAM_PARALLEL_THRESHOLD",
            )?,
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_csv(&raw)),
            dev_mode: var("DEV_MODE").and_then(|raw| parse_bool(&raw)),
        })
    }
}

fn parse_var<T, F>(var: &F, name: &str) -> Result<Option<T>, ConfigLoadError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    var(name)
        .map(|raw| {
            raw.trim().parse().map_err(|_| ConfigLoadError::InvalidValue {
                key: name.to_string(),
                value: raw.clone(),
                reason: "not a valid number".to_string(),
            })
        })
        .transpose()
}

fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|part| {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
