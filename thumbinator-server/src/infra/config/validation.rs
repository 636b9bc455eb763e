use super::models::Config;

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

/// Non-fatal findings collected while loading configuration.
#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigGuardRailError {
    #[error("stream.channel_capacity must be at least 1")]
    ZeroChannelCapacity,
    #[error("stream.keep_alive must be greater than zero")]
    ZeroKeepAlive,
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.stream.channel_capacity == 0 {
        return Err(ConfigGuardRailError::ZeroChannelCapacity);
    }
    if config.stream.keep_alive.is_zero() {
        return Err(ConfigGuardRailError::ZeroKeepAlive);
    }

    if !config.dev_mode && config.cors.is_wildcard_included() {
        warnings.push_with_hint(
            "CORS allow-list contains '*'; any origin may read the catalog",
            "List explicit origins in [cors].allowed_origins or set DEV_MODE=true for local work",
        );
    }

    if config.catalog.size == 0 {
        warnings.push("catalog.size is 0; every search will return no images");
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn defaults_pass_without_warnings() {
        let warnings =
            apply_guard_rails(&Config::default()).expect("defaults are valid");
        assert!(warnings.is_empty());
    }

    #[test]
    fn zero_sized_stream_settings_are_rejected() {
        let mut config = Config::default();
        config.stream.channel_capacity = 0;
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::ZeroChannelCapacity)
        ));

        let mut config = Config::default();
        config.stream.keep_alive = Duration::ZERO;
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::ZeroKeepAlive)
        ));
    }

    #[test]
    fn wildcard_origin_warns_outside_dev_mode() {
        let mut config = Config::default();
        config.cors.allowed_origins = vec!["*".into()];

        let warnings = apply_guard_rails(&config).expect("valid");
        assert_eq!(warnings.items.len(), 1);
        assert!(warnings.items[0].hint.is_some());

        config.dev_mode = true;
        assert!(apply_guard_rails(&config).expect("valid").is_empty());
    }
}
