use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://0.0.0.0:5001";
pub const BASE_URL_ENV: &str = "SAM_API_URL";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl Settings {
    pub fn with_base_url(raw: impl AsRef<str>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(raw.as_ref())?,
            ..Self::default()
        })
    }
}

/// Default settings with the base url taken from `SAM_API_URL` when set.
/// An unset or unusable value falls back to the compiled-in default.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = std::env::var(BASE_URL_ENV) {
        match normalize_base_url(&raw) {
            Ok(base_url) => settings.base_url = base_url,
            Err(err) => {
                tracing::warn!(env = BASE_URL_ENV, error = %err, "ignoring configured base url");
            }
        }
    }

    settings
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let raw = raw.trim();
    let parsed = Url::parse(raw).map_err(|err| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: err.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw.to_string(),
                reason: format!("unsupported scheme '{other}'"),
            });
        }
    }

    Ok(raw.trim_end_matches('/').to_string())
}
