use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Credentials for the external account-aggregation API.
///
/// There are no usable defaults: both values must come from config.toml or
/// the AL_PROVIDER_* environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of the aggregation API, e.g. "https://api.example.com/v1".
    pub api_url: String,
    /// Bearer token sent on every outbound call. Never logged.
    pub api_key: String,
}

impl ProviderConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.api_url.is_empty() {
            return Err(ConfigError::provider(
                "provider.api_url is required (set AL_PROVIDER_API_URL)",
            ));
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(ConfigError::provider(format!(
                "provider.api_url must be an http(s) URL, got {}",
                self.api_url
            )));
        }

        if self.api_key.is_empty() {
            return Err(ConfigError::provider(
                "provider.api_key is required (set AL_PROVIDER_API_KEY)",
            ));
        }

        Ok(())
    }
}
