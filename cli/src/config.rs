//! Layered CLI configuration.
//!
//! Precedence, lowest to highest: built-in defaults, then
//! `<config dir>/gatehouse/config.toml` if present, then `GATEHOUSE_*`
//! environment variables, then command-line flags (applied by the caller).

use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

/// Settings for talking to the identity API.
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Base URL of the hosted identity API.
    pub api_url: String,
    /// Optional project API key sent as a bearer token when no session
    /// token exists yet.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl CliConfig {
    pub fn load() -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("api_url", "http://localhost:8091")
            .context("invalid default api_url")?;

        if let Some(path) = Self::config_file() {
            builder = builder.add_source(
                config::File::from(path).format(config::FileFormat::Toml).required(false),
            );
        }

        let settings = builder
            .add_source(config::Environment::with_prefix("GATEHOUSE"))
            .build()
            .context("failed to load configuration")?;

        settings
            .try_deserialize()
            .context("invalid configuration values")
    }

    fn config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gatehouse").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_config_file() {
        let cfg = CliConfig::load().expect("defaults should load");
        assert!(!cfg.api_url.is_empty());
    }
}
