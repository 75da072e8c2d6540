mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub async fn load() -> Result<Config> {
    let mut config = match env::var("CONFIG_PATH") {
        Ok(path) => load_from_file(&path).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_from_file(DEFAULT_CONFIG_PATH).await?
        }
        Err(_) => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    config.apply_overrides(|key| env::var(key).ok())?;

    Ok(config)
}

pub async fn load_from_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Applies `PORT`, `HOST`, `HF_TOKEN`, `HF_MODEL`, `HF_API_BASE`,
    /// `HF_TIMEOUT_SECS` and `LOG_LEVEL` on top of the current values.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT: '{}'", port)))?;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.server.logs.level = level;
        }
        if let Some(token) = lookup("HF_TOKEN") {
            self.inference.token = Some(token).filter(|t| !t.is_empty());
        }
        if let Some(model) = lookup("HF_MODEL") {
            self.inference.model = model;
        }
        if let Some(api_base) = lookup("HF_API_BASE") {
            self.inference.api_base = api_base;
        }
        if let Some(secs) = lookup("HF_TIMEOUT_SECS") {
            let parsed: u64 = secs
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| Error::config(format!("Invalid HF_TIMEOUT_SECS: '{}'", secs)))?;
            self.inference.timeout_secs = Some(parsed);
        }

        Ok(())
    }
}
