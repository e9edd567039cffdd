mod types;

pub use types::*;

use crate::{Error, Result};
use std::{
    env::{self, VarError},
    net::IpAddr,
    path::Path,
};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration from `CONFIG_PATH`, or from `config.yaml` when the
/// variable is unset. A missing default file yields the built-in defaults; a
/// missing file named explicitly through `CONFIG_PATH` is an error.
pub async fn load() -> Result<Config> {
    match env::var("CONFIG_PATH") {
        Ok(config_path) => load_from(&config_path).await,
        Err(VarError::NotUnicode(raw)) => Err(Error::config(format!(
            "CONFIG_PATH is not valid unicode: {:?}",
            raw
        ))),
        Err(VarError::NotPresent) => {
            if !Path::new(DEFAULT_CONFIG_PATH).exists() {
                debug!("No {} found, using default configuration", DEFAULT_CONFIG_PATH);
                return Ok(Config::default());
            }
            load_from(DEFAULT_CONFIG_PATH).await
        }
    }
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // A document with no content (blank or comments only) means all defaults
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str::<Option<Config>>(config_str)?.unwrap_or_default();
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.server.host.parse::<IpAddr>().is_err() {
        return Err(Error::config(format!(
            "server.host must be an IP address, got '{}'",
            config.server.host
        )));
    }
    if let Some(region) = &config.lambda.region {
        if region.trim().is_empty() {
            return Err(Error::config("lambda.region must not be empty"));
        }
    }
    Ok(())
}
