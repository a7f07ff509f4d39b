// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration management.
//!
//! Configuration is stored in TOML at `$STOREFRONT_CONFIG`, or
//! `<config_dir>/storefront/config.toml` when that is unset, and includes:
//! - `api_url`: origin plus API prefix of the storefront service
//! - `asset_url`: origin plus prefix for uploaded images
//! - `timeout_secs`: upper bound for every request
//! - `[toggle] policy`: how overlapping bookmark toggles settle
//!
//! A missing file yields the defaults. `STOREFRONT_API_URL` overrides
//! `api_url` after the file is read.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use sf_client::ClientConfig;
use sf_core::SettlementPolicy;

use crate::env;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "storefront";
const CONFIG_FILE_NAME: &str = "config.toml";

/// User configuration stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub asset_url: String,
    pub timeout_secs: u64,
    pub toggle: ToggleConfig,
}

/// Settings for optimistic toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    pub policy: SettlementPolicy,
}

impl Default for Config {
    fn default() -> Self {
        let client = ClientConfig::default();
        Config {
            api_url: client.api_url,
            asset_url: client.asset_url,
            timeout_secs: client.timeout.as_secs(),
            toggle: ToggleConfig::default(),
        }
    }
}

/// Location of the config file: `$STOREFRONT_CONFIG`, else the platform
/// config directory.
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = env::config_path() {
        return Ok(path);
    }
    dirs::config_dir()
        .map(|d| d.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or(Error::NoConfigDir)
}

impl Config {
    /// Loads from the default location and applies environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Config::load_from(&config_path()?)?;
        if let Some(url) = env::api_url() {
            tracing::debug!(%url, "api_url overridden from environment");
            config.api_url = url;
        }
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config: Config = toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let invalid = |message: String| Error::Config {
            path: path.to_path_buf(),
            message,
        };
        for (key, url) in [("api_url", &self.api_url), ("asset_url", &self.asset_url)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(invalid(format!("{key} must start with http:// or https://")));
            }
        }
        if self.timeout_secs == 0 {
            return Err(invalid("timeout_secs must be positive".to_string()));
        }
        Ok(())
    }

    /// Writes the configuration as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Connection settings for the HTTP client.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_url: self.api_url.clone(),
            asset_url: self.asset_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
