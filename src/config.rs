use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::error::{Result, BoliError};
use crate::translate::online::{DEFAULT_ENDPOINT, DEFAULT_PROBE_URL};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub dictionary: DictionaryConfig,
    pub online: OnlineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the HTTP server to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// CSV file with English, Hindi and Gadhwali columns
    pub csv_path: PathBuf,
    /// Merge the built-in word tables into the dictionary
    pub include_builtin_lexicon: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OnlineConfig {
    /// Use the online translation service for English <-> Hindi
    pub enabled: bool,
    /// Translate endpoint URL
    pub endpoint: String,
    /// URL fetched to decide whether the service is reachable
    pub probe_url: String,
    /// Connectivity probe timeout in seconds
    pub probe_timeout_secs: u64,
    /// Timeout for a single online translation call in seconds
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("data/translations.csv"),
            include_builtin_lexicon: true,
        }
    }
}

impl Default for OnlineConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            probe_url: DEFAULT_PROBE_URL.to_string(),
            probe_timeout_secs: 3,
            request_timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BoliError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| BoliError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BoliError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| BoliError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}
