use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::conversation::DEFAULT_SEEN_CAPACITY;
use crate::wallet::{AvailableNetwork, ChainConfig};

pub const DEFAULT_CONFIG_PATH: &str = "config/quilt.json";

/// Overrides `wallet_url` from the environment (or `.env`).
pub const WALLET_URL_ENV: &str = "QUILT_WALLET_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON-RPC endpoint of the wallet bridge. No endpoint means no wallet.
    pub wallet_url: Option<String>,
    pub network: AvailableNetwork,
    /// Try to connect once at startup.
    pub auto_connect: bool,
    /// How many message hashes to remember for duplicate detection; 0 keeps all.
    pub seen_message_capacity: usize,
    pub toast_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            wallet_url: None,
            network: AvailableNetwork::default(),
            auto_connect: true,
            seen_message_capacity: DEFAULT_SEEN_CAPACITY,
            toast_seconds: 5,
        }
    }
}

impl AppConfig {
    pub fn chain(&self) -> ChainConfig {
        self.network.chain_config()
    }

    /// Environment wins over the file when set and non-empty.
    pub fn apply_env(mut self, wallet_url: Option<String>) -> Self {
        if let Some(url) = wallet_url.filter(|url| !url.trim().is_empty()) {
            self.wallet_url = Some(url);
        }
        self
    }
}

pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Loads the config file, falling back to defaults on any problem.
pub fn load_config(path: &str) -> AppConfig {
    match read_config(Path::new(path)) {
        Ok(config) => config,
        Err(err @ ConfigError::Read { .. }) => {
            log::info!("{err}; using defaults");
            AppConfig::default()
        }
        Err(err) => {
            log::warn!("{err}; using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("quilt-{}-{name}", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_config("definitely/not/here.json");
        assert_eq!(config, AppConfig::default());
        assert!(config.auto_connect);
        assert_eq!(config.wallet_url, None);
        assert_eq!(config.seen_message_capacity, 0);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_file("partial.json", r#"{ "wallet_url": "http://localhost:8545", "network": "avalanche" }"#);
        let config = load_config(path.to_str().unwrap());
        fs::remove_file(&path).ok();

        assert_eq!(config.wallet_url.as_deref(), Some("http://localhost:8545"));
        assert_eq!(config.network, AvailableNetwork::Avalanche);
        assert_eq!(config.seen_message_capacity, DEFAULT_SEEN_CAPACITY);
        assert_eq!(config.toast_seconds, 5);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = temp_file("broken.json", "{ not json");
        let result = read_config(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn env_overrides_only_when_set() {
        let base = AppConfig {
            wallet_url: Some("http://file".into()),
            ..AppConfig::default()
        };
        assert_eq!(base.clone().apply_env(None).wallet_url.as_deref(), Some("http://file"));
        assert_eq!(base.clone().apply_env(Some(" ".into())).wallet_url.as_deref(), Some("http://file"));
        assert_eq!(base.apply_env(Some("http://env".into())).wallet_url.as_deref(), Some("http://env"));
    }
}
