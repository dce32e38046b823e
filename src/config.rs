//! Service configuration
//!
//! Read from a TOML file with `[server]` and `[engine]` tables. Every field
//! is optional. The `PORT` environment variable replaces the port of the
//! bind address, and command-line flags are applied last by the binary.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::EngineConfig;
use crate::error::ConfigError;

/// Port used when neither the config nor `PORT` names one
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub bind: SocketAddr,
    /// Budget for one AI move before falling back to the easy tier
    pub request_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            request_timeout_ms: 2_000,
        }
    }
}

impl Config {
    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if given, else defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Apply a `PORT` value. Unparseable values are ignored.
    pub fn apply_port(&mut self, port: Option<&str>) -> bool {
        match port.and_then(|p| p.trim().parse::<u16>().ok()) {
            Some(port) => {
                self.server.bind.set_port(port);
                true
            }
            None => false,
        }
    }

    /// Apply the `PORT` environment variable
    pub fn apply_env(&mut self) -> bool {
        let port = std::env::var("PORT").ok();
        self.apply_port(port.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.bind.port(), DEFAULT_PORT);
        assert_eq!(config.server.request_timeout_ms, 2_000);
        assert_eq!(config.engine, EngineConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let text = r#"
            [server]
            bind = "127.0.0.1:8080"

            [engine]
            hard_depth = 2
            easy_margin_percent = 5
        "#;
        let config: Config = toml::from_str(text).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.server.request_timeout_ms, 2_000);
        assert_eq!(config.engine.hard_depth, 2);
        assert_eq!(config.engine.easy_margin_percent, 5);
        assert_eq!(config.engine.max_candidates, 20);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_port_override() {
        let mut config = Config::default();
        assert!(config.apply_port(Some("4100")));
        assert_eq!(config.server.bind.port(), 4100);
        assert!(!config.apply_port(Some("not-a-port")));
        assert!(!config.apply_port(None));
        assert_eq!(config.server.bind.port(), 4100);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/gomoku.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_bad_toml() {
        let path = std::env::temp_dir().join(format!("gomoku-bad-{}.toml", std::process::id()));
        fs::write(&path, "[server\nbind = 1").unwrap();
        let err = Config::load(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
