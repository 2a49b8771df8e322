use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "SITE_BIND_ADDR";
pub const DIST_DIR_VAR: &str = "SITE_DIST_DIR";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_DIST_DIR: &str = "frontend/dist";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value:?}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub dist_dir: PathBuf,
}

impl ServerConfig {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: bind.clone(),
                source,
            })?;

        let dist = lookup(DIST_DIR_VAR).unwrap_or_else(|| DEFAULT_DIST_DIR.to_string());
        if dist.trim().is_empty() {
            return Err(ConfigError::Empty { var: DIST_DIR_VAR });
        }

        Ok(Self {
            bind_addr,
            dist_dir: PathBuf::from(dist.trim()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.dist_dir, PathBuf::from("frontend/dist"));
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (BIND_ADDR_VAR, "0.0.0.0:8080"),
            (DIST_DIR_VAR, "/srv/site"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.dist_dir, PathBuf::from("/srv/site"));
    }

    #[test]
    fn rejects_bad_address() {
        let err = ServerConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    }

    #[test]
    fn rejects_empty_dist_dir() {
        let err = ServerConfig::from_lookup(lookup(&[(DIST_DIR_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Empty { .. }));
    }
}
