use std::env;
use std::net::SocketAddr;

use passcards_core::util::non_blank;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "PASSCARDS_API_BIND_ADDR";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr =
            non_blank(lookup(BIND_ADDR_VAR)).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        if bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "{BIND_ADDR_VAR} must be a socket address like 127.0.0.1:8080, got {bind_addr:?}"
            )));
        }

        Ok(Self { bind_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_port_8080() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
    }

    #[test]
    fn bind_addr_can_be_overridden() {
        let config = AppConfig::from_lookup(|key| {
            (key == BIND_ADDR_VAR).then(|| " 0.0.0.0:9000 ".to_string())
        })
        .unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
    }

    #[test]
    fn rejects_unparseable_bind_addr() {
        let err = AppConfig::from_lookup(|_| Some("localhost".to_string())).unwrap_err();
        assert!(err.to_string().contains(BIND_ADDR_VAR));
    }
}
