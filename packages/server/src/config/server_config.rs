use std::env;
use std::net::SocketAddr;

use tracing::{info, warn};

/// Listen address used when `BIND_ADDRESS` is unset: all interfaces, port 8080.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub const BIND_ADDRESS_VAR: &str = "BIND_ADDRESS";

/// Process-level settings resolved once at startup.
///
/// Discovery values are deliberately not part of this struct; they are read
/// per request through [`crate::config::DiscoveryConfig`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = match env::var(BIND_ADDRESS_VAR) {
            Ok(value) if !value.trim().is_empty() => value,
            Ok(_) | Err(_) => {
                warn!("{} not set, defaulting to {}", BIND_ADDRESS_VAR, DEFAULT_BIND_ADDRESS);
                DEFAULT_BIND_ADDRESS.to_string()
            },
        };

        let config = Self::parse(&raw)?;
        info!("Server configuration initialized: bind_address={}", config.bind_address);
        Ok(config)
    }

    pub fn parse(bind_address: &str) -> Result<Self, ConfigError> {
        let bind_address = bind_address.trim().parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidFormat(format!("{}={:?}: {}", BIND_ADDRESS_VAR, bind_address, e))
        })?;

        Ok(Self { bind_address })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid format for environment variable: {0}")]
    InvalidFormat(String),
}
