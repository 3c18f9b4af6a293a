pub mod discovery_config;
pub mod server_config;

pub use discovery_config::{DiscoveryConfig, EnvConfig, StaticConfig};
pub use server_config::{ConfigError, ServerConfig};
