//! Read-only sources for the values published in the well-known documents.
//!
//! Handlers never touch the process environment directly. They ask a
//! [`DiscoveryConfig`] held in [`crate::state::AppState`], which lets tests
//! run in parallel with fixed values instead of mutating global state.

use std::collections::HashMap;
use std::env;

pub const FEDERATION_SERVER_VAR: &str = "FEDERATION_SERVER";
pub const CLIENT_HOMESERVER_VAR: &str = "CLIENT_HOMESERVER";
pub const CLIENT_IDENTITYSERVER_VAR: &str = "CLIENT_IDENTITYSERVER";

/// Lookup of a single configuration value by name.
///
/// A value that is unset reads as `None`; callers treat that the same as the
/// empty string.
pub trait DiscoveryConfig: Send + Sync {
    fn value(&self, key: &str) -> Option<String>;

    /// `m.server` value for the federation document.
    fn federation_server(&self) -> String {
        self.value(FEDERATION_SERVER_VAR).unwrap_or_default()
    }

    /// `m.homeserver.base_url` value for the client document.
    fn client_homeserver(&self) -> String {
        self.value(CLIENT_HOMESERVER_VAR).unwrap_or_default()
    }

    /// `m.identity_server.base_url`, or `None` when unset or empty.
    fn client_identity_server(&self) -> Option<String> {
        self.value(CLIENT_IDENTITYSERVER_VAR).filter(|url| !url.is_empty())
    }
}

/// Reads the process environment on every lookup, so a value is never cached
/// past the request that asked for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfig;

impl DiscoveryConfig for EnvConfig {
    fn value(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// Fixed values, mainly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticConfig {
    values: HashMap<String, String>,
}

impl StaticConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl DiscoveryConfig for StaticConfig {
    fn value(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
