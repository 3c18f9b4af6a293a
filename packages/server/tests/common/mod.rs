#![allow(dead_code)]

use axum_test::TestServer;
use matrix_wellknown::config::discovery_config::{
    CLIENT_HOMESERVER_VAR,
    CLIENT_IDENTITYSERVER_VAR,
    FEDERATION_SERVER_VAR,
};
use matrix_wellknown::{AppState, StaticConfig, create_router};
use rand::Rng;
use rand::distr::Alphanumeric;
use std::sync::Arc;

pub const SERVER_PATH: &str = "/.well-known/matrix/server";
pub const CLIENT_PATH: &str = "/.well-known/matrix/client";
pub const DISCOVERY_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Values a deployment would put in its environment
#[derive(Debug, Clone, Default)]
pub struct TestDeployment {
    pub federation_server: Option<String>,
    pub homeserver: Option<String>,
    pub identity_server: Option<String>,
}

impl TestDeployment {
    pub fn config(&self) -> StaticConfig {
        let mut config = StaticConfig::new();
        if let Some(value) = &self.federation_server {
            config = config.with(FEDERATION_SERVER_VAR, value.as_str());
        }
        if let Some(value) = &self.homeserver {
            config = config.with(CLIENT_HOMESERVER_VAR, value.as_str());
        }
        if let Some(value) = &self.identity_server {
            config = config.with(CLIENT_IDENTITYSERVER_VAR, value.as_str());
        }
        config
    }

    pub fn server(&self) -> TestServer {
        let app = create_router(AppState::new(Arc::new(self.config())));
        TestServer::new(app).unwrap()
    }
}

/// Random lowercase DNS label
pub fn random_label(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}

/// Random `scheme://label.label.example` URL
pub fn random_url(scheme: &str) -> String {
    format!("{}://{}.{}.example", scheme, random_label(6), random_label(8))
}
