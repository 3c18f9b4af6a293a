//! GET /.well-known/matrix/server
//! Type: server
//!
//! Tells remote homeservers which host and port to use for federation.

use axum::extract::State;
use axum::http::{Method, Uri};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::DiscoveryError;
use crate::response::{DiscoveryResponse, DiscoveryResult};
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerDiscoveryDocument {
    #[serde(rename = "m.server")]
    pub server: String,
}

impl ServerDiscoveryDocument {
    pub fn new(server: impl Into<String>) -> Self {
        Self { server: server.into() }
    }
}

pub async fn get(method: Method, uri: Uri, State(state): State<AppState>) -> DiscoveryResult {
    if method != Method::GET {
        return Err(DiscoveryError::MethodNotSupported);
    }

    let document = ServerDiscoveryDocument::new(state.config.federation_server());
    let response = DiscoveryResponse::new(&document)?;

    info!("Served a server well-known page at {}", uri.path());
    Ok(response)
}
