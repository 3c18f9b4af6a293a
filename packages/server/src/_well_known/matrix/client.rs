//! GET /.well-known/matrix/client
//! Type: client
//!
//! Returns homeserver discovery information for Matrix clients. The identity
//! server entry is only published when one is configured.

use axum::extract::State;
use axum::http::{Method, Uri};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::DiscoveryError;
use crate::response::{DiscoveryResponse, DiscoveryResult};
use crate::state::AppState;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlReference {
    /// Omitted from the output when empty; reads back as `""` when missing.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub base_url: String,
}

impl UrlReference {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDiscoveryDocument {
    #[serde(rename = "m.homeserver")]
    pub homeserver: UrlReference,
    #[serde(rename = "m.identity_server", default, skip_serializing_if = "Option::is_none")]
    pub identity_server: Option<UrlReference>,
}

impl ClientDiscoveryDocument {
    /// The homeserver entry is always present; the identity server only when
    /// `identity_server` is `Some` and non-empty.
    pub fn new(homeserver: impl Into<String>, identity_server: Option<String>) -> Self {
        Self {
            homeserver: UrlReference::new(homeserver),
            identity_server: identity_server
                .filter(|url| !url.is_empty())
                .map(UrlReference::new),
        }
    }
}

pub async fn get(method: Method, uri: Uri, State(state): State<AppState>) -> DiscoveryResult {
    if method != Method::GET {
        return Err(DiscoveryError::MethodNotSupported);
    }

    let document = ClientDiscoveryDocument::new(
        state.config.client_homeserver(),
        state.config.client_identity_server(),
    );
    let response = DiscoveryResponse::new(&document)?.allow_any_origin();

    info!("Served a client well-known page at {}", uri.path());
    Ok(response)
}
