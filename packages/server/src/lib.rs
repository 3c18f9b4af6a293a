pub mod _well_known;
pub mod config;
pub mod error;
pub mod response;
pub mod state;

use axum::{
    Router,
    http::{Method, Uri},
    routing::any,
};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::_well_known::matrix::{CLIENT_PATH, SERVER_PATH};
use crate::error::DiscoveryError;

pub use crate::config::{DiscoveryConfig, EnvConfig, ServerConfig, StaticConfig};
pub use crate::state::AppState;

/// Builds the discovery router.
///
/// Both documents are mounted with `any` so the handlers see every method and
/// can reject non-GET requests themselves; `get` would also answer HEAD.
/// Routing is exact: anything that is not one of the two paths falls through
/// to [`handler_404`].
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route(SERVER_PATH, any(_well_known::matrix::server::get))
        .route(CLIENT_PATH, any(_well_known::matrix::client::get))
        .fallback(handler_404)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}

async fn handler_404(method: Method, uri: Uri) -> DiscoveryError {
    debug!("Rejected {} {}", method, uri.path());
    if method != Method::GET {
        return DiscoveryError::MethodNotSupported;
    }
    DiscoveryError::NotFound
}
