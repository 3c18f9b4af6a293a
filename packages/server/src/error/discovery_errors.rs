use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Outcomes other than a served document.
///
/// Both client errors map to 404. A wrong method is reported as 404 rather
/// than 405 for compatibility with existing deployments; revisit once those
/// no longer depend on it.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Method is not supported.")]
    MethodNotSupported,
    #[error("404 page not found")]
    NotFound,
    #[error("Failed to compose discovery document")]
    Serialization(#[from] serde_json::Error),
}

impl DiscoveryError {
    /// Convert error to response parts (status, plain-text body)
    pub fn to_response_parts(&self) -> (StatusCode, String) {
        match self {
            DiscoveryError::MethodNotSupported | DiscoveryError::NotFound => {
                (StatusCode::NOT_FOUND, self.to_string())
            },
            DiscoveryError::Serialization(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            },
        }
    }
}

impl IntoResponse for DiscoveryError {
    fn into_response(self) -> Response {
        if let DiscoveryError::Serialization(ref source) = self {
            error!("Failed to serialize discovery document: {}", source);
        }

        let (status, message) = self.to_response_parts();
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{}\n", message),
        )
            .into_response()
    }
}
