//! JSON response wrapper for the well-known documents

use crate::error::DiscoveryError;
use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Exact content type published for both documents.
pub const DISCOVERY_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// A serialized discovery document ready to be written.
///
/// The body is serialized up front so that a failure surfaces as a
/// [`DiscoveryError`] before any headers are committed.
#[derive(Debug)]
pub struct DiscoveryResponse {
    body: String,
    allow_any_origin: bool,
}

impl DiscoveryResponse {
    pub fn new<T: Serialize>(document: &T) -> Result<Self, DiscoveryError> {
        let body = serde_json::to_string(document)?;
        Ok(Self { body, allow_any_origin: false })
    }

    /// Adds `Access-Control-Allow-Origin: *` so browser clients can fetch it.
    pub fn allow_any_origin(mut self) -> Self {
        self.allow_any_origin = true;
        self
    }
}

impl IntoResponse for DiscoveryResponse {
    fn into_response(self) -> Response {
        let mut response = (
            StatusCode::OK,
            [(header::CONTENT_TYPE, HeaderValue::from_static(DISCOVERY_CONTENT_TYPE))],
            self.body,
        )
            .into_response();

        if self.allow_any_origin {
            response
                .headers_mut()
                .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        }

        response
    }
}

/// Standard result type for discovery handlers
pub type DiscoveryResult = Result<DiscoveryResponse, DiscoveryError>;
