//! Per-request failures of the discovery responder

pub mod discovery_errors;

pub use discovery_errors::DiscoveryError;
