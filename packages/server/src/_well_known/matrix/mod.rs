//! Handlers for `/.well-known/matrix/*`

pub mod client;
pub mod server;

pub use client::{ClientDiscoveryDocument, UrlReference};
pub use server::ServerDiscoveryDocument;

pub const SERVER_PATH: &str = "/.well-known/matrix/server";
pub const CLIENT_PATH: &str = "/.well-known/matrix/client";
