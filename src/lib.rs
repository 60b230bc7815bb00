//! Translate Gateway - Caching HTTP façade over the Google Translate API
//!
//! This library validates translation requests, serves repeated requests
//! from an in-process TTL cache, and delegates cache misses to the
//! external translation provider.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod core;
pub mod server;

// Re-export key types for convenience
pub use crate::core::{
    cache::TranslationCache,
    config::GatewayConfig,
    errors::GatewayError,
    gateway::TranslationGateway,
    models::{TranslateRequest, TranslateResponse},
    provider::{GoogleTranslator, Translator},
};

pub use crate::server::api::{router, run_server, AppState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
