//! Configuration management

use serde::{Deserialize, Serialize};

/// Default Google Translate web endpoint
const DEFAULT_TRANSLATE_API_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Configuration for the translation gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    pub translate_api_url: String,
    /// Cache entry lifetime in seconds; 0 means entries never expire
    pub cache_ttl_secs: u64,
    /// Serve the static documentation object on GET / and GET /translate
    pub docs_enabled: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            translate_api_url: DEFAULT_TRANSLATE_API_URL.to_string(),
            cache_ttl_secs: 0,
            docs_enabled: true,
        }
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()?;

        let translate_api_url = std::env::var("TRANSLATE_API_URL")
            .unwrap_or_else(|_| DEFAULT_TRANSLATE_API_URL.to_string());

        let cache_ttl_secs = std::env::var("CACHE_TTL_SECS")
            .unwrap_or_else(|_| "0".to_string())
            .parse::<u64>()?;

        let docs_enabled = std::env::var("DOCS_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()?;

        Ok(Self {
            host,
            port,
            translate_api_url,
            cache_ttl_secs,
            docs_enabled,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.host.is_empty() {
            return Err(anyhow::anyhow!("host is required"));
        }

        if self.translate_api_url.is_empty() {
            return Err(anyhow::anyhow!("translate_api_url is required"));
        }

        if !self.translate_api_url.starts_with("http") {
            return Err(anyhow::anyhow!(
                "translate_api_url must be an http(s) URL"
            ));
        }

        Ok(())
    }
}
