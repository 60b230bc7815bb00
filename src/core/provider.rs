//! External translation provider client

use futures::future::BoxFuture;
use std::time::Duration;
use tracing::debug;

use crate::core::errors::{GatewayError, Result};
use crate::core::models::Translation;

/// Seam for the external translation provider.
///
/// The gateway only depends on this trait, so tests substitute a fake
/// without touching the network.
pub trait Translator: Send + Sync {
    /// Translate `text` into the `to_locale` target language
    fn translate(&self, text: String, to_locale: String) -> BoxFuture<'_, Result<Translation>>;
}

/// Translator backed by the Google Translate web endpoint
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleTranslator {
    /// Create a new provider client against the given endpoint.
    ///
    /// No request timeout is set; calls inherit the client default.
    pub fn new(endpoint: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self { client, endpoint })
    }

    /// Send the HTTP request and classify the outcome
    async fn send_request(&self, text: &str, to_locale: &str) -> Result<Translation> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", to_locale),
                ("dt", "t"),
                ("q", text),
            ])
            .header(
                "User-Agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            )
            .send()
            .await
            .map_err(|e| GatewayError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();

        if status.is_success() {
            let json: serde_json::Value =
                response
                    .json()
                    .await
                    .map_err(|e| GatewayError::InvalidResponse {
                        message: e.to_string(),
                    })?;

            parse_payload(&json)
        } else {
            let status_code = status.as_u16();
            let error_text = response.text().await.unwrap_or_default();

            match status_code {
                429 => Err(GatewayError::RateLimited {
                    message: error_text,
                }),
                400 => Err(GatewayError::ProviderBadRequest {
                    message: error_text,
                }),
                _ => Err(GatewayError::Provider {
                    status: status_code,
                    message: error_text,
                }),
            }
        }
    }
}

impl Translator for GoogleTranslator {
    fn translate(&self, text: String, to_locale: String) -> BoxFuture<'_, Result<Translation>> {
        Box::pin(async move {
            debug!("Requesting translation to '{}'", to_locale);
            self.send_request(&text, &to_locale).await
        })
    }
}

/// Extract the translation from the provider payload.
///
/// The payload is a nested array: index 0 holds the translated
/// segments (each segment's first element is the translated text),
/// index 2 the detected source language.
fn parse_payload(json: &serde_json::Value) -> Result<Translation> {
    let segments = json
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| GatewayError::InvalidResponse {
            message: "No translation segments in response".to_string(),
        })?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|v| v.as_str()))
        .collect();

    if text.is_empty() {
        return Err(GatewayError::InvalidResponse {
            message: "Empty translation in response".to_string(),
        });
    }

    let detected_source_lang = json.get(2).and_then(|v| v.as_str()).map(|s| s.to_string());

    Ok(Translation {
        text,
        detected_source_lang,
    })
}
