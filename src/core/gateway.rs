//! Cache-lookup-or-fetch flow around the translation provider

use std::sync::Arc;
use tracing::info;

use crate::core::cache::TranslationCache;
use crate::core::errors::Result;
use crate::core::provider::Translator;

/// Target locale used when the request does not name one
pub const DEFAULT_LOCALE: &str = "fr";

/// Gateway combining the cache and the external provider.
///
/// The cache and the translator are injected at construction; the
/// gateway holds no other state.
pub struct TranslationGateway {
    cache: TranslationCache,
    translator: Arc<dyn Translator>,
}

impl TranslationGateway {
    pub fn new(cache: TranslationCache, translator: Arc<dyn Translator>) -> Self {
        Self { cache, translator }
    }

    /// Return the cached translation for (text, locale), or fetch it.
    ///
    /// The cache key is the plain concatenation of text and locale.
    /// Failures are never cached; the next identical request calls the
    /// provider again. At most one provider call per request, no retry.
    pub async fn translate(&self, text: &str, to_locale: Option<&str>) -> Result<String> {
        let locale = to_locale.unwrap_or(DEFAULT_LOCALE);
        let cache_key = format!("{text}-{locale}");

        if let Some(cached) = self.cache.get(&cache_key).await {
            info!("Translation found in cache");
            return Ok(cached);
        }

        let translation = self
            .translator
            .translate(text.to_string(), locale.to_string())
            .await?;

        self.cache.insert(cache_key, translation.text.clone()).await;

        Ok(translation.text)
    }

    /// The injected cache handle
    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }
}
