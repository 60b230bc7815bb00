//! CLI command definitions and handlers

use clap::Subcommand;

/// Commands for the translation gateway
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the caching HTTP gateway
    Serve {
        /// Bind address (default: 0.0.0.0, or HOST env var)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (default: 3000, or PORT env var)
        #[arg(short, long)]
        port: Option<u16>,

        /// Cache entry lifetime in seconds, 0 for unbounded
        #[arg(long)]
        cache_ttl: Option<u64>,

        /// Disable the documentation endpoints
        #[arg(long)]
        no_docs: bool,

        /// Enable debug mode
        #[arg(long)]
        debug: bool,
    },

    /// Translate a single text and print the result
    Text {
        /// Text to translate
        text: String,

        /// Target language code (default: fr)
        #[arg(short, long, default_value = "fr")]
        to_locale: String,
    },
}

/// Handle serve command
pub async fn handle_serve(
    host: Option<String>,
    port: Option<u16>,
    cache_ttl: Option<u64>,
    no_docs: bool,
    debug: bool,
) -> anyhow::Result<()> {
    use crate::core::config::GatewayConfig;
    use crate::server::api::run_server;
    use tracing::info;

    if debug {
        std::env::set_var("RUST_LOG", "debug");
    }

    let mut config = GatewayConfig::from_env()?;

    // CLI flags override environment values
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(cache_ttl) = cache_ttl {
        config.cache_ttl_secs = cache_ttl;
    }
    if no_docs {
        config.docs_enabled = false;
    }

    config.validate()?;

    info!("Starting HTTP gateway on {}:{}", config.host, config.port);
    if config.cache_ttl_secs == 0 {
        info!("Cache TTL: unbounded");
    } else {
        info!("Cache TTL: {}s", config.cache_ttl_secs);
    }

    println!("🚀 Server starting on http://{}:{}", config.host, config.port);
    if config.docs_enabled {
        println!(
            "📖 API documentation: http://{}:{}/translate",
            config.host, config.port
        );
    }

    run_server(config).await?;

    Ok(())
}

/// Handle one-shot translation command
pub async fn handle_text(text: String, to_locale: String) -> anyhow::Result<()> {
    use crate::core::config::GatewayConfig;
    use crate::core::provider::{GoogleTranslator, Translator};
    use tracing::info;

    let config = GatewayConfig::from_env()?;
    config.validate()?;

    info!("Translating to '{}'", to_locale);

    let translator = GoogleTranslator::new(config.translate_api_url)?;
    let translation = translator.translate(text, to_locale).await?;

    if let Some(lang) = &translation.detected_source_lang {
        eprintln!("Detected source language: {lang}");
    }
    println!("{}", translation.text);

    Ok(())
}
