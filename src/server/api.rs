//! HTTP API server implementation

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::core::cache::TranslationCache;
use crate::core::config::GatewayConfig;
use crate::core::errors::GatewayError;
use crate::core::gateway::TranslationGateway;
use crate::core::models::{ErrorBody, TranslateResponse};
use crate::core::provider::GoogleTranslator;
use crate::core::validate::validate_request;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<TranslationGateway>,
}

/// Static documentation object served on the GET endpoints
fn documentation_object() -> Value {
    json!({
        "route": "/translate",
        "method": "POST",
        "description": "Translate text from one language to another using the Google Translate API.",
        "parameters": [
            { "name": "text", "description": "Text to be translated (required)." },
            { "name": "toLocale", "description": "Target language code (optional, default: \"fr(french)\")." }
        ],
        "example": {
            "request": {
                "text": "Hello, how are you?",
                "toLocale": "es"
            },
            "response": {
                "translation": "¡Hola, cómo estás?"
            }
        }
    })
}

/// Documentation handler
async fn documentation() -> Json<Value> {
    Json(documentation_object())
}

/// Translation handler.
///
/// An unreadable or absent body is validated as an empty object.
async fn translate(State(state): State<AppState>, body: Option<Json<Value>>) -> Response {
    let body = body.map(|Json(value)| value).unwrap_or(Value::Null);

    let request = match validate_request(&body) {
        Ok(request) => request,
        Err(errors) => {
            return (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response();
        }
    };

    match state
        .gateway
        .translate(&request.text, request.to_locale.as_deref())
        .await
    {
        Ok(translation) => Json(TranslateResponse::new(translation)).into_response(),
        Err(err) => error_response(err).into_response(),
    }
}

/// Map a gateway error to its HTTP status and response body.
///
/// Provider bad-request keeps the source's 500 status with a fixed
/// "Bad Request" error field; everything but rate limiting collapses
/// to a generic 500.
fn error_response(err: GatewayError) -> (StatusCode, Json<ErrorBody>) {
    warn!("Translation failed: {}", err);

    match err {
        GatewayError::RateLimited { message } => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorBody::new("TooManyRequestsError", message)),
        ),
        GatewayError::ProviderBadRequest { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new("Bad Request", message)),
        ),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new("Internal server error.", other.to_string())),
        ),
    }
}

/// Last-resort safety net for panics escaping a handler
fn handle_panic(_err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new("Internal server error.", "")),
    )
        .into_response()
}

/// Build the router.
///
/// The documentation routes are only mounted when enabled.
pub fn router(state: AppState, docs_enabled: bool) -> Router {
    let translate_routes = if docs_enabled {
        get(documentation).post(translate)
    } else {
        post(translate)
    };

    let mut app = Router::new().route("/translate", translate_routes);

    if docs_enabled {
        app = app.route("/", get(documentation));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(config: GatewayConfig) -> anyhow::Result<()> {
    config.validate()?;

    // Wire up the provider, cache, and gateway
    let translator = Arc::new(GoogleTranslator::new(config.translate_api_url.clone())?);
    let cache = TranslationCache::from_ttl_secs(config.cache_ttl_secs);
    let gateway = Arc::new(TranslationGateway::new(cache, translator));

    let app = router(AppState { gateway }, config.docs_enabled);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
