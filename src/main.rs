//! campus-assistant server.
//!
//! Reads configuration from `CAMPUS_ASSISTANT__*` environment variables
//! (see [`campus_assistant::config`]) and serves the REST webhook.

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use campus_assistant::adapters::http::{assistant_routes, AssistantAppState};
use campus_assistant::adapters::nlu::{KeywordNluClassifier, RasaNluClient, RasaNluConfig};
use campus_assistant::adapters::storage::{FileTranscriptWriter, InMemorySessionStore};
use campus_assistant::config::{AppConfig, CorsPolicy, NluConfig, NluProvider, ServerConfig};
use campus_assistant::ports::NluClassifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let nlu = build_nlu(&config.nlu)?;
    info!(provider = nlu.provider_name(), "NLU classifier ready");

    let state = AssistantAppState {
        sessions: Arc::new(InMemorySessionStore::new()),
        nlu,
        transcripts: Arc::new(FileTranscriptWriter::new(&config.assistant.transcript_dir)),
        settings: config.assistant.gateway_settings()?,
    };
    info!(
        limit = state.settings.quota.limit(),
        transcript_dir = %config.assistant.transcript_dir.display(),
        "Conversation gateway configured"
    );

    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "campus-assistant listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn build_nlu(config: &NluConfig) -> Result<Arc<dyn NluClassifier>, Box<dyn std::error::Error>> {
    match config.provider {
        NluProvider::Keyword => Ok(Arc::new(KeywordNluClassifier::new())),
        NluProvider::Rasa => {
            let url = config.url.clone().unwrap_or_default();
            let mut rasa = RasaNluConfig::new(url).with_timeout(config.timeout());
            if let Some(token) = config.token() {
                rasa = rasa.with_token(token);
            }
            Ok(Arc::new(RasaNluClient::new(rasa)?))
        }
    }
}

fn build_router(state: AssistantAppState, server: &ServerConfig) -> Router {
    assistant_routes()
        .with_state(state)
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = match server.cors_policy() {
        CorsPolicy::AnyOrigin => return CorsLayer::permissive(),
        CorsPolicy::SameOrigin => return CorsLayer::new(),
        CorsPolicy::Origins(origins) => origins,
    };

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
