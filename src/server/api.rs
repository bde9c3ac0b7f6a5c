//! HTTP API server implementation

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::core::client::PipelineClient;
use crate::core::config::TranslatorConfig;
use crate::core::errors::TranslationError;
use crate::core::models::{TranslationRequest, TranslationResponse};

/// Application state
#[derive(Clone)]
pub struct AppState {
    client: PipelineClient,
    started_at: DateTime<Utc>,
}

impl AppState {
    /// State serving requests through `client`, starting the uptime clock now
    pub fn new(client: PipelineClient) -> Self {
        Self {
            client,
            started_at: Utc::now(),
        }
    }
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
    uptime_secs: i64,
}

/// Health check handler
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: (Utc::now() - state.started_at).num_seconds(),
    })
}

/// Translation handler
async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslationRequest>, JsonRejection>,
) -> Result<Json<TranslationResponse>, TranslationError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected translation request: {}", rejection.body_text());
        TranslationError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    })?;

    debug!(
        "Translating {} chars {} -> {}",
        request
            .text
            .as_ref()
            .and_then(|t| t.as_str())
            .map_or(0, |t| t.chars().count()),
        request.source_lang(),
        request.target_lang.as_ref().unwrap_or(&serde_json::Value::Null),
    );

    match state.client.translate(&request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            warn!("Translation failed: {}", e);
            Err(e)
        }
    }
}

/// Build the router with CORS open to every origin
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/translate", post(translate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the HTTP server until Ctrl+C
pub async fn run_server(config: TranslatorConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let client = PipelineClient::new(config)?;
    let app = router(AppState::new(client));

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
