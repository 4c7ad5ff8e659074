//! Main HTTP Gateway Server.

use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, instrument};

use menulens_config::MenuLensConfig;
use menulens_pipeline::MenuPipeline;

use crate::error::GENERIC_FAILURE;
use crate::health_api::get_health;
use crate::upload::upload_menu;

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Application state shared across routes.
#[derive(Clone)]
pub struct GatewayState {
    pub pipeline: Arc<MenuPipeline>,
    pub upload_field: String,
    pub max_upload_bytes: usize,
}

impl GatewayState {
    pub fn new(pipeline: MenuPipeline, upload_field: impl Into<String>, max_upload_bytes: usize) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            upload_field: upload_field.into(),
            max_upload_bytes,
        }
    }

    /// Production wiring from the loaded config.
    pub fn from_config(config: &MenuLensConfig) -> Self {
        Self::new(
            MenuPipeline::from_config(config),
            config.server.upload_field.clone(),
            config.server.max_upload_bytes,
        )
    }
}

/// Build the router shared by the long-running server and the serverless handler.
pub fn build_router(state: GatewayState) -> Router {
    let body_limit = state.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES);

    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/upload", post(upload_menu))
        .route("/api/health", get(get_health))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(detail, "Handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": GENERIC_FAILURE })),
    )
        .into_response()
}

/// Starts the Axum HTTP server and runs until Ctrl-C.
#[instrument(skip(state))]
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let app = build_router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("Gateway HTTP server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}
