//! HTTP surface of the sync hook.

use std::sync::Arc;

use axum::body::Bytes;
use axum::error_handling::HandleErrorLayer;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::error::{Error, Result};
use crate::reconciler::Reconciler;
use crate::resource::SyncResponse;
use crate::shutdown::GracefulShutdown;

/// Handler state. The reconciler is injected here rather than registered
/// globally, so several routers can share or differ in configuration.
#[derive(Clone)]
pub struct SyncState {
    reconciler: Arc<Reconciler>,
}

impl SyncState {
    pub fn new(reconciler: Reconciler) -> Self {
        Self {
            reconciler: Arc::new(reconciler),
        }
    }

    pub fn shared(reconciler: Arc<Reconciler>) -> Self {
        Self { reconciler }
    }

    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

impl ErrorResponse {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code,
                message: message.into(),
            },
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Error::Decode(_) => (StatusCode::BAD_REQUEST, "decode_error"),
            Error::Serialization(_) => (StatusCode::INTERNAL_SERVER_ERROR, "serialization_error"),
            Error::InvalidConfig(_) => (StatusCode::INTERNAL_SERVER_ERROR, "invalid_config"),
            Error::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "io_error"),
        };
        (status, Json(ErrorResponse::new(code, self.to_string()))).into_response()
    }
}

pub fn sync_router(state: SyncState, config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/sync", post(sync))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http());

    let router = match config.request_timeout {
        Some(timeout) => router.layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout_error))
                .layer(TimeoutLayer::new(timeout)),
        ),
        None => router,
    };

    router.with_state(state)
}

async fn sync(
    State(state): State<SyncState>,
    body: Bytes,
) -> std::result::Result<Json<SyncResponse>, Error> {
    match state.reconciler().sync_json(&body) {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            warn!("Rejected sync request: {}", e);
            Err(e)
        }
    }
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn handle_timeout_error(_err: tower::BoxError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse::new("timeout", "Request timed out")),
    )
}

/// Binds the listener and serves sync hooks until SIGINT or SIGTERM.
pub async fn serve(config: ServerConfig, reconciler: Reconciler) -> Result<()> {
    let router = sync_router(SyncState::new(reconciler), &config);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!("Serving sync hook on {}", listener.local_addr()?);

    let shutdown = GracefulShutdown::new(config.shutdown_drain);
    shutdown.start_signal_handler();

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown.signalled())
        .await?;

    info!("Sync hook server stopped");
    Ok(())
}
