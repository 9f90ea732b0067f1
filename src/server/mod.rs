//! HTTP surface of the service.
//!
//! A single route, `POST /predict`, accepts `{"features": [63 numbers]}` and answers
//! `{"letter": "A".."Z"}`. Errors are answered with `{"error": "..."}`: 400 for bad
//! input and 500 when the model fails. CORS is open to any origin so the browser
//! front-end can call the service directly.

pub mod error;
pub mod handlers;

use crate::core::config::ServerConfig;
use crate::core::errors::SignResult;
use crate::predictor::LetterClassifier;
use axum::Router;
use axum::routing::post;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use error::{ApiError, ErrorBody};
pub use handlers::{PredictRequest, PredictResponse};

/// State shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub classifier: Arc<LetterClassifier>,
}

impl AppState {
    pub fn new(classifier: LetterClassifier) -> Self {
        Self {
            classifier: Arc::new(classifier),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(handlers::predict))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `config.bind` and serves until Ctrl-C.
pub async fn serve(config: &ServerConfig, state: AppState) -> SignResult<()> {
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        // Without a signal handler the server runs until killed
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
