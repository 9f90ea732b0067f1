//! The core module of the prediction service.
//!
//! This module contains the fundamental components shared by the classifier and the
//! HTTP layer:
//! - Batch construction and tensor aliases
//! - Configuration management
//! - Error handling
//! - ONNX Runtime inference engine integration
//! - Traits at the inference seam

pub mod batch;
pub mod config;
pub mod errors;
pub mod inference;
pub mod traits;

pub use batch::{Tensor1D, Tensor2D, ToBatch};
pub use config::{ConfigError, ConfigValidator, ModelConfig, ServerConfig};
pub use errors::{SignError, SignResult};
pub use inference::OrtInfer;
pub use traits::InferenceEngine;

/// Initializes the tracing subscriber for logging.
///
/// This function sets up the tracing subscriber with environment filter and formatting layer.
/// `RUST_LOG` controls verbosity; without it the service logs at `info`.
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
