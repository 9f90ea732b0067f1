//! Top-level service configuration.

use super::errors::{ConfigError, ConfigValidator};
use super::model::ModelConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Address the service listens on unless configured otherwise.
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Configuration for the prediction service.
///
/// Loaded from a JSON file and then adjusted by command-line overrides:
///
/// ```json
/// {
///   "bind": "0.0.0.0:5000",
///   "model": {
///     "model_path": "models/asl_letters.onnx",
///     "output_name": "dense",
///     "session_pool_size": 2
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind.
    pub bind: SocketAddr,
    /// Model settings.
    pub model: ModelConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            model: ModelConfig::default(),
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 5000))
}

impl ServerConfig {
    /// Reads a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

impl ConfigValidator for ServerConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.model.validate()
    }

    fn get_defaults() -> Self {
        Self::default()
    }
}
