//! Model artifact configuration.

use super::errors::{ConfigError, ConfigValidator};
use super::onnx::OrtSessionConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the exported letter classifier.
pub const DEFAULT_MODEL_PATH: &str = "models/asl_letters.onnx";

/// Configuration for the letter classification model.
///
/// `input_name` and `output_name` pin the tensors used for inference. When either is
/// left unset, the first tensor the model declares is used, and the choice is resolved
/// once when the model is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the ONNX model file.
    pub model_path: PathBuf,
    /// Display name used in logs and errors. Defaults to the file stem.
    pub model_name: Option<String>,
    /// Name of the input tensor to feed.
    pub input_name: Option<String>,
    /// Name of the output tensor holding the class scores.
    pub output_name: Option<String>,
    /// Number of sessions kept for concurrent predictions (>=1).
    pub session_pool_size: usize,
    /// ONNX Runtime options applied to every session.
    pub ort_session: Option<OrtSessionConfig>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            model_name: None,
            input_name: None,
            output_name: None,
            session_pool_size: 1,
            ort_session: None,
        }
    }
}

impl ModelConfig {
    /// Creates a configuration pointing at `model_path` with default settings.
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            ..Self::default()
        }
    }

    /// Pins the output tensor by name.
    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = Some(name.into());
        self
    }

    /// Pins the input tensor by name.
    pub fn with_input_name(mut self, name: impl Into<String>) -> Self {
        self.input_name = Some(name.into());
        self
    }

    /// Sets the number of pooled sessions.
    pub fn with_session_pool_size(mut self, size: usize) -> Self {
        self.session_pool_size = size;
        self
    }

    /// Sets the ONNX Runtime session options.
    pub fn with_ort_session(mut self, config: OrtSessionConfig) -> Self {
        self.ort_session = Some(config);
        self
    }

    /// Name used for logs: the configured name or the model file stem.
    pub fn resolved_model_name(&self) -> String {
        self.model_name
            .clone()
            .or_else(|| {
                self.model_path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .map(|s| s.to_string())
            })
            .unwrap_or_else(|| "unknown_model".to_string())
    }
}

impl ConfigValidator for ModelConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.validate_model_path(&self.model_path)?;
        self.validate_positive_usize(self.session_pool_size, "session_pool_size")?;
        self.validate_optional_name(self.input_name.as_deref(), "input_name")?;
        self.validate_optional_name(self.output_name.as_deref(), "output_name")?;
        self.validate_optional_name(self.model_name.as_deref(), "model_name")?;
        Ok(())
    }

    fn get_defaults() -> Self {
        Self::default()
    }
}
