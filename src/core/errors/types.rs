//! Error enum shared by the normalizer, the inference engine and the HTTP layer.

use thiserror::Error;

/// A plain message wrapped as an error so it can sit in a `source` chain.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct OpaqueError(pub String);

impl OpaqueError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Enum representing the errors that can occur while classifying a landmark sample.
#[derive(Error, Debug)]
pub enum SignError {
    /// The request did not carry a usable landmark sample.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// The landmark sample could not be normalized.
    #[error("normalization failed: {context}")]
    Normalization {
        /// Additional context about the error.
        context: String,
        /// The underlying error that caused this error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The model failed to run or returned output that cannot be turned into a letter.
    #[error("model '{model_name}' failed during {operation}: {context}")]
    ModelInvocation {
        /// Name of the model that failed.
        model_name: String,
        /// The inference step that failed (e.g. `forward_pass`, `output_validation`).
        operation: String,
        /// Additional context about the error.
        context: String,
        /// The underlying error that caused this error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The model artifact could not be loaded into a session.
    #[error("failed to load model '{model_path}': {reason}{suggestion}")]
    ModelLoad {
        /// Path of the model file.
        model_path: String,
        /// Why loading failed.
        reason: String,
        /// Optional hint for the operator, already prefixed.
        suggestion: String,
        /// The underlying error that caused this error.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Error indicating a configuration problem.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
    },

    /// Error from the ONNX Runtime session.
    #[error(transparent)]
    Session(#[from] ort::Error),

    /// Error from tensor operations.
    #[error("tensor operation")]
    Tensor(#[from] ndarray::ShapeError),

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

impl From<crate::core::config::ConfigError> for SignError {
    fn from(error: crate::core::config::ConfigError) -> Self {
        Self::ConfigError {
            message: error.to_string(),
        }
    }
}
