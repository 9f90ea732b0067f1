//! Constructor helpers for [`SignError`].
//!
//! Model failures carry the model name and the step that failed so a single log
//! line is enough to tell a shape mismatch from a runtime crash:
//!
//! ```rust
//! use asl_letters::core::errors::{ModelInvocationErrorBuilder, OpaqueError};
//!
//! let error = ModelInvocationErrorBuilder::new("asl_letters", "output_validation")
//!     .context("expected at least 26 classes, got 10")
//!     .build(OpaqueError::new("class count mismatch"));
//! assert!(error.to_string().contains("output_validation"));
//! ```

use super::types::{OpaqueError, SignError};

/// Builder for composing detailed `ModelInvocation` errors without duplicating boilerplate.
#[derive(Clone, Debug)]
pub struct ModelInvocationErrorBuilder {
    model_name: String,
    operation: String,
    input_shape: Vec<usize>,
    context: String,
}

impl ModelInvocationErrorBuilder {
    /// Creates a new builder with the required model metadata.
    pub fn new(model_name: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            operation: operation.into(),
            input_shape: Vec::new(),
            context: String::new(),
        }
    }

    /// Stores the input tensor shape for contextual debugging.
    pub fn input_shape(mut self, shape: &[usize]) -> Self {
        self.input_shape = shape.to_vec();
        self
    }

    /// Adds free-form context to the error message.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Consumes the builder and produces the final `SignError`.
    pub fn build(self, error: impl std::error::Error + Send + Sync + 'static) -> SignError {
        let context = if self.input_shape.is_empty() {
            self.context
        } else {
            format!("{} (input shape {:?})", self.context, self.input_shape)
        };
        SignError::ModelInvocation {
            model_name: self.model_name,
            operation: self.operation,
            context,
            source: Box::new(error),
        }
    }
}

impl SignError {
    /// Creates a SignError for invalid input.
    ///
    /// # Arguments
    ///
    /// * `message` - A message describing the invalid input.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a SignError for normalization operations.
    ///
    /// # Arguments
    ///
    /// * `context` - Additional context about the error.
    /// * `error` - The underlying error that caused this error.
    pub fn normalization(
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Normalization {
            context: context.to_string(),
            source: Box::new(error),
        }
    }

    /// Creates a SignError for a failed or unusable model invocation.
    ///
    /// # Arguments
    ///
    /// * `model_name` - Name of the model that failed.
    /// * `operation` - The inference step that failed.
    /// * `context` - Additional context about the error.
    /// * `error` - The underlying error that caused this error.
    pub fn model_invocation(
        model_name: &str,
        operation: &str,
        context: &str,
        error: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ModelInvocationErrorBuilder::new(model_name, operation)
            .context(context)
            .build(error)
    }

    /// Creates a `ModelInvocation` error whose only cause is a message.
    pub fn malformed_output(model_name: &str, context: impl Into<String>) -> Self {
        let context = context.into();
        Self::model_invocation(
            model_name,
            "output_validation",
            &context,
            OpaqueError::new("malformed model output"),
        )
    }

    /// Creates a SignError for configuration errors.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Creates a SignError for model loading failures.
    ///
    /// # Arguments
    ///
    /// * `model_path` - Path of the model that failed to load.
    /// * `reason` - Why loading failed.
    /// * `suggestion` - Optional hint for the operator.
    /// * `source` - Optional underlying error.
    pub fn model_load_error(
        model_path: impl AsRef<std::path::Path>,
        reason: impl Into<String>,
        suggestion: Option<&str>,
        source: Option<impl std::error::Error + Send + Sync + 'static>,
    ) -> Self {
        let suggestion = suggestion
            .map(|s| format!("; suggested fix: {}", s))
            .unwrap_or_default();
        Self::ModelLoad {
            model_path: model_path.as_ref().display().to_string(),
            reason: reason.into(),
            suggestion,
            source: source.map(|e| Box::new(e) as _),
        }
    }

    /// Returns true when the error was caused by the caller's input rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::Normalization { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_includes_input_shape() {
        let error = ModelInvocationErrorBuilder::new("letters", "forward_pass")
            .input_shape(&[1, 63])
            .context("runtime failure")
            .build(OpaqueError::new("boom"));

        let message = error.to_string();
        assert!(message.contains("letters"));
        assert!(message.contains("forward_pass"));
        assert!(message.contains("[1, 63]"));
    }

    #[test]
    fn test_client_error_classification() {
        assert!(SignError::invalid_input("No features provided").is_client_error());
        assert!(
            SignError::normalization("reshape", OpaqueError::new("bad shape")).is_client_error()
        );
        assert!(!SignError::malformed_output("letters", "too few classes").is_client_error());
        assert!(!SignError::config_error("bad").is_client_error());
    }

    #[test]
    fn test_model_load_error_suggestion() {
        let error = SignError::model_load_error(
            "models/missing.onnx",
            "file not found",
            Some("check --model-path"),
            None::<OpaqueError>,
        );
        let message = error.to_string();
        assert!(message.contains("models/missing.onnx"));
        assert!(message.ends_with("suggested fix: check --model-path"));
    }
}
