//! Configuration management for the prediction service.
//!
//! This module provides configuration types, validation traits, and the ONNX
//! Runtime session options applied when the model is loaded.

pub mod errors;
pub mod model;
pub mod onnx;
pub mod server;

// Re-export commonly used types
pub use errors::{ConfigError, ConfigValidator};
pub use model::{DEFAULT_MODEL_PATH, ModelConfig};
pub use onnx::{OrtGraphOptimizationLevel, OrtSessionConfig};
pub use server::{DEFAULT_BIND, ServerConfig};
