//! Error types for the letter classification service.
//!
//! Every fallible operation in the crate returns [`SignError`]. The variants map
//! onto the failure classes a caller needs to tell apart: malformed landmark input,
//! a normalization failure, a model that could not be invoked or returned unusable
//! output, and startup-time configuration or model loading problems.
//!
//! # Usage
//!
//! ```rust
//! use asl_letters::core::errors::SignError;
//!
//! let error = SignError::invalid_input("No features provided");
//! assert!(error.is_client_error());
//!
//! let config_error = SignError::config_error("session_pool_size must be greater than 0");
//! assert!(!config_error.is_client_error());
//! ```

pub mod constructors;
pub mod types;

pub use constructors::ModelInvocationErrorBuilder;
pub use types::{OpaqueError, SignError};

/// Convenient result alias for classification operations.
pub type SignResult<T> = Result<T, SignError>;
