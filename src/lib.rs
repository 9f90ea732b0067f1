//! # ASL Letters
//!
//! A small HTTP service that classifies one hand pose into an American Sign Language
//! fingerspelling letter using a pre-trained ONNX model.
//!
//! ## Flow
//!
//! 1. A request carries 63 numbers: 21 hand joints, each `(x, y, z)`.
//! 2. [`processors::NormalizeLandmarks`] centers the pose on the wrist and scales it
//!    into `[-1, 1]`.
//! 3. [`predictor::LetterClassifier`] runs the vector through the model as a batch of
//!    one and maps the best of the 26 scores onto `A..=Z`.
//!
//! ## Modules
//!
//! * [`core`] - Errors, configuration, the ONNX Runtime engine and tracing setup
//! * [`domain`] - Landmark samples and letter labels
//! * [`processors`] - Normalization and top-k ranking
//! * [`predictor`] - The letter classifier
//! * [`server`] - The `POST /predict` HTTP surface
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use asl_letters::prelude::*;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = OrtInfer::from_config(&ModelConfig::new("models/asl_letters.onnx"))?;
//! let classifier = LetterClassifier::new(Arc::new(engine));
//!
//! let features: Vec<f64> = vec![0.0; 63];
//! let prediction = classifier.predict(&LandmarkSet::from_flat(&features)?)?;
//! println!("{}", prediction.letter);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod domain;
pub mod predictor;
pub mod processors;
pub mod server;

/// Prelude module for convenient imports.
///
/// ```rust
/// use asl_letters::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::config::{ModelConfig, ServerConfig};
    pub use crate::core::{InferenceEngine, OrtInfer, SignError, SignResult, init_tracing};
    pub use crate::domain::{LandmarkSet, Letter};
    pub use crate::predictor::{LetterClassifier, Prediction};
    pub use crate::processors::{NormalizeLandmarks, NormalizedFeatures};
    pub use crate::server::{AppState, router};
}
