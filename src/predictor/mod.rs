//! Predictors built on top of the inference engine.

/// Letter classifier for hand landmark samples
pub mod letter_classifier;

pub use letter_classifier::{LetterClassifier, Prediction};
