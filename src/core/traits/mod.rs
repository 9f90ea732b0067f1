//! Traits at the seams between the classifier and its collaborators.

pub mod granular;

pub use granular::InferenceEngine;
