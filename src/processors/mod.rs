//! Processors applied before and after inference.
//!
//! - [`normalization`] turns a raw hand pose into the model's feature vector.
//! - [`utils::topk`] ranks the model's class scores.

pub mod normalization;
pub mod utils;

pub use normalization::{NormalizeLandmarks, NormalizedFeatures};
pub use utils::{Topk, TopkResult};
