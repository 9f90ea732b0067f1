//! Tensor aliases and batch construction.
//!
//! The service only ever runs one sample at a time, but the model signature is
//! batched, so a sample is wrapped into a `[1, n]` tensor before inference.

use crate::core::errors::{SignError, SignResult};

/// A 2-dimensional tensor represented as a 2D array of f32 values.
pub type Tensor2D = ndarray::Array2<f32>;

/// A 1-dimensional tensor represented as a 1D array of f32 values.
pub type Tensor1D = ndarray::Array1<f32>;

/// Trait for turning a single sample into a model-ready batch.
pub trait ToBatch {
    /// Wraps `self` as a batch of one row.
    fn to_single_batch(&self) -> SignResult<Tensor2D>;
}

impl ToBatch for Tensor1D {
    fn to_single_batch(&self) -> SignResult<Tensor2D> {
        if self.is_empty() {
            return Err(SignError::invalid_input("cannot batch an empty sample"));
        }
        Ok(self.view().insert_axis(ndarray::Axis(0)).to_owned())
    }
}
