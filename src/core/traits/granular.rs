//! Component traits that let the classifier run against any scoring backend.

use crate::core::batch::Tensor2D;
use crate::core::errors::SignError;
use std::fmt::Debug;

/// A model that maps a batch of feature rows to a batch of class score rows.
///
/// Implementations must be safe to call from several requests at once and must not
/// keep per-call state; the classifier shares one instance for the life of the process.
pub trait InferenceEngine: Send + Sync + Debug {
    /// Perform inference on a `[batch, features]` tensor.
    ///
    /// # Returns
    ///
    /// A `[batch, classes]` score tensor or an error
    fn infer(&self, input: &Tensor2D) -> Result<Tensor2D, SignError>;

    /// Name of the underlying model, used in logs and error messages.
    fn model_name(&self) -> &str;
}
