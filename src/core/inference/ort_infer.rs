//! Core ONNX Runtime inference engine with session pooling and pinned tensor names.

use crate::core::{batch::Tensor2D, errors::SignError, traits::InferenceEngine};
use ort::session::Session;
use std::sync::Mutex;

#[path = "ort_infer_builders.rs"]
mod ort_infer_builders;
#[path = "ort_infer_execution.rs"]
mod ort_infer_execution;
#[cfg(test)]
#[path = "ort_infer_tests.rs"]
mod ort_infer_tests;

pub use ort_infer_builders::TensorSignature;

/// ONNX Runtime engine shared by every request.
///
/// The engine is built once at startup and never mutated afterwards. Running a
/// session needs exclusive access, so each pooled session sits behind its own
/// mutex and requests are spread over the pool round-robin.
pub struct OrtInfer {
    pub(super) sessions: Vec<Mutex<Session>>,
    pub(super) next_idx: std::sync::atomic::AtomicUsize,
    pub(super) input: TensorSignature,
    pub(super) output: TensorSignature,
    pub(super) model_path: std::path::PathBuf,
    pub(super) model_name: String,
}

impl std::fmt::Debug for OrtInfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrtInfer")
            .field("sessions", &self.sessions.len())
            .field("input", &self.input)
            .field("output", &self.output)
            .field("model_path", &self.model_path)
            .field("model_name", &self.model_name)
            .finish()
    }
}

impl InferenceEngine for OrtInfer {
    fn infer(&self, batch: &Tensor2D) -> Result<Tensor2D, SignError> {
        self.infer_2d(batch)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
