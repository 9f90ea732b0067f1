//! Structures and helpers for ONNX Runtime inference.
//!
//! This module holds the low level inference engine and its adaptation to the
//! [`InferenceEngine`](crate::core::traits::InferenceEngine) trait the classifier
//! depends on.

pub mod ort_infer;

pub use ort_infer::{OrtInfer, TensorSignature};
