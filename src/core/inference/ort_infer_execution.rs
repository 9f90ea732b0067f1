use super::*;
use crate::core::errors::{ModelInvocationErrorBuilder, OpaqueError};
use ndarray::ArrayView2;
use ort::value::TensorRef;
use std::sync::atomic::Ordering;

impl OrtInfer {
    /// Runs a `[batch, features]` tensor through the model and returns the pinned
    /// output as `[batch, classes]`.
    pub fn infer_2d(&self, x: &Tensor2D) -> Result<Tensor2D, SignError> {
        let input_shape = x.shape().to_vec();
        let batch_size = input_shape[0];

        let input_tensor = TensorRef::from_array_view(x.view()).map_err(|e| {
            ModelInvocationErrorBuilder::new(&self.model_name, "tensor_conversion")
                .input_shape(&input_shape)
                .context("failed to convert input tensor")
                .build(e)
        })?;

        let inputs = ort::inputs![self.input.name.as_str() => input_tensor];

        let idx = self.next_idx.fetch_add(1, Ordering::Relaxed) % self.sessions.len();
        let mut session_guard = self.sessions[idx].lock().map_err(|_| {
            SignError::model_invocation(
                &self.model_name,
                "session_lock",
                &format!(
                    "failed to acquire session {}/{}",
                    idx + 1,
                    self.sessions.len()
                ),
                OpaqueError::new("session lock poisoned"),
            )
        })?;

        let outputs = session_guard.run(inputs).map_err(|e| {
            ModelInvocationErrorBuilder::new(&self.model_name, "forward_pass")
                .input_shape(&input_shape)
                .context(format!(
                    "ONNX Runtime inference failed with input '{}' -> output '{}'",
                    self.input.name, self.output.name
                ))
                .build(e)
        })?;

        let (output_shape, output_data) = outputs[self.output.name.as_str()]
            .try_extract_tensor::<f32>()
            .map_err(|e| {
                ModelInvocationErrorBuilder::new(&self.model_name, "output_extraction")
                    .input_shape(&input_shape)
                    .context(format!(
                        "failed to extract output tensor '{}' as f32",
                        self.output.name
                    ))
                    .build(e)
            })?;
        let output_dims: Vec<i64> = output_shape.iter().copied().collect();

        scores_from_raw(&self.model_name, batch_size, &output_dims, output_data)
    }
}

/// Validates a raw output buffer and copies it into a `[batch, classes]` tensor.
pub(super) fn scores_from_raw(
    model_name: &str,
    batch_size: usize,
    output_dims: &[i64],
    output_data: &[f32],
) -> Result<Tensor2D, SignError> {
    if output_dims.len() != 2 {
        return Err(SignError::malformed_output(
            model_name,
            format!(
                "expected 2D output tensor, got {}D with shape {:?}",
                output_dims.len(),
                output_dims
            ),
        ));
    }
    if output_dims[0] != batch_size as i64 || output_dims[1] <= 0 {
        return Err(SignError::malformed_output(
            model_name,
            format!(
                "expected output shape [{}, classes], got {:?}",
                batch_size, output_dims
            ),
        ));
    }

    let num_classes = output_dims[1] as usize;
    let expected_len = batch_size * num_classes;
    if output_data.len() != expected_len {
        return Err(SignError::malformed_output(
            model_name,
            format!(
                "output data size mismatch: expected {}, got {}",
                expected_len,
                output_data.len()
            ),
        ));
    }

    let view = ArrayView2::from_shape((batch_size, num_classes), output_data)?;
    Ok(view.to_owned())
}
