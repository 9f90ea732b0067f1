use super::*;
use crate::core::config::{ModelConfig, OrtGraphOptimizationLevel, OrtSessionConfig};
use crate::core::errors::OpaqueError;
use crate::domain::landmarks::FEATURE_LEN;
use crate::domain::letters::NUM_LETTERS;
use ort::logging::LogLevel;
use ort::session::builder::SessionBuilder;
use ort::value::ValueType;
use std::sync::atomic::AtomicUsize;
use tracing::{debug, info};

/// Name and declared shape of a model tensor.
///
/// Dynamic dimensions are reported by ONNX Runtime as `-1`.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorSignature {
    pub name: String,
    pub shape: Option<Vec<i64>>,
}

impl TensorSignature {
    /// The declared size of the last axis, if it is static.
    pub fn static_width(&self) -> Option<i64> {
        self.shape
            .as_ref()
            .and_then(|s| s.last().copied())
            .filter(|d| *d > 0)
    }
}

impl OrtInfer {
    /// Loads the model described by `config` into a pool of sessions and pins the
    /// input and output tensors.
    ///
    /// The configured names must exist in the model. When a name is not configured the
    /// first tensor the model declares is used. Declaration order comes from the model
    /// file, so the choice is the same on every start.
    pub fn from_config(config: &ModelConfig) -> Result<Self, SignError> {
        let path = config.model_path.as_path();
        let pool_size = config.session_pool_size.max(1);
        let mut sessions = Vec::with_capacity(pool_size);
        for _ in 0..pool_size {
            let builder = Session::builder()?;
            let builder = match &config.ort_session {
                Some(cfg) => Self::apply_ort_config(builder, cfg)?,
                // Keep ORT quiet unless asked otherwise
                None => builder.with_log_level(LogLevel::Error)?,
            };
            let session = builder.commit_from_file(path).map_err(|e| {
                SignError::model_load_error(
                    path,
                    "failed to create ONNX session",
                    Some("verify the model path and that it is a valid ONNX export"),
                    Some(e),
                )
            })?;
            sessions.push(Mutex::new(session));
        }

        let model_name = config.resolved_model_name();

        let (declared_inputs, declared_outputs) = {
            let session = sessions[0].lock().map_err(|_| {
                SignError::model_load_error(
                    path,
                    "session lock poisoned during load",
                    None,
                    None::<OpaqueError>,
                )
            })?;
            let inputs: Vec<TensorSignature> = session
                .inputs
                .iter()
                .map(|i| TensorSignature {
                    name: i.name.clone(),
                    shape: tensor_shape(&i.input_type),
                })
                .collect();
            let outputs: Vec<TensorSignature> = session
                .outputs
                .iter()
                .map(|o| TensorSignature {
                    name: o.name.clone(),
                    shape: tensor_shape(&o.output_type),
                })
                .collect();
            (inputs, outputs)
        };

        debug!(
            model = %model_name,
            inputs = ?declared_inputs,
            outputs = ?declared_outputs,
            "model signature"
        );

        let input = resolve_signature(&declared_inputs, config.input_name.as_deref(), "input")
            .map_err(|reason| SignError::model_load_error(path, reason, None, None::<OpaqueError>))?;
        let output = resolve_signature(&declared_outputs, config.output_name.as_deref(), "output")
            .map_err(|reason| SignError::model_load_error(path, reason, None, None::<OpaqueError>))?;
        check_signature_widths(&input, &output)
            .map_err(|reason| SignError::model_load_error(path, reason, None, None::<OpaqueError>))?;

        info!(
            model = %model_name,
            path = %path.display(),
            sessions = pool_size,
            input = %input.name,
            output = %output.name,
            "model loaded"
        );

        Ok(OrtInfer {
            sessions,
            next_idx: AtomicUsize::new(0),
            input,
            output,
            model_path: path.to_path_buf(),
            model_name,
        })
    }

    fn apply_ort_config(
        mut builder: SessionBuilder,
        cfg: &OrtSessionConfig,
    ) -> Result<SessionBuilder, ort::Error> {
        if let Some(intra) = cfg.intra_threads {
            builder = builder.with_intra_threads(intra)?;
        }
        if let Some(inter) = cfg.inter_threads {
            builder = builder.with_inter_threads(inter)?;
        }
        if let Some(level) = cfg.optimization_level {
            use ort::session::builder::GraphOptimizationLevel as GOL;
            let mapped = match level {
                OrtGraphOptimizationLevel::DisableAll => GOL::Disable,
                OrtGraphOptimizationLevel::Level1 => GOL::Level1,
                OrtGraphOptimizationLevel::Level2 => GOL::Level2,
                OrtGraphOptimizationLevel::Level3 | OrtGraphOptimizationLevel::All => GOL::Level3,
            };
            builder = builder.with_optimization_level(mapped)?;
        }
        let log_level = match cfg.log_severity_level.unwrap_or(3) {
            i32::MIN..=0 => LogLevel::Verbose,
            1 => LogLevel::Info,
            2 => LogLevel::Warning,
            3 => LogLevel::Error,
            _ => LogLevel::Fatal,
        };
        builder = builder.with_log_level(log_level)?;
        Ok(builder)
    }

    /// Returns the model path associated with this inference engine.
    pub fn model_path(&self) -> &std::path::Path {
        &self.model_path
    }

    /// The pinned input tensor.
    pub fn input_signature(&self) -> &TensorSignature {
        &self.input
    }

    /// The pinned output tensor.
    pub fn output_signature(&self) -> &TensorSignature {
        &self.output
    }
}

fn tensor_shape(value_type: &ValueType) -> Option<Vec<i64>> {
    match value_type {
        ValueType::Tensor { shape, .. } => Some(shape.iter().copied().collect()),
        _ => None,
    }
}

/// Picks the tensor named `requested`, or the first declared tensor when no name is given.
pub(super) fn resolve_signature(
    declared: &[TensorSignature],
    requested: Option<&str>,
    kind: &str,
) -> Result<TensorSignature, String> {
    match requested {
        Some(name) => declared
            .iter()
            .find(|t| t.name == name)
            .cloned()
            .ok_or_else(|| {
                let available: Vec<&str> = declared.iter().map(|t| t.name.as_str()).collect();
                format!(
                    "configured {} '{}' not found in model; available: {:?}",
                    kind, name, available
                )
            }),
        None => declared
            .first()
            .cloned()
            .ok_or_else(|| format!("model declares no {} tensors", kind)),
    }
}

/// Rejects models whose static shapes cannot take 63 features or produce 26 scores.
pub(super) fn check_signature_widths(
    input: &TensorSignature,
    output: &TensorSignature,
) -> Result<(), String> {
    if let Some(width) = input.static_width() {
        if width != FEATURE_LEN as i64 {
            return Err(format!(
                "input '{}' expects {} features, landmarks provide {}",
                input.name, width, FEATURE_LEN
            ));
        }
    }
    if let Some(width) = output.static_width() {
        if width < NUM_LETTERS as i64 {
            return Err(format!(
                "output '{}' has {} classes, need at least {}",
                output.name, width, NUM_LETTERS
            ));
        }
    }
    Ok(())
}
