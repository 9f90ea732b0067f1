//! Request handlers.

use super::AppState;
use super::error::ApiError;
use crate::core::errors::SignError;
use crate::domain::landmarks::LandmarkSet;
use crate::domain::letters::Letter;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /predict`.
///
/// `features` stays untyped here so that a missing, non-array or non-numeric value is
/// reported with a specific message instead of a generic parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub features: Option<Value>,
}

/// Successful response of `POST /predict`.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub letter: Letter,
}

/// `POST /predict`: classify one hand pose.
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(request) = payload?;
    let landmarks = LandmarkSet::from_json(request.features.as_ref())?;

    let classifier = state.classifier.clone();
    let model_name = classifier.model_name().to_string();
    let prediction = tokio::task::spawn_blocking(move || classifier.predict(&landmarks))
        .await
        .map_err(|e| {
            SignError::model_invocation(&model_name, "blocking_task", "inference task aborted", e)
        })??;

    Ok(Json(PredictResponse {
        letter: prediction.letter,
    }))
}
