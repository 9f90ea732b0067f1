//! Mapping from [`SignError`] to HTTP responses.

use crate::core::errors::SignError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, warn};

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// An error on its way to the client.
#[derive(Debug)]
pub enum ApiError {
    /// The request body was not a JSON object.
    Body(JsonRejection),
    /// Classification failed.
    Sign(SignError),
}

impl From<SignError> for ApiError {
    fn from(error: SignError) -> Self {
        Self::Sign(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Sign(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Sign(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field.
    pub fn message(&self) -> String {
        match self {
            Self::Body(rejection) => rejection.body_text(),
            // Input messages go back verbatim
            Self::Sign(SignError::InvalidInput { message }) => message.clone(),
            Self::Sign(e) => e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        match &self {
            Self::Sign(e) if status.is_server_error() => {
                error!(error = %e, source = ?std::error::Error::source(e), "prediction failed");
            }
            _ => warn!(status = status.as_u16(), error = %message, "rejected request"),
        }
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
