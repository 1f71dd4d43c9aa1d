use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::prompt::GenerationKind;

/// Failures talking to the model provider.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("no API credential configured")]
    MissingCredential,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Request-terminating errors surfaced by the HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("OPENAI_API_KEY not configured")]
    MissingCredential,
    #[error("No image uploaded")]
    MissingImage,
    #[error("invalid form data: {0}")]
    InvalidForm(String),
    #[error("upload exceeds the configured size limit")]
    ImageTooLarge,
    #[error("{label} generation failed: {source}", label = .kind.label())]
    Generation {
        kind: GenerationKind,
        #[source]
        source: GatewayError,
    },
    #[error("gateway probe failed: {0}")]
    Probe(#[source] GatewayError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingImage | AppError::InvalidForm(_) => StatusCode::BAD_REQUEST,
            AppError::ImageTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::MissingCredential | AppError::Generation { .. } | AppError::Probe(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message sent to the caller. Gateway detail stays in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::MissingCredential => "OPENAI_API_KEY not configured".to_string(),
            AppError::MissingImage => "No image uploaded".to_string(),
            AppError::InvalidForm(_) => "Invalid form data".to_string(),
            AppError::ImageTooLarge => "Image too large".to_string(),
            AppError::Generation { kind, .. } => format!("{} generation failed", kind.label()),
            AppError::Probe(_) => "Gateway request failed".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "rejected request");
        }
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
