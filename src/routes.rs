use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        DefaultBodyLimit, Multipart, State,
    },
    http::StatusCode,
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::error::AppError;
use crate::extract::GenerationResult;
use crate::gateway::Gateway;
use crate::prompt::{self, GenerationKind, GenerationRequest, ImageUpload};
use crate::ui;

const PROBE_PROMPT: &str = "Say hello from Apparel AI Studio.";

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gateway: Arc<dyn Gateway>,
}

impl AppState {
    pub fn new(config: Config, gateway: Arc<dyn Gateway>) -> Self {
        Self {
            config: Arc::new(config),
            gateway,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CaptionResponse {
    pub captions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DescriptionResponse {
    pub descriptions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ProbeResponse {
    pub success: bool,
    pub message: String,
}

pub fn router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/generate-caption", post(generate_caption))
        .route("/generate-description", post(generate_description))
        .route("/api/generate-caption", post(generate_caption))
        .route("/api/generate-description", post(generate_description))
        .route("/test-gateway", get(test_gateway))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(ui::INDEX_HTML)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn generate_caption(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<CaptionResponse>, AppError> {
    let result = run_generation(GenerationKind::Caption, &state, multipart).await?;
    Ok(Json(CaptionResponse {
        captions: result.lines,
    }))
}

async fn generate_description(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<DescriptionResponse>, AppError> {
    let result = run_generation(GenerationKind::Description, &state, multipart).await?;
    Ok(Json(DescriptionResponse {
        descriptions: result.lines,
    }))
}

/// Connectivity check: one text-only round trip to the model.
async fn test_gateway(State(state): State<AppState>) -> Result<Json<ProbeResponse>, AppError> {
    state.config.credential()?;

    let message = state
        .gateway
        .generate(PROBE_PROMPT, None)
        .await
        .map_err(AppError::Probe)?;

    Ok(Json(ProbeResponse {
        success: true,
        message,
    }))
}

async fn run_generation(
    kind: GenerationKind,
    state: &AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<GenerationResult, AppError> {
    let start = Instant::now();

    // Credential first: no body read, no gateway call.
    state.config.credential()?;

    let multipart = multipart.map_err(|e| AppError::InvalidForm(e.body_text()))?;
    let form = read_form(multipart).await?;
    let include_emojis = form.include_emojis();

    let request = GenerationRequest::new(kind, form.image, form.tone, form.platform, include_emojis)?;
    let prompt = prompt::compose(&request);

    tracing::info!(
        kind = kind.label(),
        tone = %request.tone,
        platform = %request.platform,
        mime = %request.image.mime_type,
        bytes = request.image.bytes.len(),
        gateway = state.gateway.name(),
        "generating"
    );

    let output = state
        .gateway
        .generate(&prompt.instruction, Some(&prompt.image))
        .await
        .map_err(|source| AppError::Generation { kind, source })?;

    let result = GenerationResult::from_output(&output);
    if result.is_empty() {
        tracing::warn!(kind = kind.label(), "model output contained no bullet lines");
    }

    tracing::info!(
        kind = kind.label(),
        lines = result.lines.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "generation complete"
    );

    Ok(result)
}

#[derive(Debug, Default)]
struct GenerationForm {
    image: Option<ImageUpload>,
    emojis: Option<String>,
    tone: Option<String>,
    platform: Option<String>,
}

impl GenerationForm {
    /// Absent or blank means yes; only an explicit non-"true" value opts out.
    fn include_emojis(&self) -> bool {
        match self.emojis.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(value) => value.eq_ignore_ascii_case("true"),
        }
    }
}

async fn read_form(mut multipart: Multipart) -> Result<GenerationForm, AppError> {
    let mut form = GenerationForm::default();

    while let Some(field) = multipart.next_field().await.map_err(form_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let declared = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(form_error)?;
                form.image = Some(ImageUpload::new(data.to_vec(), declared.as_deref()));
            }
            "emojis" => form.emojis = Some(field.text().await.map_err(form_error)?),
            "tone" => form.tone = Some(field.text().await.map_err(form_error)?),
            "platform" => form.platform = Some(field.text().await.map_err(form_error)?),
            other => tracing::debug!(field = other, "ignoring unknown form field"),
        }
    }

    Ok(form)
}

fn form_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::ImageTooLarge
    } else {
        AppError::InvalidForm(err.body_text())
    }
}
