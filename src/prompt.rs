//! Builds the model input for one generation request.

use base64::{engine::general_purpose, Engine as _};

use crate::error::AppError;

const FALLBACK_MIME: &str = "application/octet-stream";
/// Rendering hint sent with every image.
pub const LOW_DETAIL: &str = "low";

/// What the caller wants written about the garment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    Caption,
    Description,
}

impl GenerationKind {
    pub fn default_tone(self) -> &'static str {
        match self {
            GenerationKind::Caption => "Playful",
            GenerationKind::Description => "Professional",
        }
    }

    pub fn default_platform(self) -> &'static str {
        match self {
            GenerationKind::Caption => "Instagram",
            GenerationKind::Description => "Amazon",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GenerationKind::Caption => "Caption",
            GenerationKind::Description => "Description",
        }
    }
}

/// Raw upload as received from the form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl ImageUpload {
    /// Keeps a declared `image/*` type, otherwise sniffs the bytes.
    pub fn new(bytes: Vec<u8>, declared_mime: Option<&str>) -> Self {
        let mime_type = match declared_mime.map(str::trim) {
            Some(mime) if mime.starts_with("image/") => mime.to_string(),
            _ => sniff_mime(&bytes),
        };
        Self { bytes, mime_type }
    }
}

fn sniff_mime(bytes: &[u8]) -> String {
    image::guess_format(bytes)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| FALLBACK_MIME.to_string())
}

/// One validated generation request. Built per HTTP call and dropped after.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub kind: GenerationKind,
    pub image: ImageUpload,
    pub tone: String,
    pub platform: String,
    pub include_emojis: bool,
}

impl GenerationRequest {
    /// Blank tone/platform fall back to the kind's defaults; anything else is
    /// passed through as given.
    pub fn new(
        kind: GenerationKind,
        image: Option<ImageUpload>,
        tone: Option<String>,
        platform: Option<String>,
        include_emojis: bool,
    ) -> Result<Self, AppError> {
        let image = image
            .filter(|img| !img.bytes.is_empty())
            .ok_or(AppError::MissingImage)?;

        Ok(Self {
            kind,
            image,
            tone: non_blank(tone).unwrap_or_else(|| kind.default_tone().to_string()),
            platform: non_blank(platform).unwrap_or_else(|| kind.default_platform().to_string()),
            include_emojis,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Base64 image payload, inlined into the model request.
#[derive(Debug, Clone)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
    pub detail: &'static str,
}

impl InlineImage {
    pub fn from_upload(upload: &ImageUpload) -> Self {
        Self {
            mime_type: upload.mime_type.clone(),
            data: general_purpose::STANDARD.encode(&upload.bytes),
            detail: LOW_DETAIL,
        }
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

#[derive(Debug, Clone)]
pub struct Prompt {
    pub instruction: String,
    pub image: InlineImage,
}

pub fn compose(request: &GenerationRequest) -> Prompt {
    let instruction = match request.kind {
        GenerationKind::Caption => caption_instruction(request),
        GenerationKind::Description => description_instruction(request),
    };
    Prompt {
        instruction,
        image: InlineImage::from_upload(&request.image),
    }
}

fn caption_instruction(request: &GenerationRequest) -> String {
    let emoji_instruction = if request.include_emojis {
        "Include relevant emojis."
    } else {
        "Do NOT include emojis."
    };

    format!(
        "You are a professional fashion marketing copywriter.

Generate exactly 3 bullet point captions.

Tone: {tone}
Platform: {platform}
{emoji_instruction}

Each caption must:
- Start with \"- \"
- Be complete
- Not be cut off
- Be suitable for ecommerce
- Be high quality marketing copy",
        tone = request.tone,
        platform = request.platform,
    )
}

fn description_instruction(request: &GenerationRequest) -> String {
    format!(
        "You are an expert ecommerce apparel copywriter.

Generate exactly 3 bullet point product descriptions.

Tone: {tone}
Platform: {platform}

Each description must:
- Start with \"- \"
- Be 25-35 words
- Be complete
- Be suitable for ecommerce
- Not be cut off",
        tone = request.tone,
        platform = request.platform,
    )
}
