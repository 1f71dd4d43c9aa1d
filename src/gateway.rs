//! Seam to the hosted multimodal model.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::Config;
use crate::error::GatewayError;
use crate::prompt::InlineImage;

/// Submits one text (+ optional image) prompt and returns the completion text.
#[async_trait]
pub trait Gateway: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(
        &self,
        instruction: &str,
        image: Option<&InlineImage>,
    ) -> Result<String, GatewayError>;
}

/// OpenAI Responses API binding.
pub struct OpenAiGateway {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    endpoint: String,
}

impl OpenAiGateway {
    pub fn new(config: &Config) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            endpoint: format!("{}/responses", config.api_base),
        })
    }
}

#[async_trait]
impl Gateway for OpenAiGateway {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        instruction: &str,
        image: Option<&InlineImage>,
    ) -> Result<String, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GatewayError::MissingCredential)?;

        let payload = build_payload(&self.model, instruction, image);

        tracing::debug!(model = %self.model, with_image = image.is_some(), "sending request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                body = %&response_text[..floor_char_boundary(&response_text, 500)],
                "model API returned an error"
            );
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: response_text,
            });
        }

        let result: Value = serde_json::from_str(&response_text)
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        output_text(&result)
    }
}

pub(crate) fn build_payload(model: &str, instruction: &str, image: Option<&InlineImage>) -> Value {
    let mut content = vec![json!({
        "type": "input_text",
        "text": instruction,
    })];

    if let Some(image) = image {
        content.push(json!({
            "type": "input_image",
            "image_url": image.data_url(),
            "detail": image.detail,
        }));
    }

    json!({
        "model": model,
        "input": [{
            "role": "user",
            "content": content,
        }]
    })
}

/// Concatenates every `output_text` part of a Responses API result.
pub(crate) fn output_text(result: &Value) -> Result<String, GatewayError> {
    if let Some(text) = result["output_text"].as_str() {
        return Ok(text.to_string());
    }

    let output = result["output"]
        .as_array()
        .ok_or_else(|| GatewayError::MalformedResponse("no output in response".to_string()))?;

    let parts: Vec<&str> = output
        .iter()
        .filter_map(|item| item["content"].as_array())
        .flatten()
        .filter(|part| part["type"] == "output_text")
        .filter_map(|part| part["text"].as_str())
        .collect();

    if parts.is_empty() {
        return Err(GatewayError::MalformedResponse(
            "no output_text in response".to_string(),
        ));
    }

    Ok(parts.concat())
}

fn floor_char_boundary(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    (0..=max).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}
