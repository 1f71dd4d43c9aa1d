#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use apparel_caption_studio::{AppState, Config, Gateway, GatewayError, InlineImage};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;

pub const BOUNDARY: &str = "----apparel-test-boundary";

/// Fake model that records every call and replies with canned text.
pub struct RecordingGateway {
    reply: Option<String>,
    calls: AtomicUsize,
    last_instruction: Mutex<Option<String>>,
    last_image: Mutex<Option<InlineImage>>,
}

impl RecordingGateway {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(text.to_string()),
            calls: AtomicUsize::new(0),
            last_instruction: Mutex::new(None),
            last_image: Mutex::new(None),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
            last_instruction: Mutex::new(None),
            last_image: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_instruction(&self) -> Option<String> {
        self.last_instruction.lock().unwrap().clone()
    }

    pub fn last_image(&self) -> Option<InlineImage> {
        self.last_image.lock().unwrap().clone()
    }
}

#[async_trait]
impl Gateway for RecordingGateway {
    fn name(&self) -> &str {
        "recording"
    }

    async fn generate(
        &self,
        instruction: &str,
        image: Option<&InlineImage>,
    ) -> Result<String, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_instruction.lock().unwrap() = Some(instruction.to_string());
        *self.last_image.lock().unwrap() = image.cloned();
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(GatewayError::Status {
                status: 401,
                body: "Incorrect API key provided: sk-secret".to_string(),
            }),
        }
    }
}

pub fn config_with_key() -> Config {
    Config {
        api_key: Some("sk-test".to_string()),
        ..Config::default()
    }
}

pub fn state(config: Config, gateway: Arc<RecordingGateway>) -> AppState {
    AppState::new(config, gateway)
}

/// One part of a multipart/form-data body.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        filename: &'a str,
        content_type: &'a str,
        bytes: &'a [u8],
    },
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                filename,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

pub fn jpeg_part(bytes: &[u8]) -> Part<'_> {
    Part::File {
        name: "image",
        filename: "shirt.jpg",
        content_type: "image/jpeg",
        bytes,
    }
}

pub async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
