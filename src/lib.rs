//! Apparel caption studio: upload a garment photo, get marketing copy back.
//!
//! The request path is `routes` -> `prompt::compose` -> [`gateway::Gateway`]
//! -> `extract::extract_lines`. Nothing is kept between requests.

pub mod config;
pub mod error;
pub mod extract;
pub mod gateway;
pub mod prompt;
pub mod routes;
pub mod ui;

pub use config::Config;
pub use error::{AppError, GatewayError};
pub use gateway::{Gateway, OpenAiGateway};
pub use prompt::{GenerationKind, GenerationRequest, ImageUpload, InlineImage};
pub use routes::{router, AppState};
