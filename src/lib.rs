//! Bhashini Translator - translation forwarding service
//!
//! Accepts translation requests over HTTP, forwards them to the Bhashini
//! inference pipeline and returns the translated text.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod core;
pub mod server;
pub mod cli;

// Re-export key types for convenience
pub use crate::core::{
    client::PipelineClient,
    config::TranslatorConfig,
    errors::TranslationError,
    extract::extract_translation,
    models::{PipelinePayload, TranslationRequest, TranslationResponse},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
