//! Async client for the Bhashini inference pipeline

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::extract::extract_translation;
use crate::core::models::{PipelinePayload, TranslationRequest, TranslationResponse};

/// Forwards translation requests to the inference pipeline
#[derive(Debug, Clone)]
pub struct PipelineClient {
    client: reqwest::Client,
    config: Arc<TranslatorConfig>,
}

impl PipelineClient {
    /// Create a new pipeline client
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder()
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10);

        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }

        Ok(Self {
            client: builder.build()?,
            config: Arc::new(config),
        })
    }

    /// Create from settings file and environment
    pub fn from_env() -> Result<Self> {
        let config = TranslatorConfig::load()?;
        Self::new(config)
    }

    /// Translate a single request.
    ///
    /// Falls back to the input text, unchanged, when the pipeline answers with
    /// JSON that carries no translation. Transport failures and non-JSON bodies are
    /// errors.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResponse> {
        let payload = PipelinePayload::for_request(request);
        let result = self.send_request(&payload).await?;

        let translation = match extract_translation(&result) {
            Some(target) => Some(target.clone()),
            None => {
                debug!("No translation in pipeline response, echoing input text");
                request.text.clone()
            }
        };

        Ok(TranslationResponse { translation })
    }

    /// Send the payload and parse the body as JSON, whatever the status
    async fn send_request(&self, payload: &PipelinePayload) -> Result<serde_json::Value> {
        let mut request = self
            .client
            .post(&self.config.pipeline_endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(payload);

        if let Some(api_key) = self.config.api_key() {
            request = request.header(AUTHORIZATION, api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Pipeline responded with status {}", status);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        serde_json::from_slice(&body).map_err(|e| TranslationError::InvalidResponseError {
            message: e.to_string(),
        })
    }
}
