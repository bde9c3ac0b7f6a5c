//! Configuration management

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::core::errors::{Result, TranslationError};

/// Bhashini (Dhruva) inference pipeline endpoint
pub const DEFAULT_PIPELINE_ENDPOINT: &str =
    "https://dhruva-api.bhashini.gov.in/services/inference/pipeline";

/// Default listen port
pub const DEFAULT_PORT: u16 = 5001;

/// Default bind address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Settings file looked up in the working directory when none is given
pub const DEFAULT_SETTINGS_FILE: &str = "translator";

/// Prefix of the environment variables read into the configuration
pub const ENV_PREFIX: &str = "TRANSLATION";

/// Configuration for the translation forwarder
#[derive(Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Sent verbatim as the `Authorization` header
    #[serde(default)]
    pub bhashini_api_key: Option<String>,
    /// Inference pipeline URL
    pub pipeline_endpoint: String,
    /// Bind address of the HTTP listener
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Outbound request timeout; `None` waits indefinitely
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl std::fmt::Debug for TranslatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslatorConfig")
            .field("bhashini_api_key", &self.bhashini_api_key.as_ref().map(|_| "<redacted>"))
            .field("pipeline_endpoint", &self.pipeline_endpoint)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            bhashini_api_key: None,
            pipeline_endpoint: DEFAULT_PIPELINE_ENDPOINT.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout_ms: None,
        }
    }
}

impl TranslatorConfig {
    /// Load from `translator.*` (if present) and `TRANSLATION_*` variables
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load from an explicit settings file, then `TRANSLATION_*` variables.
    ///
    /// An explicit path must exist; the default settings file is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };

        let settings = Config::builder()
            .set_default("pipeline_endpoint", DEFAULT_PIPELINE_ENDPOINT)?
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        debug!("Loaded configuration: {:?}", config);

        Ok(config)
    }

    /// Credential to forward, if a non-empty one is configured
    pub fn api_key(&self) -> Option<&str> {
        self.bhashini_api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.pipeline_endpoint.is_empty() {
            return Err(config_error("pipeline endpoint is required"));
        }

        if !self.pipeline_endpoint.starts_with("http://")
            && !self.pipeline_endpoint.starts_with("https://")
        {
            return Err(config_error(format!(
                "pipeline endpoint must be an http(s) URL, got {}",
                self.pipeline_endpoint
            )));
        }

        if self.port == 0 {
            return Err(config_error("port must be greater than 0"));
        }

        if self.timeout_ms == Some(0) {
            return Err(config_error("timeout_ms must be greater than 0"));
        }

        if self.api_key().is_none() {
            warn!(
                "{}_BHASHINI_API_KEY is not set; requests will be sent without Authorization",
                ENV_PREFIX
            );
        }

        Ok(())
    }
}

fn config_error(message: impl Into<String>) -> TranslationError {
    TranslationError::ConfigError {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_validation() {
        let config = TranslatorConfig {
            bhashini_api_key: Some("test_key".to_string()),
            ..Default::default()
        };

        assert!(config.validate().is_ok());
        assert_eq!(config.bind_addr(), "127.0.0.1:5001");
    }

    #[test]
    fn test_missing_key_is_not_fatal() {
        let config = TranslatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api_key(), None);

        let config = TranslatorConfig {
            bhashini_api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_config_validation_bad_values() {
        let config = TranslatorConfig {
            pipeline_endpoint: "".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = TranslatorConfig {
            pipeline_endpoint: "dhruva-api.bhashini.gov.in".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = TranslatorConfig {
            port: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = TranslatorConfig {
            timeout_ms: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = TranslatorConfig {
            bhashini_api_key: Some("secret-credential".to_string()),
            ..Default::default()
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret-credential"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_load_from_settings_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "bhashini_api_key = \"file-key\"\nport = 6001\ntimeout_ms = 2500"
        )
        .unwrap();

        let config = TranslatorConfig::load_from(Some(file.path())).unwrap();
        assert_eq!(config.api_key(), Some("file-key"));
        assert_eq!(config.port, 6001);
        assert_eq!(config.timeout_ms, Some(2500));
        assert_eq!(config.pipeline_endpoint, DEFAULT_PIPELINE_ENDPOINT);
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(TranslatorConfig::load_from(Some(&missing)).is_err());
    }
}
