//! Core data models for translation

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Source language used when the caller does not name one
pub const DEFAULT_SOURCE_LANG: &str = "en";

/// Task type of the only pipeline task this service sends
pub const TRANSLATION_TASK: &str = "translation";

/// Inbound translation request
///
/// Fields are not validated: whatever JSON the caller sends is forwarded to
/// the pipeline unchanged, and absent values go out as `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    /// Text to translate
    #[serde(default)]
    pub text: Option<Value>,
    /// Target language code
    #[serde(default)]
    pub target_lang: Option<Value>,
    /// Source language code; absent or `null` means [`DEFAULT_SOURCE_LANG`]
    #[serde(default)]
    pub source_lang: Option<Value>,
}

impl TranslationRequest {
    /// Request for `text` into `target_lang` from the default source language
    pub fn new(text: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            text: Some(Value::String(text.into())),
            target_lang: Some(Value::String(target_lang.into())),
            source_lang: None,
        }
    }

    /// Set an explicit source language
    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = Some(Value::String(source_lang.into()));
        self
    }

    /// Source language, falling back to [`DEFAULT_SOURCE_LANG`]
    pub fn source_lang(&self) -> Value {
        match &self.source_lang {
            Some(Value::Null) | None => Value::String(DEFAULT_SOURCE_LANG.to_string()),
            Some(lang) => lang.clone(),
        }
    }
}

/// Request body expected by the inference pipeline
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelinePayload {
    /// Tasks run in order; always a single translation task here
    pub pipeline_tasks: Vec<PipelineTask>,
    /// Inputs fed to the first task
    pub input_data: InputData,
}

/// One unit of work in a pipeline request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTask {
    /// Task kind, e.g. `translation`
    pub task_type: String,
    /// Task settings
    pub config: TaskConfig,
}

/// Settings of a pipeline task
#[derive(Debug, Clone, Serialize)]
pub struct TaskConfig {
    /// Language pair the task works on
    pub language: LanguagePair,
}

/// Source and target language of a translation task
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagePair {
    /// Language of the input text
    pub source_language: Value,
    /// Language to translate into
    pub target_language: Option<Value>,
}

/// Input list of a pipeline request
#[derive(Debug, Clone, Serialize)]
pub struct InputData {
    /// Items to process; a single item here
    pub input: Vec<InputItem>,
}

/// One input item
#[derive(Debug, Clone, Serialize)]
pub struct InputItem {
    /// Text to process
    pub source: Option<Value>,
}

impl PipelinePayload {
    /// Single translation task carrying the request text as the only input
    pub fn for_request(request: &TranslationRequest) -> Self {
        Self {
            pipeline_tasks: vec![PipelineTask {
                task_type: TRANSLATION_TASK.to_string(),
                config: TaskConfig {
                    language: LanguagePair {
                        source_language: request.source_lang(),
                        target_language: request.target_lang.clone(),
                    },
                },
            }],
            input_data: InputData {
                input: vec![InputItem {
                    source: request.text.clone(),
                }],
            },
        }
    }
}

/// Successful translation response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResponse {
    /// Pipeline output, or the request text when the pipeline gave none
    pub translation: Option<Value>,
}

/// Error body returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable failure description
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn test_source_lang_defaults_to_english() {
        let request: TranslationRequest =
            serde_json::from_value(json!({"text": "Hello", "targetLang": "hi"})).unwrap();
        assert_eq!(request.source_lang(), json!("en"));

        let request: TranslationRequest =
            serde_json::from_value(json!({"text": "Hello", "targetLang": "hi", "sourceLang": null}))
                .unwrap();
        assert_eq!(request.source_lang(), json!("en"));
    }

    #[test]
    fn test_payload_shape() {
        let request = TranslationRequest::new("Hello", "hi");
        let payload = serde_json::to_value(PipelinePayload::for_request(&request)).unwrap();

        assert_json_eq!(
            payload,
            json!({
                "pipelineTasks": [{
                    "taskType": "translation",
                    "config": {
                        "language": {
                            "sourceLanguage": "en",
                            "targetLanguage": "hi"
                        }
                    }
                }],
                "inputData": {
                    "input": [{"source": "Hello"}]
                }
            })
        );
    }

    #[test]
    fn test_payload_uses_explicit_source_lang() {
        let request = TranslationRequest::new("Bonjour", "en").with_source_lang("fr");
        let payload = serde_json::to_value(PipelinePayload::for_request(&request)).unwrap();

        assert_json_eq!(
            payload["pipelineTasks"][0]["config"]["language"],
            json!({"sourceLanguage": "fr", "targetLanguage": "en"})
        );
    }

    #[test]
    fn test_missing_fields_are_forwarded_as_null() {
        let request: TranslationRequest = serde_json::from_value(json!({})).unwrap();
        let payload = serde_json::to_value(PipelinePayload::for_request(&request)).unwrap();

        assert_eq!(payload["inputData"]["input"][0]["source"], json!(null));
        assert_eq!(
            payload["pipelineTasks"][0]["config"]["language"]["targetLanguage"],
            json!(null)
        );
    }

    #[test]
    fn test_non_string_fields_are_forwarded_unchanged() {
        let request: TranslationRequest = serde_json::from_value(json!({
            "text": 123,
            "targetLang": ["hi"],
            "sourceLang": {"code": "en"}
        }))
        .unwrap();
        let payload = serde_json::to_value(PipelinePayload::for_request(&request)).unwrap();

        assert_json_eq!(
            payload,
            json!({
                "pipelineTasks": [{
                    "taskType": "translation",
                    "config": {
                        "language": {
                            "sourceLanguage": {"code": "en"},
                            "targetLanguage": ["hi"]
                        }
                    }
                }],
                "inputData": {"input": [{"source": 123}]}
            })
        );
    }
}
