//! Inference service configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Inference service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URLs, tried in order
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<String>,

    /// Sentiment classification model id
    #[serde(default = "default_classification_model")]
    pub classification_model: String,

    /// Delay before retrying an endpoint whose model is loading
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Whole-request timeout
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Remote text generation settings
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl InferenceConfig {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoints: default_endpoints(),
            classification_model: default_classification_model(),
            retry_delay_ms: default_retry_delay_ms(),
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            generation: GenerationConfig::default(),
        }
    }
}

/// Remote generation settings
///
/// An empty candidate list disables remote generation entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Generation model ids, tried in order
    #[serde(default)]
    pub candidates: Vec<String>,

    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_top_p")]
    pub top_p: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            candidates: Vec::new(),
            max_new_tokens: default_max_new_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
        }
    }
}

fn default_endpoints() -> Vec<String> {
    vec![
        "https://router.huggingface.co/hf-inference".to_string(),
        "https://api-inference.huggingface.co".to_string(),
    ]
}

fn default_classification_model() -> String {
    "cardiffnlp/twitter-xlm-roberta-base-sentiment".to_string()
}

fn default_retry_delay_ms() -> u64 {
    1500
}

fn default_request_timeout() -> u64 {
    60
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_max_new_tokens() -> u32 {
    100
}

fn default_temperature() -> f64 {
    0.25
}

fn default_top_p() -> f64 {
    0.9
}
