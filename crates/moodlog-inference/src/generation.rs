//! Remote text generation

use crate::config::GenerationConfig;
use crate::transport::Transport;
use async_trait::async_trait;
use moodlog_core::{Error, Result};
use regex::Regex;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Sampling parameters sent with every generation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
}

impl From<&GenerationConfig> for GenerationParams {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            max_new_tokens: config.max_new_tokens,
            temperature: config.temperature,
            top_p: config.top_p,
        }
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::from(&GenerationConfig::default())
    }
}

/// Trait for text generators
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a single line of text with `model`
    ///
    /// Fails with [`Error::EmptyGeneration`] when the model answers without text.
    async fn generate(&self, model: &str, prompt: &str, params: &GenerationParams)
        -> Result<String>;
}

/// Generator backed by hosted text-generation models
pub struct RemoteGenerator {
    transport: Arc<Transport>,
    newlines: Regex,
}

impl RemoteGenerator {
    pub fn new(transport: Arc<Transport>) -> Result<Self> {
        let newlines = Regex::new(r"\n+")
            .map_err(|e| Error::config(format!("failed to build newline matcher: {e}")))?;
        Ok(Self {
            transport,
            newlines,
        })
    }

    fn clean(&self, text: &str) -> String {
        self.newlines.replace_all(text, " ").trim().to_string()
    }
}

/// Pull `generated_text` (or the first `generated_texts` entry) out of a body
pub fn extract_generated_text(body: &Value) -> Option<&str> {
    let record = match body {
        Value::Array(items) => items.first()?,
        other => other,
    };

    record
        .get("generated_text")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .or_else(|| {
            record
                .get("generated_texts")
                .and_then(|texts| texts.get(0))
                .and_then(Value::as_str)
        })
}

#[async_trait]
impl TextGenerator for RemoteGenerator {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String> {
        let path = format!("/models/{model}");
        let payload = json!({
            "inputs": prompt,
            "parameters": params,
        });
        let body = self.transport.post(&path, &payload).await?;

        let text = extract_generated_text(&body)
            .map(|raw| self.clean(raw))
            .unwrap_or_default();
        if text.is_empty() {
            return Err(Error::EmptyGeneration {
                model: model.to_string(),
            });
        }
        Ok(text)
    }
}
