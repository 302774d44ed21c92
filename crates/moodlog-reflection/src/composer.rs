//! Reflection message composition
//!
//! A remote generation attempt runs over the candidate models in order and
//! the first non-empty answer wins. Without candidates (the default), or when
//! every candidate fails, the message comes from [`LocalTemplates`], so
//! composing never fails.

use crate::signals::TopicExtractor;
use crate::templates::LocalTemplates;
use crate::tone::ToneSelector;
use moodlog_core::{GenerationResult, Label, Result};
use moodlog_inference::{GenerationParams, TextGenerator};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct MessageComposer {
    topics: TopicExtractor,
    tones: ToneSelector,
    templates: LocalTemplates,
    generator: Option<Arc<dyn TextGenerator>>,
    candidates: Vec<String>,
    params: GenerationParams,
}

impl MessageComposer {
    /// Create a composer that only uses local templates
    pub fn new() -> Result<Self> {
        Ok(Self {
            topics: TopicExtractor::new()?,
            tones: ToneSelector::new()?,
            templates: LocalTemplates::new()?,
            generator: None,
            candidates: Vec::new(),
            params: GenerationParams::default(),
        })
    }

    /// Enable remote generation over `candidates`
    pub fn with_generator(
        mut self,
        generator: Arc<dyn TextGenerator>,
        candidates: Vec<String>,
        params: GenerationParams,
    ) -> Self {
        self.generator = Some(generator);
        self.candidates = candidates;
        self.params = params;
        self
    }

    /// Prompt sent to generation models
    pub fn prompt(text: &str, localized_label: &str) -> String {
        format!(
            "Türkçe tek cümle: {text} ifadesine uygun, {localized_label} tonda kısa ve saygılı geri bildirim ver."
        )
    }

    /// Compose the reflection for a classified note
    pub async fn compose(
        &self,
        text: &str,
        localized_label: &str,
        label: Label,
        score: f64,
    ) -> GenerationResult {
        let topics = self.topics.extract(text);
        let tone = self.tones.select(label, score, text);

        let message = match self.generate_remote(text, localized_label).await {
            Some(message) => message,
            None => {
                metrics::counter!("moodlog_generation_fallbacks_total").increment(1);
                self.templates.render(text, localized_label).to_string()
            }
        };

        debug!(?tone, topics = ?topics, "composed reflection");
        GenerationResult {
            message,
            topics,
            tone,
        }
    }

    async fn generate_remote(&self, text: &str, localized_label: &str) -> Option<String> {
        let generator = self.generator.as_ref()?;
        let prompt = Self::prompt(text, localized_label);

        for model in &self.candidates {
            match generator.generate(model, &prompt, &self.params).await {
                Ok(message) if !message.trim().is_empty() => {
                    debug!(model = %model, "remote reflection generated");
                    return Some(message.trim().to_string());
                }
                Ok(_) => debug!(model = %model, "empty generation, trying next model"),
                Err(e) => warn!(model = %model, error = %e, "generation failed, trying next model"),
            }
        }

        None
    }
}
