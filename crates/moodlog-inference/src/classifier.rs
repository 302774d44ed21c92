//! Sentiment classification over the inference transport

use crate::transport::Transport;
use async_trait::async_trait;
use moodlog_core::{Error, Label, Result, SentimentResult};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// Trait for sentiment classifiers
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify the given non-empty text
    async fn classify(&self, text: &str) -> Result<SentimentResult>;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// One label/score pair from a classification model
#[derive(Debug, Clone, Deserialize)]
pub struct LabelScore {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub score: f64,
}

/// Accepted classification body shapes
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassificationResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl ClassificationResponse {
    fn into_predictions(self) -> Vec<LabelScore> {
        match self {
            Self::Nested(batches) => batches.into_iter().next().unwrap_or_default(),
            Self::Flat(predictions) => predictions,
        }
    }
}

/// Pick the highest scoring pair; the first one wins a tie
pub fn top_prediction(predictions: &[LabelScore]) -> Option<&LabelScore> {
    predictions.iter().fold(None, |best, candidate| match best {
        Some(current) if candidate.score > current.score => Some(candidate),
        Some(current) => Some(current),
        None => Some(candidate),
    })
}

/// Normalize a raw classification body into a sentiment result
pub fn normalize_response(body: Value) -> Result<SentimentResult> {
    let response: ClassificationResponse = serde_json::from_value(body).map_err(|e| {
        Error::invalid_response(format!("unexpected classification body: {e}"))
    })?;
    let predictions = response.into_predictions();

    let top = top_prediction(&predictions)
        .ok_or_else(|| Error::invalid_response("classification returned no predictions"))?;

    Ok(SentimentResult::from_prediction(
        Label::from_raw(&top.label),
        top.score,
    ))
}

/// Classifier backed by a hosted text-classification model
pub struct RemoteSentimentClassifier {
    transport: Arc<Transport>,
    model: String,
}

impl RemoteSentimentClassifier {
    pub fn new(transport: Arc<Transport>, model: impl Into<String>) -> Self {
        Self {
            transport,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Classifier for RemoteSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<SentimentResult> {
        let path = format!("/models/{}", self.model);
        let body = self.transport.post(&path, &json!({ "inputs": text })).await?;

        let result = normalize_response(body)?;
        debug!(
            model = %self.model,
            label = %result.label,
            score = result.score,
            level = result.level,
            "classified note"
        );
        Ok(result)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_response() {
        let body = json!([
            {"label": "LABEL_0", "score": 0.1},
            {"label": "LABEL_1", "score": 0.15},
            {"label": "LABEL_2", "score": 0.75}
        ]);
        let result = normalize_response(body).unwrap();
        assert_eq!(result.label, Label::Positive);
        assert_eq!(result.localized_label, "pozitif");
        assert_eq!(result.level, 4);
    }

    #[test]
    fn test_nested_response_uses_first_batch() {
        let body = json!([
            [{"label": "negative", "score": 0.8}, {"label": "positive", "score": 0.2}],
            [{"label": "positive", "score": 0.99}]
        ]);
        let result = normalize_response(body).unwrap();
        assert_eq!(result.label, Label::Negative);
        assert_eq!(result.score, 0.8);
    }

    #[test]
    fn test_low_confidence_is_neutral() {
        let body = json!([{"label": "NEGATIVE", "score": 0.55}, {"label": "POSITIVE", "score": 0.45}]);
        let result = normalize_response(body).unwrap();
        assert_eq!(result.label, Label::Neutral);
        assert_eq!(result.localized_label, "nötr");
        assert_eq!(result.level, 3);
    }

    #[test]
    fn test_tie_keeps_first() {
        let predictions = vec![
            LabelScore {
                label: "LABEL_0".into(),
                score: 0.5,
            },
            LabelScore {
                label: "LABEL_2".into(),
                score: 0.5,
            },
        ];
        assert_eq!(top_prediction(&predictions).unwrap().label, "LABEL_0");
    }

    #[test]
    fn test_empty_or_malformed_body() {
        assert!(matches!(
            normalize_response(json!([])),
            Err(Error::InvalidResponse(_))
        ));
        assert!(matches!(
            normalize_response(json!([[]])),
            Err(Error::InvalidResponse(_))
        ));
        assert!(matches!(
            normalize_response(json!({"error": "boom"})),
            Err(Error::InvalidResponse(_))
        ));
    }
}
