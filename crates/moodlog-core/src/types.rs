//! Core types for moodlog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores below this are always reported as neutral
pub const NEUTRAL_DEMOTION_THRESHOLD: f64 = 0.60;

/// Coarse sentiment classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
    Neutral,
}

impl Label {
    /// Map a raw model label token, case-insensitively
    pub fn from_raw(raw: &str) -> Self {
        match raw.to_uppercase().as_str() {
            "LABEL_2" | "POSITIVE" => Self::Positive,
            "LABEL_0" | "NEGATIVE" => Self::Negative,
            _ => Self::Neutral,
        }
    }

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    /// Turkish display label
    pub fn localized(&self) -> &'static str {
        match self {
            Self::Positive => "pozitif",
            Self::Negative => "negatif",
            Self::Neutral => "nötr",
        }
    }

    /// Inverse of [`Label::localized`]; anything unknown is neutral
    pub fn from_localized(localized: &str) -> Self {
        match localized {
            "pozitif" => Self::Positive,
            "negatif" => Self::Negative,
            _ => Self::Neutral,
        }
    }

    /// Card background color for this mood
    pub fn color_hex(&self) -> &'static str {
        match self {
            Self::Positive => "#FFE680",
            Self::Negative => "#D3D3D3",
            Self::Neutral => "#E6F0FF",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Positive => "🙂",
            Self::Negative => "😕",
            Self::Neutral => "😐",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reflection style chosen for a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Empath,
    Funny,
    Coach,
}

/// Normalized classification outcome for one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResult {
    pub label: Label,

    /// Turkish display label
    #[serde(rename = "trLabel")]
    pub localized_label: String,

    /// Confidence of the top predicted class (0.0-1.0)
    pub score: f64,

    /// Intensity on a 1-5 scale
    pub level: u8,
}

impl SentimentResult {
    /// Build a result from the top predicted class
    ///
    /// Scores under [`NEUTRAL_DEMOTION_THRESHOLD`] demote any class to neutral.
    pub fn from_prediction(raw_label: Label, score: f64) -> Self {
        let label = if score < NEUTRAL_DEMOTION_THRESHOLD {
            Label::Neutral
        } else {
            raw_label
        };

        Self {
            label,
            localized_label: label.localized().to_string(),
            score,
            level: level_for(score),
        }
    }
}

/// `round(1 + score * 4)` clamped to 1..=5
pub fn level_for(score: f64) -> u8 {
    let level = (1.0 + score * 4.0).round();
    if level.is_nan() {
        return 1;
    }
    level.clamp(1.0, 5.0) as u8
}

/// Output of the message composer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Reflection text shown to the user
    pub message: String,

    /// Detected topic tags, in detection order
    pub topics: Vec<String>,

    /// Selected tone. Informational only; it does not change `message`.
    pub tone: Tone,
}

/// A persisted journal entry
///
/// Always written in the current layout. Reading also accepts the older
/// layouts that kept the label under `sentiment` and the text under `summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredEntry")]
pub struct JournalEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub text: String,
    pub tr_label: String,
    pub level: u8,
    pub score: f64,
    pub label: Label,
    pub message: String,
    pub topics: Vec<String>,
    pub tips: Vec<String>,
}

/// Lenient on-disk shape of a journal entry
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoredEntry {
    id: String,
    date: DateTime<Utc>,
    text: String,
    tr_label: Option<String>,
    level: Option<u8>,
    score: Option<f64>,
    label: Option<String>,
    message: Option<String>,
    summary: Option<String>,
    sentiment: Option<StoredSentiment>,
    topics: Vec<String>,
    tips: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StoredSentiment {
    label: Option<String>,
    score: Option<f64>,
}

impl From<StoredEntry> for JournalEntry {
    fn from(stored: StoredEntry) -> Self {
        let sentiment = stored.sentiment.unwrap_or_default();
        let label = stored
            .label
            .or(sentiment.label)
            .filter(|raw| !raw.is_empty())
            .map_or(Label::Neutral, |raw| Label::from_raw(&raw));
        let score = stored.score.or(sentiment.score).unwrap_or(0.0);
        let message = [stored.message, stored.summary]
            .into_iter()
            .flatten()
            .find(|m| !m.is_empty())
            .unwrap_or_else(|| stored.text.clone());

        Self {
            id: stored.id,
            date: stored.date,
            text: stored.text,
            tr_label: stored
                .tr_label
                .unwrap_or_else(|| label.localized().to_string()),
            level: stored.level.unwrap_or_else(|| level_for(score)),
            score,
            label,
            message,
            topics: stored.topics,
            tips: stored.tips,
        }
    }
}

impl JournalEntry {
    /// Assemble an entry from the pipeline stage outputs
    pub fn new(
        id: impl Into<String>,
        date: DateTime<Utc>,
        text: impl Into<String>,
        sentiment: SentimentResult,
        generation: GenerationResult,
        tips: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            text: text.into(),
            tr_label: sentiment.localized_label,
            level: sentiment.level,
            score: sentiment.score,
            label: sentiment.label,
            message: generation.message,
            topics: generation.topics,
            tips,
        }
    }
}
