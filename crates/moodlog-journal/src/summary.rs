//! Weekly mood aggregation

use chrono::{DateTime, Duration, Utc};
use moodlog_core::{JournalEntry, Label};
use serde::Serialize;

/// Length of the summary window
pub const SUMMARY_WINDOW_DAYS: i64 = 7;

/// Per-label entry counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl LabelCounts {
    pub fn get(&self, label: Label) -> usize {
        match label {
            Label::Positive => self.positive,
            Label::Neutral => self.neutral,
            Label::Negative => self.negative,
        }
    }

    fn bump(&mut self, label: Label) {
        match label {
            Label::Positive => self.positive += 1,
            Label::Neutral => self.neutral += 1,
            Label::Negative => self.negative += 1,
        }
    }
}

/// Mood distribution over the last seven days
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    /// Entries inside the window
    pub total: usize,
    pub counts: LabelCounts,
}

impl WeeklySummary {
    /// Summarize entries no older than seven days before `now`
    pub fn from_entries(entries: &[JournalEntry], now: DateTime<Utc>) -> Self {
        let window = Duration::days(SUMMARY_WINDOW_DAYS);
        let mut counts = LabelCounts::default();
        let mut total = 0;

        for entry in entries.iter().filter(|e| now - e.date <= window) {
            counts.bump(entry.label);
            total += 1;
        }

        Self { total, counts }
    }

    /// Share of `label` in the window; 0.0 when the window is empty
    pub fn ratio(&self, label: Label) -> f64 {
        self.counts.get(label) as f64 / self.total.max(1) as f64
    }
}
