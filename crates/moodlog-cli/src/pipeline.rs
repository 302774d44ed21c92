//! End-to-end submission pipeline
//!
//! classify -> compose -> select tips -> persist. Any stage failure aborts
//! the submission and nothing is stored.

use crate::config::AppConfig;
use chrono::{DateTime, Utc};
use moodlog_core::{Credential, Error, JournalEntry, Result};
use moodlog_inference::{
    Classifier, GenerationParams, RemoteGenerator, RemoteSentimentClassifier, Transport,
};
use moodlog_journal::{FileKeyValueStore, JournalStore};
use moodlog_reflection::{select_tips, MessageComposer};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Sequences the pipeline stages for one submission
pub struct Pipeline {
    classifier: Arc<dyn Classifier>,
    composer: MessageComposer,
    journal: JournalStore,
}

impl Pipeline {
    pub fn new(
        classifier: Arc<dyn Classifier>,
        composer: MessageComposer,
        journal: JournalStore,
    ) -> Self {
        Self {
            classifier,
            composer,
            journal,
        }
    }

    /// Wire the remote classifier, composer, and file journal from configuration
    pub fn from_config(config: &AppConfig, credential: Credential) -> Result<Self> {
        let transport = Arc::new(Transport::new(&config.inference, credential)?);
        info!(
            endpoints = transport.endpoints().len(),
            model = %config.inference.classification_model,
            "inference transport ready"
        );

        let classifier = Arc::new(RemoteSentimentClassifier::new(
            transport.clone(),
            config.inference.classification_model.clone(),
        ));

        let mut composer = MessageComposer::new()?;
        let generation = &config.inference.generation;
        if !generation.candidates.is_empty() {
            info!(candidates = ?generation.candidates, "remote generation enabled");
            composer = composer.with_generator(
                Arc::new(RemoteGenerator::new(transport)?),
                generation.candidates.clone(),
                GenerationParams::from(generation),
            );
        }

        let store = FileKeyValueStore::new(&config.journal.data_dir);
        let journal = JournalStore::new(Arc::new(store));

        Ok(Self::new(classifier, composer, journal))
    }

    pub fn journal(&self) -> &JournalStore {
        &self.journal
    }

    /// Run a submission stamped with the current time
    pub async fn run(&self, text: &str) -> Result<JournalEntry> {
        self.run_at(text, Utc::now()).await
    }

    /// Run a submission stamped with `now`
    pub async fn run_at(&self, text: &str, now: DateTime<Utc>) -> Result<JournalEntry> {
        let start = Instant::now();
        let result = self.execute(text, now).await;

        let outcome = if result.is_ok() { "success" } else { "error" };
        metrics::counter!("moodlog_pipeline_runs_total", "outcome" => outcome).increment(1);

        match &result {
            Ok(entry) => info!(
                id = %entry.id,
                label = %entry.label,
                level = entry.level,
                latency_ms = start.elapsed().as_millis() as u64,
                "note analyzed"
            ),
            Err(e) => warn!(error = %e, "note analysis failed"),
        }
        result
    }

    async fn execute(&self, text: &str, now: DateTime<Utc>) -> Result<JournalEntry> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::invalid_input("note text is empty"));
        }

        let sentiment = self.classifier.classify(text).await?;
        debug!(classifier = self.classifier.name(), label = %sentiment.label, "classification done");

        let generation = self
            .composer
            .compose(text, &sentiment.localized_label, sentiment.label, sentiment.score)
            .await;
        let tips = select_tips(sentiment.label, sentiment.score, &generation.topics);

        let entry = JournalEntry::new(
            now.timestamp_millis().to_string(),
            now,
            text,
            sentiment,
            generation,
            tips,
        );
        self.journal.append(entry.clone()).await?;

        Ok(entry)
    }
}
