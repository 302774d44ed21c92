//! Journal entry list persistence
//!
//! The whole history lives under one key as a JSON array, most recent first.
//! Appending is read-modify-write of the full list without locking;
//! concurrent appends can lose an update.

use crate::store::KeyValueStore;
use moodlog_core::{JournalEntry, Result};
use std::sync::Arc;
use tracing::info;

/// Storage key holding the serialized entry list
pub const ENTRIES_KEY: &str = "entries_v1";

/// Journal history backed by a key-value store
#[derive(Clone)]
pub struct JournalStore {
    store: Arc<dyn KeyValueStore>,
}

impl JournalStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// All entries, most recent first
    pub async fn get_all(&self) -> Result<Vec<JournalEntry>> {
        match self.store.get(ENTRIES_KEY).await? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }

    /// Prepend `entry` and return the updated list
    pub async fn append(&self, entry: JournalEntry) -> Result<Vec<JournalEntry>> {
        let mut entries = self.get_all().await?;
        entries.insert(0, entry);

        let raw = serde_json::to_string(&entries)?;
        self.store.set(ENTRIES_KEY, &raw).await?;

        info!(count = entries.len(), "journal entry saved");
        Ok(entries)
    }

    /// Delete the whole history
    pub async fn clear(&self) -> Result<()> {
        self.store.remove(ENTRIES_KEY).await?;
        info!("journal history cleared");
        Ok(())
    }
}
