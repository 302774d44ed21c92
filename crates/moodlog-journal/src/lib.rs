//! Moodlog Journal
//!
//! Local persistence for journal entries.
//!
//! Provides:
//! - A small async key-value store abstraction with file and memory backends
//! - The journal list, stored as one JSON document under a single key
//! - Weekly mood aggregation over stored entries

pub mod journal;
pub mod store;
pub mod summary;

pub use journal::{JournalStore, ENTRIES_KEY};
pub use store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use summary::{LabelCounts, WeeklySummary};
