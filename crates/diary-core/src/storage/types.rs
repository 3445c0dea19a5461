//! Core data types for the storage layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata for a diary file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryMetadata {
    /// Format version (e.g., "0.1")
    pub format_version: String,

    /// When this diary file was created
    pub created_at: DateTime<Utc>,
}

/// A stored journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier, assigned by storage
    pub id: Uuid,

    /// Journal body
    pub content: String,

    /// When this entry was created
    pub created_at: DateTime<Utc>,
}

/// Builder for creating new entries.
#[derive(Debug, Clone)]
pub struct NewEntry {
    /// Journal body
    pub content: String,

    /// Optional creation time; storage uses "now" when absent
    pub created_at: Option<DateTime<Utc>>,
}

impl NewEntry {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            created_at: None,
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Filter for querying entries.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Case-sensitive substring the content must contain
    pub contains: Option<String>,

    /// Maximum number of results
    pub limit: Option<usize>,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(mut self, needle: impl Into<String>) -> Self {
        self.contains = Some(needle.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The substring to match, ignoring an empty needle.
    pub fn needle(&self) -> Option<&str> {
        self.contains.as_deref().filter(|value| !value.is_empty())
    }
}
