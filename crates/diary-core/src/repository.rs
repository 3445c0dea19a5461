//! Entry repository.
//!
//! Thin façade over a [`StorageEngine`] that speaks in journal terms:
//! create an entry, list entries newest first, delete an entry.

use log::{debug, info};

use crate::error::{DiaryError, Result};
use crate::storage::{Entry, EntryFilter, NewEntry, StorageEngine};

/// Repository over an owned storage engine.
pub struct EntryRepository<S: StorageEngine> {
    storage: S,
}

impl<S: StorageEngine> EntryRepository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Borrow the underlying storage engine.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Create an entry stamped with the current time.
    ///
    /// Content is trimmed before it is stored.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::Validation` if the content is empty or
    /// whitespace-only.
    pub fn create(&mut self, content: &str) -> Result<Entry> {
        let content = content.trim();
        if content.is_empty() {
            return Err(DiaryError::Validation(
                "Entry content cannot be empty".to_string(),
            ));
        }

        let entry = self.storage.insert_entry(&NewEntry::new(content))?;
        info!("created entry {}", entry.id);
        Ok(entry)
    }

    /// List entries newest first, optionally restricted to those whose
    /// content contains `filter`.
    ///
    /// Every call queries storage again.
    pub fn list(&self, filter: Option<&str>) -> Result<Vec<Entry>> {
        let mut query = EntryFilter::new();
        if let Some(needle) = filter.filter(|value| !value.is_empty()) {
            query = query.contains(needle);
        }
        self.storage.list_entries(&query)
    }

    /// Delete an entry. Deleting an entry that no longer exists is a no-op.
    pub fn delete(&mut self, entry: &Entry) -> Result<()> {
        match self.storage.delete_entry(&entry.id) {
            Ok(()) => {
                info!("deleted entry {}", entry.id);
                Ok(())
            }
            Err(DiaryError::NotFound(_)) => {
                debug!("entry {} already gone, nothing to delete", entry.id);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}
