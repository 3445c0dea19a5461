//! Storage engine trait definition.
//!
//! The `StorageEngine` trait is the seam between the entry repository and
//! the backend that actually persists entries.

use std::path::Path;
use uuid::Uuid;

use super::types::{DiaryMetadata, Entry, EntryFilter, NewEntry};
use crate::error::Result;

/// Storage engine interface for diary entries.
///
/// All implementations must ensure:
/// - UUIDs are assigned by the engine and never reused
/// - Entries are never updated in place; only insert and delete mutate
/// - Listing is newest first
pub trait StorageEngine {
    /// Open the diary at `path`, creating the file and schema if absent.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::Storage` if the file cannot be opened or the
    /// schema cannot be created.
    fn open(path: &Path) -> Result<Self>
    where
        Self: Sized;

    /// Get diary metadata.
    fn metadata(&self) -> Result<DiaryMetadata>;

    /// Insert a new entry.
    ///
    /// # Returns
    ///
    /// Returns the stored entry, including its assigned id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::Validation` if the content is empty.
    fn insert_entry(&mut self, entry: &NewEntry) -> Result<Entry>;

    /// Get an entry by ID.
    ///
    /// Returns `Ok(None)` if not found.
    fn get_entry(&self, id: &Uuid) -> Result<Option<Entry>>;

    /// List entries matching the filter, newest first.
    fn list_entries(&self, filter: &EntryFilter) -> Result<Vec<Entry>>;

    /// Delete an entry by ID.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::NotFound` if no entry has this ID.
    fn delete_entry(&mut self, id: &Uuid) -> Result<()>;

    /// Count stored entries.
    fn count_entries(&self) -> Result<usize>;
}
