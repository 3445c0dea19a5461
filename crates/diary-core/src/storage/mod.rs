//! Storage layer: engine trait, data types and the SQLite backend.

pub mod sqlite;
pub mod traits;
pub mod types;

pub use sqlite::SqliteStorage;
pub use traits::StorageEngine;
pub use types::{DiaryMetadata, Entry, EntryFilter, NewEntry};
