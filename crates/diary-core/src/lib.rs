//! # Diary Core
//!
//! Core library for Diary - a small, CLI-first personal journal.
//!
//! This crate provides the storage abstraction, the SQLite backend and the
//! entry repository, independent of the interactive CLI.
//!
//! ## Architecture
//!
//! - **storage**: Storage engine trait, data types and the SQLite backend
//! - **repository**: Entry repository (create, list newest-first, delete)

pub mod error;
pub mod repository;
pub mod storage;

pub use error::{DiaryError, Result};
pub use repository::EntryRepository;
pub use storage::{Entry, SqliteStorage, StorageEngine};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
