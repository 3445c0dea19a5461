//! SQLite storage backend.
//!
//! The diary is a single SQLite file holding one `entries` table and a small
//! `meta` table. The connection is opened once and owned by the storage
//! value for its whole lifetime.

mod row;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use log::{debug, info};
use rusqlite::{Connection, OptionalExtension};
use uuid::Uuid;

use crate::error::{DiaryError, Result};
use crate::storage::traits::StorageEngine;
use crate::storage::types::{DiaryMetadata, Entry, EntryFilter, NewEntry};

use row::EntryRow;

const FORMAT_VERSION: &str = "0.1";

/// SQLite-backed storage engine.
pub struct SqliteStorage {
    path: Option<PathBuf>,
    conn: Connection,
}

impl SqliteStorage {
    /// Open a throwaway in-memory diary.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self { path: None, conn })
    }

    /// Path of the backing file, `None` for in-memory diaries.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS meta (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS entries (
                id TEXT PRIMARY KEY,
                content TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_entries_created_at ON entries(created_at);
            "#,
        )?;

        let created_at = Utc::now().to_rfc3339();
        conn.execute(
            "INSERT OR IGNORE INTO meta (key, value) VALUES ('format_version', ?)",
            [FORMAT_VERSION],
        )?;
        conn.execute(
            "INSERT OR IGNORE INTO meta (key, value) VALUES ('created_at', ?)",
            [created_at],
        )?;

        Ok(())
    }

    /// Timestamps are stored with fixed microsecond precision so that text
    /// order in SQLite matches chronological order.
    fn encode_timestamp(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    fn validate_content(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(DiaryError::Validation(
                "Entry content cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl StorageEngine for SqliteStorage {
    fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    DiaryError::Storage(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let conn = Connection::open(path).map_err(|e| {
            DiaryError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;
        Self::init_schema(&conn)?;
        info!("opened diary at {}", path.display());

        Ok(Self {
            path: Some(path.to_path_buf()),
            conn,
        })
    }

    fn metadata(&self) -> Result<DiaryMetadata> {
        let format_version: String = self.conn.query_row(
            "SELECT value FROM meta WHERE key = 'format_version'",
            [],
            |row| row.get(0),
        )?;

        let created_at_str: String = self.conn.query_row(
            "SELECT value FROM meta WHERE key = 'created_at'",
            [],
            |row| row.get(0),
        )?;
        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| DiaryError::Storage(format!("Invalid created_at timestamp: {}", e)))?
            .with_timezone(&Utc);

        Ok(DiaryMetadata {
            format_version,
            created_at,
        })
    }

    fn insert_entry(&mut self, entry: &NewEntry) -> Result<Entry> {
        Self::validate_content(&entry.content)?;

        let id = Uuid::new_v4();
        let created_at = entry.created_at.unwrap_or_else(Utc::now).trunc_subsecs(6);

        self.conn.execute(
            "INSERT INTO entries (id, content, created_at) VALUES (?, ?, ?)",
            (
                id.to_string(),
                &entry.content,
                Self::encode_timestamp(&created_at),
            ),
        )?;
        debug!("inserted entry {}", id);

        Ok(Entry {
            id,
            content: entry.content.clone(),
            created_at,
        })
    }

    fn get_entry(&self, id: &Uuid) -> Result<Option<Entry>> {
        let query = format!("SELECT {} FROM entries WHERE id = ?", EntryRow::COLUMNS);
        let row = self
            .conn
            .query_row(&query, [id.to_string()], EntryRow::from_sql)
            .optional()?;

        row.map(Entry::try_from).transpose()
    }

    fn list_entries(&self, filter: &EntryFilter) -> Result<Vec<Entry>> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        // instr() is case-sensitive, unlike LIKE.
        if let Some(needle) = filter.needle() {
            conditions.push("instr(content, ?) > 0");
            params.push(Box::new(needle.to_string()));
        }

        let mut query = format!("SELECT {} FROM entries", EntryRow::COLUMNS);
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY created_at DESC, rowid DESC");

        if let Some(limit) = filter.limit {
            query.push_str(" LIMIT ?");
            params.push(Box::new(limit as i64));
        }

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter()),
            EntryRow::from_sql,
        )?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?.try_into()?);
        }

        Ok(entries)
    }

    fn delete_entry(&mut self, id: &Uuid) -> Result<()> {
        let removed = self
            .conn
            .execute("DELETE FROM entries WHERE id = ?", [id.to_string()])?;

        if removed == 0 {
            return Err(DiaryError::NotFound(format!("Entry {} not found", id)));
        }

        debug!("deleted entry {}", id);
        Ok(())
    }

    fn count_entries(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        usize::try_from(count)
            .map_err(|_| DiaryError::Storage(format!("Invalid entry count: {}", count)))
    }
}
