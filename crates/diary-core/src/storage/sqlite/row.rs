//! Entry row type for database queries.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{DiaryError, Result};
use crate::storage::types::Entry;

/// Raw row data from the entries table, before parsing into domain types.
#[derive(Debug)]
pub struct EntryRow {
    pub id: String,
    pub content: String,
    pub created_at: String,
}

impl EntryRow {
    pub const COLUMNS: &'static str = "id, content, created_at";

    pub fn from_sql(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            content: row.get(1)?,
            created_at: row.get(2)?,
        })
    }
}

impl TryFrom<EntryRow> for Entry {
    type Error = DiaryError;

    fn try_from(row: EntryRow) -> Result<Self> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| DiaryError::Storage(format!("Invalid entry UUID: {}", e)))?;
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| DiaryError::Storage(format!("Invalid timestamp: {}", e)))?
            .with_timezone(&Utc);

        Ok(Entry {
            id,
            content: row.content,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_converts_to_entry() {
        let id = Uuid::new_v4();
        let row = EntryRow {
            id: id.to_string(),
            content: "Morning jog".to_string(),
            created_at: "2024-03-05T14:07:00.000000Z".to_string(),
        };

        let entry: Entry = row.try_into().unwrap();
        assert_eq!(entry.id, id);
        assert_eq!(entry.content, "Morning jog");
        assert_eq!(entry.created_at.to_rfc3339(), "2024-03-05T14:07:00+00:00");
    }

    #[test]
    fn test_bad_uuid_is_storage_error() {
        let row = EntryRow {
            id: "not-a-uuid".to_string(),
            content: "x".to_string(),
            created_at: "2024-03-05T14:07:00Z".to_string(),
        };

        let result: Result<Entry> = row.try_into();
        assert!(matches!(result, Err(DiaryError::Storage(_))));
    }

    #[test]
    fn test_bad_timestamp_is_storage_error() {
        let row = EntryRow {
            id: Uuid::new_v4().to_string(),
            content: "x".to_string(),
            created_at: "yesterday".to_string(),
        };

        let result: Result<Entry> = row.try_into();
        assert!(matches!(result, Err(DiaryError::Storage(_))));
    }
}
