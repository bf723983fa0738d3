use crate::error::{HarvestError, Result};
use crate::types::StoredRecord;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Persistence surface used by the pipeline and the presentation layer.
pub trait RecordStore {
    fn insert(&self, text: &str) -> Result<()>;
    fn list_all(&self) -> Result<Vec<StoredRecord>>;
    fn clear(&self) -> Result<()>;
}

/// SQLite-backed record store.
///
/// Ids come from `AUTOINCREMENT`, so they keep growing after `clear` and are
/// never handed out twice for the lifetime of the database file.
pub struct Store {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Store {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| {
            HarvestError::storage(format!(
                "Error connecting to the database {}: {}",
                path.display(),
                e
            ))
        })?;

        let store = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        store.create_table()?;

        info!("Opened record store at {}", path.display());
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| {
            HarvestError::storage(format!("Error connecting to the database: {}", e))
        })?;

        let store = Self { conn, path: None };
        store.create_table()?;
        Ok(store)
    }

    /// Database file location, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn create_table(&self) -> Result<()> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS parsed_data (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    data_column TEXT
                )",
                [],
            )
            .map_err(|e| HarvestError::storage(format!("Error creating table: {}", e)))?;
        Ok(())
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM parsed_data", [], |row| row.get(0))
            .map_err(|e| HarvestError::storage(format!("Error counting data: {}", e)))?;
        Ok(count as usize)
    }
}

impl RecordStore for Store {
    fn insert(&self, text: &str) -> Result<()> {
        self.conn
            .execute("INSERT INTO parsed_data (data_column) VALUES (?1)", params![text])
            .map_err(|e| HarvestError::storage(format!("Error inserting data: {}", e)))?;
        debug!("Inserted record {}", self.conn.last_insert_rowid());
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<StoredRecord>> {
        let read_err =
            |e: rusqlite::Error| HarvestError::storage(format!("Error fetching data: {}", e));

        let mut stmt = self
            .conn
            .prepare("SELECT id, data_column FROM parsed_data ORDER BY id ASC")
            .map_err(read_err)?;

        let records = stmt
            .query_map([], |row| {
                Ok(StoredRecord {
                    id: row.get(0)?,
                    text: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                })
            })
            .map_err(read_err)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(read_err)?;

        Ok(records)
    }

    fn clear(&self) -> Result<()> {
        let clear_err =
            |e: rusqlite::Error| HarvestError::storage(format!("Error clearing data: {}", e));

        let tx = self.conn.unchecked_transaction().map_err(clear_err)?;
        let removed = tx.execute("DELETE FROM parsed_data", []).map_err(clear_err)?;
        tx.commit().map_err(clear_err)?;

        info!("Cleared {} records", removed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_list_in_order() {
        let store = Store::open_in_memory().unwrap();
        let texts = ["first", "", "first", "third"];
        for text in texts {
            store.insert(text).unwrap();
        }

        let records = store.list_all().unwrap();
        let stored: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(stored, texts);
        assert!(records.windows(2).all(|w| w[0].id < w[1].id));
        assert_eq!(store.count().unwrap(), 4);
    }

    #[test]
    fn test_clear_empties_store() {
        let store = Store::open_in_memory().unwrap();
        store.clear().unwrap();
        assert!(store.list_all().unwrap().is_empty());

        store.insert("a").unwrap();
        store.insert("b").unwrap();
        store.clear().unwrap();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let store = Store::open_in_memory().unwrap();
        store.insert("a").unwrap();
        store.insert("b").unwrap();
        let last = store.list_all().unwrap().last().unwrap().id;

        store.clear().unwrap();
        store.insert("c").unwrap();

        let records = store.list_all().unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].id > last);
    }

    #[test]
    fn test_write_faults_are_storage_errors() {
        let store = Store::open_in_memory().unwrap();
        store.insert("a").unwrap();
        store.conn.execute_batch("PRAGMA query_only = ON").unwrap();

        assert!(store.insert("b").unwrap_err().is_storage());
        assert!(store.clear().unwrap_err().is_storage());

        let records = store.list_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "a");
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.db");

        {
            let store = Store::open(&path).unwrap();
            store.insert("kept").unwrap();
            assert_eq!(store.path(), Some(path.as_path()));
        }

        let store = Store::open(&path).unwrap();
        let records = store.list_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "kept");
    }

    #[test]
    fn test_open_unwritable_location_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Store::open(dir.path().join("missing").join("data.db"))
            .err()
            .unwrap();
        assert!(err.is_storage());
    }
}
