//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, params, OptionalExtension};
use crate::Result;
use super::{schema, MemoizedSum, SumStore};

/// SQLite-backed storage for memoized sums
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Count all memoized records
    pub fn count_records(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM sum_data", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Helper to convert a row to a MemoizedSum
    fn row_to_record(&self, row: &rusqlite::Row) -> rusqlite::Result<MemoizedSum> {
        Ok(MemoizedSum {
            id: row.get(0)?,
            key: row.get(1)?,
            result: row.get(2)?,
        })
    }
}

impl SumStore for SqliteStore {
    /// Get a record by its canonical key
    fn find_by_key(&self, key: &str) -> Result<Option<MemoizedSum>> {
        self.conn
            .query_row(
                "SELECT id, input_numbers, result FROM sum_data WHERE input_numbers = ?1",
                [key],
                |row| self.row_to_record(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Insert a new record
    ///
    /// The UNIQUE constraint on `input_numbers` rejects a second row for the
    /// same key; the violation surfaces to the caller as a typed error.
    fn insert(&self, key: &str, result: i32) -> Result<MemoizedSum> {
        self.conn.execute(
            "INSERT INTO sum_data (input_numbers, result) VALUES (?1, ?2)",
            params![key, result],
        )?;

        Ok(MemoizedSum {
            id: self.conn.last_insert_rowid(),
            key: key.to_string(),
            result,
        })
    }
}
