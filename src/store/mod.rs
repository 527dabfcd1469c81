//! # Book Store
//!
//! Thin persistence gateway over a single SQLite connection.
//!
//! The store owns one connection for the life of the process, serialized
//! behind a mutex and shared across handlers via `Arc`. The `books` table is
//! provisioned by the operator, not by this component; `BOOKS_SCHEMA` records
//! the expected DDL for provisioning scripts and tests. Rows are insert-only
//! and duplicates are permitted (there is no uniqueness constraint).

pub mod errors;

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection};

pub use errors::{StoreError, StoreResult};

/// Expected DDL for the `books` table.
///
/// The store never runs this itself; provisioning is external.
pub const BOOKS_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS books (
    pk INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    owi TEXT NOT NULL,
    classification TEXT NOT NULL
)";

/// Persistence gateway for shelved books
pub struct BookStore {
    conn: Mutex<Connection>,
}

impl BookStore {
    /// Open (or create) the database file at `path`
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path).map_err(StoreError::Open)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (tests)
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(StoreError::Open)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Liveness probe: the connection answers and the `books` table exists.
    pub fn ping(&self) -> StoreResult<()> {
        let conn = self.lock();
        conn.query_row("SELECT COUNT(*) FROM books", [], |row| {
            row.get::<_, i64>(0)
        })?;
        Ok(())
    }

    /// True iff the liveness probe succeeds
    pub fn is_reachable(&self) -> bool {
        self.ping().is_ok()
    }

    /// Insert one book row; returns the assigned primary key.
    ///
    /// No transaction wrapping and no dedup check: inserting the same work
    /// twice yields two rows.
    pub fn insert_book(
        &self,
        title: &str,
        author: &str,
        owi: &str,
        classification: &str,
    ) -> StoreResult<i64> {
        let conn = self.lock();
        conn.execute(
            "INSERT INTO books (title, author, owi, classification) VALUES (?1, ?2, ?3, ?4)",
            params![title, author, owi, classification],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Run arbitrary SQL against the store (provisioning scripts, tests).
    pub fn execute_batch(&self, sql: &str) -> StoreResult<()> {
        let conn = self.lock();
        conn.execute_batch(sql)?;
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().expect("book store mutex poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provisioned_store() -> BookStore {
        let store = BookStore::open_in_memory().unwrap();
        store.execute_batch(BOOKS_SCHEMA).unwrap();
        store
    }

    #[test]
    fn test_ping_succeeds_on_provisioned_store() {
        let store = provisioned_store();
        assert!(store.ping().is_ok());
        assert!(store.is_reachable());
    }

    #[test]
    fn test_ping_fails_without_books_table() {
        let store = BookStore::open_in_memory().unwrap();
        assert!(store.ping().is_err());
        assert!(!store.is_reachable());
    }

    #[test]
    fn test_insert_assigns_increasing_keys() {
        let store = provisioned_store();

        let first = store
            .insert_book("Moby Dick", "Melville, Herman", "12345", "813.3")
            .unwrap();
        let second = store
            .insert_book("Pride and Prejudice", "Austen, Jane", "67890", "823.7")
            .unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn test_insert_persists_all_fields() {
        let store = provisioned_store();
        store
            .insert_book("Moby Dick", "Melville, Herman", "12345", "813.3")
            .unwrap();

        let conn = store.lock();
        let row: (String, String, String, String) = conn
            .query_row(
                "SELECT title, author, owi, classification FROM books WHERE pk = 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )
            .unwrap();

        assert_eq!(row.0, "Moby Dick");
        assert_eq!(row.1, "Melville, Herman");
        assert_eq!(row.2, "12345");
        assert_eq!(row.3, "813.3");
    }

    #[test]
    fn test_duplicate_identifiers_are_permitted() {
        let store = provisioned_store();

        store
            .insert_book("Moby Dick", "Melville, Herman", "12345", "813.3")
            .unwrap();
        store
            .insert_book("Moby Dick", "Melville, Herman", "12345", "813.3")
            .unwrap();

        let conn = store.lock();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM books WHERE owi = '12345'", [], |row| {
                row.get(0)
            })
            .unwrap();

        assert_eq!(count, 2);
    }

    #[test]
    fn test_insert_fails_without_books_table() {
        let store = BookStore::open_in_memory().unwrap();
        let err = store.insert_book("Moby Dick", "Melville, Herman", "12345", "813.3");
        assert!(err.is_err());
    }
}
