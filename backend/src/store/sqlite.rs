//! SQLite-backed `BookStore`.
//!
//! All records live in one table:
//!
//! ```sql
//! books(id TEXT PRIMARY KEY, name, year, author, summary, publisher,
//!       pageCount, readPage, finished, reading, insertedAt, updatedAt)
//! ```
//!
//! `rusqlite::Connection` is `Send` but not `Sync`, so the connection sits
//! behind a `Mutex`. Each trait method runs exactly one statement, which keeps
//! every store call atomic without explicit transactions. Booleans are stored
//! as INTEGER 0/1.

use crate::error::StoreError;
use crate::store::BookStore;
use common::model::book::Book;
use log::info;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use std::path::Path;
use std::sync::Mutex;

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS books (
    id TEXT PRIMARY KEY,
    name TEXT,
    year INTEGER,
    author TEXT,
    summary TEXT,
    publisher TEXT,
    pageCount INTEGER,
    readPage INTEGER,
    finished INTEGER,
    reading INTEGER,
    insertedAt TEXT,
    updatedAt TEXT
)";

const SELECT_COLUMNS: &str = "SELECT id, name, year, author, summary, publisher, pageCount, \
     readPage, finished, reading, insertedAt, updatedAt FROM books";

pub struct SqliteStore {
    conn: Mutex<Option<Connection>>,
}

impl SqliteStore {
    /// Opens (or creates) the database file and makes sure the table exists.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        info!("Opened SQLite book store at {}", path.display());
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(CREATE_TABLE, [])?;
        Ok(SqliteStore {
            conn: Mutex::new(Some(conn)),
        })
    }

    fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> rusqlite::Result<T>,
    ) -> Result<T, StoreError> {
        let guard = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        let conn = guard.as_ref().ok_or(StoreError::Closed)?;
        f(conn).map_err(StoreError::from)
    }
}

fn row_to_book(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        name: row.get(1)?,
        year: row.get(2)?,
        author: row.get(3)?,
        summary: row.get(4)?,
        publisher: row.get(5)?,
        page_count: row.get(6)?,
        read_page: row.get(7)?,
        finished: row.get(8)?,
        reading: row.get(9)?,
        inserted_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}

impl BookStore for SqliteStore {
    fn insert(&self, book: &Book) -> Result<(), StoreError> {
        let result = self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO books (id, name, year, author, summary, publisher, pageCount, \
                 readPage, finished, reading, insertedAt, updatedAt) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                params![
                    &book.id,
                    &book.name,
                    book.year,
                    &book.author,
                    &book.summary,
                    &book.publisher,
                    book.page_count,
                    book.read_page,
                    book.finished,
                    book.reading,
                    &book.inserted_at,
                    &book.updated_at,
                ],
            )
        });

        match result {
            Ok(_) => Ok(()),
            Err(StoreError::Sqlite(e))
                if e.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) =>
            {
                Err(StoreError::DuplicateId(book.id.clone()))
            }
            Err(e) => Err(e),
        }
    }

    fn select_all(&self) -> Result<Vec<Book>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY rowid"))?;
            let books = stmt
                .query_map([], row_to_book)?
                .collect::<rusqlite::Result<Vec<Book>>>()?;
            Ok(books)
        })
    }

    fn select_by_id(&self, id: &str) -> Result<Option<Book>, StoreError> {
        self.with_conn(|conn| {
            conn.query_row(
                &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                params![id],
                row_to_book,
            )
            .optional()
        })
    }

    fn update(&self, book: &Book) -> Result<bool, StoreError> {
        let changed = self.with_conn(|conn| {
            conn.execute(
                "UPDATE books SET name = ?1, year = ?2, author = ?3, summary = ?4, \
                 publisher = ?5, pageCount = ?6, readPage = ?7, finished = ?8, \
                 reading = ?9, updatedAt = ?10 WHERE id = ?11",
                params![
                    &book.name,
                    book.year,
                    &book.author,
                    &book.summary,
                    &book.publisher,
                    book.page_count,
                    book.read_page,
                    book.finished,
                    book.reading,
                    &book.updated_at,
                    &book.id,
                ],
            )
        })?;
        Ok(changed > 0)
    }

    fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let removed =
            self.with_conn(|conn| conn.execute("DELETE FROM books WHERE id = ?1", params![id]))?;
        Ok(removed > 0)
    }

    fn close(&self) -> Result<(), StoreError> {
        let mut guard = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        match guard.take() {
            Some(conn) => conn.close().map_err(|(_, e)| StoreError::Sqlite(e)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::{book, exercise_contract};

    #[test]
    fn satisfies_store_contract() {
        exercise_contract(&SqliteStore::open_in_memory().unwrap());
    }

    #[test]
    fn records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.db");

        let store = SqliteStore::open(&path).unwrap();
        let stored = book("aaaaaaaaaaaaaaaa", "Persisted", 320, 320);
        store.insert(&stored).unwrap();
        store.close().unwrap();

        let reopened = SqliteStore::open(&path).unwrap();
        assert_eq!(reopened.select_all().unwrap(), vec![stored]);
    }

    #[test]
    fn duplicate_id_is_reported() {
        let store = SqliteStore::open_in_memory().unwrap();
        let first = book("aaaaaaaaaaaaaaaa", "A", 1, 0);
        store.insert(&first).unwrap();
        assert!(matches!(store.insert(&first), Err(StoreError::DuplicateId(id)) if id == first.id));
    }

    #[test]
    fn booleans_are_stored_as_integers() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert(&book("aaaaaaaaaaaaaaaa", "A", 5, 5)).unwrap();

        let (finished, reading): (i64, i64) = store
            .with_conn(|conn| {
                conn.query_row("SELECT finished, reading FROM books", [], |row| {
                    Ok((row.get(0)?, row.get(1)?))
                })
            })
            .unwrap();
        assert_eq!((finished, reading), (1, 0));
    }

    #[test]
    fn close_twice_is_harmless() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.close().unwrap();
        store.close().unwrap();
        assert!(matches!(store.delete("x"), Err(StoreError::Closed)));
    }
}
