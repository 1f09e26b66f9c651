//! # Record Store
//!
//! The `BookStore` trait is the only thing the request handlers know about
//! persistence. Two implementations exist:
//! - `memory::MemoryStore`: an ordered `Vec` that lives as long as the process.
//! - `sqlite::SqliteStore`: a single `books` table in a SQLite database.
//!
//! Both are created once in `main.rs` through `open_store`, shared with the
//! handlers as `web::Data<dyn BookStore>` and closed after the server stops.

pub mod memory;
pub mod sqlite;

use crate::config::{Config, StoreKind};
use crate::error::StoreError;
use common::model::book::Book;
use std::sync::Arc;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Storage capability for book records.
///
/// Every method is a single atomic step. Methods are synchronous; callers on
/// the async side run them through `web::block`.
pub trait BookStore: Send + Sync {
    /// Persists a fully-formed record. Fails with `StoreError::DuplicateId`
    /// (or the engine's constraint error) if the id is already taken.
    fn insert(&self, book: &Book) -> Result<(), StoreError>;

    /// Snapshot of all records in insertion order.
    fn select_all(&self) -> Result<Vec<Book>, StoreError>;

    fn select_by_id(&self, id: &str) -> Result<Option<Book>, StoreError>;

    /// Replaces the mutable fields of the record with `book.id`.
    /// Returns `false` when no such record exists.
    fn update(&self, book: &Book) -> Result<bool, StoreError>;

    /// Returns `false` when no record with `id` exists.
    fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Releases the underlying resource. Later calls fail with `StoreError::Closed`.
    fn close(&self) -> Result<(), StoreError>;
}

/// Builds the store selected by `config.store`.
pub fn open_store(config: &Config) -> Result<Arc<dyn BookStore>, StoreError> {
    let store: Arc<dyn BookStore> = match config.store {
        StoreKind::Memory => Arc::new(MemoryStore::new()),
        StoreKind::Sqlite => Arc::new(SqliteStore::open(&config.database)?),
    };
    Ok(store)
}
