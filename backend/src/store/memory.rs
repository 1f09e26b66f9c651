use crate::error::StoreError;
use crate::store::BookStore;
use common::model::book::Book;
use std::sync::{Mutex, MutexGuard};

/// Process-lifetime store: an ordered list of records behind a mutex.
///
/// The actix runtime runs several workers, so the list sits behind a `Mutex`
/// even though no request ever needs more than one store call at a time.
pub struct MemoryStore {
    books: Mutex<Option<Vec<Book>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            books: Mutex::new(Some(Vec::new())),
        }
    }

    fn with_books<T>(&self, f: impl FnOnce(&mut Vec<Book>) -> T) -> Result<T, StoreError> {
        let mut guard: MutexGuard<'_, Option<Vec<Book>>> =
            self.books.lock().map_err(|_| StoreError::Poisoned)?;
        let books = guard.as_mut().ok_or(StoreError::Closed)?;
        Ok(f(books))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookStore for MemoryStore {
    fn insert(&self, book: &Book) -> Result<(), StoreError> {
        self.with_books(|books| {
            if books.iter().any(|b| b.id == book.id) {
                return Err(StoreError::DuplicateId(book.id.clone()));
            }
            books.push(book.clone());
            Ok(())
        })?
    }

    fn select_all(&self) -> Result<Vec<Book>, StoreError> {
        self.with_books(|books| books.clone())
    }

    fn select_by_id(&self, id: &str) -> Result<Option<Book>, StoreError> {
        self.with_books(|books| books.iter().find(|b| b.id == id).cloned())
    }

    fn update(&self, book: &Book) -> Result<bool, StoreError> {
        self.with_books(|books| match books.iter_mut().find(|b| b.id == book.id) {
            Some(stored) => {
                // insertedAt belongs to the stored record
                let inserted_at = std::mem::take(&mut stored.inserted_at);
                *stored = Book {
                    inserted_at,
                    ..book.clone()
                };
                true
            }
            None => false,
        })
    }

    fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.with_books(|books| match books.iter().position(|b| b.id == id) {
            Some(index) => {
                books.remove(index);
                true
            }
            None => false,
        })
    }

    fn close(&self) -> Result<(), StoreError> {
        let mut guard = self.books.lock().map_err(|_| StoreError::Poisoned)?;
        guard.take();
        Ok(())
    }
}
