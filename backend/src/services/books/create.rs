use crate::error::ServiceError;
use crate::response::Envelope;
use crate::services::books::{generate_id, now, validation};
use crate::store::BookStore;
use actix_web::{web, HttpResponse};
use common::model::book::{Book, BookPayload};
use log::debug;
use serde_json::json;

/// Actix web handler for `POST /books`.
///
/// # Returns
/// - `201 Created` with `{"bookId": ...}` in `data`.
/// - `400 Bad Request` when the name is missing or `readPage > pageCount`.
/// - `500 Internal Server Error` when the store fails.
pub async fn process(
    store: web::Data<dyn BookStore>,
    payload: web::Json<BookPayload>,
) -> Result<HttpResponse, ServiceError> {
    let payload = payload.into_inner();
    let book_id = web::block(move || create_book(store.get_ref(), payload)).await??;

    Ok(HttpResponse::Created().json(Envelope::success(
        Some("book added"),
        Some(json!({ "bookId": book_id })),
    )))
}

/// Validates the payload, derives the generated fields and inserts the record.
///
/// Validation stops at the first failing rule: name first, then the page bound.
pub fn create_book(store: &dyn BookStore, payload: BookPayload) -> Result<String, ServiceError> {
    validation::require_name(&payload)?;
    validation::check_read_page(payload.read_page, payload.page_count)?;

    let book = Book::new(generate_id(), payload, now());
    store.insert(&book)?;
    debug!("Created book {}", book.id);

    Ok(book.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::books::ID_LENGTH;
    use crate::store::MemoryStore;

    fn payload(name: &str, page_count: u32, read_page: u32) -> BookPayload {
        BookPayload {
            name: Some(name.to_string()),
            page_count,
            read_page,
            ..BookPayload::default()
        }
    }

    #[test]
    fn stores_book_with_derived_fields() {
        let store = MemoryStore::new();
        let id = create_book(&store, payload("A", 100, 100)).unwrap();
        assert_eq!(id.len(), ID_LENGTH);

        let book = store.select_by_id(&id).unwrap().unwrap();
        assert!(book.finished);
        assert_eq!(book.inserted_at, book.updated_at);
    }

    #[test]
    fn name_is_checked_before_page_bound() {
        let store = MemoryStore::new();
        let err = create_book(&store, payload("", 1, 5)).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(m) if m == validation::NAME_REQUIRED));
        assert!(store.select_all().unwrap().is_empty());
    }

    #[test]
    fn read_page_past_page_count_is_rejected() {
        let store = MemoryStore::new();
        let err = create_book(&store, payload("A", 1, 5)).unwrap_err();
        assert!(
            matches!(err, ServiceError::Validation(m) if m == validation::READ_PAGE_EXCEEDS_PAGE_COUNT)
        );
        assert!(store.select_all().unwrap().is_empty());
    }

    #[test]
    fn store_failure_surfaces_as_store_error() {
        let store = MemoryStore::new();
        store.close().unwrap();
        let err = create_book(&store, payload("A", 1, 1)).unwrap_err();
        assert!(matches!(err, ServiceError::Store(_)));
    }
}
