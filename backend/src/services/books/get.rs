use crate::error::ServiceError;
use crate::response::Envelope;
use crate::store::BookStore;
use actix_web::{web, HttpResponse};
use common::model::book::Book;
use serde_json::json;

pub const BOOK_NOT_FOUND: &str = "book not found";

/// Actix web handler for `GET /books/{id}`.
///
/// # Returns
/// - `200 OK` with the full record under `data.book`.
/// - `404 Not Found` with status `fail` when no record has this id.
pub async fn process(
    store: web::Data<dyn BookStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();
    let book = web::block(move || get_book(store.get_ref(), &id)).await??;

    Ok(HttpResponse::Ok().json(Envelope::success(None, Some(json!({ "book": book })))))
}

pub fn get_book(store: &dyn BookStore, id: &str) -> Result<Book, ServiceError> {
    store
        .select_by_id(id)?
        .ok_or_else(|| ServiceError::NotFound(BOOK_NOT_FOUND.to_string()))
}
