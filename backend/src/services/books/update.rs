//! # Book Update
//!
//! `PUT /books/{id}` replaces every mutable field of a record. The checks run
//! in this order and the first failure wins:
//!
//! 1. The id must exist (`404`).
//! 2. `name` must be present and non-empty (`400`).
//! 3. `readPage` must not exceed the new `pageCount`, nor the `pageCount`
//!    currently stored for the record (`400`).
//!
//! On success `finished` is recomputed, `updatedAt` refreshed, and `id` and
//! `insertedAt` are left untouched.

use crate::error::ServiceError;
use crate::response::Envelope;
use crate::services::books::{now, validation};
use crate::store::BookStore;
use actix_web::{web, HttpResponse};
use common::model::book::BookPayload;
use log::debug;

pub const ID_NOT_FOUND: &str = "id not found";

pub async fn process(
    store: web::Data<dyn BookStore>,
    id: web::Path<String>,
    payload: web::Json<BookPayload>,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();
    let payload = payload.into_inner();
    web::block(move || update_book(store.get_ref(), &id, payload)).await??;

    Ok(HttpResponse::Ok().json(Envelope::success(Some("book updated"), None)))
}

pub fn update_book(
    store: &dyn BookStore,
    id: &str,
    payload: BookPayload,
) -> Result<(), ServiceError> {
    let mut book = store
        .select_by_id(id)?
        .ok_or_else(|| ServiceError::NotFound(ID_NOT_FOUND.to_string()))?;

    validation::require_name(&payload)?;
    validation::check_read_page(payload.read_page, payload.page_count)?;
    // TODO: confirm with product whether the stored pageCount should bound the new readPage at all.
    validation::check_read_page(payload.read_page, book.page_count)?;

    book.apply(payload, now());
    if !store.update(&book)? {
        // removed between the lookup and the write
        return Err(ServiceError::NotFound(ID_NOT_FOUND.to_string()));
    }
    debug!("Updated book {}", book.id);

    Ok(())
}
