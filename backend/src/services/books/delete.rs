use crate::error::ServiceError;
use crate::response::Envelope;
use crate::services::books::update::ID_NOT_FOUND;
use crate::store::BookStore;
use actix_web::{web, HttpResponse};
use log::debug;

/// Actix web handler for `DELETE /books/{id}`: `200 OK` once removed,
/// `404 Not Found` if the id is unknown.
pub async fn process(
    store: web::Data<dyn BookStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();
    web::block(move || delete_book(store.get_ref(), &id)).await??;

    Ok(HttpResponse::Ok().json(Envelope::success(Some("book deleted"), None)))
}

pub fn delete_book(store: &dyn BookStore, id: &str) -> Result<(), ServiceError> {
    if !store.delete(id)? {
        return Err(ServiceError::NotFound(ID_NOT_FOUND.to_string()));
    }
    debug!("Deleted book {}", id);
    Ok(())
}
