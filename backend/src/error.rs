//! Error types shared by the record stores and the request handlers.
//!
//! `StoreError` describes what went wrong inside a `BookStore`. `ServiceError`
//! is what handlers return; it implements actix-web's `ResponseError`, so a
//! handler can use `?` and still produce the `{status, message}` envelope with
//! the right status code.

use crate::response::Envelope;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

/// Message sent to the client for every 5xx. The real cause is only logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("a book with id {0} already exists")]
    DuplicateId(String),

    #[error("store lock poisoned")]
    Poisoned,

    #[error("store is closed")]
    Closed,
}

/// Errors surfaced by the `/books` handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Payload failed a business rule (missing name, readPage > pageCount).
    #[error("{0}")]
    Validation(String),

    /// Malformed JSON body or query string.
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("blocking task failed")]
    Blocking,
}

impl From<actix_web::error::BlockingError> for ServiceError {
    fn from(_: actix_web::error::BlockingError) -> Self {
        ServiceError::Blocking
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) | ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Store(_) | ServiceError::Blocking => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let envelope = if self.status_code().is_server_error() {
            error!("request failed: {}", self);
            Envelope::error(INTERNAL_ERROR_MESSAGE)
        } else {
            Envelope::fail(self.to_string())
        };
        HttpResponse::build(self.status_code()).json(envelope)
    }
}
