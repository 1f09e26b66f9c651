//! Wiring shared by `main.rs` and the HTTP tests: application data, extractor
//! configuration, routes and the fallback for unknown paths.

use crate::error::ServiceError;
use crate::response::Envelope;
use crate::services;
use crate::store::BookStore;
use actix_web::middleware::DefaultHeaders;
use actix_web::{web, HttpResponse};

/// Maximum accepted JSON body.
pub const JSON_LIMIT: usize = 1024 * 1024;

/// Registers the store, the JSON error handler and every route.
pub fn configure(store: web::Data<dyn BookStore>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(store)
            .app_data(json_config())
            .service(services::books::configure_routes())
            .default_service(web::route().to(not_found));
    }
}

/// Adds `Access-Control-Allow-Origin` to every response.
pub fn cors_headers(origin: &str) -> DefaultHeaders {
    DefaultHeaders::new().add(("Access-Control-Allow-Origin", origin.to_string()))
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| {
            ServiceError::BadRequest(format!("invalid request body: {}", err)).into()
        })
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(Envelope::fail("resource not found"))
}
