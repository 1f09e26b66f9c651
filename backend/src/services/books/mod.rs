//! # Book Service Module
//!
//! Aggregates every endpoint of the book catalog under the `/books` path.
//! Each sub-module owns one operation and follows the same split: a core
//! function that takes `&dyn BookStore` and returns `Result<_, ServiceError>`,
//! plus an actix `process` handler that runs the core function on the
//! blocking pool and wraps the outcome in the response envelope.
//!
//! ## Sub-modules:
//! - `create`: validates a payload, derives `id`/timestamps/`finished`, inserts.
//! - `list`: filters the catalog and projects it to `{id, name, publisher}`.
//! - `get`: returns one full record.
//! - `update`: validates a replacement payload and rewrites the record.
//! - `delete`: removes one record.
//! - `validation`: the rules shared by `create` and `update`.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;
pub mod validation;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// The base path for all book endpoints.
const API_PATH: &str = "/books";

/// Length of a generated book id.
pub const ID_LENGTH: usize = 16;

/// Configures and returns the Actix `Scope` for all book routes.
///
/// # Registered Routes:
///
/// *   **`POST /books`**: `create::process`, answers `201` with `{bookId}`.
/// *   **`GET /books`**: `list::process`, accepts `name`, `reading`, `finished`.
/// *   **`GET /books/{id}`**: `get::process`, answers `404` for unknown ids.
/// *   **`PUT /books/{id}`**: `update::process`, full replacement of the record.
/// *   **`DELETE /books/{id}`**: `delete::process`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("", get().to(list::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
}

/// A fresh 16-character id, taken from the hex form of a v4 UUID.
pub fn generate_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(ID_LENGTH);
    id
}

/// Current UTC time as ISO-8601 with millisecond precision, e.g.
/// `2024-05-01T09:30:12.042Z`.
pub fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use std::collections::HashSet;

    #[test]
    fn ids_are_sixteen_chars_and_distinct() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
        assert!(ids.iter().all(|id| id.len() == ID_LENGTH));
    }

    #[test]
    fn timestamps_are_iso_8601() {
        let ts = now();
        assert!(ts.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
