use serde::{Deserialize, Serialize};

/// A single book record as it is stored and returned by `GET /books/{id}`.
///
/// `finished` is derived from `read_page == page_count` every time the record
/// is written; it is never taken from the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub year: i64,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: String,
    pub updated_at: String,
}

impl Book {
    /// Builds a fresh record from a payload. The caller supplies the generated
    /// id and the creation timestamp, which is used for both `insertedAt` and
    /// `updatedAt`.
    pub fn new(id: String, payload: BookPayload, now: String) -> Self {
        Book {
            id,
            name: payload.name.unwrap_or_default(),
            year: payload.year,
            author: payload.author,
            summary: payload.summary,
            publisher: payload.publisher,
            page_count: payload.page_count,
            read_page: payload.read_page,
            finished: payload.read_page == payload.page_count,
            reading: payload.reading,
            inserted_at: now.clone(),
            updated_at: now,
        }
    }

    /// Replaces every mutable field with the payload's values, recomputes
    /// `finished` and refreshes `updatedAt`. `id` and `insertedAt` are kept.
    pub fn apply(&mut self, payload: BookPayload, now: String) {
        self.name = payload.name.unwrap_or_default();
        self.year = payload.year;
        self.author = payload.author;
        self.summary = payload.summary;
        self.publisher = payload.publisher;
        self.page_count = payload.page_count;
        self.read_page = payload.read_page;
        self.finished = payload.read_page == payload.page_count;
        self.reading = payload.reading;
        self.updated_at = now;
    }

    pub fn to_summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

/// Request body for `POST /books` and `PUT /books/{id}`.
///
/// Every field may be omitted. `name` stays optional so that a missing name
/// and an empty one are rejected the same way by the handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookPayload {
    pub name: Option<String>,
    pub year: i64,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

/// The projection returned by `GET /books`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: String,
}
