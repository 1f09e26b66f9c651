//! # Book Listing
//!
//! `GET /books` returns a projection of the catalog. Three optional filters
//! are applied in order, each as an independent predicate, so the order does
//! not change the result set:
//!
//! 1. `name`: case-insensitive substring match. An empty value is ignored.
//! 2. `reading`: equality with the flag.
//! 3. `finished`: equality with the flag.
//!
//! A flag is true when its value, after leading whitespace, starts with the
//! integer `1` (`1`, `+1`, `1.0`, `1abc`); anything else, including garbage,
//! means false. Repeated keys keep their first value, so the listing never
//! rejects a query string.

use crate::error::ServiceError;
use crate::response::Envelope;
use crate::store::BookStore;
use actix_web::{web, HttpRequest, HttpResponse};
use common::model::book::{Book, BookSummary};
use common::requests::ListBooksQuery;
use serde_json::json;

/// Actix web handler for `GET /books`. Always `200 OK` unless the store fails.
pub async fn process(
    store: web::Data<dyn BookStore>,
    req: HttpRequest,
) -> Result<HttpResponse, ServiceError> {
    let pairs = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .unwrap_or_default();
    let query = ListBooksQuery::from_pairs(pairs);
    let books = web::block(move || list_books(store.get_ref(), &query)).await??;

    Ok(HttpResponse::Ok().json(Envelope::success(None, Some(json!({ "books": books })))))
}

pub fn list_books(
    store: &dyn BookStore,
    query: &ListBooksQuery,
) -> Result<Vec<BookSummary>, ServiceError> {
    let books = store.select_all()?;
    Ok(filter_books(books, query)
        .iter()
        .map(Book::to_summary)
        .collect())
}

/// Applies the query's filters to a snapshot of the catalog.
pub fn filter_books(books: Vec<Book>, query: &ListBooksQuery) -> Vec<Book> {
    let mut books = books;

    if let Some(name) = query.name.as_deref().filter(|n| !n.is_empty()) {
        let needle = name.to_lowercase();
        books.retain(|b| b.name.to_lowercase().contains(&needle));
    }

    if let Some(reading) = query.reading.as_deref().map(parse_flag) {
        books.retain(|b| b.reading == reading);
    }

    if let Some(finished) = query.finished.as_deref().map(parse_flag) {
        books.retain(|b| b.finished == finished);
    }

    books
}

/// Reads the leading `[+-]?digits` prefix of `value` and checks it equals 1.
fn parse_flag(value: &str) -> bool {
    let value = value.trim_start();
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let sign_len = value.len() - unsigned.len();

    value[..sign_len + digits_end].parse::<i64>() == Ok(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::book::BookPayload;

    fn book(id: &str, name: &str, reading: bool, finished: bool) -> Book {
        Book::new(
            id.to_string(),
            BookPayload {
                name: Some(name.to_string()),
                publisher: format!("{name} Press"),
                page_count: 10,
                read_page: if finished { 10 } else { 3 },
                reading,
                ..BookPayload::default()
            },
            "2024-01-01T00:00:00.000Z".to_string(),
        )
    }

    fn catalog() -> Vec<Book> {
        vec![
            book("1", "War and Peace", true, false),
            book("2", "The Art of War", false, true),
            book("3", "Peace Talks", true, true),
            book("4", "WARRIORS", true, true),
        ]
    }

    fn ids(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.id.as_str()).collect()
    }

    fn query(name: Option<&str>, reading: Option<&str>, finished: Option<&str>) -> ListBooksQuery {
        ListBooksQuery {
            name: name.map(str::to_string),
            reading: reading.map(str::to_string),
            finished: finished.map(str::to_string),
        }
    }

    #[test]
    fn no_filters_keeps_insertion_order() {
        let books = filter_books(catalog(), &ListBooksQuery::default());
        assert_eq!(ids(&books), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        let books = filter_books(catalog(), &query(Some("war"), None, None));
        assert_eq!(ids(&books), vec!["1", "2", "4"]);
    }

    #[test]
    fn empty_name_is_ignored() {
        let books = filter_books(catalog(), &query(Some(""), None, None));
        assert_eq!(books.len(), 4);
    }

    #[test]
    fn flags_match_zero_and_one() {
        assert_eq!(ids(&filter_books(catalog(), &query(None, Some("1"), None))), vec!["1", "3", "4"]);
        assert_eq!(ids(&filter_books(catalog(), &query(None, Some("0"), None))), vec!["2"]);
        assert_eq!(ids(&filter_books(catalog(), &query(None, None, Some("1")))), vec!["2", "3", "4"]);
        assert_eq!(ids(&filter_books(catalog(), &query(None, None, Some("0")))), vec!["1"]);
    }

    #[test]
    fn unparseable_flag_means_false() {
        assert_eq!(ids(&filter_books(catalog(), &query(None, Some("yes"), None))), vec!["2"]);
    }

    #[test]
    fn flags_use_the_leading_integer() {
        for truthy in ["1", " 1", "+1", "1.0", "1abc", "01"] {
            assert!(parse_flag(truthy), "{truthy:?}");
        }
        for falsy in ["0", "-1", "abc", "", "10", "2", "+", "a1"] {
            assert!(!parse_flag(falsy), "{falsy:?}");
        }
    }

    #[test]
    fn filters_compose_in_any_order() {
        let name_then_reading = filter_books(
            filter_books(catalog(), &query(Some("war"), None, None)),
            &query(None, Some("1"), None),
        );
        let reading_then_name = filter_books(
            filter_books(catalog(), &query(None, Some("1"), None)),
            &query(Some("war"), None, None),
        );
        let combined = filter_books(catalog(), &query(Some("war"), Some("1"), None));

        assert_eq!(name_then_reading, reading_then_name);
        assert_eq!(name_then_reading, combined);
        assert_eq!(ids(&combined), vec!["1", "4"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let q = query(Some("peace"), Some("1"), Some("0"));
        let once = filter_books(catalog(), &q);
        let twice = filter_books(once.clone(), &q);
        assert_eq!(once, twice);
    }
}
