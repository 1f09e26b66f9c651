use crate::error::ServiceError;
use common::model::book::BookPayload;

pub const NAME_REQUIRED: &str = "name required";
pub const READ_PAGE_EXCEEDS_PAGE_COUNT: &str = "readPage exceeds pageCount";

/// Rejects a payload whose `name` is missing or empty.
pub fn require_name(payload: &BookPayload) -> Result<(), ServiceError> {
    match payload.name.as_deref() {
        Some(name) if !name.is_empty() => Ok(()),
        _ => Err(ServiceError::Validation(NAME_REQUIRED.to_string())),
    }
}

/// Rejects `read_page` when it is past `page_count`.
pub fn check_read_page(read_page: u32, page_count: u32) -> Result<(), ServiceError> {
    if read_page > page_count {
        return Err(ServiceError::Validation(
            READ_PAGE_EXCEEDS_PAGE_COUNT.to_string(),
        ));
    }
    Ok(())
}
