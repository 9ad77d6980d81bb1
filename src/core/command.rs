use crate::core::library::{LibraryError, LibraryResult};

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> LibraryResult<Response>;
}

// require_present trims a field and rejects it when nothing is left
pub fn require_present(field: &str, value: &str) -> LibraryResult<String> {
    let value = value.trim();
    if value.is_empty() {
        Err(LibraryError::validation(format!("{} must not be empty.", field).as_str()))
    } else {
        Ok(value.to_string())
    }
}
