use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryError};

// BookDto is a data transfer object for the catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub book_status: BookStatus,
}

impl BookDto {
    pub fn new(title: &str, author: &str, isbn: &str) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            book_status: BookStatus::Available,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookDto {
    fn status(&self) -> BookStatus {
        self.book_status
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' by {} (ISBN: {}) ({})", self.title, self.author, self.isbn, self.book_status)
    }
}

// Records fetched by the URL loader are loose JSON objects; a record converts
// when it carries a title, an author and an ISBN (string or number).
impl TryFrom<&Map<String, Value>> for BookDto {
    type Error = LibraryError;

    fn try_from(record: &Map<String, Value>) -> Result<Self, Self::Error> {
        let title = string_field(record, "title")?;
        let author = string_field(record, "author")?;
        let isbn = match record.get("isbn") {
            Some(Value::Number(n)) => n.to_string(),
            _ => string_field(record, "isbn")?,
        };
        Ok(BookDto::new(title.as_str(), author.as_str(), isbn.as_str()))
    }
}

fn string_field(record: &Map<String, Value>, name: &str) -> Result<String, LibraryError> {
    match record.get(name) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(LibraryError::serialization(format!("book record has no {}", name).as_str())),
    }
}
