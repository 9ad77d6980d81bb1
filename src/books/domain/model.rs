use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

// BookEntity is the stored state of a catalogued book, keyed by its ISBN.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub book_status: BookStatus,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            book_status: BookStatus::Available,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookEntity {
    fn status(&self) -> BookStatus {
        self.book_status
    }
}
