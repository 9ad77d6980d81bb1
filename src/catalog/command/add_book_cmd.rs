use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, require_present};
use crate::core::library::LibraryResult;

pub struct AddBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    title: String,
    author: String,
    isbn: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'_> {
    fn execute(&mut self, req: AddBookCommandRequest) -> LibraryResult<AddBookCommandResponse> {
        let title = require_present("Book title", &req.title)?;
        let author = require_present("Book author", &req.author)?;
        let isbn = require_present("Book ISBN", &req.isbn)?;
        let book = BookDto::new(title.as_str(), author.as_str(), isbn.as_str());
        self.catalog_service.add_book(&book).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::tests::build_catalog_service;
    use crate::core::command::Command;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_run_add_book() {
        let mut svc = build_catalog_service();
        let res = AddBookCommand::new(svc.as_mut())
            .execute(AddBookCommandRequest::new(" 1984 ", "Orwell", "123")).expect("should add book");
        assert_eq!("1984", res.book.title.as_str());
        assert_eq!(res.book, svc.find_book("123").expect("should find book"));
    }

    #[test]
    fn test_should_reject_blank_fields() {
        let mut svc = build_catalog_service();
        let res = AddBookCommand::new(svc.as_mut())
            .execute(AddBookCommandRequest::new("1984", "", "123"));
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        assert!(svc.list_all_books().expect("should list").is_empty());
    }

    #[test]
    fn test_should_reject_duplicate_isbn() {
        let mut svc = build_catalog_service();
        let _ = AddBookCommand::new(svc.as_mut())
            .execute(AddBookCommandRequest::new("1984", "Orwell", "123")).expect("should add book");
        let res = AddBookCommand::new(svc.as_mut())
            .execute(AddBookCommandRequest::new("Emma", "Austen", "123"));
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
    }
}
