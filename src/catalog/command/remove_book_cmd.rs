use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, require_present};
use crate::core::library::LibraryResult;

pub struct RemoveBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> RemoveBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    isbn: String,
}

impl RemoveBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub book: BookDto,
}

impl RemoveBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand<'_> {
    fn execute(&mut self, req: RemoveBookCommandRequest) -> LibraryResult<RemoveBookCommandResponse> {
        let isbn = require_present("Book ISBN", &req.isbn)?;
        self.catalog_service.remove_book(isbn.as_str()).map(RemoveBookCommandResponse::new)
    }
}
