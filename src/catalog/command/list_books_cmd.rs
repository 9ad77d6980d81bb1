use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::{BookFilter, CatalogService};
use crate::core::command::Command;
use crate::core::library::LibraryResult;

pub struct ListBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> ListBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListBooksCommandRequest {
    filter: BookFilter,
}

impl ListBooksCommandRequest {
    pub fn new(filter: BookFilter) -> Self {
        Self {
            filter,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand<'_> {
    fn execute(&mut self, req: ListBooksCommandRequest) -> LibraryResult<ListBooksCommandResponse> {
        self.catalog_service.list_books(req.filter).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::command::tests::build_catalog_service;
    use crate::catalog::domain::BookFilter;
    use crate::core::command::Command;
    use crate::members::dto::MemberDto;

    #[test]
    fn test_should_run_list_books() {
        let mut svc = build_catalog_service();
        svc.add_book(&BookDto::new("1984", "Orwell", "123")).expect("should add book");
        svc.add_book(&BookDto::new("Emma", "Austen", "456")).expect("should add book");
        svc.add_member(&MemberDto::new("Alice", "M1")).expect("should add member");
        svc.borrow_book("M1", "456").expect("should borrow book");

        let mut cmd = ListBooksCommand::new(svc.as_ref());
        let all = cmd.execute(ListBooksCommandRequest::new(BookFilter::All)).expect("should list");
        assert_eq!(2, all.books.len());
        let available = cmd.execute(ListBooksCommandRequest::new(BookFilter::Available)).expect("should list");
        assert_eq!("123", available.books[0].isbn.as_str());
        let borrowed = cmd.execute(ListBooksCommandRequest::new(BookFilter::Borrowed)).expect("should list");
        assert_eq!("456", borrowed.books[0].isbn.as_str());
    }
}
