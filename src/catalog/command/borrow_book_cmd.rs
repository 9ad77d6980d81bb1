use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::LoanDto;
use crate::core::command::{Command, require_present};
use crate::core::library::LibraryResult;

pub struct BorrowBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> BorrowBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BorrowBookCommandRequest {
    member_id: String,
    isbn: String,
}

impl BorrowBookCommandRequest {
    pub fn new(member_id: &str, isbn: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BorrowBookCommandResponse {
    pub loan: LoanDto,
}

impl BorrowBookCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand<'_> {
    fn execute(&mut self, req: BorrowBookCommandRequest) -> LibraryResult<BorrowBookCommandResponse> {
        let member_id = require_present("Member ID", &req.member_id)?;
        let isbn = require_present("Book ISBN", &req.isbn)?;
        self.catalog_service.borrow_book(member_id.as_str(), isbn.as_str())
            .map(BorrowBookCommandResponse::new)
    }
}
