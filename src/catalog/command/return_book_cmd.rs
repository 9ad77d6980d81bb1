use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::LoanDto;
use crate::core::command::{Command, require_present};
use crate::core::library::LibraryResult;

pub struct ReturnBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ReturnBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    member_id: String,
    isbn: String,
}

impl ReturnBookCommandRequest {
    pub fn new(member_id: &str, isbn: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub loan: LoanDto,
}

impl ReturnBookCommandResponse {
    pub fn new(loan: LoanDto) -> Self {
        Self {
            loan,
        }
    }
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'_> {
    fn execute(&mut self, req: ReturnBookCommandRequest) -> LibraryResult<ReturnBookCommandResponse> {
        let member_id = require_present("Member ID", &req.member_id)?;
        let isbn = require_present("Book ISBN", &req.isbn)?;
        self.catalog_service.return_book(member_id.as_str(), isbn.as_str())
            .map(ReturnBookCommandResponse::new)
    }
}
