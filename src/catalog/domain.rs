pub mod service;

use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::dto::{LoanDto, MemberLoansDto};
use crate::core::library::LibraryResult;
use crate::members::dto::MemberDto;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BookFilter {
    All,
    Available,
    Borrowed,
}

pub trait CatalogService {
    fn name(&self) -> &str;
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto>;
    fn remove_book(&mut self, isbn: &str) -> LibraryResult<BookDto>;
    fn add_member(&mut self, member: &MemberDto) -> LibraryResult<MemberDto>;
    fn remove_member(&mut self, member_id: &str) -> LibraryResult<MemberDto>;
    fn borrow_book(&mut self, member_id: &str, isbn: &str) -> LibraryResult<LoanDto>;
    fn return_book(&mut self, member_id: &str, isbn: &str) -> LibraryResult<LoanDto>;
    fn find_book(&self, isbn: &str) -> LibraryResult<BookDto>;
    fn find_member(&self, member_id: &str) -> LibraryResult<MemberDto>;
    fn list_books(&self, filter: BookFilter) -> LibraryResult<Vec<BookDto>>;
    fn list_all_members(&self) -> LibraryResult<Vec<MemberLoansDto>>;

    fn list_all_books(&self) -> LibraryResult<Vec<BookDto>> {
        self.list_books(BookFilter::All)
    }

    fn list_available_books(&self) -> LibraryResult<Vec<BookDto>> {
        self.list_books(BookFilter::Available)
    }

    fn list_borrowed_books(&self) -> LibraryResult<Vec<BookDto>> {
        self.list_books(BookFilter::Borrowed)
    }
}
